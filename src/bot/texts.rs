//! Fixed user-facing strings.

use teloxide::types::UserId;
use teloxide::utils::html;

use crate::services::night_schedule::FormattedSchedule;
use crate::utils::markdown::{bold, escape_markdown};

pub const CHOOSE_COUNTRY: &str = "الرجاء اختيار الدولة أولاً:";

pub const NO_SAVED_LOCATION: &str =
    "لم تقم بحفظ موقع بعد. الرجاء استخدام /start لاختيار الدولة وإدخال المدينة أولاً.";

pub const PROCESSING_ERROR: &str =
    "حدث خطأ في معالجة أوقات الصلاة المسترجعة. يرجى المحاولة مرة أخرى.";

pub const GUIDANCE: &str =
    "الرجاء استخدام الأمر /start لاختيار الدولة أولاً، أو الأمر /times للحصول على الأوقات لموقعك المحفوظ.";

/// Sent with HTML parse mode.
pub const HELP: &str = "<b>كيفية استخدام البوت:</b>\n\n\
1. <b>لتعيين الموقع:</b> استخدم الأمر /start واختر الدولة من الأزرار، ثم أرسل اسم المدينة.\n\
2. <b>للحصول على الأوقات:</b> بعد تعيين الموقع، سيتم إرسال الأوقات تلقائيًا. لاحقًا، يمكنك استخدام الأمر /times للحصول على الأوقات لنفس الموقع المحفوظ.\n\n\
<b>ماذا يحسب البوت؟</b>\n\
1. استحضار أوقات صلاة المغرب والعشاء والفجر.\n\
2. حساب مدة الليل بين المغرب والفجر.\n\
3. اقتراح موعد للاستيقاظ (منتصف الليل الشرعي).\n\
4. اقتراح موعد للنوم قبل الفجر بناءً على تقسيم مدة الليل على 6.";

/// HTML link mentioning a user by display name.
pub fn user_mention(user_id: UserId, name: &str) -> String {
    format!("<a href=\"tg://user?id={}\">{}</a>", user_id.0, html::escape(name))
}

/// HTML greeting sent on `/start`.
pub fn greeting(mention_html: &str) -> String {
    format!("مرحباً {mention_html}! أنا بوت لحساب أوقات الصلاة واقتراح أوقات النوم.")
}

/// MarkdownV2 text replacing the country keyboard once a country is picked.
pub fn country_chosen(country: &str) -> String {
    format!(
        "{} {}{}\n{} {} {}",
        escape_markdown("لقد اخترت:"),
        bold(country),
        escape_markdown("."),
        escape_markdown("الآن، الرجاء إرسال اسم المدينة في"),
        bold(country),
        escape_markdown("فقط."),
    )
}

pub fn location_saved(city: &str, country: &str) -> String {
    format!("تم حفظ موقعك: {city}, {country}.")
}

pub fn searching(city: &str, country: &str) -> String {
    format!("جارٍ البحث عن أوقات الصلاة في {city}, {country}...")
}

pub fn searching_saved(city: &str, country: &str) -> String {
    format!("جارٍ البحث عن أوقات الصلاة في موقعك المحفوظ: {city}, {country}...")
}

pub fn timings_unavailable(city: &str, country: &str) -> String {
    format!(
        "عذراً، لم أتمكن من العثور على أوقات الصلاة لـ {city}, {country}. يرجى التأكد من صحة الإملاء."
    )
}

/// Plain-text schedule message.
///
/// The Islamic midnight is shown once, as the wake-up suggestion.
pub fn render_schedule(city: &str, country: &str, schedule: &FormattedSchedule) -> String {
    format!(
        "--- أوقات الصلاة واقتراحات النوم لـ {city}, {country} ---\n\n\
🌅 وقت صلاة المغرب: {maghrib}\n\
🌃 وقت صلاة العشاء: {isha}\n\
🌄 وقت صلاة الفجر: {fajr} (في اليوم التالي)\n\n\
⏱️ مدة الليل بين المغرب والفجر: {duration}\n\n\
🛌 اقتراحات:\n\
1. موعد الاستيقاظ المقترح (منتصف الليل الشرعي): {wake_up}\n\
2. موعد النوم المقترح (بداية السدس الأخير من الليل): {sleep}\n\n\
ملاحظة: هذه الأوقات هي للتوجيه والعبادة، وقد تختلف مواعيد الصلاة الفعلية حسب طريقة الحساب المعتمدة في منطقتك.\n\
يمكنك استخدام الأمر /times للحصول على الأوقات لنفس الموقع لاحقاً.",
        maghrib = schedule.maghrib,
        isha = schedule.isha,
        fajr = schedule.fajr,
        duration = schedule.night_duration,
        wake_up = schedule.wake_up,
        sleep = schedule.sleep,
    )
}
