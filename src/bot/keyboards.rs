use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::utils::validation::country_callback_data;

/// Countries offered as buttons after `/start`.
pub const COUNTRIES: [&str; 21] = [
    "السعودية",
    "مصر",
    "الإمارات",
    "الكويت",
    "قطر",
    "البحرين",
    "عمان",
    "الأردن",
    "فلسطين",
    "لبنان",
    "سوريا",
    "العراق",
    "اليمن",
    "الجزائر",
    "المغرب",
    "تونس",
    "ليبيا",
    "السودان",
    "موريتانيا",
    "جيبوتي",
    "الصومال",
];

pub const BUTTONS_PER_ROW: usize = 3;

/// Inline keyboard with one `country_<name>` button per country.
pub fn country_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = COUNTRIES
        .chunks(BUTTONS_PER_ROW)
        .map(|row| {
            row.iter()
                .map(|country| InlineKeyboardButton::callback(*country, country_callback_data(country)))
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(rows)
}
