use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "أوامر البوت:")]
pub enum Command {
    #[command(description = "اختيار الدولة والمدينة")]
    Start,
    #[command(description = "طريقة استخدام البوت")]
    Help,
    #[command(description = "أوقات الصلاة واقتراحات النوم لموقعك المحفوظ")]
    Times,
}
