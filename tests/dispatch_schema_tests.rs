use prayer_night_bot::bot::controller::Conversation;
use prayer_night_bot::bot::handlers::BotHandler;
use prayer_night_bot::services::prayer_times::AladhanProvider;
use prayer_night_bot::services::session_store::SessionStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_dispatch_schema_builds() {
    let provider = AladhanProvider::new("http://127.0.0.1:9", 5, Duration::from_secs(1))
        .expect("Failed to build provider");
    let conversation = Conversation::new(SessionStore::new(), Arc::new(provider));

    let handler = BotHandler::new(conversation);

    let _first = handler.schema();
    let _second = handler.schema();
}
