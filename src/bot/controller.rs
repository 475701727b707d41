//! Conversation flow, independent of the Telegram transport.
//!
//! Per user the flow is `Idle` → (country button) → `AwaitingCity` →
//! (city text) → `Idle` with a saved location. Every entry point returns the
//! replies to send; upstream and calculation failures are turned into
//! messages here and never escape.

use chrono::Local;
use std::fmt;
use std::sync::Arc;
use teloxide::types::UserId;

use crate::bot::keyboards::country_keyboard;
use crate::bot::texts;
use crate::services::night_schedule::calculate_times;
use crate::services::prayer_times::TimingsProvider;
use crate::services::session_store::SessionStore;
use crate::utils::feedback::Reply;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};
use crate::utils::validation::{looks_like_command, normalize_city_input, parse_country_callback};

#[derive(Clone)]
pub struct Conversation {
    store: SessionStore,
    provider: Arc<dyn TimingsProvider>,
}

impl fmt::Debug for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversation")
            .field("provider", &self.provider)
            .finish_non_exhaustive()
    }
}

impl Conversation {
    pub fn new(store: SessionStore, provider: Arc<dyn TimingsProvider>) -> Self {
        Self { store, provider }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// `/start`: greeting plus the country keyboard.
    pub fn start(&self, user: UserId, display_name: &str) -> Vec<Reply> {
        log_command_start("start", user.0, None);

        vec![
            Reply::Html(texts::greeting(&texts::user_mention(user, display_name))),
            Reply::WithKeyboard {
                text: texts::CHOOSE_COUNTRY.to_string(),
                keyboard: country_keyboard(),
            },
        ]
    }

    /// `/help`
    pub fn help(&self, user: UserId) -> Vec<Reply> {
        log_command_start("help", user.0, None);
        vec![Reply::Html(texts::HELP.to_string())]
    }

    /// `/times`: schedule for the saved location, or a pointer to `/start`.
    pub async fn times(&self, user: UserId) -> Vec<Reply> {
        log_command_start("times", user.0, None);

        let Some(location) = self.store.get_location(user).await else {
            log_command_success("times", user.0, Some("no saved location"));
            return vec![Reply::Text(texts::NO_SAVED_LOCATION.to_string())];
        };

        vec![
            Reply::Text(texts::searching_saved(&location.city, &location.country)),
            self.schedule_reply(user, &location.city, &location.country)
                .await,
        ]
    }

    /// Button press. Returns the edit to apply to the keyboard message, or
    /// `None` when the payload is not a country choice.
    pub async fn select_country(&self, user: UserId, data: &str) -> Option<Reply> {
        let Some(country) = parse_country_callback(data) else {
            log_command_error("select_country", user.0, &format!("unknown payload '{data}'"));
            return None;
        };

        log_command_start("select_country", user.0, Some(country));
        self.store.set_awaiting_city(user, country).await;

        Some(Reply::EditMarkdown(texts::country_chosen(country)))
    }

    /// Free text: the city name when a country is pending, otherwise
    /// guidance.
    pub async fn receive_text(&self, user: UserId, text: &str) -> Vec<Reply> {
        let city = match normalize_city_input(text) {
            Some(city) if !looks_like_command(city) => city,
            _ => return vec![Reply::Text(texts::GUIDANCE.to_string())],
        };

        let Some(location) = self.store.complete_selection(user, city).await else {
            return vec![Reply::Text(texts::GUIDANCE.to_string())];
        };

        let details = format!("{}, {}", location.city, location.country);
        log_command_success("save_location", user.0, Some(&details));

        vec![
            Reply::Text(texts::location_saved(&location.city, &location.country)),
            Reply::Text(texts::searching(&location.city, &location.country)),
            self.schedule_reply(user, &location.city, &location.country)
                .await,
        ]
    }

    async fn schedule_reply(&self, user: UserId, city: &str, country: &str) -> Reply {
        let timings = match self.provider.fetch_timings(city, country).await {
            Ok(timings) => timings,
            Err(e) => {
                log_command_error("schedule", user.0, &e.to_string());
                return Reply::Text(texts::timings_unavailable(city, country));
            }
        };

        match calculate_times(&timings, Local::now().date_naive()) {
            Ok(schedule) => {
                log_command_success("schedule", user.0, Some(&format!("{city}, {country}")));
                Reply::Text(texts::render_schedule(city, country, &schedule.formatted()))
            }
            Err(e) => {
                log_command_error("schedule", user.0, &e.to_string());
                Reply::Text(texts::PROCESSING_ERROR.to_string())
            }
        }
    }
}
