use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::UserId;
use tokio::sync::RwLock;

/// A user's saved city and country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocation {
    pub city: String,
    pub country: String,
}

/// Counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub saved_locations: usize,
    pub awaiting_city: usize,
}

#[derive(Debug, Default)]
struct Sessions {
    locations: HashMap<UserId, UserLocation>,
    awaiting_city: HashMap<UserId, String>,
}

/// In-memory per-user conversation state.
///
/// Clones share the same maps. Both maps sit behind one lock, so
/// [`SessionStore::complete_selection`] can move a user from "awaiting city"
/// to "location saved" without another update for that user slipping in
/// between. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Sessions>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `user` picked `country` and owes us a city name.
    pub async fn set_awaiting_city(&self, user: UserId, country: impl Into<String>) {
        self.inner
            .write()
            .await
            .awaiting_city
            .insert(user, country.into());
    }

    /// Removes and returns the country `user` picked, if any.
    pub async fn pop_awaiting_city(&self, user: UserId) -> Option<String> {
        self.inner.write().await.awaiting_city.remove(&user)
    }

    pub async fn is_awaiting_city(&self, user: UserId) -> bool {
        self.inner.read().await.awaiting_city.contains_key(&user)
    }

    /// Saves (or overwrites) the location for `user`.
    pub async fn set_location(
        &self,
        user: UserId,
        city: impl Into<String>,
        country: impl Into<String>,
    ) {
        let location = UserLocation {
            city: city.into(),
            country: country.into(),
        };
        self.inner.write().await.locations.insert(user, location);
    }

    pub async fn get_location(&self, user: UserId) -> Option<UserLocation> {
        self.inner.read().await.locations.get(&user).cloned()
    }

    /// Consumes the pending country for `user` and saves it with `city`.
    ///
    /// Returns the saved location, or `None` (and changes nothing) when no
    /// country was pending.
    pub async fn complete_selection(
        &self,
        user: UserId,
        city: impl Into<String>,
    ) -> Option<UserLocation> {
        let mut sessions = self.inner.write().await;
        let country = sessions.awaiting_city.remove(&user)?;
        let location = UserLocation {
            city: city.into(),
            country,
        };
        sessions.locations.insert(user, location.clone());
        Some(location)
    }

    pub async fn stats(&self) -> SessionStats {
        let sessions = self.inner.read().await;
        SessionStats {
            saved_locations: sessions.locations.len(),
            awaiting_city: sessions.awaiting_city.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: UserId = UserId(1001);
    const BOB: UserId = UserId(1002);

    #[tokio::test]
    async fn test_pop_awaiting_city_removes_entry() {
        let store = SessionStore::new();
        store.set_awaiting_city(ALICE, "مصر").await;

        assert!(store.is_awaiting_city(ALICE).await);
        assert_eq!(store.pop_awaiting_city(ALICE).await.as_deref(), Some("مصر"));
        assert!(!store.is_awaiting_city(ALICE).await);
        assert_eq!(store.pop_awaiting_city(ALICE).await, None);
    }

    #[tokio::test]
    async fn test_later_country_choice_replaces_earlier() {
        let store = SessionStore::new();
        store.set_awaiting_city(ALICE, "قطر").await;
        store.set_awaiting_city(ALICE, "عمان").await;

        assert_eq!(store.pop_awaiting_city(ALICE).await.as_deref(), Some("عمان"));
    }

    #[tokio::test]
    async fn test_set_and_get_location() {
        let store = SessionStore::new();
        assert_eq!(store.get_location(ALICE).await, None);

        store.set_location(ALICE, "Cairo", "Egypt").await;
        store.set_location(ALICE, "Giza", "Egypt").await;

        let location = store.get_location(ALICE).await.unwrap();
        assert_eq!(location.city, "Giza");
        assert_eq!(location.country, "Egypt");
        assert_eq!(store.get_location(BOB).await, None);
    }

    #[tokio::test]
    async fn test_complete_selection_moves_user() {
        let store = SessionStore::new();
        store.set_awaiting_city(ALICE, "Egypt").await;

        let saved = store.complete_selection(ALICE, "Cairo").await.unwrap();
        assert_eq!(
            saved,
            UserLocation {
                city: "Cairo".to_string(),
                country: "Egypt".to_string()
            }
        );
        assert!(!store.is_awaiting_city(ALICE).await);
        assert_eq!(store.get_location(ALICE).await, Some(saved));
    }

    #[tokio::test]
    async fn test_complete_selection_without_pending_country() {
        let store = SessionStore::new();
        store.set_location(ALICE, "Doha", "Qatar").await;

        assert_eq!(store.complete_selection(ALICE, "Cairo").await, None);
        assert_eq!(store.get_location(ALICE).await.unwrap().city, "Doha");
    }

    #[tokio::test]
    async fn test_clones_share_state_and_stats() {
        let store = SessionStore::new();
        let handle = store.clone();

        handle.set_awaiting_city(ALICE, "Egypt").await;
        handle.set_location(BOB, "Amman", "Jordan").await;

        assert_eq!(
            store.stats().await,
            SessionStats {
                saved_locations: 1,
                awaiting_city: 1
            }
        );
    }
}
