//! Mirror of the board state in a [`KvStore`].
//!
//! Reads never fail: a missing or malformed value loads as the empty
//! default. Writes report their error so the owner can decide what to do.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::KvStore;
use crate::error::StorageError;
use crate::team::Team;
use crate::timer::SessionTimer;

/// Key holding the JSON array of team records.
pub const TEAMS_KEY: &str = "teams";
/// Key holding the session timer record.
pub const SESSION_KEY: &str = "session";

pub struct Persistence<S> {
    store: S,
}

impl<S: KvStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load teams, normalizing records against `session`.
    pub fn load_teams(&self, session: &SessionTimer) -> Vec<Team> {
        let mut teams: Vec<Team> = self.read_or_default(TEAMS_KEY);
        let start = session.started_at();
        let repaired = teams
            .iter_mut()
            .map(|team| team.normalize(start))
            .filter(|changed| *changed)
            .count();
        if repaired > 0 {
            warn!(repaired, "normalized inconsistent team records on load");
        }
        debug!(count = teams.len(), "loaded teams");
        teams
    }

    pub fn load_session(&self) -> SessionTimer {
        self.read_or_default(SESSION_KEY)
    }

    pub fn save_teams(&self, teams: &[Team]) -> Result<(), StorageError> {
        self.write(TEAMS_KEY, &teams)
    }

    pub fn save_session(&self, session: &SessionTimer) -> Result<(), StorageError> {
        self.write(SESSION_KEY, session)
    }

    /// Remove every key this module owns, atomically.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_all(&[TEAMS_KEY, SESSION_KEY])
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(e) => {
                warn!(key, error = %e, "failed to read persisted state, starting empty");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "malformed persisted state, starting empty");
                T::default()
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestone::MilestoneId;
    use crate::storage::MemoryStore;
    use crate::team::TeamId;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn missing_keys_load_empty() {
        let p = Persistence::new(MemoryStore::new());
        let session = p.load_session();
        assert!(!session.is_running());
        assert!(p.load_teams(&session).is_empty());
    }

    #[test]
    fn malformed_values_load_empty() {
        let store = MemoryStore::new();
        store.insert_raw(TEAMS_KEY, "{not json");
        store.insert_raw(SESSION_KEY, "[1,2,3]");
        let p = Persistence::new(store);
        let session = p.load_session();
        assert!(!session.is_running());
        assert!(p.load_teams(&session).is_empty());
    }

    #[test]
    fn teams_round_trip_with_timestamps() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let mut session = SessionTimer::new();
        session.start_at(start);

        let mut team = Team::new(TeamId(1), "Alpha").unwrap();
        team.toggle_milestone(MilestoneId(1), start + Duration::milliseconds(10_250), Some(start));

        let p = Persistence::new(MemoryStore::new());
        p.save_session(&session).unwrap();
        p.save_teams(std::slice::from_ref(&team)).unwrap();

        let loaded_session = p.load_session();
        let loaded = p.load_teams(&loaded_session);
        assert_eq!(loaded_session, session);
        assert_eq!(loaded, vec![team]);
    }

    #[test]
    fn load_repairs_unstamped_completion() {
        let store = MemoryStore::new();
        store.insert_raw(
            TEAMS_KEY,
            r#"[{"id":1,"name":"Alpha","totalTime":999,"milestones":[
                {"id":1,"title":"a","subtitle":"","completed":true,"completedAt":null},
                {"id":2,"title":"b","subtitle":"","completed":false,"completedAt":"2024-05-01T09:00:00Z"}
            ]}]"#,
        );
        let p = Persistence::new(store);
        let teams = p.load_teams(&SessionTimer::new());
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].completed_count(), 0);
        assert!(teams[0].milestones.iter().all(|m| m.completed_at.is_none()));
        assert_eq!(teams[0].total_time, 0);
    }

    #[test]
    fn clear_removes_both_keys() {
        let p = Persistence::new(MemoryStore::new());
        p.save_teams(&[]).unwrap();
        p.save_session(&SessionTimer::new()).unwrap();
        p.clear().unwrap();
        assert!(p.store().is_empty());
    }
}
