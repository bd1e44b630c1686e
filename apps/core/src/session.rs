//! Explicit per-session state container.
//!
//! Everything one logical user session owns lives here: the search service
//! over the catalog, the resume store, and the snapshot storage handle.
//! Constructed at session start, serialized on demand, rehydrated on
//! demand; nothing is ambient or global. All mutations are synchronous and
//! atomic from the caller's perspective.

use tracing::info;

use crate::bus::model::{Bus, SearchParams, SearchResponse};
use crate::bus::search::SearchService;
use crate::bus::seats::PendingBooking;
use crate::config::Config;
use crate::errors::AppError;
use crate::resume::store::ResumeStore;
use crate::storage::{LocalStore, KEY_BOOKING_DATA, KEY_SEARCH_PARAMS, KEY_SEARCH_RESULTS};

pub struct Session {
    pub search: SearchService,
    pub resume: ResumeStore,
    storage: LocalStore,
    search_params: SearchParams,
    search_results: SearchResponse,
}

impl Session {
    pub fn new(config: &Config, catalog: Vec<Bus>) -> Result<Self, AppError> {
        let storage = LocalStore::open(&config.storage_dir)?;
        Ok(Session {
            search: SearchService::new(catalog, config.search_delay),
            resume: ResumeStore::new(),
            storage,
            search_params: SearchParams::default(),
            search_results: SearchResponse::default(),
        })
    }

    pub fn search_params(&self) -> &SearchParams {
        &self.search_params
    }

    pub fn search_results(&self) -> &SearchResponse {
        &self.search_results
    }

    /// Rehydrates the last search snapshot. Absent or malformed blobs fall
    /// back to the blank defaults.
    pub fn restore_search(&mut self) {
        self.search_results = self.storage.get(KEY_SEARCH_RESULTS).unwrap_or_default();
        self.search_params = self.storage.get(KEY_SEARCH_PARAMS).unwrap_or_default();
    }

    /// Applies a resolved search and persists both snapshots. When two
    /// searches overlap, whichever is recorded last wins.
    pub fn record_search(
        &mut self,
        params: SearchParams,
        response: SearchResponse,
    ) -> Result<(), AppError> {
        self.storage.set(KEY_SEARCH_RESULTS, &response)?;
        self.storage.set(KEY_SEARCH_PARAMS, &params)?;
        self.search_params = params;
        self.search_results = response;
        Ok(())
    }

    /// Clears in-memory search state and drops the persisted snapshots.
    pub fn clear_search(&mut self) {
        self.search_params = SearchParams::default();
        self.search_results = SearchResponse::default();
        self.storage.remove(KEY_SEARCH_RESULTS);
        self.storage.remove(KEY_SEARCH_PARAMS);
        info!("search state cleared");
    }

    pub fn save_pending_booking(&self, booking: &PendingBooking) -> Result<(), AppError> {
        self.storage.set(KEY_BOOKING_DATA, booking)
    }

    pub fn pending_booking(&self) -> Option<PendingBooking> {
        self.storage.get(KEY_BOOKING_DATA)
    }

    pub fn clear_pending_booking(&self) {
        self.storage.remove(KEY_BOOKING_DATA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::data::demo_catalog;
    use std::time::Duration;

    fn config(dir: &std::path::Path) -> Config {
        Config {
            storage_dir: dir.to_path_buf(),
            search_delay: Duration::ZERO,
            rust_log: "info".into(),
        }
    }

    fn session(dir: &std::path::Path) -> Session {
        Session::new(&config(dir), demo_catalog()).expect("session")
    }

    #[test]
    fn test_restore_without_prior_state_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut s = session(dir.path());
        s.restore_search();
        assert_eq!(*s.search_params(), SearchParams::default());
        assert_eq!(s.search_results().total, 0);
    }

    #[tokio::test]
    async fn test_record_then_restore_in_a_new_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut s = session(dir.path());
        let params = SearchParams {
            from: "Mumbai".into(),
            to: "Pune".into(),
            date: String::new(),
        };
        let response = s.search.search(&params).await;
        assert!(response.total > 0);
        s.record_search(params.clone(), response.clone())
            .expect("record");

        // a fresh session over the same directory sees the snapshots
        let mut reopened = session(dir.path());
        reopened.restore_search();
        assert_eq!(*reopened.search_params(), params);
        assert_eq!(reopened.search_results().total, response.total);
    }

    #[tokio::test]
    async fn test_clear_search_drops_memory_and_snapshots() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut s = session(dir.path());
        let params = SearchParams {
            from: "Delhi".into(),
            to: String::new(),
            date: String::new(),
        };
        let response = s.search.search(&params).await;
        s.record_search(params, response).expect("record");
        s.clear_search();

        assert_eq!(*s.search_params(), SearchParams::default());
        let mut reopened = session(dir.path());
        reopened.restore_search();
        assert_eq!(reopened.search_results().total, 0);
    }

    #[test]
    fn test_malformed_snapshot_reads_as_no_prior_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("searchResults.json"), "][").expect("write");
        let mut s = session(dir.path());
        s.restore_search();
        assert_eq!(s.search_results().total, 0);
    }

    #[test]
    fn test_pending_booking_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = session(dir.path());
        assert!(s.pending_booking().is_none());

        let booking = PendingBooking {
            bus_id: 1,
            operator_name: "Neeta Travels".into(),
            route: "Mumbai - Pune".into(),
            time: "07:00 - 10:30".into(),
            selected_seats: vec![5, 6],
            seats: 2,
            total_amount: 900,
        };
        s.save_pending_booking(&booking).expect("save");
        assert_eq!(s.pending_booking(), Some(booking));

        s.clear_pending_booking();
        assert!(s.pending_booking().is_none());
    }
}
