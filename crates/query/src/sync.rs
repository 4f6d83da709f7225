//! URL ↔ view-state synchronizer.
//!
//! Keeps the host's addressable URL and the in-memory view state consistent
//! in both directions. The hazard is the feedback loop: applying a decoded
//! URL mutates the state, and a state mutation normally writes the URL.
//! [`SyncPhase`] breaks the loop: every state application flows through
//! [`UrlSync::set_state`], and the phase decides whether the URL is written.

use crate::history::History;
use crate::wire;
use healnet_core::ViewState;

/// Where the synchronizer is in its encode/decode cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    /// State changes originate from the user and are encoded to the URL.
    Idle,
    /// The next state change originates from a URL decode and must not be
    /// re-encoded. Consumed by exactly one [`UrlSync::set_state`] call.
    ApplyingFromUrl,
}

/// The synchronizer: owns the view state, the sync phase, and the history
/// handle.
///
/// Hosts mutate state through [`UrlSync::update`] / [`UrlSync::set_state`],
/// call [`UrlSync::on_mount`] once at startup, and call
/// [`UrlSync::on_navigate`] whenever the host's back/forward navigation
/// changes the current URL. Deregistration is host-owned: stop calling
/// `on_navigate` and drop the value on teardown.
#[derive(Debug)]
pub struct UrlSync<H: History> {
    history: H,
    state: ViewState,
    phase: SyncPhase,
    initial_load: bool,
}

impl<H: History> UrlSync<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            state: ViewState::default(),
            phase: SyncPhase::Idle,
            initial_load: true,
        }
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access for hosts that drive navigation themselves (move the
    /// history, then report it via [`UrlSync::on_navigate`]).
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Apply a new view state. This is the single application path.
    ///
    /// In `Idle` the state is encoded and the current history entry's query
    /// string is replaced, so ordinary edits never grow the back/forward
    /// stack. In `ApplyingFromUrl` the phase is consumed and the URL is
    /// left untouched, since the state originated from it.
    pub fn set_state(&mut self, next: ViewState) {
        match self.phase {
            SyncPhase::ApplyingFromUrl => {
                self.phase = SyncPhase::Idle;
                tracing::debug!("state applied from URL; encode suppressed");
            }
            SyncPhase::Idle => {
                let encoded = wire::encode(&next);
                self.history.replace_query(&encoded);
                tracing::debug!(query = %encoded, "view state encoded to URL");
            }
        }
        self.state = next;
    }

    /// Clone-mutate-apply convenience for hosts.
    pub fn update(&mut self, mutate: impl FnOnce(&mut ViewState)) {
        let mut next = self.state.clone();
        mutate(&mut next);
        self.set_state(next);
    }

    /// First activation: decode the current URL once, so a shared or
    /// bookmarked link reproduces the intended view. Subsequent calls are
    /// no-ops.
    pub fn on_mount(&mut self) {
        if self.initial_load {
            self.initial_load = false;
            self.apply_from_url();
        }
    }

    /// Back/forward navigation: the current URL changed underneath us;
    /// decode it and apply. Idempotent: decoding the same URL twice
    /// produces the same state.
    pub fn on_navigate(&mut self) {
        self.apply_from_url();
    }

    fn apply_from_url(&mut self) {
        let decoded = wire::decode(&self.history.query_string());
        self.phase = SyncPhase::ApplyingFromUrl;
        self.set_state(decoded);
    }
}

#[cfg(test)]
mod sync_tests {
    use super::*;
    use crate::history::SessionHistory;
    use healnet_core::{ConsultationMode, SortOrder};

    /// History spy that counts URL writes, to observe the encode guard.
    struct RecordingHistory {
        query: String,
        replaces: usize,
    }

    impl RecordingHistory {
        fn new(query: &str) -> Self {
            Self {
                query: query.to_string(),
                replaces: 0,
            }
        }
    }

    impl History for RecordingHistory {
        fn query_string(&self) -> String {
            self.query.clone()
        }

        fn replace_query(&mut self, query: &str) {
            self.query = query.to_string();
            self.replaces += 1;
        }
    }

    #[test]
    fn mount_decodes_the_startup_url() {
        let mut sync = UrlSync::new(SessionHistory::new("?search=rao&sortBy=fees"));
        sync.on_mount();

        assert_eq!(sync.state().search_query, "rao");
        assert_eq!(sync.state().sort_by, Some(SortOrder::FeesAscending));
    }

    #[test]
    fn mount_only_decodes_once() {
        let mut sync = UrlSync::new(SessionHistory::new("search=rao"));
        sync.on_mount();
        sync.update(|s| s.search_query = "amit".into());
        sync.on_mount();

        assert_eq!(sync.state().search_query, "amit");
    }

    #[test]
    fn mount_does_not_write_the_url_back() {
        let mut sync = UrlSync::new(RecordingHistory::new("search=rao"));
        sync.on_mount();

        assert_eq!(sync.history().replaces, 0);
        assert_eq!(sync.history().query_string(), "search=rao");
    }

    #[test]
    fn edits_replace_the_current_entry_in_place() {
        let mut sync = UrlSync::new(SessionHistory::new(""));
        sync.on_mount();
        sync.update(|s| s.search_query = "amit".into());
        sync.update(|s| s.consultation_type = Some(ConsultationMode::InClinic));

        assert_eq!(
            sync.history().query_string(),
            "search=amit&consultation=In+Clinic"
        );
        assert_eq!(sync.history().len(), 1);
    }

    #[test]
    fn navigate_applies_the_url_without_reencoding() {
        let mut sync = UrlSync::new(RecordingHistory::new(""));
        sync.on_mount();

        sync.history_mut().query = "search=bela".to_string();
        sync.on_navigate();

        assert_eq!(sync.state().search_query, "bela");
        assert_eq!(sync.history().replaces, 0);
    }

    #[test]
    fn suppression_lasts_exactly_one_cycle() {
        let mut sync = UrlSync::new(RecordingHistory::new("search=bela"));
        sync.on_mount();
        assert_eq!(sync.history().replaces, 0);

        // The next edit is user-originated again and must hit the URL.
        sync.update(|s| s.search_query = "amit".into());
        assert_eq!(sync.history().replaces, 1);
        assert_eq!(sync.history().query_string(), "search=amit");
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut sync = UrlSync::new(SessionHistory::new("search=rao&consultation=In+Clinic"));
        sync.on_mount();
        let first = sync.state().clone();
        sync.on_navigate();

        assert_eq!(sync.state(), &first);
    }

    #[test]
    fn back_and_forward_restore_earlier_states() {
        let mut sync = UrlSync::new(SessionHistory::new(""));
        sync.on_mount();

        sync.update(|s| s.search_query = "amit".into());
        sync.history_mut().push_query("search=bela");
        sync.on_navigate();
        assert_eq!(sync.state().search_query, "bela");

        sync.history_mut().back();
        sync.on_navigate();
        assert_eq!(sync.state().search_query, "amit");

        sync.history_mut().forward();
        sync.on_navigate();
        assert_eq!(sync.state().search_query, "bela");
    }

    #[test]
    fn navigated_state_round_trips_through_the_codec() {
        let mut sync = UrlSync::new(SessionHistory::new(
            "search=rao&specialties=Dentist&sortBy=experience",
        ));
        sync.on_mount();

        let state = sync.state().clone();
        assert_eq!(wire::decode(&wire::encode(&state)), state);
    }
}
