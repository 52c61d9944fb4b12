//! Deterministic session tracker and the server-side session sweeper.
//!
//! The tracker mirrors the dashboard's lifecycle (init, activity, periodic
//! validation, visibility, unload) but is driven entirely by explicit `now`
//! timestamps. Real timers live in whatever hosts the tracker; this type
//! only decides. The sweeper is the server's counterpart to the periodic
//! validation tick.

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::task::JoinHandle;

use super::expiry::{IDLE_TIMEOUT, LogoutReason, REDIRECT_DELAY, UnloadKind, Validation, validate};
use super::storage::{KEY_SESSION_EXPIRY, KEY_SESSION_TOKEN, KEY_USERNAME, KeyValueStore};
use crate::db::SessionRepository;

/// Effect runner for logout side effects.
///
/// The audit call is best-effort; implementations must not let its failure
/// block the redirect.
pub trait LogoutHandler {
    /// Record the logout in the audit trail.
    fn audit(&mut self, reason: LogoutReason);

    /// Navigate to the login route after `delay`.
    fn redirect(&mut self, delay: Duration);
}

/// Session lifecycle tracker over injected storage and effects.
pub struct SessionTracker<S, H> {
    storage: S,
    handler: H,
    timeout: Duration,
    active: bool,
    window_start: Option<DateTime<Utc>>,
    idle_deadline: Option<DateTime<Utc>>,
}

impl<S: KeyValueStore, H: LogoutHandler> SessionTracker<S, H> {
    /// Create an inactive tracker with the default idle timeout.
    #[must_use]
    pub const fn new(storage: S, handler: H) -> Self {
        Self::with_timeout(storage, handler, IDLE_TIMEOUT)
    }

    /// Create an inactive tracker with a custom idle timeout.
    #[must_use]
    pub const fn with_timeout(storage: S, handler: H, timeout: Duration) -> Self {
        Self {
            storage,
            handler,
            timeout,
            active: false,
            window_start: None,
            idle_deadline: None,
        }
    }

    /// Whether tracking is currently running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The effect handler.
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Start tracking at `now`. Idempotent; returns false if already active.
    pub fn init(&mut self, now: DateTime<Utc>) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.reset_window(now);
        true
    }

    /// Record user activity at `now`, resetting the idle window.
    ///
    /// Unconditional and unthrottled; every activity event resets.
    pub fn record_activity(&mut self, now: DateTime<Utc>) {
        if !self.active {
            return;
        }
        self.reset_window(now);
    }

    /// Run a periodic validation pass at `now`.
    ///
    /// Returns the outcome so hosts can observe what happened.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Validation {
        if !self.active {
            return Validation::StopTracking;
        }

        // Idle deadline fires exactly at window start + timeout.
        if let Some(deadline) = self.idle_deadline
            && now >= deadline
        {
            self.logout(LogoutReason::Inactivity);
            return Validation::Logout(LogoutReason::Inactivity);
        }

        let token = self.storage.get(KEY_SESSION_TOKEN);
        let expiry = self.read_expiry();
        let window_start = self.window_start.unwrap_or(now);

        let outcome = validate(now, token.as_deref(), expiry, window_start, self.timeout);
        match outcome {
            Validation::Active => {}
            Validation::StopTracking => self.stop_tracking(),
            Validation::Logout(reason) => self.logout(reason),
        }
        outcome
    }

    /// Handle the page becoming visible again at `now`.
    ///
    /// Re-validates immediately; if the session survives, the idle window
    /// is reset.
    pub fn on_visible(&mut self, now: DateTime<Utc>) -> Validation {
        let outcome = self.on_tick(now);
        if self.active {
            self.reset_window(now);
        }
        outcome
    }

    /// Handle a page unload with the triggering pointer position.
    ///
    /// Only unloads classified as a close end the session; refreshes keep
    /// it alive.
    pub fn on_unload(&mut self, x: f64, y: f64) -> UnloadKind {
        let kind = UnloadKind::classify(x, y);
        if self.active && kind == UnloadKind::Close {
            self.logout(LogoutReason::Closed);
        }
        kind
    }

    /// End the session for `reason`: stop tracking, clear persisted
    /// session state, audit, and schedule the redirect.
    pub fn logout(&mut self, reason: LogoutReason) {
        self.stop_tracking();
        self.storage.remove(KEY_SESSION_TOKEN);
        self.storage.remove(KEY_SESSION_EXPIRY);
        self.storage.remove(KEY_USERNAME);
        self.handler.audit(reason);
        self.handler.redirect(REDIRECT_DELAY);
    }

    fn stop_tracking(&mut self) {
        self.active = false;
        self.window_start = None;
        self.idle_deadline = None;
    }

    fn reset_window(&mut self, now: DateTime<Utc>) {
        self.window_start = Some(now);
        let timeout = chrono::Duration::from_std(self.timeout)
            .unwrap_or_else(|_| chrono::Duration::minutes(15));
        let deadline = now + timeout;
        self.idle_deadline = Some(deadline);
        self.storage
            .set(KEY_SESSION_EXPIRY, &deadline.timestamp_millis().to_string());
    }

    fn read_expiry(&self) -> Option<DateTime<Utc>> {
        let raw = self.storage.get(KEY_SESSION_EXPIRY)?;
        let millis = raw.parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

/// Spawn the background task that prunes expired `admin_session` rows.
///
/// Runs forever on a fixed interval; failures are logged and the next
/// tick tries again.
pub fn spawn_expiry_sweeper(pool: PgPool, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match SessionRepository::new(&pool).delete_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(n) => tracing::debug!(count = n, "removed expired admin sessions"),
                Err(e) => tracing::warn!(error = %e, "session sweep failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStore;
    use chrono::TimeDelta;

    /// Records logout effects instead of performing them.
    #[derive(Debug, Default)]
    struct RecordingHandler {
        audits: Vec<LogoutReason>,
        redirects: Vec<Duration>,
    }

    impl LogoutHandler for RecordingHandler {
        fn audit(&mut self, reason: LogoutReason) {
            self.audits.push(reason);
        }

        fn redirect(&mut self, delay: Duration) {
            self.redirects.push(delay);
        }
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
    }

    fn logged_in_tracker() -> SessionTracker<MemoryStore, RecordingHandler> {
        let mut store = MemoryStore::new();
        store.set(KEY_SESSION_TOKEN, "tok-1");
        store.set(KEY_USERNAME, "maria");
        SessionTracker::new(store, RecordingHandler::default())
    }

    fn minutes(n: i64) -> TimeDelta {
        TimeDelta::minutes(n)
    }

    #[test]
    fn test_activity_before_timeout_keeps_session_alive() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        assert!(tracker.init(start));

        // Activity every 10 minutes for an hour, validated every minute.
        for m in 1..=60 {
            let now = start + minutes(m);
            if m % 10 == 0 {
                tracker.record_activity(now);
            }
            assert_eq!(tracker.on_tick(now), Validation::Active, "minute {m}");
        }

        assert!(tracker.is_active());
        assert!(tracker.handler().audits.is_empty());
    }

    #[test]
    fn test_no_activity_forces_inactivity_logout() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        assert_eq!(tracker.on_tick(start + minutes(14)), Validation::Active);
        assert_eq!(
            tracker.on_tick(start + minutes(15)),
            Validation::Logout(LogoutReason::Inactivity)
        );
        assert!(!tracker.is_active());
        assert_eq!(tracker.handler().audits, vec![LogoutReason::Inactivity]);
    }

    #[test]
    fn test_past_persisted_expiry_forces_expired_logout() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        // Another tab rewrote the expiry to the past.
        let past = (start - minutes(1)).timestamp_millis().to_string();
        tracker.storage.set(KEY_SESSION_EXPIRY, &past);

        assert_eq!(
            tracker.on_tick(start + minutes(1)),
            Validation::Logout(LogoutReason::Expired)
        );
        assert_eq!(tracker.handler().audits, vec![LogoutReason::Expired]);
    }

    #[test]
    fn test_token_removed_externally_stops_without_logout() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        tracker.storage.remove(KEY_SESSION_TOKEN);

        assert_eq!(
            tracker.on_tick(start + minutes(1)),
            Validation::StopTracking
        );
        assert!(!tracker.is_active());
        // Logged out elsewhere; no audit entry and no redirect here.
        assert!(tracker.handler().audits.is_empty());
        assert!(tracker.handler().redirects.is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut tracker = logged_in_tracker();
        let start = t0();

        assert!(tracker.init(start));
        let deadline_after_first = tracker.idle_deadline;

        assert!(!tracker.init(start + minutes(5)));
        assert_eq!(tracker.idle_deadline, deadline_after_first);
    }

    #[test]
    fn test_close_unload_logs_out_refresh_does_not() {
        let mut tracker = logged_in_tracker();
        tracker.init(t0());

        assert_eq!(tracker.on_unload(200.0, 35.0), UnloadKind::Refresh);
        assert!(tracker.is_active());
        assert!(tracker.handler().audits.is_empty());

        assert_eq!(tracker.on_unload(0.0, 0.0), UnloadKind::Close);
        assert!(!tracker.is_active());
        assert_eq!(tracker.handler().audits, vec![LogoutReason::Closed]);
    }

    #[test]
    fn test_activity_extends_idle_deadline() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        tracker.record_activity(start + minutes(10));

        // Would have fired at t=15 without the activity.
        assert_eq!(tracker.on_tick(start + minutes(15)), Validation::Active);
        assert_eq!(tracker.on_tick(start + minutes(24)), Validation::Active);
        assert_eq!(
            tracker.on_tick(start + minutes(25)),
            Validation::Logout(LogoutReason::Inactivity)
        );
    }

    #[test]
    fn test_logout_clears_persisted_state_and_schedules_redirect() {
        let mut tracker = logged_in_tracker();
        tracker.init(t0());

        tracker.logout(LogoutReason::Manual);

        assert_eq!(tracker.storage().get(KEY_SESSION_TOKEN), None);
        assert_eq!(tracker.storage().get(KEY_SESSION_EXPIRY), None);
        assert_eq!(tracker.storage().get(KEY_USERNAME), None);
        assert_eq!(tracker.handler().redirects, vec![REDIRECT_DELAY]);
    }

    #[test]
    fn test_visibility_revalidates_and_resets_window() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        // Tab hidden for 10 minutes, then shown again.
        assert_eq!(tracker.on_visible(start + minutes(10)), Validation::Active);

        // Window was reset at t=10, so t=24 is still inside it.
        assert_eq!(tracker.on_tick(start + minutes(24)), Validation::Active);
    }

    #[test]
    fn test_visibility_after_expiry_logs_out() {
        let mut tracker = logged_in_tracker();
        let start = t0();
        tracker.init(start);

        assert_eq!(
            tracker.on_visible(start + minutes(30)),
            Validation::Logout(LogoutReason::Inactivity)
        );
        assert!(!tracker.is_active());
    }
}
