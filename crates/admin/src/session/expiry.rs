//! Pure expiry decisions.
//!
//! All logout decisions are plain functions over explicit timestamps so the
//! tracker can be tested without real timers. Nothing in this module does
//! I/O.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Idle period of no activity after which logout is forced.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// How often the session is re-validated against persisted state.
pub const VALIDATION_INTERVAL: Duration = Duration::from_secs(60);

/// Delay between showing the logout notice and redirecting to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Why a session was ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// No activity within the idle timeout.
    Inactivity,
    /// Persisted expiry timestamp passed.
    Expired,
    /// Tab or window was closed.
    Closed,
    /// Explicit logout request.
    Manual,
}

impl LogoutReason {
    /// Wire string used in audit log entries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inactivity => "inactivity",
            Self::Expired => "expired",
            Self::Closed => "closed",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for LogoutReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a periodic validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Session is healthy, keep going.
    Active,
    /// Session state is gone (logged out elsewhere); stop tracking quietly.
    StopTracking,
    /// Session must be ended for the given reason.
    Logout(LogoutReason),
}

/// Whether a session should be logged out at `now`.
///
/// True when `now` has passed the persisted expiry, or when the current
/// activity window (started at `window_start`) has outlived `timeout`.
#[must_use]
pub fn should_logout(
    now: DateTime<Utc>,
    expiry: DateTime<Utc>,
    window_start: DateTime<Utc>,
    timeout: Duration,
) -> bool {
    if now > expiry {
        return true;
    }
    let elapsed = now.signed_duration_since(window_start);
    elapsed > chrono::Duration::from_std(timeout).unwrap_or_else(|_| chrono::Duration::minutes(15))
}

/// Validate persisted session state at `now`.
///
/// Absent token or expiry means the session was already torn down
/// externally; that stops tracking without being an error.
#[must_use]
pub fn validate(
    now: DateTime<Utc>,
    token: Option<&str>,
    expiry: Option<DateTime<Utc>>,
    window_start: DateTime<Utc>,
    timeout: Duration,
) -> Validation {
    let (Some(_), Some(expiry)) = (token, expiry) else {
        return Validation::StopTracking;
    };

    if now > expiry {
        return Validation::Logout(LogoutReason::Expired);
    }
    if should_logout(now, expiry, window_start, timeout) {
        return Validation::Logout(LogoutReason::Inactivity);
    }
    Validation::Active
}

/// Classification of a page unload event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadKind {
    /// Tab or window close; the session should end.
    Close,
    /// Page refresh; the session survives.
    Refresh,
}

impl UnloadKind {
    /// Classify an unload from its triggering pointer coordinates.
    ///
    /// Origin coordinates mean no real pointer position was attached,
    /// which is what a window close looks like. Best-effort only; there
    /// is no fully reliable close-vs-refresh signal.
    #[must_use]
    pub fn classify(x: f64, y: f64) -> Self {
        if x == 0.0 && y == 0.0 {
            Self::Close
        } else {
            Self::Refresh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
    }

    #[test]
    fn test_should_logout_before_expiry() {
        let start = t0();
        let expiry = start + TimeDelta::minutes(15);
        assert!(!should_logout(
            start + TimeDelta::minutes(5),
            expiry,
            start,
            IDLE_TIMEOUT
        ));
    }

    #[test]
    fn test_should_logout_past_expiry() {
        let start = t0();
        let expiry = start + TimeDelta::minutes(15);
        assert!(should_logout(
            start + TimeDelta::minutes(16),
            expiry,
            start,
            IDLE_TIMEOUT
        ));
    }

    #[test]
    fn test_should_logout_window_outlived_timeout() {
        let start = t0();
        // Expiry far in the future, but the activity window is stale.
        let expiry = start + TimeDelta::hours(10);
        assert!(should_logout(
            start + TimeDelta::minutes(16),
            expiry,
            start,
            IDLE_TIMEOUT
        ));
    }

    #[test]
    fn test_validate_missing_token_stops_tracking() {
        let start = t0();
        let result = validate(
            start,
            None,
            Some(start + TimeDelta::minutes(15)),
            start,
            IDLE_TIMEOUT,
        );
        assert_eq!(result, Validation::StopTracking);
    }

    #[test]
    fn test_validate_missing_expiry_stops_tracking() {
        let start = t0();
        assert_eq!(
            validate(start, Some("tok"), None, start, IDLE_TIMEOUT),
            Validation::StopTracking
        );
    }

    #[test]
    fn test_validate_past_expiry_logs_out_expired() {
        let start = t0();
        let result = validate(
            start + TimeDelta::minutes(20),
            Some("tok"),
            Some(start + TimeDelta::minutes(15)),
            start + TimeDelta::minutes(19),
            IDLE_TIMEOUT,
        );
        assert_eq!(result, Validation::Logout(LogoutReason::Expired));
    }

    #[test]
    fn test_validate_healthy_session() {
        let start = t0();
        let result = validate(
            start + TimeDelta::minutes(5),
            Some("tok"),
            Some(start + TimeDelta::minutes(15)),
            start,
            IDLE_TIMEOUT,
        );
        assert_eq!(result, Validation::Active);
    }

    #[test]
    fn test_unload_classification() {
        assert_eq!(UnloadKind::classify(0.0, 0.0), UnloadKind::Close);
        assert_eq!(UnloadKind::classify(120.0, 48.0), UnloadKind::Refresh);
        assert_eq!(UnloadKind::classify(0.0, 48.0), UnloadKind::Refresh);
    }

    #[test]
    fn test_logout_reason_wire_strings() {
        assert_eq!(LogoutReason::Inactivity.as_str(), "inactivity");
        assert_eq!(LogoutReason::Expired.as_str(), "expired");
        assert_eq!(LogoutReason::Closed.as_str(), "closed");
        assert_eq!(LogoutReason::Manual.as_str(), "manual");
    }
}
