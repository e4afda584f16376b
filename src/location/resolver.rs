//! Lookup orchestration: primary source with automatic fallback.

use log::{info, warn};

use crate::location::sources::LocationSource;
use crate::location::types::LocationRecord;

/// Consolidated per-view UI state.
///
/// One owned record instead of several independent flags, mutated only by
/// [`resolve_location`] and by closing the surface, so there is no
/// inconsistent intermediate state (e.g. loading with a stale error shown).
#[derive(Debug, Default)]
pub struct ViewState {
    /// True strictly between lookup invocation and its completion.
    pub loading: bool,
    /// True once a lookup succeeded and the console surface should show.
    pub surface_open: bool,
    /// Terminal, user-facing failure message, if any.
    pub error: Option<String>,
    /// The current location record, held until the surface closes.
    pub location: Option<LocationRecord>,
}

impl ViewState {
    /// Closes the console surface and drops the held record.
    pub fn close_surface(&mut self) {
        self.surface_open = false;
        self.location = None;
    }
}

/// How a [`resolve_location`] call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// A location record was obtained (by either path).
    pub resolved: bool,
    /// The fallback path was attempted.
    pub fallback_used: bool,
}

/// Resolves the visitor's location, falling back to host geolocation.
///
/// Attempts `primary` first. Any primary failure is caught here, recorded,
/// and answered with exactly one `fallback` attempt; a fallback success
/// clears the recorded message. Only the fallback's failure is surfaced, as
/// `state.error` combining both failure contexts. On success (either path)
/// `state.surface_open` is set and the record stored.
///
/// The loading flag is set on entry and cleared on every exit path.
pub async fn resolve_location<P, F>(
    primary: &P,
    fallback: &F,
    state: &mut ViewState,
) -> ResolveOutcome
where
    P: LocationSource,
    F: LocationSource,
{
    state.loading = true;
    state.error = None;

    let outcome = match primary.resolve().await {
        Ok(record) => {
            info!("location resolved via remote lookup");
            state.location = Some(record);
            state.surface_open = true;
            ResolveOutcome {
                resolved: true,
                fallback_used: false,
            }
        }
        Err(primary_err) => {
            warn!("remote lookup failed, trying host geolocation: {primary_err}");
            match fallback.resolve().await {
                Ok(record) => {
                    info!("location resolved via host geolocation fallback");
                    state.location = Some(record);
                    state.surface_open = true;
                    ResolveOutcome {
                        resolved: true,
                        fallback_used: true,
                    }
                }
                Err(fallback_err) => {
                    state.error = Some(format!(
                        "Location lookup failed: {primary_err} (fallback: {fallback_err})"
                    ));
                    ResolveOutcome {
                        resolved: false,
                        fallback_used: true,
                    }
                }
            }
        }
    };

    state.loading = false;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::LookupError;
    use crate::location::types::Coordinates;

    struct FixedSource(LocationRecord);

    impl LocationSource for FixedSource {
        async fn resolve(&self) -> Result<LocationRecord, LookupError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl LocationSource for FailingSource {
        async fn resolve(&self) -> Result<LocationRecord, LookupError> {
            Err(LookupError::CapabilityUnavailable)
        }
    }

    fn lagos() -> LocationRecord {
        LocationRecord {
            ip: "1.2.3.4".into(),
            city: "Lagos".into(),
            region: "LA".into(),
            country_name: "Nigeria".into(),
            latitude: 6.5,
            longitude: 3.4,
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let mut state = ViewState::default();
        let outcome = resolve_location(&FixedSource(lagos()), &FailingSource, &mut state).await;
        assert!(outcome.resolved);
        assert!(!outcome.fallback_used);
        assert!(state.surface_open);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.location.as_ref().map(|r| r.city.as_str()), Some("Lagos"));
    }

    #[tokio::test]
    async fn test_fallback_success_clears_error() {
        let mut state = ViewState::default();
        let fix = LocationRecord::from_fix(Coordinates {
            latitude: 6.5,
            longitude: 3.4,
        });
        let outcome = resolve_location(&FailingSource, &FixedSource(fix), &mut state).await;
        assert!(outcome.resolved);
        assert!(outcome.fallback_used);
        assert!(state.surface_open);
        assert!(!state.loading);
        // fallback success leaves no trace of the primary failure
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_terminal_failure_mentions_both_contexts() {
        let mut state = ViewState::default();
        let outcome = resolve_location(&FailingSource, &FailingSource, &mut state).await;
        assert!(!outcome.resolved);
        assert!(outcome.fallback_used);
        assert!(!state.surface_open);
        assert!(!state.loading);
        let message = state.error.expect("terminal failure must be surfaced");
        assert!(message.contains("Location lookup failed"));
        assert!(message.contains("fallback"));
        assert!(state.location.is_none());
    }

    #[tokio::test]
    async fn test_close_surface_drops_record() {
        let mut state = ViewState::default();
        resolve_location(&FixedSource(lagos()), &FailingSource, &mut state).await;
        state.close_surface();
        assert!(!state.surface_open);
        assert!(state.location.is_none());
    }
}
