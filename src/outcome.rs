//! Result of a create, update or delete issued from a page

use log::{info, warn};

use crate::error::{Error, Result};

/// How a mutation ended
#[derive(Debug)]
pub enum MutationOutcome<T> {
    /// The API accepted the change
    Applied(T),
    /// The API call failed; the change is shown locally only
    AppliedLocallyOnly {
        value: T,
        /// Why the API call failed
        error: Error,
    },
    /// The change was refused before or by the API and nothing was applied
    Rejected(Error),
}

impl<T> MutationOutcome<T> {
    /// Map an API result, applying `local()` when the call failed.
    ///
    /// Validation failures are never applied locally.
    pub fn optimistic(result: Result<T>, what: &str, local: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => MutationOutcome::Applied(value),
            Err(err @ Error::Validation(_)) => MutationOutcome::Rejected(err),
            Err(err) => {
                warn!("{} failed, applying locally: {}", what, err);
                MutationOutcome::AppliedLocallyOnly {
                    value: local(),
                    error: err,
                }
            }
        }
    }

    /// Apply `value` locally without any request.
    ///
    /// Used while the page shows demo records, whose ids mean nothing to the server.
    pub fn demo_only(what: &str, value: T) -> Self {
        info!("{} kept locally: demo data is shown", what);
        MutationOutcome::AppliedLocallyOnly {
            value,
            error: Error::DemoData,
        }
    }

    /// The value to display, unless the change was rejected
    pub fn value(&self) -> Option<&T> {
        match self {
            MutationOutcome::Applied(value) => Some(value),
            MutationOutcome::AppliedLocallyOnly { value, .. } => Some(value),
            MutationOutcome::Rejected(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            MutationOutcome::Applied(value) => Some(value),
            MutationOutcome::AppliedLocallyOnly { value, .. } => Some(value),
            MutationOutcome::Rejected(_) => None,
        }
    }

    /// True for both confirmed and local-only changes
    pub fn is_applied(&self) -> bool {
        !matches!(self, MutationOutcome::Rejected(_))
    }

    /// True when the API confirmed the change
    pub fn is_confirmed(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    /// True when the change only exists locally
    pub fn is_local_only(&self) -> bool {
        matches!(self, MutationOutcome::AppliedLocallyOnly { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MutationOutcome<U> {
        match self {
            MutationOutcome::Applied(value) => MutationOutcome::Applied(f(value)),
            MutationOutcome::AppliedLocallyOnly { value, error } => {
                MutationOutcome::AppliedLocallyOnly {
                    value: f(value),
                    error,
                }
            }
            MutationOutcome::Rejected(err) => MutationOutcome::Rejected(err),
        }
    }

    /// Short notice for the user
    pub fn notice(&self, applied: &str, local: &str) -> String {
        match self {
            MutationOutcome::Applied(_) => applied.to_string(),
            MutationOutcome::AppliedLocallyOnly { .. } => local.to_string(),
            MutationOutcome::Rejected(err) => err.message(),
        }
    }
}
