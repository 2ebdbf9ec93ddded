//! Error types for typewriter construction

use folio_types::DelayKind;
use thiserror::Error;

/// Rejected typewriter setup. Raised before any tick is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,

    #[error("{which} delay must be greater than zero")]
    ZeroDelay { which: DelayKind },
}
