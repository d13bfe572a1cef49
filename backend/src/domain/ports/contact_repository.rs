//! Port for contact submission storage.

use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::domain::{ContactSubmission, Error, NewContactSubmission};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact store adapters.
    pub enum ContactRepositoryError {
        /// The underlying store is unusable and the operation was lost.
        Storage { message: String } =>
            "contact store unavailable: {message}",
    }
}

impl From<ContactRepositoryError> for Error {
    fn from(err: ContactRepositoryError) -> Self {
        // Surfaced to clients as an opaque internal error; the detail stays
        // in the logs.
        error!(error = %err, "contact repository failure");
        Error::internal(err.to_string())
    }
}

/// Port for creating and reading contact submissions.
///
/// Records are write-once: no update or delete is exposed, so a stored
/// submission is immutable for the life of the process.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a validated submission, assigning its identifier and
    /// creation timestamp, and return the stored record.
    async fn create(
        &self,
        payload: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError>;

    /// Every stored submission, most recent first.
    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError>;

    /// Exact-match lookup by identifier; `None` when no record matches.
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<ContactSubmission>, ContactRepositoryError>;
}
