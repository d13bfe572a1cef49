//! Port for appointment booking storage.

use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

use crate::domain::{AppointmentBooking, Error, NewAppointmentBooking};

use super::define_port_error;

define_port_error! {
    /// Errors raised by appointment store adapters.
    pub enum AppointmentRepositoryError {
        /// The underlying store is unusable and the operation was lost.
        Storage { message: String } =>
            "appointment store unavailable: {message}",
    }
}

impl From<AppointmentRepositoryError> for Error {
    fn from(err: AppointmentRepositoryError) -> Self {
        error!(error = %err, "appointment repository failure");
        Error::internal(err.to_string())
    }
}

/// Port for creating and reading appointment bookings.
///
/// Same write-once discipline as the contact port: stored bookings are never
/// updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Persist a validated booking, assigning its identifier and creation
    /// timestamp, and return the stored record.
    async fn create(
        &self,
        payload: NewAppointmentBooking,
    ) -> Result<AppointmentBooking, AppointmentRepositoryError>;

    /// Every stored booking, most recent first.
    async fn list(&self) -> Result<Vec<AppointmentBooking>, AppointmentRepositoryError>;

    /// Exact-match lookup by identifier; `None` when no record matches.
    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<AppointmentBooking>, AppointmentRepositoryError>;
}
