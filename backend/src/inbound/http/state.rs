//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without real infrastructure.

use std::sync::Arc;

use crate::domain::ports::{AppointmentRepository, ContactRepository};
use crate::outbound::persistence::{InMemoryAppointmentRepository, InMemoryContactRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::persistence::{
    ///     InMemoryAppointmentRepository, InMemoryContactRepository,
    /// };
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryContactRepository::new()),
    ///     Arc::new(InMemoryAppointmentRepository::new()),
    /// );
    /// let _contacts = state.contacts.clone();
    /// ```
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        appointments: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            contacts,
            appointments,
        }
    }

    /// Production wiring: fresh in-memory stores living for the process
    /// lifetime.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryAppointmentRepository::new()),
        )
    }
}
