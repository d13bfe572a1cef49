//! Persistence adapters for the submission repositories.
//!
//! Submissions live for the process lifetime only, so the production
//! adapters are in-memory tables. The repository ports keep the door open
//! for a database-backed adapter without touching handlers.

mod memory;

pub use memory::{InMemoryAppointmentRepository, InMemoryContactRepository};
