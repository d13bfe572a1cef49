//! In-memory adapters backing the submission repositories.
//!
//! Records are write-once: an entry is inserted on `create` and never
//! mutated or removed afterwards. A mutex around each table makes identifier
//! assignment and timestamp stamping atomic, and readers only ever observe
//! fully written records.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use uuid::Uuid;

use crate::domain::ports::{
    AppointmentRepository, AppointmentRepositoryError, ContactRepository, ContactRepositoryError,
};
use crate::domain::{
    AppointmentBooking, ContactSubmission, NewAppointmentBooking, NewContactSubmission,
};

/// Keyed table shared by both in-memory repositories.
///
/// Rows carry an insertion sequence so snapshot ordering stays deterministic
/// when two records share a creation timestamp.
struct MemTable<T> {
    rows: HashMap<Uuid, Row<T>>,
    next_seq: u64,
}

struct Row<T> {
    seq: u64,
    created_at: DateTime<Utc>,
    record: T,
}

impl<T: Clone> MemTable<T> {
    fn new() -> Self {
        Self {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }

    fn insert(&mut self, id: Uuid, created_at: DateTime<Utc>, record: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(
            id,
            Row {
                seq,
                created_at,
                record,
            },
        );
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// Snapshot ordered most recent first.
    fn snapshot(&self) -> Vec<T> {
        let mut rows: Vec<&Row<T>> = self.rows.values().collect();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        rows.into_iter().map(|row| row.record.clone()).collect()
    }
}

/// In-memory contact submission store.
pub struct InMemoryContactRepository {
    table: Mutex<MemTable<ContactSubmission>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryContactRepository {
    /// Create an empty store stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty store using the supplied clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(MemTable::new()),
            clock,
        }
    }
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(
        &self,
        payload: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| ContactRepositoryError::storage("contact table lock poisoned"))?;
        let record = ContactSubmission {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            service_interest: payload.service_interest,
            message: payload.message,
            language: payload.language,
            created_at: self.clock.utc(),
        };
        table.insert(record.id, record.created_at, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>, ContactRepositoryError> {
        let table = self
            .table
            .lock()
            .map_err(|_| ContactRepositoryError::storage("contact table lock poisoned"))?;
        Ok(table.snapshot())
    }

    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<ContactSubmission>, ContactRepositoryError> {
        let table = self
            .table
            .lock()
            .map_err(|_| ContactRepositoryError::storage("contact table lock poisoned"))?;
        Ok(table.get(id))
    }
}

/// In-memory appointment booking store.
pub struct InMemoryAppointmentRepository {
    table: Mutex<MemTable<AppointmentBooking>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAppointmentRepository {
    /// Create an empty store stamping records with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Create an empty store using the supplied clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(MemTable::new()),
            clock,
        }
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(
        &self,
        payload: NewAppointmentBooking,
    ) -> Result<AppointmentBooking, AppointmentRepositoryError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| AppointmentRepositoryError::storage("appointment table lock poisoned"))?;
        let record = AppointmentBooking {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            company: payload.company,
            consultation_type: payload.consultation_type,
            preferred_date: payload.preferred_date,
            preferred_time: payload.preferred_time,
            project_description: payload.project_description,
            language: payload.language,
            created_at: self.clock.utc(),
        };
        table.insert(record.id, record.created_at, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<AppointmentBooking>, AppointmentRepositoryError> {
        let table = self
            .table
            .lock()
            .map_err(|_| AppointmentRepositoryError::storage("appointment table lock poisoned"))?;
        Ok(table.snapshot())
    }

    async fn find_by_id(
        &self,
        id: &Uuid,
    ) -> Result<Option<AppointmentBooking>, AppointmentRepositoryError> {
        let table = self
            .table
            .lock()
            .map_err(|_| AppointmentRepositoryError::storage("appointment table lock poisoned"))?;
        Ok(table.get(id))
    }
}
