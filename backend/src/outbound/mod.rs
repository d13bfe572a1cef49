//! Outbound adapters implementing domain ports for infrastructure concerns.
//!
//! Adapters are thin translators between domain types and whatever backs
//! them. They contain no business logic.

pub mod persistence;
