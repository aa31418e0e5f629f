//! Outbound adapters implementing the domain repository ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local store used by tests and database-less runs

pub mod memory;
pub mod persistence;
