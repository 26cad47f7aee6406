//! # care-core
//!
//! Record types, pagination, validation, and error types for carectl.
//!
//! This crate provides the foundational types shared across all carectl crates:
//! - Record structs for every server resource (organizations, psychologists,
//!   patients, triage, company dashboard)
//! - Status and severity enums
//! - List query and pagination types, including the server envelope remap
//! - Superficial form validation for create/update payloads
//! - Symptom-to-diagnosis matching for triage

pub mod entities;
pub mod enums;
pub mod matching;
pub mod pagination;
pub mod record_id;
pub mod server_dates;
pub mod validation;
