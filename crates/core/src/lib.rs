//! Domain types and validation rules for the Trackside backend.
//!
//! Everything here is pure: no I/O, no database access. The `db` and `api`
//! crates call into these modules before touching storage.

pub mod account;
pub mod driving;
pub mod error;
pub mod garage;
pub mod import;
pub mod track;
pub mod types;
pub mod upload;
