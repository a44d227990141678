//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` entity structs matching database rows
//! - `Serialize` response shapes that nest related rows
//! - `Deserialize` create/update DTOs read from request bodies

pub mod car;
pub mod lap_record;
pub mod review;
pub mod track;
pub mod user;
pub mod zone;
