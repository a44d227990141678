//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate with `trackside_core`, delegate persistence to the
//! repositories in `trackside_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod admin;
pub mod auth;
pub mod cars;
pub mod lapbook;
pub mod profile;
pub mod reviews;
pub mod track_images;
pub mod tracks;
pub mod upload;
pub mod zones;
