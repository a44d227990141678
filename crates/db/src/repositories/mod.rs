//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod car_repo;
pub mod lapbook_repo;
pub mod review_repo;
pub mod track_image_repo;
pub mod track_repo;
pub mod user_repo;
pub mod zone_repo;

pub use car_repo::CarRepo;
pub use lapbook_repo::LapbookRepo;
pub use review_repo::ReviewRepo;
pub use track_image_repo::TrackImageRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
pub use zone_repo::ZoneRepo;
