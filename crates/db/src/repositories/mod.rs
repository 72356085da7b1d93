//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&QueryClient` as the first argument.

pub mod banner_repo;
pub mod gallery_repo;
pub mod price_repo;
pub mod tos_repo;

pub use banner_repo::BannerRepo;
pub use gallery_repo::GalleryRepo;
pub use price_repo::PriceRepo;
pub use tos_repo::TosRepo;
