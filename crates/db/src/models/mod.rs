pub mod banner;
pub mod gallery;
pub mod price;
pub mod tos;

/// Image path used for freshly created items and the empty banner.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
