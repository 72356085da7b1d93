pub mod auth;
pub mod banner;
pub mod commission;
pub mod gallery;
pub mod home;
pub mod prices;
pub mod section;
pub mod tos;
