//! Request extractors for the admin gate.
//!
//! - [`admin::AdminStatus`] -- Derives the access level from the `password` cookie.
//! - [`admin::RequireAdmin`] -- Rejects guests with 401.

pub mod admin;
