//! Outbound notifications.
//!
//! - [`delivery::webhook`] -- Discord-style webhook delivery for commission
//!   requests submitted through the contact form.

pub mod delivery;

pub use delivery::webhook::{WebhookConfig, WebhookDelivery, WebhookError};
