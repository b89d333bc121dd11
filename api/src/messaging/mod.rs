//! Messaging module
//!
//! Chat deep links pre-filled with an inquiry summary.

pub mod whatsapp;

pub use whatsapp::{render_inquiry_message, whatsapp_link};
