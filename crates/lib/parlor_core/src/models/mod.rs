//! Domain models.

pub mod conversation;
