// inputs/mod.rs

//! Terminal input: event polling and key mapping.

pub mod handler;
pub mod key;
