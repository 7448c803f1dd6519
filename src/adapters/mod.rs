//! Infrastructure adapters. Implement ports.
//!
//! Telegram, TMDB, MongoDB. Map errors to DomainError.

pub mod metadata;
pub mod persistence;
pub mod telegram;
