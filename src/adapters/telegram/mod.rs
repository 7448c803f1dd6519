//! Telegram adapters: client bootstrap, update listener, message mapping.

pub mod client;
pub mod listener;
pub mod mapper;

pub use listener::ChannelListener;
