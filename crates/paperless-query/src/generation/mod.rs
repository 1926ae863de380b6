//! User-facing message generation

pub mod message;

pub use message::MessageFormatter;
