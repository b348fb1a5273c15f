//! User-facing messages.
//!
//! [`Message`] names every line the CLI prints; [`display`] holds the text
//! and [`macros`] routes it to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
