//! Output macros for [`Message`](super::Message)s.
//!
//! Every macro checks once whether debug mode is on:
//!
//! - **`TURNOS_DEBUG`** set: application debug mode
//! - **`RUST_LOG`** set: standard Rust logging configuration
//!
//! In debug mode messages go through `tracing` at the matching level, so they
//! carry timestamps and targets and respect the subscriber's filter. In
//! normal mode they are printed with an emoji prefix; errors go to stderr.
//!
//! ```text
//! msg_info!(m)  ──▶  debug mode?  ──yes──▶  tracing::info!("ℹ️ {m}")
//!                         │
//!                         └───no───▶  println!("ℹ️ {m}")
//! ```
//!
//! | Macro | Prefix | Normal mode | Debug mode |
//! |-------|--------|-------------|------------|
//! | `msg_print!` | none | stdout | `info` |
//! | `msg_success!` | ✅ | stdout | `info` |
//! | `msg_info!` | ℹ️ | stdout | `info` |
//! | `msg_warning!` | ⚠️ | stdout | `warn` |
//! | `msg_error!` | ❌ | stderr | `error` |
//! | `msg_debug!` | 🔍 | suppressed | `debug` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build an `anyhow::Error` from
//! a message instead of printing it.
//!
//! ```rust
//! use turnos::libs::messages::Message;
//! use turnos::{msg_error_anyhow, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! let error = msg_error_anyhow!(Message::InvalidDate("2025-13-01".to_string()));
//! assert!(error.to_string().contains("2025-13-01"));
//! ```
//!
//! Passing `true` as a second argument surrounds the message with blank
//! lines, which the schedule headers use.

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether `TURNOS_DEBUG` or `RUST_LOG` was set on first call. Cached for
/// the lifetime of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TURNOS_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success notification with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error with ❌ prefix, to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
///
/// Used for outcomes the user has to act on but that did not abort the
/// command, such as a split shift half that could not be removed.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Logs at debug level in debug mode; prints nothing otherwise.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
