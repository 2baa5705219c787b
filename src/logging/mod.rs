//! # Logging
//!
//! Diagnostic output for boilerplate-check. Two layers live here:
//!
//! - `tracing` events for internals, filtered by `-v`/`-q` or `RUST_LOG`
//! - [`verbose_log!`] and [`info_log!`], plain messages gated by the global
//!   output mode
//!
//! All of it goes to stderr; stdout carries findings only.
//!
//! ```rust
//! use boilerplate_check::logging::{ColorMode, set_verbose};
//! use boilerplate_check::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Reading boilerplate from {}", "hack/boilerplate.go.txt");
//! info_log!("{}: fixed boilerplate", "cmd/main.go");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// `eprintln!` that only fires after [`set_verbose`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Highlighted stderr message, silenced by [`set_quiet`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

#[doc(hidden)]
pub fn print_info_log(message: &str) {
  eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
}
