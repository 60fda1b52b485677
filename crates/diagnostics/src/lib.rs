//! Simple diagnostics library for the Folio site generator
//!
//! Provides lightweight, configurable logging across all crates in the project.
//!
//! Usage:
//! - Set FOLIO_LOG=off (default) - no logs
//! - Set FOLIO_LOG=info - basic build logs
//! - Set FOLIO_LOG=debug - detailed diagnostic logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on FOLIO_LOG environment variable
///
/// This should be called once at application startup. It's safe to call
/// multiple times - subsequent calls will be ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var("FOLIO_LOG").unwrap_or_else(|_| "off".to_string());

        let rt = match log_level.as_str() {
            "off" => return, // No setup needed
            "debug" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Debug))
                .init(),
            "info" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Info))
                .init(),
            "warn" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Warn))
                .init(),
            "error" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Error))
                .init(),
            _ => {
                let rt = emit::setup()
                    .emit_to(emit_term::stderr())
                    .emit_when(emit::level::min_filter(emit::Level::Info))
                    .init();
                // Bootstrap warning - this will show even with unknown level
                eprintln!("Warning: Unknown FOLIO_LOG value '{}', using 'info'", log_level);
                rt
            }
        };

        // The emit runtime must outlive every log call site
        std::mem::forget(rt); // TODO: Find better lifetime management
    });
}

/// Log basic operations (pages written, assets copied, content discovered, etc.)
///
/// Use this for operations that users might want to see in normal usage.
/// Examples: "Wrote index.html", "Copied 12 assets", "Loaded 8 projects"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (per-file steps, parse results, internal state, etc.)
///
/// Use this for detailed information useful for debugging a build.
/// Examples: "Parsed frontmatter with 6 keys", "Rendering body for clay-bust"
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (missing metadata, skipped files, fallbacks)
///
/// Use this for issues that don't prevent the build but should be noted.
/// Examples: "Project has no publishedDate, skipping", "Global assets missing"
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log critical error conditions (failures that abort or degrade the build)
///
/// Use this for serious problems that prevent normal operation.
/// Examples: "Cannot read site.yaml", "Failed to write output file"
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

// Short-name versions for ergonomic usage

/// Log basic operations (pages written, assets copied, content discovered, etc.)
///
/// Use this for operations that users might want to see in normal usage.
/// Examples: "Wrote index.html", "Copied 12 assets", "Loaded 8 projects"
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (per-file steps, parse results, internal state, etc.)
///
/// Use this for detailed information useful for debugging a build.
/// Examples: "Parsed frontmatter with 6 keys", "Rendering body for clay-bust"
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (missing metadata, skipped files, fallbacks)
///
/// Use this for issues that don't prevent the build but should be noted.
/// Examples: "Project has no publishedDate, skipping", "Global assets missing"
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log critical error conditions (failures that abort or degrade the build)
/// Using "error" instead of "fatal" for consistency with emit-rs
///
/// Use this for serious problems that prevent normal operation.
/// Examples: "Cannot read site.yaml", "Failed to write output file"
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
