//! Error types for pagesift.
//!
//! The screen itself has no failure surface: every query string and every
//! clamped swipe index has a defined result. Errors only come from the
//! ambient shell around it, and are modelled with `thiserror` so they compose
//! through `?` into a single top-level [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error returned from `main`
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Log directory or tracing subscriber setup failed
//!   - [`InvalidPageIndex`] - A start page outside the table was requested
//!   - [`TuiError`] - Terminal setup, drawing, or event polling failed
//!
//! # Recovery Strategy
//!
//! All variants are fatal at startup. Once the event loop runs, only terminal
//! I/O can fail; the terminal is restored before the error reaches `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::identifiers::InvalidPageIndex;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```
/// use pagesift::model::{AppError, ContentTable};
///
/// fn start_page(index: usize) -> Result<usize, AppError> {
///     let id = ContentTable::builtin().page_id(index)?;
///     Ok(id.index())
/// }
///
/// assert_eq!(start_page(2).unwrap(), 2);
/// assert!(matches!(start_page(9), Err(AppError::StartPage(_))));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but is unreadable or not valid TOML.
    ///
    /// **Recovery**: Report path and reason, exit. A missing file is not an
    /// error and never produces this variant.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file location could not be prepared.
    ///
    /// **Recovery**: Report and exit before the terminal is switched to raw
    /// mode, so the message stays readable.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Requested start page does not exist in the content table.
    ///
    /// Raised for `--page` or `initial_page` values; the screen never sees
    /// an out-of-range index.
    #[error("Invalid start page: {0}")]
    StartPage(#[from] InvalidPageIndex),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
