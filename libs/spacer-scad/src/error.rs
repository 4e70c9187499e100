//! # Error Types
//!
//! Fatal generation errors and non-fatal render errors are kept in separate
//! enums: a [`RenderError`] never invalidates a document that was already
//! written.

use spacer_layout::LayoutError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that abort a generation request.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The parameters do not describe a valid layout. Nothing was written.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The document could not be written. No render was attempted.
    #[error("Failed to write document {}: {}", .path.display(), .source)]
    FileWrite {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// Errors from the external render step. Reported as warnings.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer executable is not on the search path.
    #[error("Renderer '{executable}' not found on PATH")]
    RendererUnavailable {
        /// Executable name that was looked up
        executable: String,
    },

    /// The renderer was found but the process could not be started.
    #[error("Renderer '{executable}' could not be started: {source}")]
    Spawn {
        /// Resolved executable
        executable: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The renderer exited unsuccessfully.
    #[error("Renderer '{executable}' failed: {status}")]
    RendererFailed {
        /// Resolved executable
        executable: String,
        /// Exit status as reported by the OS
        status: String,
    },
}

impl RenderError {
    /// True when the renderer was simply missing rather than broken.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RenderError::RendererUnavailable { .. })
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for generation requests.
pub type GenerateResult<T> = Result<T, GenerateError>;
