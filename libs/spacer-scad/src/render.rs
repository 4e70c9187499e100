//! External mesh rendering.
//!
//! The renderer is an opaque process: it receives the document path and a
//! mesh path, and either succeeds or fails. Its output is not parsed and
//! failures are never retried.

use crate::error::RenderError;
use config::constants::RENDERER_EXECUTABLE;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Converts a written document into a mesh file.
pub trait MeshRenderer {
    /// Human-readable renderer name for logs.
    fn name(&self) -> &str;

    /// Renders `document` into `mesh`, blocking until the renderer finishes.
    fn render(&self, document: &Path, mesh: &Path) -> Result<(), RenderError>;
}

/// OpenSCAD command-line renderer located on the search path.
///
/// Invoked as `openscad -o <mesh> <document>`. No timeout is applied.
///
/// # Examples
/// ```
/// use spacer_scad::OpenScadRenderer;
/// let renderer = OpenScadRenderer::with_executable("no-such-renderer").with_search_path("");
/// assert!(renderer.locate().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct OpenScadRenderer {
    executable: String,
    search_path: Option<OsString>,
}

impl OpenScadRenderer {
    /// Platform-default OpenSCAD executable, searched on `PATH`.
    pub fn new() -> Self {
        Self::with_executable(RENDERER_EXECUTABLE)
    }

    /// Custom executable name, or a path to the executable.
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            search_path: None,
        }
    }

    /// Searches `search_path` instead of the `PATH` environment variable.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Resolves the executable, or `None` when it cannot be found. Empty
    /// search-path entries are skipped rather than read as the current
    /// directory.
    pub fn locate(&self) -> Option<PathBuf> {
        let direct = Path::new(&self.executable);
        if direct.components().count() > 1 {
            return is_executable(direct).then(|| direct.to_path_buf());
        }
        let search_path = match &self.search_path {
            Some(path) => path.clone(),
            None => env::var_os("PATH")?,
        };
        env::split_paths(&search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(&self.executable))
            .find(|candidate| is_executable(candidate))
    }
}

impl Default for OpenScadRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshRenderer for OpenScadRenderer {
    fn name(&self) -> &str {
        &self.executable
    }

    fn render(&self, document: &Path, mesh: &Path) -> Result<(), RenderError> {
        let executable = self
            .locate()
            .ok_or_else(|| RenderError::RendererUnavailable {
                executable: self.executable.clone(),
            })?;
        let shown = executable.display().to_string();
        debug!(renderer = %shown, document = %document.display(), "starting renderer");

        let status = Command::new(&executable)
            .arg("-o")
            .arg(mesh)
            .arg(document)
            .status()
            .map_err(|source| RenderError::Spawn {
                executable: shown.clone(),
                source,
            })?;

        if !status.success() {
            return Err(RenderError::RendererFailed {
                executable: shown,
                status: status.to_string(),
            });
        }
        info!(mesh = %mesh.display(), "mesh rendered");
        Ok(())
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_executable_name() {
        assert_eq!(OpenScadRenderer::new().name(), RENDERER_EXECUTABLE);
    }

    #[test]
    fn empty_search_path_finds_nothing() {
        let renderer = OpenScadRenderer::new().with_search_path("");
        assert!(renderer.locate().is_none());
    }

    #[test]
    fn missing_renderer_is_unavailable() {
        let renderer =
            OpenScadRenderer::with_executable("spacer-renderer-that-does-not-exist")
                .with_search_path(env::temp_dir());
        let err = renderer
            .render(Path::new("in.scad"), Path::new("out.stl"))
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn directories_are_not_executables() {
        let dir = env::temp_dir();
        let renderer = OpenScadRenderer::with_executable(dir.display().to_string());
        assert!(renderer.locate().is_none());
    }
}
