//! One generation request end to end: plan, emit, write, render.

use crate::emitter::emit;
use crate::error::{GenerateResult, RenderError};
use crate::render::MeshRenderer;
use crate::writer::write_document;
use config::constants::{DEFAULT_DOCUMENT_PATH, DEFAULT_MESH_PATH};
use spacer_layout::{plan, ParameterRecord, ResolvedLayout};
use std::path::PathBuf;
use tracing::warn;

/// Parameters plus output locations for one request.
///
/// # Examples
/// ```
/// use spacer_layout::ParameterRecord;
/// use spacer_scad::GenerationRequest;
/// let request = GenerationRequest::new(ParameterRecord::default());
/// assert_eq!(request.document_path.to_str(), Some("battery_spacer.scad"));
/// assert!(request.render);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Layout parameters.
    pub params: ParameterRecord,
    /// Where the OpenSCAD document is written.
    pub document_path: PathBuf,
    /// Where the renderer should write the mesh.
    pub mesh_path: PathBuf,
    /// Whether to run the renderer after writing.
    pub render: bool,
}

impl GenerationRequest {
    /// Request with the default output paths and rendering enabled.
    pub fn new(params: ParameterRecord) -> Self {
        Self {
            params,
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            mesh_path: PathBuf::from(DEFAULT_MESH_PATH),
            render: true,
        }
    }

    /// Overrides the document path.
    pub fn with_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Overrides the mesh path.
    pub fn with_mesh_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mesh_path = path.into();
        self
    }

    /// Skips the render step.
    pub fn without_render(mut self) -> Self {
        self.render = false;
        self
    }
}

/// Outcome of a successful request.
#[derive(Debug)]
pub struct GenerationReport {
    /// Layout the document was emitted from.
    pub layout: ResolvedLayout,
    /// Written document.
    pub document_path: PathBuf,
    /// Rendered mesh, when the render step succeeded.
    pub mesh_path: Option<PathBuf>,
    /// Render problems that did not abort the request.
    pub warnings: Vec<RenderError>,
}

impl GenerationReport {
    /// True when a render was wanted but did not produce a mesh.
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Runs a request in strict sequence.
///
/// Layout errors abort before anything is written and write errors abort
/// before the renderer runs. Render errors are logged and returned in
/// [`GenerationReport::warnings`]; the document stays on disk.
pub fn generate(
    request: &GenerationRequest,
    renderer: &dyn MeshRenderer,
) -> GenerateResult<GenerationReport> {
    let layout = plan(&request.params)?;
    let lines = emit(&layout);
    write_document(&lines, &request.document_path)?;

    let mut report = GenerationReport {
        layout,
        document_path: request.document_path.clone(),
        mesh_path: None,
        warnings: Vec::new(),
    };
    if !request.render {
        return Ok(report);
    }

    match renderer.render(&request.document_path, &request.mesh_path) {
        Ok(()) => report.mesh_path = Some(request.mesh_path.clone()),
        Err(err) if err.is_unavailable() => {
            warn!(renderer = renderer.name(), "renderer not found, skipping mesh export");
            report.warnings.push(err);
        }
        Err(err) => {
            warn!(renderer = renderer.name(), error = %err, "mesh export failed");
            report.warnings.push(err);
        }
    }
    Ok(report)
}
