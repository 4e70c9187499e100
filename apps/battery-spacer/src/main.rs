//! Battery spacer generator.
//!
//! Plans the cavity grid, writes the OpenSCAD document and, when OpenSCAD is
//! on `PATH`, exports an STL next to it. A missing or failing renderer is a
//! warning: the document is still written and the exit code is zero.

mod cli;

use anyhow::{Context, Result};
use cli::{Command, Options};
use spacer_scad::{generate, OpenScadRenderer};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> ExitCode {
    init_tracing();

    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Command::Generate(options) => match run(&options) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(options: &Options) -> Result<()> {
    let request = &options.request;
    let report = generate(request, &OpenScadRenderer::new())
        .with_context(|| format!("could not generate {}", request.document_path.display()))?;

    let layout = &report.layout;
    info!(
        cell = %layout.cell_type(),
        series = layout.series_cells(),
        parallel = layout.parallel_cells(),
        width = layout.body_width(),
        height = layout.body_height(),
        "spacer generated"
    );
    if let Some(mesh) = &report.mesh_path {
        info!(mesh = %mesh.display(), "STL generated");
    }
    if report.is_degraded() {
        warn!(document = %report.document_path.display(), "document written without a mesh");
    }

    if options.print_layout {
        let json = serde_json::to_string_pretty(layout).context("could not serialize layout")?;
        println!("{json}");
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging disabled: {err}");
    }
}
