//! Command-line parsing.
//!
//! Flags accept either `--flag value` or `--flag=value`. A `--params` JSON
//! file is loaded first; the remaining flags override its fields regardless
//! of their position.

use spacer_layout::{CellType, LayoutError, ParameterRecord};
use spacer_scad::GenerationRequest;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: battery-spacer [OPTIONS]

Options:
  --cell-type <TYPE>   18650 | 21700 (or small | large)      [default: 21700]
  --adjust <MM>        Clearance added to the cell diameter  [default: 0.2]
  --series <N>         Cells per row                         [default: 4]
  --parallel <N>       Rows                                  [default: 5]
  --slanted <BOOL>     Offset alternate rows                 [default: true]
  --straight           Same as --slanted false
  --params <FILE>      JSON parameter record; flags override its fields
  --scad <PATH>        OpenSCAD output                       [default: battery_spacer.scad]
  --stl <PATH>         Mesh output                           [default: battery_spacer.stl]
  --no-render          Do not run OpenSCAD
  --print-layout       Print the resolved layout as JSON
  -h, --help           Show this message

Set RUST_LOG to change log verbosity.";

/// Problems with the command line itself.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("option '{option}' does not take a value")]
    UnexpectedValue { option: String },

    #[error("invalid value '{value}' for '{option}'")]
    InvalidValue { option: String, value: String },

    #[error(transparent)]
    CellType(#[from] LayoutError),

    #[error("cannot read parameter file {path}: {source}")]
    ParamsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter file {path}: {source}")]
    ParamsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Generate(Options),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub request: GenerationRequest,
    pub print_layout: bool,
}

struct Flag {
    name: String,
    value: Option<String>,
}

pub fn parse<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let flags = split_flags(args)?;
    if flags.iter().any(|f| f.name == "--help" || f.name == "-h") {
        return Ok(Command::Help);
    }

    let mut params = ParameterRecord::default();
    if let Some(flag) = flags.iter().rev().find(|f| f.name == "--params") {
        params = load_params(PathBuf::from(required(flag)?))?;
    }

    let mut request = GenerationRequest::new(params);
    let mut print_layout = false;
    for flag in &flags {
        match flag.name.as_str() {
            "--params" => {}
            "--cell-type" => request.params.cell_type = required(flag)?.parse::<CellType>()?,
            "--adjust" => request.params.diameter_adjustment = parsed(flag)?,
            "--series" => request.params.series_cells = parsed(flag)?,
            "--parallel" => request.params.parallel_cells = parsed(flag)?,
            "--slanted" => request.params.slanted = parsed(flag)?,
            "--straight" => {
                no_value(flag)?;
                request.params.slanted = false;
            }
            "--scad" => request.document_path = PathBuf::from(required(flag)?),
            "--stl" => request.mesh_path = PathBuf::from(required(flag)?),
            "--no-render" => {
                no_value(flag)?;
                request.render = false;
            }
            "--print-layout" => {
                no_value(flag)?;
                print_layout = true;
            }
            other => return Err(UsageError::UnknownOption(other.to_string())),
        }
    }

    Ok(Command::Generate(Options {
        request,
        print_layout,
    }))
}

/// Groups raw arguments into flags with their values.
fn split_flags<I>(args: I) -> Result<Vec<Flag>, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut flags = Vec::new();
    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg));
        }
        if let Some((name, value)) = arg.split_once('=') {
            flags.push(Flag {
                name: name.to_string(),
                value: Some(value.to_string()),
            });
            continue;
        }
        let value = if takes_value(&arg) {
            match args.peek() {
                Some(next) if !next.starts_with("--") => args.next(),
                _ => None,
            }
        } else {
            None
        };
        flags.push(Flag { name: arg, value });
    }
    Ok(flags)
}

fn takes_value(name: &str) -> bool {
    matches!(
        name,
        "--cell-type"
            | "--adjust"
            | "--series"
            | "--parallel"
            | "--slanted"
            | "--params"
            | "--scad"
            | "--stl"
    )
}

fn required(flag: &Flag) -> Result<&str, UsageError> {
    flag.value
        .as_deref()
        .ok_or_else(|| UsageError::MissingValue(flag.name.clone()))
}

fn no_value(flag: &Flag) -> Result<(), UsageError> {
    match flag.value {
        Some(_) => Err(UsageError::UnexpectedValue {
            option: flag.name.clone(),
        }),
        None => Ok(()),
    }
}

fn parsed<T: std::str::FromStr>(flag: &Flag) -> Result<T, UsageError> {
    let value = required(flag)?;
    value.trim().parse().map_err(|_| UsageError::InvalidValue {
        option: flag.name.clone(),
        value: value.to_string(),
    })
}

fn load_params(path: PathBuf) -> Result<ParameterRecord, UsageError> {
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(UsageError::ParamsRead { path, source }),
    };
    serde_json::from_str(&text).map_err(|source| UsageError::ParamsParse { path, source })
}
