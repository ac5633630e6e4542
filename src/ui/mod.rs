//! User interface module - console output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing to the terminal
//!
//! Everything except the inferred version goes to stderr, so the version can be
//! captured from stdout by build scripts.

pub mod formatter;

use crate::boundary::BoundaryWarning;
use crate::domain::NearestVersion;
use crate::inference::InferenceResult;

pub use formatter::{
    format_boundary_warning, format_error, format_inference, format_nearest_version,
    format_status,
};

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a status message to stderr.
pub fn display_status(message: &str) {
    eprintln!("{}", format_status(message));
}

/// Print a boundary warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Print the nearest-version snapshot to stderr.
pub fn display_nearest_version(nearest: &NearestVersion) {
    eprintln!("{}", format_nearest_version(nearest));
}

/// Print the inference summary to stderr.
pub fn display_inference(result: &InferenceResult) {
    eprintln!("{}", format_inference(result));
}

/// Print the final output (version or tag name) to stdout, unstyled.
pub fn display_output(output: &str) {
    println!("{}", output);
}
