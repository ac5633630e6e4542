//! Pure formatting functions for UI output.
//!
//! Functions here build strings without printing so they can be tested;
//! [super] does the writing.

use crate::boundary::BoundaryWarning;
use crate::domain::NearestVersion;
use crate::inference::InferenceResult;
use console::style;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format a boundary warning with a yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Format the nearest-version snapshot as an indented block.
///
/// Shows the nearest normal version and the nearest version of any kind,
/// each with its commit distance from HEAD.
pub fn format_nearest_version(nearest: &NearestVersion) -> String {
    format!(
        "{}\n  Normal: {} ({} commits since)\n  Any:    {} ({} commits since)",
        style("Nearest versions:").bold(),
        style(&nearest.normal).cyan(),
        nearest.distance_from_normal,
        style(&nearest.any).cyan(),
        nearest.distance_from_any
    )
}

/// Format the inference summary shown in verbose mode.
pub fn format_inference(result: &InferenceResult) -> String {
    if result.releasable {
        format!(
            "{} {}",
            style("✓ Inferred version:").green(),
            style(&result.version).green().bold()
        )
    } else {
        format!(
            "{} {}",
            style("→ Keeping nearest version:").yellow(),
            style(&result.version).bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).to_string()
    }

    #[test]
    fn test_format_error() {
        assert_eq!(plain(format_error("bad stage")), "ERROR: bad stage");
    }

    #[test]
    fn test_format_status() {
        assert_eq!(plain(format_status("locating tags")), "→ locating tags");
    }

    #[test]
    fn test_format_nearest_version() {
        let nearest = NearestVersion::new(
            Version::new(1, 1, 0),
            Version::parse("1.2.0-milestone.1").unwrap(),
            5,
            2,
        );
        let text = plain(format_nearest_version(&nearest));
        assert!(text.contains("Normal: 1.1.0 (5 commits since)"));
        assert!(text.contains("Any:    1.2.0-milestone.1 (2 commits since)"));
    }

    #[test]
    fn test_format_inference() {
        let nearest = NearestVersion::untagged(1);
        let released = InferenceResult {
            version: Version::new(0, 0, 1),
            releasable: true,
            nearest: nearest.clone(),
        };
        let kept = InferenceResult {
            version: Version::new(0, 0, 0),
            releasable: false,
            nearest,
        };
        assert_eq!(plain(format_inference(&released)), "✓ Inferred version: 0.0.1");
        assert_eq!(
            plain(format_inference(&kept)),
            "→ Keeping nearest version: 0.0.0"
        );
    }
}
