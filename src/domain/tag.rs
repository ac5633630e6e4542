use crate::error::{ReckonError, Result};
use regex::Regex;
use semver::Version;

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
///
/// Maps tag names to versions and back. The `{version}` placeholder accepts a
/// full semver string, pre-release and build metadata included.
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Compile a tag pattern
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(ReckonError::config(format!(
                "Tag pattern \"{}\" must contain the {{version}} placeholder",
                pattern
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replacen(r"\{version\}", r"(?P<version>\d+\.\d+\.\d+\S*)", 1);
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ReckonError::config(format!("Invalid tag pattern: {}", e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Extract the version named by a tag, if the tag matches this pattern
    pub fn parse(&self, tag: &str) -> Option<Version> {
        let captures = self.matcher.captures(tag)?;
        Version::parse(captures.name("version")?.as_str()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_prefix() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        let version = Version::parse("1.2.3-rc.1").unwrap();
        assert_eq!(pattern.format(&version), "release-1.2.3-rc.1");
    }

    #[test]
    fn test_pattern_parse() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.parse("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(
            pattern.parse("v1.2.0-milestone.1"),
            Some(Version::parse("1.2.0-milestone.1").unwrap())
        );
        assert_eq!(pattern.parse("release-1.2.3"), None);
        assert_eq!(pattern.parse("1.2.3"), None);
    }

    #[test]
    fn test_pattern_parse_bare() {
        let pattern = TagPattern::new("{version}").unwrap();
        assert_eq!(pattern.parse("1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(pattern.parse("v1.2.3"), None);
    }

    #[test]
    fn test_pattern_parse_rejects_invalid_semver() {
        let pattern = TagPattern::new("v{version}").unwrap();
        assert_eq!(pattern.parse("v1.2.3-"), None);
        assert_eq!(pattern.parse("v01.2.3"), None);
    }

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("release").is_err());
    }
}
