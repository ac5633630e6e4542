use crate::error::{ReckonError, Result};
use std::fmt;
use std::str::FromStr;

/// Requested magnitude of change
///
/// Ordered by magnitude: `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeScope {
    #[default]
    Patch,
    Minor,
    Major,
}

impl ChangeScope {
    /// All scopes, smallest first
    pub const ALL: [ChangeScope; 3] = [
        ChangeScope::Patch,
        ChangeScope::Minor,
        ChangeScope::Major,
    ];

    /// Parse a scope name (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for ChangeScope {
    type Err = ReckonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(ChangeScope::Major),
            "minor" => Ok(ChangeScope::Minor),
            "patch" => Ok(ChangeScope::Patch),
            "" => Err(ReckonError::invalid_argument("Scope cannot be null")),
            _ => Err(ReckonError::invalid_argument(format!(
                "Invalid scope \"{}\"; must be one of: major, minor, patch",
                s
            ))),
        }
    }
}

impl fmt::Display for ChangeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeScope::Major => write!(f, "major"),
            ChangeScope::Minor => write!(f, "minor"),
            ChangeScope::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse() {
        assert_eq!(ChangeScope::parse("major").unwrap(), ChangeScope::Major);
        assert_eq!(ChangeScope::parse("Minor").unwrap(), ChangeScope::Minor);
        assert_eq!(ChangeScope::parse(" PATCH ").unwrap(), ChangeScope::Patch);
    }

    #[test]
    fn test_scope_parse_invalid() {
        let err = ChangeScope::parse("huge").unwrap_err();
        assert!(matches!(err, ReckonError::InvalidArgument(_)));
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_scope_parse_empty() {
        let err = ChangeScope::parse("").unwrap_err();
        assert!(err.to_string().contains("Scope cannot be null"));
    }

    #[test]
    fn test_scope_ordering() {
        assert!(ChangeScope::Major > ChangeScope::Minor);
        assert!(ChangeScope::Minor > ChangeScope::Patch);
    }

    #[test]
    fn test_scope_display_round_trips() {
        for scope in ChangeScope::ALL {
            assert_eq!(ChangeScope::parse(&scope.to_string()).unwrap(), scope);
        }
    }

    #[test]
    fn test_scope_default_is_patch() {
        assert_eq!(ChangeScope::default(), ChangeScope::Patch);
    }
}
