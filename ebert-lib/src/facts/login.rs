use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

/// Longest login GitHub accepts.
const MAX_LOGIN_LEN: usize = 39;

/// A GitHub account login, validated so it can be spliced into an API path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Login {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.is_empty() {
            return Err("login must not be empty".to_string());
        }

        if s.len() > MAX_LOGIN_LEN {
            return Err(format!("login '{s}' is longer than {MAX_LOGIN_LEN} characters"));
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(format!("login '{s}' contains invalid character '{c}'"));
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(format!("login '{s}' must not begin or end with a hyphen"));
        }

        Ok(Self(s.to_string()))
    }
}

impl Display for Login {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_login() {
        let login: Login = "modelcontextprotocol".parse().unwrap();
        assert_eq!(login.as_str(), "modelcontextprotocol");
        assert_eq!(login.to_string(), "modelcontextprotocol");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let login: Login = "  octo-cat ".parse().unwrap();
        assert_eq!(login.as_str(), "octo-cat");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<Login>().is_err());
        assert!("   ".parse::<Login>().is_err());
    }

    #[test]
    fn test_parse_rejects_path_characters() {
        let err = "../orgs".parse::<Login>().unwrap_err();
        assert!(err.contains("invalid character"));
        assert!("a/b".parse::<Login>().is_err());
        assert!("a?b=c".parse::<Login>().is_err());
    }

    #[test]
    fn test_parse_rejects_edge_hyphens() {
        assert!("-octocat".parse::<Login>().is_err());
        assert!("octocat-".parse::<Login>().is_err());
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "a".repeat(MAX_LOGIN_LEN + 1);
        assert!(long.parse::<Login>().is_err());
        let max = "a".repeat(MAX_LOGIN_LEN);
        assert!(max.parse::<Login>().is_ok());
    }
}
