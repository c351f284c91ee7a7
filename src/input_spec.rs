use once_cell::sync::Lazy;
use regex::Regex;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A file to merge, optionally restricted to a page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: PathBuf,
    pub selector: Option<String>,
}

impl InputSpec {
    /// Split a token like "doc.pdf:1-3,5" into path and selector.
    ///
    /// Only a trailing `:` followed by digits, commas and hyphens counts as a
    /// selector, so drive letters and other colons stay part of the path.
    pub fn split(token: &str) -> Self {
        static SELECTOR: Lazy<Regex> =
            Lazy::new(|| Regex::new(r":([0-9,\-]+)$").expect("selector regex is valid"));

        match SELECTOR.captures(token) {
            Some(caps) => {
                let delimiter = caps.get(0).map_or(token.len(), |m| m.start());
                InputSpec {
                    path: PathBuf::from(&token[..delimiter]),
                    selector: caps.get(1).map(|m| m.as_str().to_string()),
                }
            }
            None => InputSpec {
                path: PathBuf::from(token),
                selector: None,
            },
        }
    }
}

impl FromStr for InputSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(InputSpec::split(s))
    }
}

impl fmt::Display for InputSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Some(selector) => write!(f, "{}:{}", self.path.display(), selector),
            None => write!(f, "{}", self.path.display()),
        }
    }
}
