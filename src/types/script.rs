//! The three textual renderings every codebook symbol carries.

use crate::error::HtfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The output script a decoded form is rendered in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// **Default:** the canonical source-text representation. Capital control
    /// codes are invisible toggles in this script.
    #[default]
    Latin,
    Abugida,
    /// The rendering canonical IDs are built from.
    Syllabary,
}

impl Script {
    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Abugida => "abugida",
            Script::Syllabary => "syllabary",
        }
    }
}

impl FromStr for Script {
    type Err = HtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "abugida" => Ok(Script::Abugida),
            "syllabary" => Ok(Script::Syllabary),
            other => Err(HtfError::Config(format!(
                "Invalid script '{}'. Must be 'latin', 'abugida', or 'syllabary'.",
                other
            ))),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Syllabary".parse::<Script>().unwrap(), Script::Syllabary);
        assert_eq!("ABUGIDA".parse::<Script>().unwrap(), Script::Abugida);
        assert!("cyrillic".parse::<Script>().is_err());
    }

    #[test]
    fn test_default_is_latin() {
        assert_eq!(Script::default(), Script::Latin);
        assert_eq!(serde_json::to_string(&Script::Latin).unwrap(), "\"latin\"");
    }
}
