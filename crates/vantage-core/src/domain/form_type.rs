use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// SEC filing a report row was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
    /// Annual report.
    #[serde(rename = "10K")]
    Form10K,
    /// Quarterly report.
    #[serde(rename = "10Q")]
    Form10Q,
}

impl FormType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Form10K => "10K",
            Self::Form10Q => "10Q",
        }
    }
}

impl Display for FormType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10K" => Ok(Self::Form10K),
            "10Q" => Ok(Self::Form10Q),
            _ => Err(ParseError::FormType {
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_short_form_names() {
        assert_eq!(FormType::Form10K.to_string(), "10K");
        assert_eq!("10Q".parse::<FormType>().expect("known"), FormType::Form10Q);
        assert!("8K".parse::<FormType>().is_err());
    }

    #[test]
    fn serializes_as_form_name() {
        let json = serde_json::to_string(&FormType::Form10Q).expect("serialize");
        assert_eq!(json, r#""10Q""#);
    }
}
