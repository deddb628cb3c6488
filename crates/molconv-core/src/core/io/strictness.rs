use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How forgiving `pdbtbx` should be about deviations from the file format.
///
/// Many files in the wild fail the stricter levels, so [`Strictness::Loose`]
/// is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Strict,
    Medium,
    #[default]
    Loose,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid strictness '{0}'. Expected 'strict', 'medium' or 'loose'.")]
pub struct ParseStrictnessError(String);

impl FromStr for Strictness {
    type Err = ParseStrictnessError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Strictness::Strict),
            "medium" => Ok(Strictness::Medium),
            "loose" => Ok(Strictness::Loose),
            _ => Err(ParseStrictnessError(s.to_string())),
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strictness::Strict => "strict",
                Strictness::Medium => "medium",
                Strictness::Loose => "loose",
            }
        )
    }
}

impl From<Strictness> for pdbtbx::StrictnessLevel {
    fn from(s: Strictness) -> Self {
        match s {
            Strictness::Strict => pdbtbx::StrictnessLevel::Strict,
            Strictness::Medium => pdbtbx::StrictnessLevel::Medium,
            Strictness::Loose => pdbtbx::StrictnessLevel::Loose,
        }
    }
}
