//! Placement command templates.

use std::fmt;
use std::str::FromStr;

use flaily_data::Position;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder replaced by the obstacle position.
pub const POSITION_PLACEHOLDER: &str = "{pos}";
/// Level targeted by the stock door command.
pub const DEFAULT_LEVEL: &str = "level1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{0}' has no {{pos}} placeholder")]
    MissingPlaceholder(String),
    #[error("template '{0}' repeats the {{pos}} placeholder")]
    RepeatedPlaceholder(String),
    #[error("template must fit on one line")]
    Multiline,
    #[error("level name '{0}' must be a single non-empty word")]
    InvalidLevel(String),
}

/// A one-line editor command with a single `{pos}` slot.
///
/// ```
/// use flaily_content::InstructionTemplate;
///
/// let template = InstructionTemplate::default();
/// assert_eq!(template.render(21), "door level1 2 7 21 8");
/// assert_eq!(template.to_string(), "door level1 2 7 {pos} 8");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InstructionTemplate {
    prefix: String,
    suffix: String,
}

impl InstructionTemplate {
    /// Parse a template containing exactly one `{pos}`.
    ///
    /// # Errors
    /// Fails on a missing or repeated placeholder, or on embedded newlines.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        if text.contains(['\n', '\r']) {
            return Err(TemplateError::Multiline);
        }
        let Some((prefix, suffix)) = text.split_once(POSITION_PLACEHOLDER) else {
            return Err(TemplateError::MissingPlaceholder(text.to_string()));
        };
        if suffix.contains(POSITION_PLACEHOLDER) {
            return Err(TemplateError::RepeatedPlaceholder(text.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// The stock door command pointed at another level.
    ///
    /// # Errors
    /// Fails if `level` is empty or contains whitespace or braces.
    pub fn for_level(level: &str) -> Result<Self, TemplateError> {
        let bad = level.is_empty() || level.chars().any(|c| c.is_whitespace() || c == '{' || c == '}');
        if bad {
            return Err(TemplateError::InvalidLevel(level.to_string()));
        }
        Self::parse(&format!("door {level} 2 7 {POSITION_PLACEHOLDER} 8"))
    }

    pub fn render(&self, position: Position) -> String {
        format!("{}{position}{}", self.prefix, self.suffix)
    }
}

impl Default for InstructionTemplate {
    fn default() -> Self {
        Self {
            prefix: format!("door {DEFAULT_LEVEL} 2 7 "),
            suffix: " 8".to_string(),
        }
    }
}

impl fmt::Display for InstructionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{POSITION_PLACEHOLDER}{}", self.prefix, self.suffix)
    }
}

impl FromStr for InstructionTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InstructionTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<InstructionTemplate> for String {
    fn from(template: InstructionTemplate) -> Self {
        template.to_string()
    }
}
