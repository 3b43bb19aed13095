//! Sign strings: one token per track cell, occupied or free.

use std::str::FromStr;

use flaily_data::{ObstacleSet, TRACK_LENGTH};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("sign tokens must not be empty")]
    Empty,
    #[error("sign token '{0}' contains whitespace")]
    Whitespace(String),
    #[error("expected OCCUPIED,FREE but got '{0}'")]
    Malformed(String),
}

/// The pair of block names written for occupied and free cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignTokens {
    occupied: String,
    free: String,
}

impl SignTokens {
    /// # Errors
    /// Tokens must be non-empty single words so the sign keeps one token per cell.
    pub fn new(occupied: &str, free: &str) -> Result<Self, TokenError> {
        for token in [occupied, free] {
            if token.is_empty() {
                return Err(TokenError::Empty);
            }
            if token.contains(char::is_whitespace) {
                return Err(TokenError::Whitespace(token.to_string()));
            }
        }
        Ok(Self {
            occupied: occupied.to_string(),
            free: free.to_string(),
        })
    }

    pub fn occupied(&self) -> &str {
        &self.occupied
    }

    pub fn free(&self) -> &str {
        &self.free
    }
}

impl Default for SignTokens {
    fn default() -> Self {
        Self {
            occupied: "ws".to_string(),
            free: "air".to_string(),
        }
    }
}

impl FromStr for SignTokens {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split(',').collect::<Vec<_>>().as_slice() {
            [occupied, free] => Self::new(occupied.trim(), free.trim()),
            _ => Err(TokenError::Malformed(s.to_string())),
        }
    }
}

/// Build the sign string with the stock `ws` / `air` tokens.
///
/// Positions outside the track are never matched; they are ignored rather
/// than reported, so the result always holds exactly `TRACK_LENGTH` tokens.
///
/// ```
/// use flaily_content::{ObstacleSet, build_sign_string};
///
/// let set: ObstacleSet = [1, 3, 500].into_iter().collect();
/// let sign = build_sign_string(&set);
/// assert!(sign.starts_with("air ws air ws air"));
/// assert_eq!(sign.split(' ').count(), 128);
/// ```
pub fn build_sign_string(obstacles: &ObstacleSet) -> String {
    build_sign_string_with(obstacles, &SignTokens::default())
}

pub fn build_sign_string_with(obstacles: &ObstacleSet, tokens: &SignTokens) -> String {
    (0..TRACK_LENGTH)
        .map(|cell| {
            if obstacles.contains(cell) {
                tokens.occupied()
            } else {
                tokens.free()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
