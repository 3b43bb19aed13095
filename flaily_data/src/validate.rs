use std::fmt;

use crate::{Position, TRACK_LENGTH, on_track};

/// A position that cannot be placed on the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    OffTrack { position: Position },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OffTrack { position } => {
                write!(f, "position {position} is off the track (0..{TRACK_LENGTH})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Report every position outside the track, in input order.
///
/// Off-track positions are not fatal anywhere in the pipeline; callers use
/// this to tell the author which entries will never show up on a sign.
///
/// ```
/// use flaily_data::{ValidationError, validate_positions};
///
/// let errors = validate_positions([15, 128, -1]);
/// assert_eq!(
///     errors,
///     vec![
///         ValidationError::OffTrack { position: 128 },
///         ValidationError::OffTrack { position: -1 },
///     ]
/// );
/// ```
pub fn validate_positions<I>(positions: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = Position>,
{
    positions
        .into_iter()
        .filter(|p| !on_track(*p))
        .map(|position| ValidationError::OffTrack { position })
        .collect()
}
