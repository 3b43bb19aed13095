use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::btree_set;

/// A coordinate along the track. Signed so off-track input stays representable.
pub type Position = i64;

/// Number of addressable cells on a course track; valid positions are `0..TRACK_LENGTH`.
pub const TRACK_LENGTH: Position = 128;

/// Hand-authored obstacle layout shipped with the first level.
pub const PRESET_COURSE: [Position; 13] = [15, 21, 31, 36, 46, 51, 56, 61, 71, 81, 86, 96, 100];

/// Returns true if `position` addresses a cell on the track.
pub fn on_track(position: Position) -> bool {
    (0..TRACK_LENGTH).contains(&position)
}

/// Unique obstacle positions, iterated in ascending order.
///
/// Positions outside the track may be stored; consumers decide what to do
/// with them (the sign builder ignores them, validation reports them).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleSet(BTreeSet<Position>);

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The preset course as a set.
    ///
    /// ```
    /// use flaily_data::{ObstacleSet, PRESET_COURSE};
    ///
    /// let set = ObstacleSet::preset();
    /// assert_eq!(set.len(), PRESET_COURSE.len());
    /// assert!(set.contains(15));
    /// ```
    pub fn preset() -> Self {
        PRESET_COURSE.into_iter().collect()
    }

    /// Add a position; returns false if it was already present.
    pub fn insert(&mut self, position: Position) -> bool {
        self.0.insert(position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending iterator over every stored position.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }

    /// Ascending iterator over the positions that lie on the track.
    pub fn on_track(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.range(0..TRACK_LENGTH).copied()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

impl FromIterator<Position> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = Position;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
