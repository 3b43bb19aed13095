//! Randomized obstacle placement.
//!
//! Positions are drawn in ascending order. Each draw starts at the running
//! floor (previous position plus the gap) and stops early enough to leave
//! room for every position still to come, so a draw can never strand the
//! rest of the course past the bound.

use flaily_data::{ObstacleSet, Position, TRACK_LENGTH};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when the requested count cannot fit between floor and bound.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Refuse the request with [`GenerateError::GenerationOverflow`].
    #[default]
    Fail,
    /// Place as many positions as fit and log a warning.
    Truncate,
}

/// Parameters for a generated course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of obstacles to place.
    pub count: u32,
    /// Minimum distance between neighbouring obstacles (at least 1).
    pub gap: Position,
    /// Lowest position the first obstacle may take.
    pub floor: Position,
    /// Exclusive upper bound for every obstacle.
    pub bound: Position,
    pub policy: OverflowPolicy,
    /// Fixed seed for reproducible output; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 15,
            gap: 7,
            floor: 15,
            bound: TRACK_LENGTH,
            policy: OverflowPolicy::Fail,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Largest number of obstacles that fit between floor and bound at this gap.
    ///
    /// ```
    /// use flaily_content::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::default();
    /// // 15, 22, ..., 120, 127
    /// assert_eq!(config.capacity(), 17);
    /// ```
    pub fn capacity(&self) -> u32 {
        if self.gap < 1 || self.floor >= self.bound {
            return 0;
        }
        let span = i128::from(self.bound) - 1 - i128::from(self.floor);
        let fits = span / i128::from(self.gap) + 1;
        u32::try_from(fits).unwrap_or(u32::MAX)
    }

    fn check(&self) -> Result<(), GenerateError> {
        if self.gap < 1 {
            return Err(GenerateError::InvalidGap { gap: self.gap });
        }
        if self.floor < 0 || self.bound > TRACK_LENGTH {
            return Err(GenerateError::InvalidBounds {
                floor: self.floor,
                bound: self.bound,
            });
        }
        Ok(())
    }
}

/// Reasons a course could not be generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("obstacle gap must be at least 1 (got {gap})")]
    InvalidGap { gap: Position },
    #[error("generator range {floor}..{bound} does not lie on the track (0..{track})", track = TRACK_LENGTH)]
    InvalidBounds { floor: Position, bound: Position },
    #[error("cannot place {requested} obstacles {gap} apart in {floor}..{bound}; at most {fits} fit")]
    GenerationOverflow {
        requested: u32,
        fits: u32,
        gap: Position,
        floor: Position,
        bound: Position,
    },
}

/// A generated layout together with the seed that reproduces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCourse {
    pub obstacles: ObstacleSet,
    pub seed: u64,
}

/// Generate a course, seeding a `StdRng` from the config or from the thread rng.
///
/// # Errors
/// See [`generate_with`].
pub fn generate(config: &GeneratorConfig) -> Result<GeneratedCourse, GenerateError> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!("generating course with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let obstacles = generate_with(config, &mut rng)?;
    Ok(GeneratedCourse { obstacles, seed })
}

/// Generate a course using the supplied random source. `config.seed` is ignored.
///
/// ```
/// use flaily_content::{GeneratorConfig, generate_with};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = GeneratorConfig { count: 3, ..GeneratorConfig::default() };
/// let course = generate_with(&config, &mut StdRng::seed_from_u64(7)).unwrap();
/// let positions = course.to_vec();
/// assert_eq!(positions.len(), 3);
/// assert!(positions[0] >= 15);
/// assert!(positions.windows(2).all(|w| w[1] - w[0] >= 7));
/// assert!(positions[2] < 128);
/// ```
///
/// # Errors
/// - `InvalidGap` if `gap < 1`
/// - `InvalidBounds` if the range reaches off the track
/// - `GenerationOverflow` if the count does not fit and the policy is `Fail`
pub fn generate_with<R>(config: &GeneratorConfig, rng: &mut R) -> Result<ObstacleSet, GenerateError>
where
    R: Rng + ?Sized,
{
    config.check()?;

    let fits = config.capacity();
    let count = if config.count <= fits {
        config.count
    } else {
        match config.policy {
            OverflowPolicy::Fail => {
                return Err(GenerateError::GenerationOverflow {
                    requested: config.count,
                    fits,
                    gap: config.gap,
                    floor: config.floor,
                    bound: config.bound,
                });
            },
            OverflowPolicy::Truncate => {
                warn!(
                    "only {fits} of {} obstacles fit {} apart in {}..{}; truncating",
                    config.count, config.gap, config.floor, config.bound
                );
                fits
            },
        }
    };

    let mut obstacles = ObstacleSet::new();
    let mut floor = config.floor;
    for placed in 0..count {
        let still_to_place = Position::from(count - 1 - placed);
        let ceiling = config.bound - 1 - still_to_place * config.gap;
        let position = rng.random_range(floor..=ceiling);
        debug!("obstacle {placed} at {position} (window {floor}..={ceiling})");
        obstacles.insert(position);
        floor = position.saturating_add(config.gap);
    }

    info!("placed {} obstacles", obstacles.len());
    Ok(obstacles)
}
