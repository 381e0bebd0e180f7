//! Construction-time validation errors for map and actor configuration.

use std::fmt;

use bevy::math::IVec2;

/// Rejected level or actor configuration.
///
/// Everything that can go wrong is caught while building the [`Level`] and the
/// starting [`ActorState`]; the per-frame transform and draw-order code is total.
///
/// [`Level`]: crate::world::Level
/// [`ActorState`]: crate::actor::ActorState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// The level has no floors at all.
    EmptyLevel,
    /// A floor row differs in length from the floor's first row.
    RaggedFloor {
        /// Index of the offending floor.
        floor: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The actor's starting cell is not inside the ground floor.
    ActorOutOfBounds(IVec2),
    /// The actor's starting cell is a wall on the ground floor.
    ActorInWall(IVec2),
    /// The tile edge length is zero, negative or not finite.
    InvalidTileSize,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::EmptyLevel => write!(f, "level has no floors"),
            LevelError::RaggedFloor {
                floor,
                row,
                expected,
                found,
            } => write!(
                f,
                "floor {floor} is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            LevelError::ActorOutOfBounds(cell) => {
                write!(f, "actor start {cell} is outside the ground floor")
            }
            LevelError::ActorInWall(cell) => {
                write!(f, "actor start {cell} is a wall on the ground floor")
            }
            LevelError::InvalidTileSize => {
                write!(f, "tile size must be a positive number of pixels")
            }
        }
    }
}

impl std::error::Error for LevelError {}
