use bevy::prelude::*;

use crate::error::LevelError;
use crate::world::floor::Floor;

const E: u8 = 0;
const F: u8 = 1;
const W: u8 = 2;

/// Stack of floors making up the map
/// Floor 0 is the ground; the actor always walks on it.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Level {
    floors: Vec<Floor>,
}

impl Level {
    /// Create a level from already validated floors
    pub fn new(floors: Vec<Floor>) -> Result<Self, LevelError> {
        if floors.is_empty() {
            return Err(LevelError::EmptyLevel);
        }
        Ok(Self { floors })
    }

    /// Create a level from raw identifiers, indexed as [floor][row][column]
    pub fn from_ids(data: &[Vec<Vec<u8>>]) -> Result<Self, LevelError> {
        let floors = data
            .iter()
            .enumerate()
            .map(|(index, rows)| Floor::from_ids(index, rows))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(floors)
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// The floor the actor walks on
    pub fn ground(&self) -> &Floor {
        // Non-empty by construction
        &self.floors[0]
    }
}

/// Two 6x6 floors: an open ground floor fenced by walls, and a ring of
/// walls one storey up. Row 0 sits nearest the viewer, row 5 farthest.
pub fn demo_level_ids() -> Vec<Vec<Vec<u8>>> {
    vec![
        vec![
            vec![F, F, F, F, F, W],
            vec![W, F, F, F, F, W],
            vec![W, F, F, F, F, W],
            vec![W, F, F, F, F, W],
            vec![W, F, F, F, F, W],
            vec![W, W, W, W, W, W],
        ],
        vec![
            vec![E, E, E, E, E, W],
            vec![W, E, E, E, E, W],
            vec![W, E, E, E, E, W],
            vec![W, E, E, E, E, W],
            vec![W, E, E, E, E, W],
            vec![W, W, W, W, W, W],
        ],
    ]
}
