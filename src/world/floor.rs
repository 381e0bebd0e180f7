use bevy::prelude::*;

use crate::error::LevelError;
use crate::world::tile::TileType;

/// One horizontal layer of the map
/// Stored row-major: indexed as row * columns + column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    rows: usize,
    columns: usize,
    tiles: Vec<TileType>,
}

impl Floor {
    /// Build a floor from raw tile identifiers, one inner vec per row.
    ///
    /// `index` is only used to label the error if the rows are ragged.
    pub fn from_ids(index: usize, rows: &[Vec<u8>]) -> Result<Self, LevelError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(rows.len() * columns);

        for (row, ids) in rows.iter().enumerate() {
            if ids.len() != columns {
                return Err(LevelError::RaggedFloor {
                    floor: index,
                    row,
                    expected: columns,
                    found: ids.len(),
                });
            }
            tiles.extend(ids.iter().copied().map(TileType::from_u8));
        }

        // A floor of empty rows has no cells; normalise so rows * columns == tiles.len()
        let rows = if columns == 0 { 0 } else { rows.len() };

        Ok(Self {
            rows,
            columns,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if the floor has no cells
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    fn tile_index(&self, cell: IVec2) -> Option<usize> {
        let row = usize::try_from(cell.x).ok()?;
        let column = usize::try_from(cell.y).ok()?;
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Get the tile at a grid coordinate (x = row, y = column).
    /// Returns `None` for negative or out-of-range coordinates.
    pub fn get(&self, cell: IVec2) -> Option<TileType> {
        self.tile_index(cell).map(|idx| self.tiles[idx])
    }

    /// Tile at an in-range (row, column) pair
    #[inline]
    pub(crate) fn tile_at(&self, row: usize, column: usize) -> TileType {
        self.tiles[row * self.columns + column]
    }
}
