/// Tile classification for a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Empty = 0,
    Floor = 1,
    Wall = 2,
}

impl TileType {
    /// Convert a raw map identifier into a tile type.
    ///
    /// Identifiers outside the known set decode to `Empty`: such cells are
    /// skipped by the renderer and are walkable, they never raise an error.
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => TileType::Floor,
            2 => TileType::Wall,
            _ => TileType::Empty,
        }
    }

    /// Check if this tile stops the actor
    #[inline]
    pub fn blocks_movement(&self) -> bool {
        matches!(self, TileType::Wall)
    }

    /// Check if this tile produces a draw command
    #[inline]
    pub fn is_visible(&self) -> bool {
        !matches!(self, TileType::Empty)
    }
}
