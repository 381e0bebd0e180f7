/// Tile grid model for the isometric map
///
/// This module holds the stacked floors the renderer walks and the actor
/// collides against. Built once at startup and never mutated afterwards.

pub mod floor;
pub mod level;
pub mod tile;

pub use floor::*;
pub use level::*;
pub use tile::*;
