use bevy::prelude::*;

use crate::actor::ActorState;
use crate::rendering::isometric_projection::IsoProjection;
use crate::world::{Floor, TileType};

/// Which sprite a draw command paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    FloorTile,
    WallTile,
    Actor,
}

impl SpriteKind {
    fn for_tile(tile: TileType) -> Option<Self> {
        match tile {
            TileType::Floor => Some(SpriteKind::FloorTile),
            TileType::Wall => Some(SpriteKind::WallTile),
            TileType::Empty => None,
        }
    }
}

/// A single "draw sprite at position" request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteKind,
    pub position: Vec2,
}

/// Build the painter's-order draw list for one frame.
///
/// Floors are painted bottom to top. Within a floor, rows run from last to
/// first and, inside each row, columns from last to first, so a cell is always
/// painted after every overlapping cell that lies farther from the viewer.
/// The actor is emitted right after the ground floor tile it stands on.
pub fn build_draw_list(
    floors: &[Floor],
    actor: &ActorState,
    projection: &IsoProjection,
    screen_offset: Vec2,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    fill_draw_list(&mut commands, floors, actor, projection, screen_offset);
    commands
}

/// Same as [`build_draw_list`] but refills a caller-owned buffer
pub fn fill_draw_list(
    commands: &mut Vec<DrawCommand>,
    floors: &[Floor],
    actor: &ActorState,
    projection: &IsoProjection,
    screen_offset: Vec2,
) {
    commands.clear();

    for (floor_index, floor) in floors.iter().enumerate() {
        if floor.is_empty() {
            continue;
        }
        let lift = Vec2::new(0.0, projection.floor_lift(floor_index));

        for row in (0..floor.rows()).rev() {
            for column in (0..floor.columns()).rev() {
                let cell = IVec2::new(row as i32, column as i32);
                let iso = projection.cell_to_screen(cell);

                if let Some(sprite) = SpriteKind::for_tile(floor.tile_at(row, column)) {
                    commands.push(DrawCommand {
                        sprite,
                        position: screen_offset + iso + lift,
                    });
                }

                if floor_index == 0 && actor.cell == cell {
                    commands.push(DrawCommand {
                        sprite: SpriteKind::Actor,
                        position: screen_offset + iso + actor.displacement,
                    });
                }
            }
        }
    }
}
