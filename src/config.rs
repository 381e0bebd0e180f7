use bevy::prelude::*;

use crate::error::LevelError;
use crate::rendering::IsoProjection;

/// Tunables shared by the host plugins and the draw-order core
#[derive(Resource, Debug, Clone)]
pub struct IsoConfig {
    pub window_title: String,
    pub window_size: Vec2,

    /// Edge length of the square tile sprites, in pixels
    pub tile_size: f32,

    /// Translation applied to every draw command of a frame.
    /// Bevy's origin is the window centre, so (0, -75) matches a bottom-left
    /// origin offset of (400, 325) in an 800x800 window.
    pub screen_offset: Vec2,

    /// Ground floor cell the actor starts on
    pub actor_start: IVec2,

    /// Continuous mode drift speed, in pixels per second
    pub actor_speed: f32,

    pub movement_mode: MovementMode,

    pub tile_sheet: String,
    /// Image regions are measured from the bottom-left corner, the way the
    /// sheets were authored; they are flipped into Bevy's top-left image
    /// space once the image height is known.
    pub floor_region: Rect,
    pub wall_region: Rect,
    pub actor_image: String,
    pub actor_region: Rect,
}

impl Default for IsoConfig {
    fn default() -> Self {
        Self {
            window_title: "Isometric demo".to_string(),
            window_size: Vec2::new(800.0, 800.0),
            tile_size: 64.0,
            screen_offset: Vec2::new(0.0, -75.0),
            actor_start: IVec2::new(1, 1),
            actor_speed: 120.0,
            movement_mode: MovementMode::Discrete,
            tile_sheet: "castle.png".to_string(),
            floor_region: Rect::new(0.0, 128.0, 64.0, 192.0),
            wall_region: Rect::new(0.0, 448.0, 64.0, 512.0),
            actor_image: "walker2.png".to_string(),
            actor_region: Rect::new(0.0, 0.0, 64.0, 64.0),
        }
    }
}

impl IsoConfig {
    /// Reject settings the projection cannot work with
    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(LevelError::InvalidTileSize);
        }
        Ok(())
    }

    pub fn projection(&self) -> IsoProjection {
        IsoProjection::new(self.tile_size)
    }
}

/// How arrow keys drive the actor
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    /// One cell per key press, blocked by walls and the map edge
    #[default]
    Discrete,
    /// Sub-cell drift while keys are held; the grid cell stays put and the
    /// drift is deliberately left unclamped
    Continuous,
}

impl MovementMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementMode::Discrete => "Discrete (grid-snapped)",
            MovementMode::Continuous => "Continuous (sub-cell drift)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MovementMode::Discrete => MovementMode::Continuous,
            MovementMode::Continuous => MovementMode::Discrete,
        }
    }
}
