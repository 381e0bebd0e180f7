/// Rendering for the isometric tile map
///
/// This module handles the grid/screen projection, painter's-order draw
/// lists, and submitting those lists to Bevy as sprites.

pub mod depth_order;
pub mod isometric_projection;
pub mod tile_renderer;

pub use depth_order::*;
pub use isometric_projection::*;
pub use tile_renderer::*;
