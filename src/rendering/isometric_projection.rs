use bevy::prelude::*;

/// 2:1 isometric projection between grid space and screen space
///
/// Screen space is y-up: a step along the grid's x axis moves the tile
/// up-and-right on screen, a step along y moves it up-and-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    /// Edge length of a square tile sprite, in pixels
    pub tile_size: f32,
}

impl IsoProjection {
    pub fn new(tile_size: f32) -> Self {
        debug_assert!(tile_size > 0.0, "tile size must be positive");
        Self { tile_size }
    }

    /// Convert a grid position to its isometric screen offset
    #[inline]
    pub fn to_screen(&self, grid: Vec2) -> Vec2 {
        Vec2::new(
            (grid.x - grid.y) * (self.tile_size / 2.0),
            (grid.x + grid.y) * (self.tile_size / 4.0),
        )
    }

    /// Screen offset of an integer grid cell
    #[inline]
    pub fn cell_to_screen(&self, cell: IVec2) -> Vec2 {
        self.to_screen(cell.as_vec2())
    }

    /// Inverse of [`Self::to_screen`]
    #[inline]
    pub fn to_grid(&self, screen: Vec2) -> Vec2 {
        // x - y = 2 sx / T and x + y = 4 sy / T
        let diff = 2.0 * screen.x / self.tile_size;
        let sum = 4.0 * screen.y / self.tile_size;
        Vec2::new((sum + diff) / 2.0, (sum - diff) / 2.0)
    }

    /// Nearest grid cell to a screen offset
    pub fn cell_under(&self, screen: Vec2) -> IVec2 {
        self.to_grid(screen).round().as_ivec2()
    }

    /// Vertical lift applied to every tile of a floor (half a tile per storey)
    #[inline]
    pub fn floor_lift(&self, floor: usize) -> f32 {
        floor as f32 * (self.tile_size / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f32 = 1e-6;

    fn projection() -> IsoProjection {
        IsoProjection::new(64.0)
    }

    #[test]
    fn test_axis_steps() {
        let iso = projection();
        assert_eq!(iso.cell_to_screen(IVec2::ZERO), Vec2::ZERO);
        assert_eq!(iso.cell_to_screen(IVec2::X), Vec2::new(32.0, 16.0));
        assert_eq!(iso.cell_to_screen(IVec2::Y), Vec2::new(-32.0, 16.0));
        assert_eq!(iso.cell_to_screen(IVec2::new(1, 1)), Vec2::new(0.0, 32.0));
    }

    #[test]
    fn test_inverse_of_axis_steps() {
        let iso = projection();
        assert_eq!(iso.to_grid(Vec2::new(32.0, 16.0)), Vec2::X);
        assert_eq!(iso.to_grid(Vec2::new(-32.0, 16.0)), Vec2::Y);
    }

    #[test]
    fn test_cell_under_rounds_to_nearest() {
        let iso = projection();
        let centre = iso.cell_to_screen(IVec2::new(3, 2));
        assert_eq!(iso.cell_under(centre + Vec2::new(5.0, -3.0)), IVec2::new(3, 2));
    }

    #[test]
    fn test_floor_lift() {
        let iso = projection();
        assert_eq!(iso.floor_lift(0), 0.0);
        assert_eq!(iso.floor_lift(1), 32.0);
        assert_eq!(iso.floor_lift(3), 96.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "tile size must be positive")]
    fn test_zero_tile_size_rejected() {
        IsoProjection::new(0.0);
    }

    proptest! {
        #[test]
        fn prop_round_trip_cells(x in -512i32..512, y in -512i32..512) {
            let iso = projection();
            let cell = IVec2::new(x, y);
            let back = iso.to_grid(iso.cell_to_screen(cell));
            prop_assert!((back - cell.as_vec2()).abs().max_element() <= TOLERANCE);
        }

        #[test]
        fn prop_round_trip_fractional(x in -64.0f32..64.0, y in -64.0f32..64.0, tile in 8.0f32..256.0) {
            let iso = IsoProjection::new(tile);
            let grid = Vec2::new(x, y);
            let back = iso.to_grid(iso.to_screen(grid));
            // Relative tolerance: f32 keeps ~7 significant digits
            let scale = grid.abs().max_element().max(1.0);
            prop_assert!((back - grid).abs().max_element() <= TOLERANCE * scale * 16.0);
        }
    }
}
