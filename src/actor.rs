use bevy::prelude::*;

use crate::config::{IsoConfig, MovementMode};
use crate::error::LevelError;
use crate::world::{Floor, Level};

/// Where the actor stands and how far it has drifted from its cell
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    /// Ground floor cell (x = row, y = column)
    pub cell: IVec2,
    /// Screen-space offset from the cell's position, used in continuous mode
    pub displacement: Vec2,
}

impl ActorState {
    /// Place the actor on a non-wall ground floor cell
    pub fn spawn(level: &Level, cell: IVec2) -> Result<Self, LevelError> {
        match level.ground().get(cell) {
            None => Err(LevelError::ActorOutOfBounds(cell)),
            Some(tile) if tile.blocks_movement() => Err(LevelError::ActorInWall(cell)),
            Some(_) => Ok(Self {
                cell,
                displacement: Vec2::ZERO,
            }),
        }
    }

    /// Accumulate sub-cell drift. No clamping: the actor may drift past walls
    /// and off the map while its grid cell stays fixed.
    pub fn drift(&mut self, velocity: Vec2, dt: f32) {
        self.displacement += velocity * dt;
    }

    /// Drop any drift so the sprite sits on its cell again
    pub fn snap(&mut self) {
        self.displacement = Vec2::ZERO;
    }
}

/// Resolve a proposed move against the ground floor.
///
/// Returns the candidate cell when it is inside the floor and not a wall,
/// otherwise `current` unchanged.
pub fn try_move(ground: &Floor, current: IVec2, delta: IVec2) -> IVec2 {
    let (Some(x), Some(y)) = (
        current.x.checked_add(delta.x),
        current.y.checked_add(delta.y),
    ) else {
        return current;
    };
    let candidate = IVec2::new(x, y);

    // get() also rejects negative and out-of-range cells
    match ground.get(candidate) {
        Some(tile) if !tile.blocks_movement() => candidate,
        _ => current,
    }
}

const ARROWS: [(KeyCode, IVec2); 4] = [
    (KeyCode::ArrowUp, IVec2::new(1, 0)),
    (KeyCode::ArrowDown, IVec2::new(-1, 0)),
    (KeyCode::ArrowRight, IVec2::new(0, -1)),
    (KeyCode::ArrowLeft, IVec2::new(0, 1)),
];

/// Grid step for this frame's key press, first match wins
fn pressed_step(keys: &ButtonInput<KeyCode>) -> Option<IVec2> {
    ARROWS
        .iter()
        .find(|(key, _)| keys.just_pressed(*key))
        .map(|&(_, step)| step)
}

/// Sum of held arrow directions, in grid units
fn held_direction(keys: &ButtonInput<KeyCode>) -> Vec2 {
    ARROWS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .map(|(_, step)| step.as_vec2())
        .sum()
}

/// Plugin for actor movement in both discrete and continuous modes
pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_movement_mode, move_actor, report_drift_cell).chain(),
        );
    }
}

fn toggle_movement_mode(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<MovementMode>,
    mut actor: ResMut<ActorState>,
) {
    if !keyboard_input.just_pressed(KeyCode::Tab) {
        return;
    }

    *mode = mode.toggled();
    if *mode == MovementMode::Discrete && actor.displacement != Vec2::ZERO {
        actor.snap();
    }
    info!("Movement mode: {}", mode.as_str());
}

/// Apply this frame's input to the actor
pub fn move_actor(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mode: Res<MovementMode>,
    level: Res<Level>,
    config: Res<IsoConfig>,
    mut actor: ResMut<ActorState>,
) {
    match *mode {
        MovementMode::Discrete => {
            let Some(step) = pressed_step(&keyboard_input) else {
                return;
            };
            let target = try_move(level.ground(), actor.cell, step);
            if target == actor.cell {
                debug!("Move {} from {} rejected", step, actor.cell);
            } else {
                debug!("Actor moved to {}", target);
                actor.cell = target;
            }
        }
        MovementMode::Continuous => {
            let direction = held_direction(&keyboard_input);
            if direction == Vec2::ZERO {
                return;
            }
            let velocity = config.projection().to_screen(direction).normalize_or_zero()
                * config.actor_speed;
            actor.drift(velocity, time.delta_secs());
        }
    }
}

/// Log the cell the drifting actor is currently over
fn report_drift_cell(
    mode: Res<MovementMode>,
    actor: Res<ActorState>,
    config: Res<IsoConfig>,
    mut last_cell: Local<Option<IVec2>>,
) {
    if *mode != MovementMode::Continuous || !actor.is_changed() {
        return;
    }

    let projection = config.projection();
    let over = projection.cell_under(projection.cell_to_screen(actor.cell) + actor.displacement);
    if *last_cell != Some(over) {
        *last_cell = Some(over);
        debug!("Actor drifting over cell {}", over);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::demo_level_ids;

    fn demo_level() -> Level {
        Level::from_ids(&demo_level_ids()).unwrap()
    }

    /// 6x6 ground floor with a single wall at row 0, column 5
    fn open_level() -> Level {
        let mut ground = vec![vec![1u8; 6]; 6];
        ground[0][5] = 2;
        Level::from_ids(&[ground]).unwrap()
    }

    #[test]
    fn test_spawn_validation() {
        let level = demo_level();
        assert!(ActorState::spawn(&level, IVec2::new(1, 1)).is_ok());
        assert_eq!(
            ActorState::spawn(&level, IVec2::new(0, 5)),
            Err(LevelError::ActorInWall(IVec2::new(0, 5)))
        );
        assert_eq!(
            ActorState::spawn(&level, IVec2::new(6, 0)),
            Err(LevelError::ActorOutOfBounds(IVec2::new(6, 0)))
        );
        assert_eq!(
            ActorState::spawn(&level, IVec2::new(-1, 0)),
            Err(LevelError::ActorOutOfBounds(IVec2::new(-1, 0)))
        );
    }

    #[test]
    fn test_move_within_open_floor() {
        let level = open_level();
        let moved = try_move(level.ground(), IVec2::new(1, 1), IVec2::new(0, 4));
        assert_eq!(moved, IVec2::new(1, 5));
    }

    #[test]
    fn test_move_past_edge_rejected() {
        let level = open_level();
        let stay = try_move(level.ground(), IVec2::new(1, 5), IVec2::new(0, 1));
        assert_eq!(stay, IVec2::new(1, 5));
        let stay = try_move(level.ground(), IVec2::new(5, 1), IVec2::new(1000, 0));
        assert_eq!(stay, IVec2::new(5, 1));
    }

    #[test]
    fn test_move_into_wall_rejected() {
        let level = open_level();
        let stay = try_move(level.ground(), IVec2::new(1, 5), IVec2::new(-1, 0));
        assert_eq!(stay, IVec2::new(1, 5));
    }

    #[test]
    fn test_negative_candidates_rejected() {
        let level = open_level();
        assert_eq!(
            try_move(level.ground(), IVec2::new(0, 0), IVec2::new(-1, 0)),
            IVec2::ZERO
        );
        assert_eq!(
            try_move(level.ground(), IVec2::new(0, 0), IVec2::new(0, -1)),
            IVec2::ZERO
        );
    }

    #[test]
    fn test_overflowing_delta_rejected() {
        let level = open_level();
        let start = IVec2::new(2, 2);
        assert_eq!(
            try_move(level.ground(), start, IVec2::new(i32::MAX, 0)),
            start
        );
    }

    #[test]
    fn test_three_steps_up() {
        let level = demo_level();
        let up = IVec2::new(1, 0);
        let mut cell = IVec2::new(1, 1);
        for expected in [IVec2::new(2, 1), IVec2::new(3, 1), IVec2::new(4, 1)] {
            cell = try_move(level.ground(), cell, up);
            assert_eq!(cell, expected);
        }
        // Row 5 is the far wall
        assert_eq!(try_move(level.ground(), cell, up), IVec2::new(4, 1));
    }

    #[test]
    fn test_empty_ground_cell_is_walkable() {
        let level = Level::from_ids(&[vec![vec![1, 0]]]).unwrap();
        assert_eq!(
            try_move(level.ground(), IVec2::ZERO, IVec2::new(0, 1)),
            IVec2::new(0, 1)
        );
    }

    #[test]
    fn test_drift_accumulates_unclamped() {
        let level = demo_level();
        let mut actor = ActorState::spawn(&level, IVec2::new(1, 1)).unwrap();

        for _ in 0..100 {
            actor.drift(Vec2::new(120.0, -60.0), 0.5);
        }
        assert_eq!(actor.cell, IVec2::new(1, 1));
        assert_eq!(actor.displacement, Vec2::new(6000.0, -3000.0));

        actor.snap();
        assert_eq!(actor.displacement, Vec2::ZERO);
    }

    #[test]
    fn test_pressed_step_mapping() {
        let mut keys = ButtonInput::<KeyCode>::default();
        assert_eq!(pressed_step(&keys), None);

        keys.press(KeyCode::ArrowLeft);
        assert_eq!(pressed_step(&keys), Some(IVec2::new(0, 1)));

        // Up wins over anything else pressed in the same frame
        keys.press(KeyCode::ArrowUp);
        assert_eq!(pressed_step(&keys), Some(IVec2::new(1, 0)));

        keys.clear();
        keys.press(KeyCode::ArrowRight);
        assert_eq!(pressed_step(&keys), Some(IVec2::new(0, -1)));
    }

    #[test]
    fn test_held_direction_sums() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::ArrowLeft);
        assert_eq!(held_direction(&keys), Vec2::new(1.0, 1.0));

        keys.press(KeyCode::ArrowDown);
        assert_eq!(held_direction(&keys), Vec2::new(0.0, 1.0));
    }
}
