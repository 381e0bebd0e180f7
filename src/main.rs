use bevy::{prelude::*, window::PresentMode};

use isometric_painter::actor::{ActorPlugin, ActorState};
use isometric_painter::config::IsoConfig;
use isometric_painter::error::LevelError;
use isometric_painter::rendering::TileRendererPlugin;
use isometric_painter::world::{Level, demo_level_ids};

fn main() -> Result<(), LevelError> {
    let config = IsoConfig::default();

    // Bad map data aborts here, before any window opens
    config.validate()?;
    let level = Level::from_ids(&demo_level_ids())?;
    let actor = ActorState::spawn(&level, config.actor_start)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window_title.clone(),
                resolution: (config.window_size.x, config.window_size.y).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config.movement_mode)
        .insert_resource(config)
        .insert_resource(level)
        .insert_resource(actor)
        .add_plugins((ActorPlugin, TileRendererPlugin))
        .run();

    Ok(())
}
