use bevy::prelude::*;

use crate::actor::{ActorState, move_actor};
use crate::config::IsoConfig;
use crate::rendering::depth_order::{DrawCommand, SpriteKind, fill_draw_list};
use crate::world::Level;

/// Depth range shared by one draw pass.
/// Bevy sorts 2D sprites by z, so a rising z reproduces the draw list order.
/// Stays inside the default `Camera2d` far plane of 1000.
const DRAW_DEPTH_RANGE: f32 = 900.0;

/// Z value for the `draw_index`-th of `draw_count` commands.
/// Strictly increasing as long as f32 can tell the fractions apart
/// (several million commands per pass).
pub fn draw_depth(draw_index: usize, draw_count: usize) -> f32 {
    if draw_count == 0 {
        return 0.0;
    }
    draw_index as f32 / draw_count as f32 * DRAW_DEPTH_RANGE
}

/// Convert a region measured from the image's bottom edge into Bevy's
/// top-left image coordinates.
pub fn flip_region(region: Rect, image_height: f32) -> Rect {
    Rect::new(
        region.min.x,
        image_height - region.max.y,
        region.max.x,
        image_height - region.min.y,
    )
}

/// Sprite templates for each draw command kind
#[derive(Resource, Clone)]
pub struct TileSprites {
    pub floor: Sprite,
    pub wall: Sprite,
    pub actor: Sprite,
}

impl TileSprites {
    /// Cut the configured regions out of the loaded images
    pub fn cut(
        config: &IsoConfig,
        tile_sheet: &Handle<Image>,
        tile_sheet_height: f32,
        actor_image: &Handle<Image>,
        actor_image_height: f32,
    ) -> Self {
        let region = |image: &Handle<Image>, rect: Rect, height: f32| Sprite {
            image: image.clone(),
            rect: Some(flip_region(rect, height)),
            ..default()
        };

        Self {
            floor: region(tile_sheet, config.floor_region, tile_sheet_height),
            wall: region(tile_sheet, config.wall_region, tile_sheet_height),
            actor: region(actor_image, config.actor_region, actor_image_height),
        }
    }

    pub fn for_kind(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::FloorTile => &self.floor,
            SpriteKind::WallTile => &self.wall,
            SpriteKind::Actor => &self.actor,
        }
    }
}

/// Images requested at startup, waiting to be cut into sprites
#[derive(Resource)]
struct PendingImages {
    tile_sheet: Handle<Image>,
    actor_image: Handle<Image>,
}

/// Draw list reused across frames
#[derive(Resource, Default)]
pub struct DrawList(pub Vec<DrawCommand>);

/// Marker component for sprites spawned by the last draw pass
#[derive(Component)]
pub struct PaintedSprite {
    pub draw_index: usize,
}

/// Plugin that paints the map and the actor in depth order
pub struct TileRendererPlugin;

impl Plugin for TileRendererPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawList>()
            .add_systems(Startup, setup_tile_sprites)
            .add_systems(
                Update,
                (cut_tile_sprites, paint_map).chain().after(move_actor),
            );
    }
}

/// Spawn the camera and start loading the sprite images
fn setup_tile_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<IsoConfig>,
) {
    commands.spawn(Camera2d);

    commands.insert_resource(PendingImages {
        tile_sheet: asset_server.load(config.tile_sheet.clone()),
        actor_image: asset_server.load(config.actor_image.clone()),
    });
}

/// Build the sprite templates once both images are loaded.
/// Region flipping needs each image's height, which is only known then.
fn cut_tile_sprites(
    mut commands: Commands,
    config: Res<IsoConfig>,
    images: Res<Assets<Image>>,
    pending: Option<Res<PendingImages>>,
) {
    let Some(pending) = pending else {
        return;
    };
    let (Some(sheet), Some(actor)) = (
        images.get(&pending.tile_sheet),
        images.get(&pending.actor_image),
    ) else {
        return;
    };

    commands.insert_resource(TileSprites::cut(
        &config,
        &pending.tile_sheet,
        sheet.height() as f32,
        &pending.actor_image,
        actor.height() as f32,
    ));
    commands.remove_resource::<PendingImages>();

    info!(
        "Tile sprites cut from {} and {}",
        config.tile_sheet, config.actor_image
    );
}

/// Rebuild the draw list and replace last pass's sprites with it
fn paint_map(
    mut commands: Commands,
    level: Res<Level>,
    actor: Res<ActorState>,
    config: Res<IsoConfig>,
    sprites: Option<Res<TileSprites>>,
    mut draw_list: ResMut<DrawList>,
    painted: Query<Entity, With<PaintedSprite>>,
) {
    let Some(sprites) = sprites else {
        return;
    };

    // Only repaint when something visible changed
    let dirty =
        level.is_changed() || actor.is_changed() || config.is_changed() || sprites.is_added();
    if !dirty {
        return;
    }

    // Clear the previous pass
    for entity in painted.iter() {
        commands.entity(entity).despawn();
    }

    fill_draw_list(
        &mut draw_list.0,
        level.floors(),
        &actor,
        &config.projection(),
        config.screen_offset,
    );

    let draw_count = draw_list.0.len();
    for (draw_index, command) in draw_list.0.iter().enumerate() {
        commands.spawn((
            sprites.for_kind(command.sprite).clone(),
            Transform::from_translation(
                command.position.extend(draw_depth(draw_index, draw_count)),
            ),
            PaintedSprite { draw_index },
        ));
    }

    debug!("Painted {} sprites", draw_count);
}
