mod animation;
mod assets;
mod core;
mod scene;

use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Walking Scene".to_string(),
                fit_canvas_to_parent: true,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            core::CorePlugin,
            assets::AssetsPlugin,
            scene::ScenePlugin,
            animation::AnimationPlugin,
        ))
        .run();
}
