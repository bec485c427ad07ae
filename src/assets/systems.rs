//! Assets domain: requesting textures from the asset server and polling them.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::SceneState;

use super::barrier::LoadBarrier;
use super::error::LoadError;
use super::group::{LoadPoll, LoadStatus, TextureAsset};
use super::manifest::AssetGroupKind;

/// The in-flight texture loads. Removed once the barrier resolves or fails.
#[derive(Resource)]
pub struct PendingTextures {
    barrier: LoadBarrier<TextureAsset>,
    handles: HashMap<AssetGroupKind, Vec<Handle<Image>>>,
    last_reported: usize,
}

/// Kick off every texture load. All groups load concurrently.
pub(crate) fn request_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    let barrier = LoadBarrier::for_scene();
    let handles = barrier
        .groups()
        .iter()
        .map(|group| {
            let handles = group
                .paths()
                .iter()
                .map(|path| asset_server.load::<Image>(path.clone()))
                .collect::<Vec<_>>();
            (group.kind(), handles)
        })
        .collect();

    info!(
        "Requested textures: {}",
        AssetGroupKind::ALL
            .iter()
            .map(|kind| format!("{} x{}", kind, kind.frame_count()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    commands.insert_resource(PendingTextures {
        barrier,
        handles,
        last_reported: 0,
    });
}

/// Poll the barrier once per frame while loading.
pub(crate) fn poll_textures(
    mut commands: Commands,
    pending: Option<ResMut<PendingTextures>>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut next_state: ResMut<NextState<SceneState>>,
) {
    let Some(mut pending) = pending else {
        return;
    };
    let pending = &mut *pending;

    let handles = &pending.handles;
    let status = pending.barrier.poll(|kind, index, path| {
        match handles.get(&kind).and_then(|group| group.get(index)) {
            Some(handle) => probe_texture(&asset_server, &images, handle, path),
            None => LoadPoll::Failed(LoadError::new(path, "texture was never requested")),
        }
    });

    match status {
        LoadStatus::Pending { loaded, total } => {
            if loaded != pending.last_reported {
                pending.last_reported = loaded;
                debug!("Loaded {}/{} textures", loaded, total);
            }
        }
        LoadStatus::Ready => {
            let Some(loaded) = pending.barrier.finish() else {
                return;
            };
            for group in [&loaded.stars, &loaded.walking, &loaded.backdrop] {
                debug!("{} group ready: {} textures", group.kind(), group.len());
            }
            info!(
                "All textures loaded: {} stars, {} walking frames, {} backdrop frames",
                loaded.stars.len(),
                loaded.walking.len(),
                loaded.backdrop.len()
            );
            commands.insert_resource(loaded);
            commands.remove_resource::<PendingTextures>();
            next_state.set(SceneState::Running);
        }
        LoadStatus::Failed(error) => {
            error!("Error loading textures: {}", error);
            commands.remove_resource::<PendingTextures>();
            next_state.set(SceneState::Failed);
        }
    }
}

/// Translate the asset server's view of one handle into a `LoadPoll`.
fn probe_texture(
    asset_server: &AssetServer,
    images: &Assets<Image>,
    handle: &Handle<Image>,
    path: &str,
) -> LoadPoll<TextureAsset> {
    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => match images.get(handle) {
            Some(image) => LoadPoll::Ready(TextureAsset {
                handle: handle.clone(),
                width: image.width(),
                height: image.height(),
            }),
            None => LoadPoll::Pending,
        },
        Some(LoadState::Failed(error)) => LoadPoll::Failed(LoadError::new(path, error.to_string())),
        _ => LoadPoll::Pending,
    }
}
