//! Assets domain: join over the three texture groups.

use bevy::prelude::*;

use super::group::{AssetGroup, GroupLoader, LoadPoll, LoadStatus};
use super::manifest::AssetGroupKind;

/// Every group, loaded. Only exists once the barrier resolved.
#[derive(Resource, Debug, Clone)]
pub struct LoadedAssets<T: Send + Sync + 'static> {
    pub stars: AssetGroup<T>,
    pub walking: AssetGroup<T>,
    pub backdrop: AssetGroup<T>,
}

/// Fan-in barrier over the star, walking and backdrop groups.
///
/// Resolves when all three groups are ready and fails as soon as any one
/// of them fails.
#[derive(Debug)]
pub struct LoadBarrier<T> {
    stars: GroupLoader<T>,
    walking: GroupLoader<T>,
    backdrop: GroupLoader<T>,
}

impl<T: Send + Sync + 'static> LoadBarrier<T> {
    pub fn new(stars: GroupLoader<T>, walking: GroupLoader<T>, backdrop: GroupLoader<T>) -> Self {
        Self {
            stars,
            walking,
            backdrop,
        }
    }

    /// A barrier over the fixed scene groups, with paths from the manifest.
    pub fn for_scene() -> Self {
        Self::new(
            GroupLoader::new(AssetGroupKind::Stars, AssetGroupKind::Stars.paths()),
            GroupLoader::new(AssetGroupKind::Walking, AssetGroupKind::Walking.paths()),
            GroupLoader::new(AssetGroupKind::Backdrop, AssetGroupKind::Backdrop.paths()),
        )
    }

    pub fn groups(&self) -> [&GroupLoader<T>; 3] {
        [&self.stars, &self.walking, &self.backdrop]
    }

    /// Poll every group. `probe` gets the group kind, slot index and path.
    pub fn poll(
        &mut self,
        mut probe: impl FnMut(AssetGroupKind, usize, &str) -> LoadPoll<T>,
    ) -> LoadStatus {
        let mut loaded = 0;
        let mut total = 0;
        let mut all_ready = true;

        for group in [&mut self.stars, &mut self.walking, &mut self.backdrop] {
            let kind = group.kind();
            match group.poll(|index, path| probe(kind, index, path)) {
                LoadStatus::Failed(error) => return LoadStatus::Failed(error),
                LoadStatus::Ready => {}
                LoadStatus::Pending { .. } => all_ready = false,
            }
            loaded += group.loaded();
            total += group.total();
        }

        if all_ready {
            LoadStatus::Ready
        } else {
            LoadStatus::Pending { loaded, total }
        }
    }

    /// Move the loaded groups out. `None` until every group is ready.
    pub fn finish(&mut self) -> Option<LoadedAssets<T>> {
        if self.groups().iter().any(|group| group.loaded() < group.total()) {
            return None;
        }
        Some(LoadedAssets {
            stars: self.stars.finish()?,
            walking: self.walking.finish()?,
            backdrop: self.backdrop.finish()?,
        })
    }
}
