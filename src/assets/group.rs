//! Assets domain: ordered loading of one texture group.
//!
//! A group requests every path up front and fills a slot per path as loads
//! complete. Slots are indexed by input position, so the finished
//! group is ordered like its input no matter which load finished first.

use bevy::prelude::*;

use super::error::LoadError;
use super::manifest::AssetGroupKind;

/// A decoded texture and its pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAsset {
    pub handle: Handle<Image>,
    pub width: u32,
    pub height: u32,
}

/// Result of probing a single in-flight load.
#[derive(Debug)]
pub enum LoadPoll<T> {
    Pending,
    Ready(T),
    Failed(LoadError),
}

/// Aggregate progress of a group or of the whole barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending { loaded: usize, total: usize },
    Ready,
    Failed(LoadError),
}

/// A fully loaded group. Read-only once built.
#[derive(Debug, Clone)]
pub struct AssetGroup<T> {
    kind: AssetGroupKind,
    items: Vec<T>,
}

impl<T> AssetGroup<T> {
    pub fn kind(&self) -> AssetGroupKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// In-flight load of one group.
#[derive(Debug)]
pub struct GroupLoader<T> {
    kind: AssetGroupKind,
    paths: Vec<String>,
    slots: Vec<Option<T>>,
    failure: Option<LoadError>,
}

impl<T> GroupLoader<T> {
    pub fn new(kind: AssetGroupKind, paths: Vec<String>) -> Self {
        let slots = paths.iter().map(|_| None).collect();
        Self {
            kind,
            paths,
            slots,
            failure: None,
        }
    }

    pub fn kind(&self) -> AssetGroupKind {
        self.kind
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Probe every unfinished slot once and report the group's status.
    ///
    /// `probe` receives the slot index and its path. The first failure is
    /// latched: later polls report it without probing again.
    pub fn poll(&mut self, mut probe: impl FnMut(usize, &str) -> LoadPoll<T>) -> LoadStatus {
        if let Some(error) = &self.failure {
            return LoadStatus::Failed(error.clone());
        }

        for (index, (slot, path)) in self.slots.iter_mut().zip(&self.paths).enumerate() {
            if slot.is_some() {
                continue;
            }
            match probe(index, path) {
                LoadPoll::Pending => {}
                LoadPoll::Ready(asset) => *slot = Some(asset),
                LoadPoll::Failed(error) => {
                    self.failure = Some(error.clone());
                    return LoadStatus::Failed(error);
                }
            }
        }

        let loaded = self.loaded();
        if loaded == self.total() {
            LoadStatus::Ready
        } else {
            LoadStatus::Pending {
                loaded,
                total: self.total(),
            }
        }
    }

    /// Move the loaded assets out, in path order.
    ///
    /// Returns `None` unless every slot is filled and nothing failed; there is
    /// no partial result.
    pub fn finish(&mut self) -> Option<AssetGroup<T>> {
        if self.failure.is_some() || self.slots.iter().any(Option::is_none) {
            return None;
        }
        let items = std::mem::take(&mut self.slots).into_iter().flatten().collect();
        Some(AssetGroup {
            kind: self.kind,
            items,
        })
    }
}
