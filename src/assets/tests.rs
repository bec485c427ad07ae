//! Assets domain: tests for ordered group loading and the fail-fast barrier.

use std::collections::HashSet;

use super::barrier::LoadBarrier;
use super::error::LoadError;
use super::group::{GroupLoader, LoadPoll, LoadStatus};
use super::manifest::AssetGroupKind;

fn loader(paths: &[&str]) -> GroupLoader<String> {
    GroupLoader::new(
        AssetGroupKind::Stars,
        paths.iter().map(|p| p.to_string()).collect(),
    )
}

/// Probe that resolves only the paths in `done`.
fn resolve_only<'a>(done: &'a HashSet<&'a str>) -> impl FnMut(usize, &str) -> LoadPoll<String> + 'a {
    move |_: usize, path: &str| {
        if done.contains(path) {
            LoadPoll::Ready(format!("decoded:{}", path))
        } else {
            LoadPoll::Pending
        }
    }
}

// -----------------------------------------------------------------------------
// GroupLoader tests
// -----------------------------------------------------------------------------

#[test]
fn test_group_preserves_input_order_when_loads_finish_out_of_order() {
    let mut group = loader(&["a.png", "b.png", "c.png"]);

    // b finishes first
    let mut done = HashSet::from(["b.png"]);
    assert_eq!(
        group.poll(resolve_only(&done)),
        LoadStatus::Pending {
            loaded: 1,
            total: 3
        }
    );

    // then c, then a
    done.insert("c.png");
    group.poll(resolve_only(&done));
    done.insert("a.png");
    assert_eq!(group.poll(resolve_only(&done)), LoadStatus::Ready);

    let finished = group.finish().expect("group should be complete");
    assert_eq!(
        finished.as_slice(),
        &[
            "decoded:a.png".to_string(),
            "decoded:b.png".to_string(),
            "decoded:c.png".to_string()
        ]
    );
}

#[test]
fn test_group_does_not_probe_finished_slots_again() {
    let mut group = loader(&["a.png", "b.png"]);
    let mut probes = Vec::new();

    group.poll(|index, _| {
        probes.push(index);
        if index == 0 {
            LoadPoll::Ready("a".to_string())
        } else {
            LoadPoll::Pending
        }
    });
    group.poll(|index, _| {
        probes.push(index);
        LoadPoll::Pending
    });

    assert_eq!(probes, vec![0, 1, 1]);
}

#[test]
fn test_group_fails_fast_without_partial_result() {
    let mut group = loader(&["a.png", "b.png", "c.png"]);

    let status = group.poll(|index, path| match index {
        0 => LoadPoll::Ready("a".to_string()),
        1 => LoadPoll::Failed(LoadError::new(path, "404")),
        _ => LoadPoll::Ready("c".to_string()),
    });

    assert_eq!(status, LoadStatus::Failed(LoadError::new("b.png", "404")));
    assert!(group.finish().is_none());
}

#[test]
fn test_group_failure_is_latched() {
    let mut group = loader(&["a.png"]);
    group.poll(|_, path| LoadPoll::Failed(LoadError::new(path, "decode error")));

    // A later success report cannot revive the group.
    let status = group.poll(|_, _| LoadPoll::Ready("a".to_string()));
    assert!(matches!(status, LoadStatus::Failed(_)));
    assert!(group.finish().is_none());
}

#[test]
fn test_group_not_finished_while_pending() {
    let mut group = loader(&["a.png", "b.png"]);
    group.poll(|index, _| {
        if index == 0 {
            LoadPoll::Ready("a".to_string())
        } else {
            LoadPoll::Pending
        }
    });
    assert!(group.finish().is_none());
}

// -----------------------------------------------------------------------------
// LoadBarrier tests
// -----------------------------------------------------------------------------

#[test]
fn test_barrier_waits_for_every_group() {
    let mut barrier = LoadBarrier::<String>::for_scene();

    let status = barrier.poll(|kind, index, _| {
        if kind == AssetGroupKind::Backdrop {
            LoadPoll::Pending
        } else {
            LoadPoll::Ready(format!("{}-{}", kind, index))
        }
    });
    assert_eq!(
        status,
        LoadStatus::Pending {
            loaded: 11,
            total: 16
        }
    );
    assert!(barrier.finish().is_none());

    let status = barrier.poll(|kind, index, _| LoadPoll::Ready(format!("{}-{}", kind, index)));
    assert_eq!(status, LoadStatus::Ready);

    let loaded = barrier.finish().expect("barrier should be resolved");
    assert_eq!(loaded.stars.len(), 4);
    assert_eq!(loaded.walking.len(), 7);
    assert_eq!(loaded.backdrop.len(), 5);
    assert_eq!(loaded.walking.get(6), Some(&"walking-6".to_string()));
    assert_eq!(loaded.backdrop.kind(), AssetGroupKind::Backdrop);
}

#[test]
fn test_barrier_fails_when_any_single_texture_fails() {
    let mut barrier = LoadBarrier::<String>::for_scene();

    let status = barrier.poll(|kind, index, path| {
        if kind == AssetGroupKind::Walking && index == 3 {
            LoadPoll::Failed(LoadError::new(path, "network error"))
        } else {
            LoadPoll::Ready(path.to_string())
        }
    });

    match status {
        LoadStatus::Failed(error) => {
            assert_eq!(error.path, "girl_walking/girl_walking_4.png");
            assert_eq!(
                error.to_string(),
                "Failed to load girl_walking/girl_walking_4.png: network error"
            );
        }
        other => panic!("expected failure, got {:?}", other),
    }

    // No assets ever come out of a failed barrier, so the scene never assembles.
    assert!(barrier.finish().is_none());
    let status = barrier.poll(|_, _, path| LoadPoll::Ready(path.to_string()));
    assert!(matches!(status, LoadStatus::Failed(_)));
    assert!(barrier.finish().is_none());
}
