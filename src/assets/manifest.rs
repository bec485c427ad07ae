//! Assets domain: the fixed texture groups and their paths.

use std::fmt;

/// The three independently loaded texture groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetGroupKind {
    /// Flower images scattered as the star field.
    Stars,
    /// Walking character frames, in playback order.
    Walking,
    /// Backdrop "grow" frames, in playback order.
    Backdrop,
}

impl AssetGroupKind {
    pub const ALL: [AssetGroupKind; 3] = [
        AssetGroupKind::Stars,
        AssetGroupKind::Walking,
        AssetGroupKind::Backdrop,
    ];

    /// Number of textures in the group.
    pub fn frame_count(self) -> usize {
        match self {
            AssetGroupKind::Stars => 4,
            AssetGroupKind::Walking => 7,
            AssetGroupKind::Backdrop => 5,
        }
    }

    fn directory_and_stem(self) -> (&'static str, &'static str) {
        match self {
            AssetGroupKind::Stars => ("flower", "flower"),
            AssetGroupKind::Walking => ("girl_walking", "girl_walking"),
            AssetGroupKind::Backdrop => ("grow", "grow"),
        }
    }

    /// Asset paths for the group, relative to the asset root, in load order.
    pub fn paths(self) -> Vec<String> {
        let (directory, stem) = self.directory_and_stem();
        frame_paths(directory, stem, self.frame_count())
    }
}

impl fmt::Display for AssetGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetGroupKind::Stars => "stars",
            AssetGroupKind::Walking => "walking",
            AssetGroupKind::Backdrop => "backdrop",
        };
        f.write_str(name)
    }
}

/// `{directory}/{stem}_{n}.png` for n in 1..=count (files are 1-indexed).
pub fn frame_paths(directory: &str, stem: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("{}/{}_{}.png", directory, stem, n))
        .collect()
}
