//! Assets domain: texture load failures.

/// A texture could not be fetched or decoded.
///
/// This is the only failure the scene models. It fails the texture's group,
/// which fails the whole load barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub path: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.path, self.reason)
    }
}

impl std::error::Error for LoadError {}
