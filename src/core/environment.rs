//! Environment seam for checks that observe the outside world.
//!
//! Rules never touch the filesystem directly. They ask the `Environment`
//! carried by their context, so tests can swap in a fake per chain without
//! any process-wide state.

use std::path::Path;
use std::sync::{Arc, OnceLock};

/// External predicates available to rules.
///
/// # Example
///
/// ```rust
/// use assurance::core::Environment;
/// use std::path::Path;
///
/// struct Nothing;
///
/// impl Environment for Nothing {
///     fn is_file(&self, _path: &Path) -> bool {
///         false
///     }
///
///     fn is_dir(&self, _path: &Path) -> bool {
///         false
///     }
/// }
///
/// assert!(!Nothing.is_file(Path::new("/etc/hosts")));
/// ```
pub trait Environment: Send + Sync {
    /// Check if `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Environment backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileSystem;

impl Environment for FileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Shared `FileSystem` environment installed by the entry points.
pub fn file_system() -> Arc<dyn Environment> {
    static DEFAULT: OnceLock<Arc<dyn Environment>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(FileSystem) as Arc<dyn Environment>))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_system_sees_the_crate_manifest() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

        assert!(FileSystem.is_file(&manifest));
        assert!(!FileSystem.is_dir(&manifest));
    }

    #[test]
    fn file_system_sees_the_crate_directory() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));

        assert!(FileSystem.is_dir(root));
        assert!(!FileSystem.is_file(root));
    }

    #[test]
    fn default_environment_is_shared() {
        let first = file_system();
        let second = file_system();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
