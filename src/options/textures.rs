use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Image files for the textured spheres.
///
/// Relative paths resolve against `base_dir` when it is set, otherwise
/// against the working directory. A missing entry leaves the object with
/// its flat color.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextureOptions {
    /// Directory that relative texture paths are joined onto.
    pub base_dir: Option<PathBuf>,
    /// Star field painted on the inside of the sky sphere.
    pub sky: Option<PathBuf>,
    /// Earth surface.
    pub earth: Option<PathBuf>,
    /// Sun surface.
    pub sun: Option<PathBuf>,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            base_dir: None,
            sky: Some(PathBuf::from("space.jpg")),
            earth: Some(PathBuf::from("earth.jpg")),
            sun: Some(PathBuf::from("sun.png")),
        }
    }
}

impl TextureOptions {
    /// Resolve a configured path against `base_dir`.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved sky texture path, if configured.
    #[must_use]
    pub fn sky_path(&self) -> Option<PathBuf> {
        self.sky.as_deref().map(|p| self.resolve(p))
    }

    /// Resolved earth texture path, if configured.
    #[must_use]
    pub fn earth_path(&self) -> Option<PathBuf> {
        self.earth.as_deref().map(|p| self.resolve(p))
    }

    /// Resolved sun texture path, if configured.
    #[must_use]
    pub fn sun_path(&self) -> Option<PathBuf> {
        self.sun.as_deref().map(|p| self.resolve(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_base_dir() {
        let opts = TextureOptions {
            base_dir: Some(PathBuf::from("/opt/textures")),
            ..TextureOptions::default()
        };
        assert_eq!(
            opts.earth_path(),
            Some(PathBuf::from("/opt/textures/earth.jpg"))
        );
    }

    #[test]
    fn absolute_paths_ignore_base_dir() {
        let opts = TextureOptions {
            base_dir: Some(PathBuf::from("/opt/textures")),
            sun: Some(PathBuf::from("/srv/sun.png")),
            ..TextureOptions::default()
        };
        assert_eq!(opts.sun_path(), Some(PathBuf::from("/srv/sun.png")));
    }

    #[test]
    fn unset_entry_resolves_to_none() {
        let opts = TextureOptions {
            sky: None,
            ..TextureOptions::default()
        };
        assert_eq!(opts.sky_path(), None);
        assert_eq!(opts.earth_path(), Some(PathBuf::from("earth.jpg")));
    }
}
