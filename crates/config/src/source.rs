//! Where configuration comes from.
//!
//! [`ConfigSource`] is the seam between extraction and configuration: every
//! extraction asks its source for a fresh [`TagMappingConfig`], so edits to a
//! file on disk are picked up by the next call without any invalidation.

use crate::error::{ErrorKind, Result};
use crate::{SiteSettings, TagMappingConfig};
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

/// Prefix of environment variables that override file values. Sections are
/// separated by a double underscore: `OGMETA_GENERAL__SITE_NAME`.
pub const ENV_PREFIX: &str = "OGMETA_";
pub const DEFAULT_FILE_NAME: &str = "opengraph.toml";

/// Anything that can produce a [`TagMappingConfig`] on demand.
pub trait ConfigSource {
    fn tag_mapping(&self) -> Result<TagMappingConfig>;
}

/// An in-memory mapping is its own source; handy for fixtures.
impl ConfigSource for TagMappingConfig {
    fn tag_mapping(&self) -> Result<TagMappingConfig> {
        Ok(self.clone())
    }
}
impl ConfigSource for Figment {
    fn tag_mapping(&self) -> Result<TagMappingConfig> {
        TagMappingConfig::from_figment(self)
    }
}
impl<S: ConfigSource + ?Sized> ConfigSource for Arc<S> {
    fn tag_mapping(&self) -> Result<TagMappingConfig> {
        (**self).tag_mapping()
    }
}

/// A configuration file on disk, re-read on every load.
///
/// The format is chosen by extension (`toml`, `yaml`/`yml`, `json`).
/// Environment variables prefixed with [`ENV_PREFIX`] are merged on top
/// unless disabled with [`without_env`](Self::without_env).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
    env: bool,
}
impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env: true,
        }
    }

    /// Ignore environment overrides.
    pub fn without_env(mut self) -> Self {
        self.env = false;
        self
    }

    /// Platform configuration directory location, e.g.
    /// `~/.config/ogmeta/opengraph.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ogmeta").map(|dirs| dirs.config_dir().join(DEFAULT_FILE_NAME))
    }

    /// Uses the file at [`default_path`](Self::default_path).
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NotFound`] if no home directory can be determined or the
    /// file does not exist.
    pub fn discover() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            exn::bail!(ErrorKind::NotFound(PathBuf::from(DEFAULT_FILE_NAME)));
        };
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path));
        }
        tracing::debug!(path = %path.display(), "Discovered configuration file");
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the merged [`Figment`] from the file's current contents.
    pub fn figment(&self) -> Result<Figment> {
        if !self.path.is_file() {
            exn::bail!(ErrorKind::NotFound(self.path.clone()));
        }
        let extension = self.path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let figment = match extension.as_deref() {
            Some("toml") => Figment::from(Toml::file(&self.path)),
            Some("yaml" | "yml") => Figment::from(Yaml::file(&self.path)),
            Some("json") => Figment::from(Json::file(&self.path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(self.path.clone())),
        };
        Ok(if self.env {
            figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
        } else {
            figment
        })
    }

    pub fn site(&self) -> Result<SiteSettings> {
        SiteSettings::from_figment(&self.figment()?)
    }
}
impl ConfigSource for ConfigFile {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn tag_mapping(&self) -> Result<TagMappingConfig> {
        TagMappingConfig::from_figment(&self.figment()?)
    }
}
