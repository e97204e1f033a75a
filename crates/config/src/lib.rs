//! Configuration for Open Graph tag generation.
//!
//! Two things are loaded from the same document:
//!
//! - [`TagMappingConfig`]: global tag settings and the per-content-type rule
//!   tables, loaded fresh for every extraction through a [`ConfigSource`].
//! - [`SiteSettings`]: host details (server URL, fallback image, locale) that
//!   live as long as the process.
//!
//! # Example
//!
//! ```
//! use figment::Figment;
//! use figment::providers::{Format, Toml};
//! use ogmeta_config::{ConfigSource, TagMappingConfig};
//!
//! let figment = Figment::from(Toml::string(r#"
//!     [general]
//!     classes = ["article"]
//!     required_tags = ["og:title", "og:url"]
//!
//!     [types.article.literal_map]
//!     "og:type" = "article"
//!
//!     [[types.article.attribute_map]]
//!     tag = "og:title"
//!     attribute = "title"
//! "#));
//! let config: TagMappingConfig = figment.tag_mapping().unwrap();
//! assert!(config.is_eligible("article"));
//! ```

pub mod error;
mod mapping;
mod site;
mod source;

pub use crate::mapping::{AttributeRule, TagMappingConfig, TypeRules};
pub use crate::site::{DEFAULT_IMAGE, DEFAULT_LOCALE, SiteSettings};
pub use crate::source::{ConfigFile, ConfigSource, DEFAULT_FILE_NAME, ENV_PREFIX};
