//! The CMS host surface the extractor leans on: absolute URL building, the
//! fallback image, the current locale and media variant lookup.

use crate::models::{ContentObject, Image, ImageVariant};
use ogmeta_config::{DEFAULT_IMAGE, DEFAULT_LOCALE, SiteSettings};
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Derives named renditions of stored images.
pub trait MediaVariants: Send + Sync {
    /// Returns the named variant; an invalid variant when it cannot be
    /// produced.
    fn variant(&self, image: &Image, name: &str) -> ImageVariant;
}

/// Reads variants the media pipeline has already stored on the image.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredVariants;
impl MediaVariants for StoredVariants {
    fn variant(&self, image: &Image, name: &str) -> ImageVariant {
        image.variants.get(name).cloned().unwrap_or_else(ImageVariant::invalid)
    }
}

pub struct Host {
    server_url: String,
    default_image: String,
    locale: String,
    media: Box<dyn MediaVariants>,
}
impl Host {
    /// Host for the given server URL (scheme and authority, no trailing
    /// slash needed) using [`StoredVariants`].
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            default_image: DEFAULT_IMAGE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            media: Box::new(StoredVariants),
        }
    }

    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self::new(settings.server_url.as_str())
            .with_default_image(settings.default_image.as_str())
            .with_locale(settings.locale.as_str())
    }

    pub fn with_default_image(mut self, path: impl Into<String>) -> Self {
        self.default_image = path.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_media(mut self, media: impl MediaVariants + 'static) -> Self {
        self.media = Box::new(media);
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// HTTP locale code, e.g. `en-GB`.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Joins a server-relative path onto the server URL.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.server_url, path.trim_start_matches('/'))
    }

    /// Absolute URL of the fallback image.
    pub fn default_image_url(&self) -> String {
        self.absolute_url(&self.default_image)
    }

    pub fn canonical_url(&self, object: &ContentObject) -> String {
        self.absolute_url(&object.url_alias)
    }

    /// Absolute URL of the `name` variant of `image`, if the pipeline reports
    /// it valid.
    pub fn variant_url(&self, image: &Image, name: &str) -> Option<String> {
        let variant = self.media.variant(image, name);
        variant.is_valid.then(|| self.absolute_url(&variant.full_path))
    }
}
impl Default for Host {
    fn default() -> Self {
        Self::from_settings(&SiteSettings::default())
    }
}
impl Debug for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Host")
            .field("server_url", &self.server_url)
            .field("default_image", &self.default_image)
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
