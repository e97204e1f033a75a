use std::collections::BTreeMap;

/// A stored image and the variants the media pipeline has already derived
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    /// Variants keyed by name (e.g. `opengraph`).
    pub variants: BTreeMap<String, ImageVariant>,
}
impl Image {
    pub fn with_variant(mut self, name: impl Into<String>, variant: ImageVariant) -> Self {
        self.variants.insert(name.into(), variant);
        self
    }
}

/// A named rendition of an image, e.g. a specific crop or size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariant {
    /// `false` when the pipeline could not produce the rendition.
    pub is_valid: bool,
    /// Path relative to the server root, e.g. `var/storage/images/a_opengraph.jpg`.
    pub full_path: String,
}
impl ImageVariant {
    pub fn valid(full_path: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            full_path: full_path.into(),
        }
    }

    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            full_path: String::new(),
        }
    }
}
