//! Configuration-driven Open Graph tag extraction.
//!
//! Given a content object and a [`TagMappingConfig`], produce the social
//! metadata tags (`og:title`, `og:image`, `fb:app_id`, ...) to publish for
//! it, or nothing at all if the result would be incomplete.
//!
//! # Example
//!
//! ```
//! use ogmeta_config::{AttributeRule, TagMappingConfig, TypeRules};
//! use ogmeta_extract::models::{Attribute, ContentObject, TagValue};
//! use ogmeta_extract::{Host, generate_tags};
//!
//! let config = TagMappingConfig::default()
//!     .with_site_name("Example")
//!     .with_required_tags(["og:title", "og:url"])
//!     .with_class(
//!         "article",
//!         TypeRules::default()
//!             .with_literal("og:type", "article")
//!             .with_attribute(AttributeRule::new("og:title", "author")),
//!     );
//! let article = ContentObject::new(42, "article", "Hello")
//!     .with_url_alias("news/hello")
//!     .with_attribute(Attribute::relation("author", Some(ContentObject::new(3, "person", "Jo"))));
//!
//! let tags = generate_tags(&article, &config, &Host::new("https://example.com"));
//! assert_eq!(tags.get("og:url"), Some(&TagValue::from("https://example.com/news/hello")));
//! assert_eq!(tags.get("og:title"), Some(&TagValue::from("Jo")));
//! ```

mod consts;
pub mod error;
mod extractor;
mod host;
pub mod models;
mod repository;
pub mod resolve;
mod service;
mod validate;

use crate::models::{ContentObject, TagSet};
use ogmeta_config::TagMappingConfig;
use tracing::instrument;

pub use crate::consts::{FB_ADMINS, FB_APP_ID, OG_SITE_NAME, OG_URL, OPENGRAPH_VARIANT, RELATED_IMAGES};
pub use crate::extractor::{Extractor, Omission};
pub use crate::host::{Host, MediaVariants, StoredVariants};
#[cfg(any(test, feature = "mock"))]
pub use crate::repository::MemoryRepository;
pub use crate::repository::{ContentRef, ContentRepository};
pub use crate::resolve::{AttributeValueResolver, ResolverRegistry};
pub use crate::service::OpenGraph;
pub use crate::validate::{Rejection, is_publishable, validate};

/// Easy, top-level entrypoint: extracts and validates tags for `object` with
/// the default resolvers.
///
/// Returns an empty set when the content type is not configured or the
/// extracted tags fail validation. See [`Extractor`] for the stages.
#[instrument(skip_all, fields(object_id = object.id))]
pub fn generate_tags(object: &ContentObject, config: &TagMappingConfig, host: &Host) -> TagSet {
    Extractor::new(host, &ResolverRegistry::default()).generate(object, config)
}
