//! Request-level entry points: the `opengraph` and `language_code` queries a
//! template layer calls into.

use crate::error::{ErrorKind, Result};
use crate::extractor::Extractor;
use crate::host::Host;
use crate::models::TagSet;
use crate::repository::{ContentRef, ContentRepository};
use crate::resolve::ResolverRegistry;
use ogmeta_config::ConfigSource;
use tracing::instrument;

/// Ties a content repository, a configuration source and the host together.
///
/// Holds no per-request state: the tag mapping is loaded from the source on
/// every call, so concurrent calls only share read-only collaborators.
#[derive(Debug)]
pub struct OpenGraph<R, C> {
    repository: R,
    config: C,
    host: Host,
    resolvers: ResolverRegistry,
}
impl<R: ContentRepository, C: ConfigSource> OpenGraph<R, C> {
    pub fn new(repository: R, config: C, host: Host) -> Self {
        Self {
            repository,
            config,
            host,
            resolvers: ResolverRegistry::default(),
        }
    }

    /// Replace the resolver registry, e.g. to support extra data types.
    pub fn with_resolvers(mut self, resolvers: ResolverRegistry) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Generates the validated tag set for a node ID or content object.
    ///
    /// An empty set means "nothing to publish": the node does not exist, its
    /// content type is not configured, or the tags failed validation.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Configuration`] if the tag mapping cannot be loaded.
    /// - [`ErrorKind::Lookup`] if the repository fails.
    #[instrument(skip_all)]
    pub fn generate_tags<'a>(&self, content: impl Into<ContentRef<'a>>) -> Result<TagSet> {
        let config = self.config.tag_mapping().map_err(ErrorKind::configuration)?;
        let Some(object) = content.into().load(&self.repository)? else {
            tracing::debug!("Content not found; no Open Graph tags");
            return Ok(TagSet::new());
        };
        Ok(Extractor::new(&self.host, &self.resolvers).generate(&object, &config))
    }

    /// HTTP locale code of the current site, e.g. `en-GB`.
    pub fn language_code(&self) -> &str {
        self.host.locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, ContentObject, Image, ImageVariant, TagValue};
    use crate::repository::MemoryRepository;
    use ogmeta_config::{AttributeRule, ConfigFile, TagMappingConfig, TypeRules};
    use ogmeta_config::error::ErrorKind as ConfigErrorKind;
    use std::path::PathBuf;

    const SERVER: &str = "https://example.com";
    const DEFAULT_IMAGE: &str = "https://example.com/design/standard/images/opengraph_default_image.png";

    fn opengraph(image: Option<&str>) -> Image {
        match image {
            Some(path) => Image::default().with_variant("opengraph", ImageVariant::valid(path)),
            None => Image::default(),
        }
    }

    fn repository() -> MemoryRepository {
        let gallery = ContentObject::new(20, "gallery", "Holiday")
            .with_attribute(Attribute::image("first", Some(opengraph(Some("var/first.jpg")))))
            .with_attribute(Attribute::image("second", Some(opengraph(Some("var/second.jpg")))))
            .with_attribute(Attribute::image("third", None));
        MemoryRepository::with_objects([
            ContentObject::new(42, "article", "Hello World")
                .with_url_alias("news/hello-world")
                .with_attribute(Attribute::relation("author", Some(ContentObject::new(3, "person", "Jo"))))
                .with_attribute(Attribute::image("image", None))
                .with_attribute(Attribute::relation("gallery", Some(gallery))),
            ContentObject::new(7, "folder", "Media").with_url_alias("media"),
        ])
    }

    fn service(config: TagMappingConfig) -> OpenGraph<MemoryRepository, TagMappingConfig> {
        OpenGraph::new(repository(), config, Host::new(SERVER).with_locale("nb-NO"))
    }

    fn article_rules() -> TypeRules {
        TypeRules::default()
            .with_literal("og:type", "article")
            .with_literal("og:title", "Untitled")
            .with_attribute(AttributeRule::new("og:title", "author"))
            .with_attribute(AttributeRule::new("og:image", "image"))
            .with_attribute(AttributeRule::new("og:see_also", "gallery").with_member("related_images"))
    }

    #[test]
    fn test_ineligible_type_is_empty() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        assert!(service(config).generate_tags(7u64).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node_is_empty() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        assert!(service(config).generate_tags(9000u64).unwrap().is_empty());
    }

    #[test]
    fn test_url_always_present() {
        let mut config = TagMappingConfig::default().with_required_tags(["og:url"]);
        config.classes.insert("folder".to_string());
        let tags = service(config).generate_tags(7u64).unwrap();
        assert_eq!(tags.get("og:url"), Some(&TagValue::from("https://example.com/media")));
    }

    #[test]
    fn test_idempotent() {
        let config = TagMappingConfig::default()
            .with_site_name("Example")
            .with_required_tags(["og:url", "og:title"])
            .with_class("article", article_rules());
        let service = service(config);
        let first: Vec<_> = service.generate_tags(42u64).unwrap().into_iter().collect();
        let second: Vec<_> = service.generate_tags(42u64).unwrap().into_iter().collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_attribute_value_beats_literal() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        let tags = service(config).generate_tags(42u64).unwrap();
        assert_eq!(tags.get("og:title"), Some(&TagValue::from("Jo")));
        assert_eq!(tags.get("og:type"), Some(&TagValue::from("article")));
    }

    #[test]
    fn test_empty_image_uses_default() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        let tags = service(config).generate_tags(42u64).unwrap();
        assert_eq!(tags.get("og:image"), Some(&TagValue::from(DEFAULT_IMAGE)));
    }

    #[test]
    fn test_related_images() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        let tags = service(config).generate_tags(42u64).unwrap();
        assert_eq!(
            tags.get("og:see_also"),
            Some(&TagValue::Multiple(vec![
                "https://example.com/var/first.jpg".to_string(),
                "https://example.com/var/second.jpg".to_string(),
            ]))
        );
    }

    #[test]
    fn test_facebook_gate_requires_site_name() {
        let config = TagMappingConfig::default()
            .with_site_name("")
            .with_class("article", article_rules())
            .with_facebook(Some("123"), None, Vec::<String>::new());
        assert!(service(config).generate_tags(42u64).unwrap().is_empty());
    }

    #[test]
    fn test_facebook_admins_joined() {
        let config = TagMappingConfig::default()
            .with_site_name("Example")
            .with_class("article", article_rules())
            .with_facebook(None, Some("A"), ["B", "C"]);
        let tags = service(config).generate_tags(42u64).unwrap();
        assert_eq!(tags.get("fb:admins"), Some(&TagValue::from("A,B,C")));
        assert!(!tags.contains_key("fb:app_id"));
    }

    #[test]
    fn test_admins_without_default_admin_are_rejected() {
        let config = TagMappingConfig::default()
            .with_site_name("Example")
            .with_class("article", article_rules())
            .with_facebook(None, None, ["B", "C"]);
        assert!(service(config).generate_tags(42u64).unwrap().is_empty());
    }

    struct FailingRepository;
    impl ContentRepository for FailingRepository {
        fn fetch(&self, node_id: u64) -> Result<Option<ContentObject>> {
            exn::bail!(ErrorKind::Lookup(format!("store unavailable for node {node_id}")))
        }
    }

    #[test]
    fn test_lookup_failure_is_an_error() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        let service = OpenGraph::new(FailingRepository, config, Host::new(SERVER));
        let err = service.generate_tags(1u64).unwrap_err();
        assert!(matches!(*err, ErrorKind::Lookup(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_borrowed_object() {
        let config = TagMappingConfig::default().with_class("article", article_rules());
        let object = ContentObject::new(100, "article", "Not stored").with_url_alias("drafts/not-stored");
        let tags = service(config).generate_tags(&object).unwrap();
        assert_eq!(tags.get("og:url"), Some(&TagValue::from("https://example.com/drafts/not-stored")));
    }

    #[test]
    fn test_configuration_error_aborts() {
        let missing = PathBuf::from("/nonexistent/opengraph.toml");
        let service = OpenGraph::new(repository(), ConfigFile::new(&missing).without_env(), Host::new(SERVER));
        let err = service.generate_tags(42u64).unwrap_err();
        assert_eq!(*err, ErrorKind::Configuration(ConfigErrorKind::NotFound(missing)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_language_code() {
        let service = service(TagMappingConfig::default());
        assert_eq!(service.language_code(), "nb-NO");
    }
}
