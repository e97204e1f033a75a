//! Configuration-driven tag extraction.
//!
//! Extraction runs three stages in order, each allowed to overwrite keys
//! written by the previous one:
//!
//! 1. **Generic**: `og:site_name`, `og:url` and, in Facebook-compatible mode,
//!    `fb:app_id` and `fb:admins`.
//! 2. **Literal**: the content type's verbatim tags.
//! 3. **Attribute**: the content type's attribute rules, resolved through the
//!    [`ResolverRegistry`] in declared order.

use crate::consts;
use crate::host::Host;
use crate::models::{ContentObject, TagSet, TagValue};
use crate::resolve::ResolverRegistry;
use crate::validate::validate;
use derive_more::Display;
use ogmeta_config::{AttributeRule, TagMappingConfig, TypeRules};
use tracing::instrument;

/// Why an attribute rule produced no tag. Attributes are optional, so none of
/// these abort extraction; the tag is simply left out.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Omission {
    #[display("attribute not present on object")]
    MissingAttribute,
    #[display("no resolver for data type '{_0}'")]
    Unsupported(String),
    #[display("resolved value is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    host: &'a Host,
    resolvers: &'a ResolverRegistry,
}
impl<'a> Extractor<'a> {
    pub fn new(host: &'a Host, resolvers: &'a ResolverRegistry) -> Self {
        Self { host, resolvers }
    }

    /// Extracts tags for `object` without validating them.
    ///
    /// Returns an empty set when the object's content type is not one of the
    /// configured classes.
    #[instrument(skip_all, fields(object_id = object.id, class = %object.class_identifier))]
    pub fn extract(&self, object: &ContentObject, config: &TagMappingConfig) -> TagSet {
        if !config.is_eligible(&object.class_identifier) {
            tracing::debug!("Content type not configured for Open Graph tags");
            return TagSet::new();
        }
        let mut tags = self.generic(object, config);
        if let Some(rules) = config.rules(&object.class_identifier) {
            self.literal(&mut tags, rules, config.debug);
            self.attributes(&mut tags, object, rules, config.debug);
        }
        tags
    }

    /// Extracts and validates: the full tag set if it passes, otherwise an
    /// empty one. Never a partial set.
    pub fn generate(&self, object: &ContentObject, config: &TagMappingConfig) -> TagSet {
        let tags = self.extract(object, config);
        if tags.is_empty() {
            return tags;
        }
        match validate(&tags, config) {
            Ok(()) => tags,
            Err(rejection) => {
                if config.debug {
                    let present: Vec<&str> = tags.keys().collect();
                    tracing::error!(object_id = object.id, ?present, %rejection, "Open Graph tags rejected");
                } else {
                    tracing::debug!(object_id = object.id, %rejection, "Open Graph tags rejected");
                }
                TagSet::new()
            },
        }
    }

    /// Resolves a single attribute rule against `object`.
    pub fn resolve(&self, object: &ContentObject, rule: &AttributeRule) -> Result<TagValue, Omission> {
        let attribute = object.attribute(&rule.attribute).ok_or(Omission::MissingAttribute)?;
        let resolver = self
            .resolvers
            .resolver(attribute)
            .ok_or_else(|| Omission::Unsupported(attribute.data_type().to_string()))?;
        let value = match rule.member.as_deref() {
            None => resolver.value(self.host),
            Some(member) => resolver.member(member, self.host),
        };
        if value.is_empty() {
            return Err(Omission::Empty);
        }
        Ok(value)
    }

    fn generic(&self, object: &ContentObject, config: &TagMappingConfig) -> TagSet {
        let mut tags = TagSet::new();
        if let Some(site_name) = config.site_name.as_deref() {
            tags.insert(consts::OG_SITE_NAME, site_name.trim());
        }
        tags.insert(consts::OG_URL, self.host.canonical_url(object));
        if config.facebook_compatible {
            if let Some(app_id) = config.app_id.as_deref() {
                tags.insert(consts::FB_APP_ID, app_id.trim());
            }
            tags.insert(consts::FB_ADMINS, facebook_admins(config));
        }
        tags
    }

    fn literal(&self, tags: &mut TagSet, rules: &TypeRules, debug: bool) {
        if debug {
            tracing::debug!(literal_map = ?rules.literal, "Applying literal map");
        }
        for (tag, value) in &rules.literal {
            tags.insert(tag.as_str(), value.as_str());
        }
    }

    fn attributes(&self, tags: &mut TagSet, object: &ContentObject, rules: &TypeRules, debug: bool) {
        if debug {
            tracing::debug!(attribute_map = ?rules.attributes, "Applying attribute map");
        }
        for rule in &rules.attributes {
            match self.resolve(object, rule) {
                Ok(value) => {
                    tags.insert(rule.tag.as_str(), value);
                },
                Err(omission) => {
                    tracing::trace!(tag = %rule.tag, attribute = %rule.attribute, %omission, "Attribute rule skipped");
                },
            }
        }
    }
}

/// Default admin followed by the admin list, blanks skipped, comma-joined.
/// Without a default admin the admin list is not published at all.
fn facebook_admins(config: &TagMappingConfig) -> String {
    let Some(default_admin) = config.default_admin.as_deref().map(str::trim).filter(|a| !a.is_empty()) else {
        return String::new();
    };
    std::iter::once(default_admin)
        .chain(config.admins.iter().map(|admin| admin.trim()))
        .filter(|admin| !admin.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
