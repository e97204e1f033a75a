//! Tag mapping rules: which content types get tags, and where each tag's
//! value comes from.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// Global settings plus the per-type rule tables.
///
/// A fresh value is loaded for every extraction; nothing here is cached
/// between calls. Values loaded through [`from_figment`](Self::from_figment)
/// are trimmed, and blank optional strings are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMappingConfig {
    /// Site name published as `og:site_name`.
    pub site_name: Option<String>,
    /// Tag keys that must be present for a tag set to be published.
    pub required_tags: Vec<String>,
    /// Enables the `fb:*` generic tags and the Facebook completeness check.
    pub facebook_compatible: bool,
    /// Escalates diagnostic logging.
    pub debug: bool,
    /// Facebook application ID (`fb:app_id`).
    pub app_id: Option<String>,
    /// First entry of `fb:admins`.
    pub default_admin: Option<String>,
    /// Remaining entries of `fb:admins`, in order.
    pub admins: Vec<String>,
    /// Content types (class identifiers) tags are generated for at all.
    pub classes: BTreeSet<String>,
    /// Rule tables keyed by content type.
    pub types: BTreeMap<String, TypeRules>,
}

/// Rules for a single content type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRules {
    /// Tags copied verbatim.
    pub literal: BTreeMap<String, String>,
    /// Tags resolved from content attributes, in declared order.
    pub attributes: Vec<AttributeRule>,
}

/// Maps a tag key to a content attribute, optionally through a named member
/// of that attribute's value (e.g. `related_images`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRule {
    pub tag: String,
    pub attribute: String,
    pub member: Option<String>,
}
impl AttributeRule {
    pub fn new(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attribute: attribute.into(),
            member: None,
        }
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }
}

impl TagMappingConfig {
    /// Extracts and validates the tag mapping from an already-merged
    /// [`Figment`].
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Invalid`] if the data does not deserialize (for example
    ///   `required_tags` given as a string instead of a list).
    /// - [`ErrorKind::Malformed`] if a tag key, attribute identifier or member
    ///   name is blank.
    #[instrument(skip_all)]
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let raw: RawTagMapping = figment
            .extract()
            .or_raise(|| ErrorKind::Invalid("tag mapping does not deserialize".to_string()))?;
        Self::from_raw(raw)
    }

    /// Returns `true` if tags should be generated for this content type.
    pub fn is_eligible(&self, class_identifier: &str) -> bool {
        self.classes.contains(class_identifier)
    }

    /// Rule table for a content type, if one is configured.
    pub fn rules(&self, class_identifier: &str) -> Option<&TypeRules> {
        self.types.get(class_identifier)
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn with_class(mut self, class_identifier: impl Into<String>, rules: TypeRules) -> Self {
        let class_identifier = class_identifier.into();
        self.classes.insert(class_identifier.clone());
        self.types.insert(class_identifier, rules);
        self
    }

    pub fn with_required_tags<T: Into<String>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.required_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Turns on Facebook compatibility with the given identity settings.
    pub fn with_facebook<A: Into<String>>(
        mut self,
        app_id: Option<&str>,
        default_admin: Option<&str>,
        admins: impl IntoIterator<Item = A>,
    ) -> Self {
        self.facebook_compatible = true;
        self.app_id = app_id.map(str::to_string);
        self.default_admin = default_admin.map(str::to_string);
        self.admins = admins.into_iter().map(Into::into).collect();
        self
    }
}

impl TypeRules {
    pub fn with_literal(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.literal.insert(tag.into(), value.into());
        self
    }

    pub fn with_attribute(mut self, rule: AttributeRule) -> Self {
        self.attributes.push(rule);
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTagMapping {
    general: RawGeneral,
    generic_data: RawGenericData,
    types: BTreeMap<String, RawTypeRules>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGeneral {
    site_name: Option<String>,
    classes: Vec<String>,
    required_tags: Vec<String>,
    facebook_compatible: bool,
    debug: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawGenericData {
    app_id: Option<String>,
    default_admin: Option<String>,
    admins: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTypeRules {
    literal_map: BTreeMap<String, String>,
    attribute_map: Vec<RawAttributeRule>,
}

#[derive(Debug, Deserialize)]
struct RawAttributeRule {
    tag: String,
    attribute: String,
    #[serde(default)]
    member: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(value: &str, field: impl FnOnce() -> String, reason: &'static str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        exn::bail!(ErrorKind::Malformed { field: field(), reason });
    }
    Ok(value.to_string())
}

impl TagMappingConfig {
    fn from_raw(raw: RawTagMapping) -> Result<Self> {
        let required_tags = raw
            .general
            .required_tags
            .iter()
            .enumerate()
            .map(|(i, tag)| required(tag, || format!("general.required_tags[{i}]"), "blank tag key"))
            .collect::<Result<Vec<_>>>()?;
        let mut types = BTreeMap::new();
        for (class_identifier, rules) in raw.types {
            types.insert(class_identifier.trim().to_string(), TypeRules::from_raw(&class_identifier, rules)?);
        }
        Ok(Self {
            site_name: non_blank(raw.general.site_name),
            required_tags,
            facebook_compatible: raw.general.facebook_compatible,
            debug: raw.general.debug,
            app_id: non_blank(raw.generic_data.app_id),
            default_admin: non_blank(raw.generic_data.default_admin),
            admins: raw.generic_data.admins.into_iter().filter_map(|a| non_blank(Some(a))).collect(),
            classes: raw.general.classes.into_iter().filter_map(|c| non_blank(Some(c))).collect(),
            types,
        })
    }
}

impl TypeRules {
    fn from_raw(class_identifier: &str, raw: RawTypeRules) -> Result<Self> {
        let mut literal = BTreeMap::new();
        for (tag, value) in raw.literal_map {
            let tag = required(&tag, || format!("types.{class_identifier}.literal_map"), "blank tag key")?;
            literal.insert(tag, value.trim().to_string());
        }
        let mut attributes = Vec::with_capacity(raw.attribute_map.len());
        for (i, rule) in raw.attribute_map.into_iter().enumerate() {
            let field = || format!("types.{class_identifier}.attribute_map[{i}]");
            let tag = required(&rule.tag, field, "blank tag key")?;
            let attribute = required(&rule.attribute, field, "blank attribute identifier")?;
            let member = match rule.member {
                Some(member) => Some(required(&member, field, "blank member name")?),
                None => None,
            };
            attributes.push(AttributeRule { tag, attribute, member });
        }
        Ok(Self { literal, attributes })
    }
}
