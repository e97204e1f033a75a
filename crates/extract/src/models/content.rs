use super::Image;
use crate::consts;

/// A content object as seen by the extractor: its type, display name, URL
/// alias and attributes.
///
/// Built by whatever adapter fronts the content store; extraction only ever
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentObject {
    /// Node ID used for lookups.
    pub id: u64,
    /// Content type, matched against the configured classes.
    pub class_identifier: String,
    /// Display name.
    pub name: String,
    /// Path of the object relative to the server root, e.g. `news/my-article`.
    pub url_alias: String,
    /// Attributes in their declared order.
    pub attributes: Vec<Attribute>,
}
impl ContentObject {
    pub fn new(id: u64, class_identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            class_identifier: class_identifier.into(),
            name: name.into(),
            url_alias: String::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_url_alias(mut self, url_alias: impl Into<String>) -> Self {
        self.url_alias = url_alias.into();
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Looks up an attribute by identifier.
    pub fn attribute(&self, identifier: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.identifier == identifier)
    }
}
impl AsRef<ContentObject> for ContentObject {
    fn as_ref(&self) -> &ContentObject {
        self
    }
}

/// A named, typed value slot on a [`ContentObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub identifier: String,
    pub content: AttributeContent,
}

/// Stored value of an attribute. `None` inside a variant means the attribute
/// exists but has no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeContent {
    /// Media reference (`ezimage`).
    Image(Option<Image>),
    /// Reference to another object (`ezobjectrelation`).
    ObjectRelation(Option<Box<ContentObject>>),
    /// Any other data type, kept so that relation members can walk every
    /// attribute of an object.
    Other { data_type: String, value: Option<String> },
}

impl Attribute {
    pub fn image(identifier: impl Into<String>, image: Option<Image>) -> Self {
        Self {
            identifier: identifier.into(),
            content: AttributeContent::Image(image),
        }
    }

    pub fn relation(identifier: impl Into<String>, object: Option<ContentObject>) -> Self {
        Self {
            identifier: identifier.into(),
            content: AttributeContent::ObjectRelation(object.map(Box::new)),
        }
    }

    pub fn other(identifier: impl Into<String>, data_type: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            identifier: identifier.into(),
            content: AttributeContent::Other {
                data_type: data_type.into(),
                value: value.map(str::to_string),
            },
        }
    }

    /// Data type string used to pick a resolver.
    pub fn data_type(&self) -> &str {
        match &self.content {
            AttributeContent::Image(_) => consts::DATA_TYPE_IMAGE,
            AttributeContent::ObjectRelation(_) => consts::DATA_TYPE_OBJECT_RELATION,
            AttributeContent::Other { data_type, .. } => data_type,
        }
    }

    pub fn has_content(&self) -> bool {
        match &self.content {
            AttributeContent::Image(image) => image.is_some(),
            AttributeContent::ObjectRelation(object) => object.is_some(),
            AttributeContent::Other { value, .. } => value.as_deref().is_some_and(|v| !v.is_empty()),
        }
    }
}
