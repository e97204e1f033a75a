//! Attribute value resolvers.
//!
//! A resolver wraps exactly one attribute and turns its stored state into tag
//! values. Which resolver handles an attribute is decided by its data type
//! through a [`ResolverRegistry`]; the extractor never inspects attribute
//! types itself.

mod image;
mod relation;

pub use self::image::ImageResolver;
pub use self::relation::ObjectRelationResolver;
use crate::consts;
use crate::host::Host;
use crate::models::{Attribute, TagValue};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Converts one attribute into tag values.
pub trait AttributeValueResolver {
    /// The attribute's primary value.
    fn value(&self, host: &Host) -> TagValue;

    /// A named secondary value. Unknown members resolve to an empty value,
    /// which the extractor drops.
    fn member(&self, _name: &str, _host: &Host) -> TagValue {
        TagValue::default()
    }
}

/// Builds a resolver for an attribute, or `None` if the attribute's content
/// is not what the resolver handles.
pub type ResolverFactory = for<'a> fn(&'a Attribute) -> Option<Box<dyn AttributeValueResolver + 'a>>;

/// Maps attribute data types to resolver factories.
#[derive(Clone)]
pub struct ResolverRegistry {
    factories: HashMap<String, ResolverFactory>,
}
impl ResolverRegistry {
    /// A registry without any resolvers.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers (or replaces) the factory for a data type.
    pub fn register(mut self, data_type: impl Into<String>, factory: ResolverFactory) -> Self {
        self.factories.insert(data_type.into(), factory);
        self
    }

    pub fn supports(&self, data_type: &str) -> bool {
        self.factories.contains_key(data_type)
    }

    /// Resolver for `attribute`, if its data type is registered and its
    /// content matches.
    pub fn resolver<'a>(&self, attribute: &'a Attribute) -> Option<Box<dyn AttributeValueResolver + 'a>> {
        let factory = self.factories.get(attribute.data_type())?;
        factory(attribute)
    }
}
impl Default for ResolverRegistry {
    /// Images and object relations.
    fn default() -> Self {
        Self::empty()
            .register(consts::DATA_TYPE_IMAGE, image_resolver)
            .register(consts::DATA_TYPE_OBJECT_RELATION, relation_resolver)
    }
}

fn image_resolver(attribute: &Attribute) -> Option<Box<dyn AttributeValueResolver + '_>> {
    Some(Box::new(ImageResolver::new(attribute)?))
}

fn relation_resolver(attribute: &Attribute) -> Option<Box<dyn AttributeValueResolver + '_>> {
    Some(Box::new(ObjectRelationResolver::new(attribute)?))
}

impl Debug for ResolverRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut data_types: Vec<_> = self.factories.keys().collect();
        data_types.sort();
        f.debug_struct("ResolverRegistry").field("data_types", &data_types).finish()
    }
}
