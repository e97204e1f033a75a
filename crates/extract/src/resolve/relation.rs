use super::AttributeValueResolver;
use crate::consts;
use crate::host::Host;
use crate::models::{Attribute, AttributeContent, ContentObject, TagValue};

/// Resolves an object relation attribute.
///
/// - The primary value is the related object's trimmed name (empty when
///   nothing is related).
/// - The `related_images` member lists the `opengraph` variant URL of every
///   populated image attribute on the related object, in attribute order,
///   falling back to the host's default image when there are none.
#[derive(Debug, Clone, Copy)]
pub struct ObjectRelationResolver<'a> {
    object: Option<&'a ContentObject>,
}
impl<'a> ObjectRelationResolver<'a> {
    /// `None` unless `attribute` holds relation content (possibly empty).
    pub fn new(attribute: &'a Attribute) -> Option<Self> {
        match &attribute.content {
            AttributeContent::ObjectRelation(object) => Some(Self {
                object: object.as_deref(),
            }),
            _ => None,
        }
    }

    fn related_images(&self, host: &Host) -> Vec<String> {
        let mut images: Vec<String> = self
            .object
            .into_iter()
            .flat_map(|object| object.attributes.iter())
            .filter_map(|attribute| match &attribute.content {
                AttributeContent::Image(Some(image)) => host.variant_url(image, consts::OPENGRAPH_VARIANT),
                _ => None,
            })
            .collect();
        if images.is_empty() {
            images.push(host.default_image_url());
        }
        images
    }
}
impl AttributeValueResolver for ObjectRelationResolver<'_> {
    fn value(&self, _: &Host) -> TagValue {
        self.object.map(|object| object.name.trim().to_string()).unwrap_or_default().into()
    }

    fn member(&self, name: &str, host: &Host) -> TagValue {
        match name {
            consts::RELATED_IMAGES => self.related_images(host).into(),
            _ => TagValue::default(),
        }
    }
}
