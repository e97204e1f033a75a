use super::AttributeValueResolver;
use crate::consts;
use crate::host::Host;
use crate::models::{Attribute, AttributeContent, Image, TagValue};

/// Resolves an image attribute to the absolute URL of its `opengraph`
/// variant, falling back to the host's default image. Never empty.
#[derive(Debug, Clone, Copy)]
pub struct ImageResolver<'a> {
    image: Option<&'a Image>,
}
impl<'a> ImageResolver<'a> {
    /// `None` unless `attribute` holds image content (possibly empty).
    pub fn new(attribute: &'a Attribute) -> Option<Self> {
        match &attribute.content {
            AttributeContent::Image(image) => Some(Self { image: image.as_ref() }),
            _ => None,
        }
    }
}
impl AttributeValueResolver for ImageResolver<'_> {
    fn value(&self, host: &Host) -> TagValue {
        self.image
            .and_then(|image| host.variant_url(image, consts::OPENGRAPH_VARIANT))
            .unwrap_or_else(|| host.default_image_url())
            .into()
    }
}
