mod content;
mod image;
mod tags;

pub use self::content::{Attribute, AttributeContent, ContentObject};
pub use self::image::{Image, ImageVariant};
pub use self::tags::{TagSet, TagValue};
