//! Content lookup boundary.

use crate::error::Result;
use crate::models::ContentObject;
use std::borrow::Cow;
use std::sync::Arc;

/// Read-only access to the content tree.
pub trait ContentRepository {
    /// Fetches the object behind a node ID; `Ok(None)` if there is none.
    fn fetch(&self, node_id: u64) -> Result<Option<ContentObject>>;
}
impl<R: ContentRepository + ?Sized> ContentRepository for &R {
    fn fetch(&self, node_id: u64) -> Result<Option<ContentObject>> {
        (**self).fetch(node_id)
    }
}
impl<R: ContentRepository + ?Sized> ContentRepository for Arc<R> {
    fn fetch(&self, node_id: u64) -> Result<Option<ContentObject>> {
        (**self).fetch(node_id)
    }
}

/// What a caller asks tags for: a node ID to look up, or an object it
/// already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRef<'a> {
    NodeId(u64),
    Object(&'a ContentObject),
}
impl From<u64> for ContentRef<'_> {
    fn from(node_id: u64) -> Self {
        Self::NodeId(node_id)
    }
}
impl<'a> From<&'a ContentObject> for ContentRef<'a> {
    fn from(object: &'a ContentObject) -> Self {
        Self::Object(object)
    }
}
impl<'a> ContentRef<'a> {
    /// Resolves the reference, borrowing when the object is already at hand.
    pub fn load(self, repository: &impl ContentRepository) -> Result<Option<Cow<'a, ContentObject>>> {
        Ok(match self {
            Self::NodeId(node_id) => repository.fetch(node_id)?.map(Cow::Owned),
            Self::Object(object) => Some(Cow::Borrowed(object)),
        })
    }
}

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::ContentRepository;
    use crate::error::Result;
    use crate::models::ContentObject;
    use std::collections::HashMap;

    /// In-memory content repository for testing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ogmeta_extract::models::ContentObject;
    /// use ogmeta_extract::{ContentRepository, MemoryRepository};
    ///
    /// let repository = MemoryRepository::with_objects([ContentObject::new(42, "article", "Hello")]);
    /// assert!(repository.fetch(42).unwrap().is_some());
    /// assert!(repository.fetch(43).unwrap().is_none());
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct MemoryRepository {
        objects: HashMap<u64, ContentObject>,
    }
    impl MemoryRepository {
        /// Repository holding `objects`, keyed by their `id`.
        pub fn with_objects(objects: impl IntoIterator<Item = ContentObject>) -> Self {
            Self {
                objects: objects.into_iter().map(|object| (object.id, object)).collect(),
            }
        }
    }
    impl ContentRepository for MemoryRepository {
        fn fetch(&self, node_id: u64) -> Result<Option<ContentObject>> {
            Ok(self.objects.get(&node_id).cloned())
        }
    }
}
#[cfg(any(test, feature = "mock"))]
pub use self::mock::MemoryRepository;
