use indexmap::IndexMap;

/// Value of a single tag: one string, or an ordered list for tags that may
/// repeat (such as several `og:image` entries).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TagValue {
    Single(String),
    Multiple(Vec<String>),
}
impl Default for TagValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}
impl TagValue {
    /// Blank strings and lists without a non-blank entry are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.trim().is_empty(),
            Self::Multiple(values) => values.iter().all(|v| v.trim().is_empty()),
        }
    }

    /// Every value in order; a single value yields once.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }

    fn without_blanks(self) -> Self {
        match self {
            Self::Multiple(values) => Self::Multiple(values.into_iter().filter(|v| !v.trim().is_empty()).collect()),
            single => single,
        }
    }
}
impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}
impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}
impl From<Vec<String>> for TagValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values).without_blanks()
    }
}

/// Accumulated tags, keyed by tag name (`og:title`, `fb:app_id`, ...).
///
/// Keys keep the position of their first insertion; writing an existing key
/// replaces its value in place. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TagSet {
    tags: IndexMap<String, TagValue>,
}
impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    ///
    /// Returns `false`, leaving the set untouched, if the value is empty.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> bool {
        let value = value.into().without_blanks();
        if value.is_empty() {
            return false;
        }
        self.tags.insert(key.into(), value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattens the set into `(property, content)` pairs, one per `<meta>`
    /// element: multi-valued tags repeat their key once per value.
    pub fn meta_tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().flat_map(|(key, value)| value.values().map(move |v| (key.as_str(), v)))
    }
}
impl IntoIterator for TagSet {
    type Item = (String, TagValue);
    type IntoIter = indexmap::map::IntoIter<String, TagValue>;
    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}
impl From<TagSet> for IndexMap<String, TagValue> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TagValue::from(""), true)]
    #[case(TagValue::from("   "), true)]
    #[case(TagValue::from("x"), false)]
    #[case(TagValue::Multiple(vec![]), true)]
    #[case(TagValue::Multiple(vec![" ".to_string()]), true)]
    #[case(TagValue::Multiple(vec!["a".to_string()]), false)]
    fn test_is_empty(#[case] value: TagValue, #[case] expected: bool) {
        assert_eq!(value.is_empty(), expected);
    }

    #[test]
    fn test_refuses_empty_values() {
        let mut tags = TagSet::new();
        assert!(!tags.insert("og:title", ""));
        assert!(!tags.insert("og:title", "  "));
        assert!(!tags.insert("og:image", Vec::<String>::new()));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut tags = TagSet::new();
        tags.insert("og:site_name", "Site");
        tags.insert("og:url", "https://example.com/a");
        tags.insert("og:site_name", "Other");
        assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["og:site_name", "og:url"]);
        assert_eq!(tags.get("og:site_name"), Some(&TagValue::from("Other")));
    }

    #[test]
    fn test_multiple_drops_blank_entries() {
        let mut tags = TagSet::new();
        tags.insert("og:image", TagValue::Multiple(vec!["a.jpg".into(), "".into(), "b.jpg".into()]));
        assert_eq!(tags.get("og:image"), Some(&TagValue::Multiple(vec!["a.jpg".into(), "b.jpg".into()])));
    }

    #[test]
    fn test_meta_tags_flatten_in_order() {
        let mut tags = TagSet::new();
        tags.insert("og:title", "Title");
        tags.insert("og:image", vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        tags.insert("og:type", "article");
        assert_eq!(
            tags.meta_tags().collect::<Vec<_>>(),
            vec![
                ("og:title", "Title"),
                ("og:image", "a.jpg"),
                ("og:image", "b.jpg"),
                ("og:type", "article"),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let mut tags = TagSet::new();
        tags.insert("og:title", "Title");
        tags.insert("og:image", vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"og:title":"Title","og:image":["a.jpg","b.jpg"]}"#);
    }
}
