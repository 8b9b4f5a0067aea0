//! # Domain Models
//!
//! These structs represent the gallery entities shared by every provider.
//! Provider-specific metadata records live in their plugin crates.

use serde::{Deserialize, Serialize};

/// Identifier and token pulled out of a gallery locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryIdentity {
    pub id: String,
    pub token: String,
}

impl GalleryIdentity {
    pub fn new(id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            token: token.into(),
        }
    }
}

/// How strongly a tag was voted onto a gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagWeight {
    #[default]
    Normal,
    Light,
    Weak,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Categorical prefix (e.g. "artist", "genre")
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub weight: TagWeight,
}

impl Tag {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            weight: TagWeight::Normal,
        }
    }

    pub fn with_weight(mut self, weight: TagWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Tags keyed by `(namespace, name)`, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag. Returns `false` if the key was already present, in
    /// which case only its weight is updated and its position is kept.
    pub fn insert(&mut self, tag: Tag) -> bool {
        match self
            .tags
            .iter_mut()
            .find(|t| t.namespace == tag.namespace && t.name == tag.name)
        {
            Some(existing) => {
                existing.weight = tag.weight;
                false
            }
            None => {
                self.tags.push(tag);
                true
            }
        }
    }

    pub fn contains(&self, namespace: &str, name: &str) -> bool {
        self.tags
            .iter()
            .any(|t| t.namespace == namespace && t.name == name)
    }

    /// All tags whose namespace equals `namespace`, in insertion order.
    pub fn of_namespace<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.namespace == namespace)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<Vec<Tag>> for TagList {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagList> for Vec<Tag> {
    fn from(list: TagList) -> Self {
        list.tags
    }
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut list = TagList::new();
        for tag in iter {
            list.insert(tag);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Publication status of a gallery as shown to the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    /// Record has not been mapped yet
    #[default]
    Unknown,
    Completed,
    Ongoing,
}

/// The flattened, UI-ready projection of gallery metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Provider-relative canonical locator
    pub url: String,
    pub title: String,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub status: PublicationStatus,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Ordered (label, value) pairs for the "more info" view
    pub extra_info: Vec<(String, String)>,
}
