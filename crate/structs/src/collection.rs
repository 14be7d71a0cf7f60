use serde::{Deserialize, Serialize};

/// Metadata header carried by every Key Protect collection.
///
/// `totalCount` is only returned by the registration listings when the
/// caller asked for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetadata {
    pub collection_type: String,
    pub collection_total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// The `{metadata, resources}` envelope used by the service for request
/// bodies and responses alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collection<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CollectionMetadata>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

impl<T> Collection<T> {
    /// Wrap `resources` in a collection of the given media type, computing
    /// `collectionTotal`.
    pub fn new(collection_type: &str, resources: Vec<T>) -> Self {
        Self {
            metadata: Some(CollectionMetadata {
                collection_type: collection_type.to_owned(),
                collection_total: u64::try_from(resources.len()).unwrap_or(u64::MAX),
                total_count: None,
            }),
            resources,
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.resources.first()
    }

    pub fn into_first(self) -> Option<T> {
        self.resources.into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            metadata: None,
            resources: Vec::new(),
        }
    }
}
