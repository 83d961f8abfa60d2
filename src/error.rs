use thiserror::Error;

/// Failures while decoding or checking an embedded content collection.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content collection '{collection}' is malformed: {source}")]
    Malformed {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("content collection '{collection}' repeats slug '{slug}'")]
    DuplicateSlug {
        collection: &'static str,
        slug: String,
    },
}
