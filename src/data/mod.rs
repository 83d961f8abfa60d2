//! In-memory content collections and the queries the pages run against them.
//!
//! Collections are decoded once from embedded JSON and never mutated after
//! that, so every query hands out plain borrows into the store.

pub mod blog;
pub mod careers;
pub mod site;

use std::collections::HashSet;

use log::{debug, error, warn};
use serde::de::DeserializeOwned;

use crate::error::ContentError;

/// A record that can live in a [`ContentStore`].
pub trait Content {
    fn slug(&self) -> &str;
    fn category(&self) -> &str;
    fn is_featured(&self) -> bool {
        false
    }
}

/// Outcome of resolving a route parameter against a collection.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore<T> {
    collection: &'static str,
    items: Vec<T>,
}

impl<T: Content + DeserializeOwned> ContentStore<T> {
    pub fn from_json(collection: &'static str, json: &str) -> Result<Self, ContentError> {
        let items = serde_json::from_str::<Vec<T>>(json)
            .map_err(|source| ContentError::Malformed { collection, source })?;
        Ok(Self::new(collection, items))
    }

    /// Decodes a collection, falling back to an empty store if it cannot be read.
    pub fn load(collection: &'static str, json: &str) -> Self {
        match Self::from_json(collection, json) {
            Ok(store) => {
                if let Err(e) = store.validate() {
                    warn!("{}; lookups will return the first match", e);
                }
                debug!("Loaded {} records into '{}'", store.len(), store.collection());
                store
            }
            Err(e) => {
                error!("{}", e);
                Self {
                    collection,
                    items: Vec::new(),
                }
            }
        }
    }
}

impl<T: Content> ContentStore<T> {
    pub fn new(collection: &'static str, items: Vec<T>) -> Self {
        Self { collection, items }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.slug()) {
                return Err(ContentError::DuplicateSlug {
                    collection: self.collection,
                    slug: item.slug().to_string(),
                });
            }
        }
        Ok(())
    }

    /// First record whose slug equals `slug`. An empty slug never matches.
    pub fn find_by_slug(&self, slug: &str) -> Option<&T> {
        if slug.is_empty() {
            return None;
        }
        self.items.iter().find(|item| item.slug() == slug)
    }

    pub fn resolve(&self, slug: &str) -> Lookup<'_, T> {
        match self.find_by_slug(slug) {
            Some(item) => Lookup::Found(item),
            None => Lookup::NotFound,
        }
    }

    /// The first flagged record, or the first record when nothing is flagged.
    pub fn featured(&self) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.is_featured())
            .or_else(|| self.items.first())
    }

    /// The featured record plus everything else in store order.
    pub fn split_featured(&self) -> Option<(&T, Vec<&T>)> {
        let featured = self.featured()?;
        let rest = self
            .items
            .iter()
            .filter(|item| item.slug() != featured.slug())
            .collect();
        Some((featured, rest))
    }

    /// Up to `limit` records other than `slug`, same category first.
    ///
    /// Both partitions keep store order. An unknown slug yields the first
    /// `limit` records.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&T> {
        let candidates = self.items.iter().filter(|item| item.slug() != slug);
        let Some(current) = self.find_by_slug(slug) else {
            return candidates.take(limit).collect();
        };

        let (same, rest): (Vec<&T>, Vec<&T>) =
            candidates.partition(|item| item.category() == current.category());
        same.into_iter().chain(rest).take(limit).collect()
    }

    pub fn in_category(&self, category: &str) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Note {
        slug: String,
        category: String,
        #[serde(default)]
        featured: bool,
    }

    impl Content for Note {
        fn slug(&self) -> &str {
            &self.slug
        }
        fn category(&self) -> &str {
            &self.category
        }
        fn is_featured(&self) -> bool {
            self.featured
        }
    }

    fn note(slug: &str, category: &str) -> Note {
        Note {
            slug: slug.to_string(),
            category: category.to_string(),
            featured: false,
        }
    }

    fn store(notes: Vec<Note>) -> ContentStore<Note> {
        ContentStore::new("notes", notes)
    }

    fn slugs(items: &[&Note]) -> Vec<String> {
        items.iter().map(|n| n.slug.clone()).collect()
    }

    #[test]
    fn empty_slug_is_not_found_even_when_a_record_has_one() {
        let s = store(vec![note("", "a"), note("b", "a")]);
        assert!(s.find_by_slug("").is_none());
        assert_eq!(s.resolve(""), Lookup::NotFound);
    }

    #[test]
    fn duplicate_slugs_resolve_to_first_and_fail_validation() {
        let s = store(vec![note("x", "first"), note("x", "second")]);
        assert_eq!(s.find_by_slug("x").map(|n| n.category.as_str()), Some("first"));
        assert!(matches!(
            s.validate(),
            Err(ContentError::DuplicateSlug { ref slug, .. }) if slug == "x"
        ));
    }

    #[test]
    fn featured_falls_back_to_first_record() {
        let s = store(vec![note("a", "x"), note("b", "y")]);
        let (featured, rest) = s.split_featured().unwrap();
        assert_eq!(featured.slug, "a");
        assert_eq!(slugs(&rest), vec!["b"]);
    }

    #[test]
    fn featured_on_empty_store_is_none() {
        let s: ContentStore<Note> = store(vec![]);
        assert!(s.featured().is_none());
        assert!(s.split_featured().is_none());
    }

    #[test]
    fn related_puts_same_category_first_and_keeps_order() {
        let s = store(vec![
            note("a", "x"),
            note("b", "y"),
            note("c", "x"),
            note("d", "y"),
            note("e", "x"),
        ]);
        assert_eq!(slugs(&s.related("c", 3)), vec!["a", "e", "b"]);
        assert_eq!(slugs(&s.related("b", 10)), vec!["d", "a", "c", "e"]);
    }

    #[test]
    fn related_for_unknown_slug_is_the_head_of_the_store() {
        let s = store(vec![note("a", "x"), note("b", "y"), note("c", "x")]);
        assert_eq!(slugs(&s.related("missing", 2)), vec!["a", "b"]);
        assert_eq!(slugs(&s.related("", 5)), vec!["a", "b", "c"]);
    }

    #[test]
    fn related_never_contains_reference_and_is_bounded() {
        let s = store(vec![note("a", "x"), note("b", "x"), note("c", "y")]);
        for limit in 0..5 {
            for reference in ["a", "b", "c"] {
                let related = s.related(reference, limit);
                assert!(related.iter().all(|n| n.slug != reference));
                assert_eq!(related.len(), limit.min(s.len() - 1));
            }
        }
    }

    #[test]
    fn in_category_preserves_order() {
        let s = store(vec![note("a", "x"), note("b", "y"), note("c", "x")]);
        assert_eq!(slugs(&s.in_category("x")), vec!["a", "c"]);
        assert!(s.in_category("z").is_empty());
    }

    #[test]
    fn malformed_json_is_reported_and_load_yields_empty_store() {
        let err = ContentStore::<Note>::from_json("notes", "{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { collection: "notes", .. }));
        assert!(err.to_string().contains("notes"));

        let loaded = ContentStore::<Note>::load("notes", "[1, 2]");
        assert!(loaded.is_empty());
        assert_eq!(loaded.collection(), "notes");
    }

    #[test]
    fn load_decodes_records_in_order() {
        let json = r#"[
            {"slug": "a", "category": "x"},
            {"slug": "b", "category": "y", "featured": true}
        ]"#;
        let s = ContentStore::<Note>::load("notes", json);
        assert_eq!(s.len(), 2);
        assert_eq!(s.featured().map(|n| n.slug.as_str()), Some("b"));
    }
}
