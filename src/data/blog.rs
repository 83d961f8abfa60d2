use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{Content, ContentStore};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub content: BlogContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogContent {
    pub intro: String,
    pub sections: Vec<BlogSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogSection {
    pub heading: String,
    pub body: String,
}

impl Content for BlogPost {
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

static BLOG_POSTS: Lazy<ContentStore<BlogPost>> =
    Lazy::new(|| ContentStore::load("blog", include_str!("blog.json")));

pub fn blog_posts() -> &'static ContentStore<BlogPost> {
    &BLOG_POSTS
}

pub fn get_blog_post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    blog_posts().find_by_slug(slug)
}

pub fn get_recommended_blogs(slug: &str, limit: usize) -> Vec<&'static BlogPost> {
    blog_posts().related(slug, limit)
}

/// Featured post for the index hero, plus the remaining posts in order.
pub fn featured_split() -> Option<(&'static BlogPost, Vec<&'static BlogPost>)> {
    blog_posts().split_featured()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lookup;

    #[test]
    fn seeded_ids_are_unique_list_keys() {
        let mut ids: Vec<u32> = blog_posts().all().iter().map(|record| record.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), blog_posts().len());
    }

    const REACT_POST: &str = "react-19-what-developers-need-to-know";

    fn slugs<'a>(posts: &[&'a BlogPost]) -> Vec<&'a str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn seeded_collection_is_valid() {
        assert_eq!(blog_posts().len(), 4);
        assert!(blog_posts().validate().is_ok());
    }

    #[test]
    fn every_seeded_slug_resolves_to_itself() {
        for post in blog_posts().all() {
            let found = get_blog_post_by_slug(&post.slug).unwrap();
            assert_eq!(found.slug, post.slug);
            assert_eq!(found.id, post.id);
        }
    }

    #[test]
    fn unknown_and_empty_slugs_are_not_found() {
        assert!(get_blog_post_by_slug("").is_none());
        assert!(get_blog_post_by_slug("not-a-post").is_none());
        assert_eq!(blog_posts().resolve("Future-Of-AI-Enterprise-Software"), Lookup::NotFound);
    }

    #[test]
    fn repeated_lookup_returns_the_same_record() {
        let first = get_blog_post_by_slug("cloud-cost-optimization-2026").unwrap();
        let second = get_blog_post_by_slug("cloud-cost-optimization-2026").unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(blog_posts().len(), 4);
    }

    #[test]
    fn index_features_flagged_post_and_lists_the_rest_in_order() {
        let (featured, rest) = featured_split().unwrap();
        assert_eq!(featured.slug, "future-of-ai-enterprise-software");
        assert_eq!(
            slugs(&rest),
            vec![
                "scalable-microservices-architecture",
                "cloud-cost-optimization-2026",
                REACT_POST,
            ]
        );
    }

    #[test]
    fn recommendations_without_shared_category_follow_store_order() {
        let recommended = get_recommended_blogs(REACT_POST, 3);
        assert_eq!(
            slugs(&recommended),
            vec![
                "future-of-ai-enterprise-software",
                "scalable-microservices-architecture",
                "cloud-cost-optimization-2026",
            ]
        );
    }

    #[test]
    fn recommendations_exclude_reference_and_respect_limit() {
        for post in blog_posts().all() {
            for limit in 0..=5 {
                let recommended = get_recommended_blogs(&post.slug, limit);
                assert!(recommended.iter().all(|p| p.slug != post.slug));
                assert_eq!(recommended.len(), limit.min(blog_posts().len() - 1));
            }
        }
    }

    #[test]
    fn post_content_is_decoded() {
        let post = get_blog_post_by_slug(REACT_POST).unwrap();
        assert_eq!(post.read_time, "10 min read");
        assert_eq!(post.category, "Frontend");
        assert!(!post.featured);
        assert_eq!(post.content.sections.len(), 2);
        assert_eq!(post.content.sections[1].heading, "Performance is architecture");
    }
}
