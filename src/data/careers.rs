use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{Content, ContentStore};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub experience: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
}

impl Content for Position {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn category(&self) -> &str {
        &self.department
    }
}

pub const BENEFITS: [&str; 8] = [
    "Competitive salary & equity",
    "Remote-first culture",
    "Unlimited PTO",
    "Health, dental & vision",
    "Learning & development budget",
    "Home office stipend",
    "Team retreats",
    "Flexible hours",
];

static POSITIONS: Lazy<ContentStore<Position>> =
    Lazy::new(|| ContentStore::load("careers", include_str!("careers.json")));

pub fn positions() -> &'static ContentStore<Position> {
    &POSITIONS
}

pub fn get_position_by_slug(slug: &str) -> Option<&'static Position> {
    positions().find_by_slug(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Lookup;

    #[test]
    fn seeded_ids_are_unique_list_keys() {
        let mut ids: Vec<u32> = positions().all().iter().map(|record| record.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), positions().len());
    }

    #[test]
    fn seeded_positions_are_valid() {
        assert_eq!(positions().len(), 3);
        assert!(positions().validate().is_ok());
    }

    #[test]
    fn full_stack_role_is_in_engineering() {
        let position = get_position_by_slug("senior-full-stack-developer").unwrap();
        assert_eq!(position.department, "Engineering");
        assert_eq!(position.kind, "Full-time");
        assert_eq!(position.nice_to_have.len(), 3);
    }

    #[test]
    fn unknown_role_is_not_found() {
        assert!(get_position_by_slug("not-a-real-role").is_none());
        assert!(get_position_by_slug("").is_none());
        assert_eq!(positions().resolve("not-a-real-role"), Lookup::NotFound);
    }

    #[test]
    fn every_seeded_slug_resolves_to_itself() {
        for position in positions().all() {
            match positions().resolve(&position.slug) {
                Lookup::Found(found) => assert_eq!(found.slug, position.slug),
                Lookup::NotFound => panic!("{} did not resolve", position.slug),
            }
        }
    }

    #[test]
    fn department_is_the_category() {
        let design = positions().in_category("Design");
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].slug, "ui-ux-designer");
    }

    #[test]
    fn missing_nice_to_have_decodes_as_empty() {
        let json = r#"[{
            "id": 9, "slug": "intern", "title": "Intern", "department": "Engineering",
            "location": "Remote", "type": "Internship", "experience": "0+ years",
            "description": "Learn with us.", "responsibilities": ["Ship"], "requirements": ["Curiosity"]
        }]"#;
        let store = ContentStore::<Position>::from_json("careers", json).unwrap();
        assert!(store.all()[0].nice_to_have.is_empty());
        assert_eq!(store.all()[0].kind, "Internship");
    }
}
