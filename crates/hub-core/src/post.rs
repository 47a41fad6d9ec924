//! Seed social-media posts.
//!
//! A handful of compiled-in example posts for exercising the ad-hoc
//! sentiment analyzer without typing text by hand.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One social-media post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

struct PostRow {
    id: &'static str,
    text: &'static str,
    country: &'static str,
    year: i32,
}

const POST_ROWS: &[PostRow] = &[
    PostRow {
        id: "x1",
        text: "Feeling incredibly grateful for my friends and family today in Finland! Life is good. #blessed #happiness",
        country: "Finland",
        year: 2025,
    },
    PostRow {
        id: "x2",
        text: "The support system in Denmark is amazing. Always feel safe and cared for. #community #wellbeing",
        country: "Denmark",
        year: 2025,
    },
    PostRow {
        id: "x3",
        text: "Just had a tough day at work in USA, but trying to stay positive. Sometimes the grind is real. #worklife #stress",
        country: "United States",
        year: 2025,
    },
    PostRow {
        id: "x4",
        text: "Enjoying the beautiful nature in Canada. So peaceful and rejuvenating. #ExploreCanada #MentalHealth",
        country: "Canada",
        year: 2025,
    },
    PostRow {
        id: "x5",
        text: "Dealing with bureaucracy in Japan can be frustrating. Wish things were simpler. #frustration #society",
        country: "Japan",
        year: 2025,
    },
    PostRow {
        id: "x6",
        text: "Another lovely day in Helsinki! The city is vibrant and full of life.",
        country: "Finland",
        year: 2025,
    },
    PostRow {
        id: "x7",
        text: "Missing the Canadian Rockies from my trip. Such an inspiring place.",
        country: "Canada",
        year: 2025,
    },
];

static POSTS: Lazy<Vec<SocialPost>> = Lazy::new(|| {
    POST_ROWS
        .iter()
        .map(|row| SocialPost {
            id: row.id.to_string(),
            text: row.text.to_string(),
            author: None,
            timestamp: None,
            country: Some(row.country.to_string()),
            year: Some(row.year),
        })
        .collect()
});

/// The compiled-in seed posts, in their original order.
pub fn seed_posts() -> &'static [SocialPost] {
    POSTS.as_slice()
}

/// Finds a seed post by id.
pub fn seed_post(id: &str) -> Option<&'static SocialPost> {
    POSTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_have_distinct_ids() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 7);
        let ids: std::collections::BTreeSet<&str> =
            posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn test_seed_post_lookup() {
        let post = seed_post("x1").unwrap();
        assert_eq!(post.country.as_deref(), Some("Finland"));
        assert!(post.text.contains("#blessed"));
        assert!(seed_post("x99").is_none());
    }
}
