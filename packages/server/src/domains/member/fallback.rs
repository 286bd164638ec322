//! Static member records shown when the directory has no live data.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;

use crate::domains::member::models::Member;

fn posted_at(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

lazy_static! {
    pub static ref FALLBACK_MEMBERS: Vec<Member> = vec![
        Member {
            id: "1".to_string(),
            created_at: posted_at(1_757_586_410_031),
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            image: "https://d64gsuwffb70l.cloudfront.net/68c2a3c3c11b33509e8fc228_1757586410031_ed2456af.webp".to_string(),
            location: "Auckland Central".to_string(),
            experience: "5+ years".to_string(),
            specialties: vec!["Dogs".to_string(), "Cats".to_string()],
            rating: 5,
            available: true,
            emergency_contact: true,
            phone: None,
            bio: None,
        },
        Member {
            id: "2".to_string(),
            created_at: posted_at(1_757_586_411_749),
            name: "Mike Chen".to_string(),
            email: "mike@example.com".to_string(),
            image: "https://d64gsuwffb70l.cloudfront.net/68c2a3c3c11b33509e8fc228_1757586411749_23c1e95c.webp".to_string(),
            location: "North Shore".to_string(),
            experience: "3+ years".to_string(),
            specialties: vec!["Dogs".to_string(), "Birds".to_string()],
            rating: 4,
            available: false,
            emergency_contact: true,
            phone: None,
            bio: None,
        },
    ];
}
