use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Categorized, Category};
use crate::domains::member::fallback::FALLBACK_MEMBERS;

/// Member model - a pet sitter listed in the directory
///
/// Rows live in the `members` table; this layer only reads them and toggles
/// `available`. `rating` is conventionally 0-5 and is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub image: String,
    pub location: String,
    pub experience: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub emergency_contact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Categorized for Member {
    const CATEGORY: Category = Category::Members;

    fn fallback() -> &'static [Self] {
        FALLBACK_MEMBERS.as_slice()
    }
}

/// Patch body for toggling availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityUpdate {
    pub available: bool,
}
