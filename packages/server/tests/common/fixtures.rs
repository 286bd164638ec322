// Record fixtures for tests

use chrono::{DateTime, Duration, Utc};
use server_core::domains::emergency_alert::models::{
    AlertStatus, EmergencyAlert, NewEmergencyAlert, Urgency,
};
use server_core::domains::member::models::Member;
use server_core::domains::pricing::models::PricingPlan;

fn at(minutes_ago: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).unwrap() - Duration::minutes(minutes_ago)
}

pub fn member(id: &str, name: &str) -> Member {
    Member {
        id: id.to_string(),
        created_at: at(0),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        image: "https://example.com/sitter.webp".to_string(),
        location: "Ponsonby".to_string(),
        experience: "2+ years".to_string(),
        specialties: vec!["Cats".to_string()],
        rating: 4,
        available: true,
        emergency_contact: false,
        phone: None,
        bio: None,
    }
}

pub fn alert(id: &str, pet_name: &str, status: AlertStatus) -> EmergencyAlert {
    EmergencyAlert {
        id: id.to_string(),
        created_at: at(5),
        pet_name: pet_name.to_string(),
        pet_type: "Tabby Cat".to_string(),
        location: "Grey Lynn".to_string(),
        urgency: Urgency::Medium,
        description: "Needs feeding twice a day this weekend.".to_string(),
        compensation: "$40/day".to_string(),
        contact_name: "Aroha T.".to_string(),
        contact_email: "aroha@example.com".to_string(),
        contact_phone: None,
        status,
        member_id: "1".to_string(),
    }
}

pub fn new_alert(pet_name: &str) -> NewEmergencyAlert {
    NewEmergencyAlert {
        pet_name: pet_name.to_string(),
        pet_type: "Labrador".to_string(),
        location: "Mt Eden".to_string(),
        urgency: Urgency::High,
        description: "Owner in hospital, dog needs walking.".to_string(),
        compensation: "$60/day".to_string(),
        contact_name: "Jo K.".to_string(),
        contact_email: "jo@example.com".to_string(),
        contact_phone: None,
        status: None,
        member_id: "2".to_string(),
    }
}

pub fn plan(id: &str, title: &str, price: f64) -> PricingPlan {
    PricingPlan {
        id: id.to_string(),
        created_at: at(60),
        title: title.to_string(),
        price,
        period: "month".to_string(),
        features: vec!["Directory access".to_string()],
        popular: false,
        stripe_price_id: None,
    }
}
