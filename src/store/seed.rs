//! Demo data loaded into a fresh in-memory store.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::auth::{password, AuthError};
use crate::models::{
    Announcement, Complaint, ComplaintStatus, DaySchedule, Institution, InstitutionStatus, Location,
    Principal, Role, Ticket, WorkingHours,
};

pub const ADMIN_ID: &str = "admin-user-id";
pub const MUSEUM_ID: &str = "institution-user-id-1";
pub const GALLERY_ID: &str = "institution-user-id-2";
pub const VISITOR_ID: &str = "visitor-user-id";
pub const PENDING_INSTITUTION_ID: &str = "pending-institution-id-1";

/// Shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

pub struct SeedData {
    pub principals: Vec<Principal>,
    pub institutions: Vec<Institution>,
    pub tickets: Vec<Ticket>,
    pub announcements: Vec<Announcement>,
    pub complaints: Vec<Complaint>,
}

impl SeedData {
    pub fn build(pepper: Option<&str>) -> Result<Self, AuthError> {
        let now = Utc::now();

        let principal = |id: &str, email: &str, role: Role, name: &str| -> Result<Principal, AuthError> {
            Ok(Principal {
                id: id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
                role,
                password_hash: password::hash_password(SEED_PASSWORD, pepper)?,
                created_at: now,
            })
        };

        let principals = vec![
            principal(ADMIN_ID, "admin@example.com", Role::Admin, "Admin User")?,
            principal(MUSEUM_ID, "museum@example.com", Role::Institution, "City Museum")?,
            principal(GALLERY_ID, "gallery@example.com", Role::Institution, "Art Gallery")?,
            principal(VISITOR_ID, "visitor@example.com", Role::User, "Museum Visitor")?,
        ];

        Ok(Self {
            principals,
            institutions: institutions(now),
            tickets: tickets(now),
            announcements: announcements(now),
            complaints: complaints(now),
        })
    }
}

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

fn institutions(now: DateTime<Utc>) -> Vec<Institution> {
    let mut bardo_hours = WorkingHours::uniform(DaySchedule::open("09:00", "17:00"));
    bardo_hours.monday = Some(DaySchedule::closed("09:00", "17:00"));
    bardo_hours.sunday = Some(DaySchedule::open("09:00", "13:00"));

    vec![
        Institution {
            id: MUSEUM_ID.to_string(),
            name: "Bardo National Museum".to_string(),
            description: "A world-renowned museum housing a vast collection of Roman mosaics and Tunisian artifacts."
                .to_string(),
            city: "Tunis".to_string(),
            location: Location {
                address: "Rue Mongi Bali, Le Bardo, Tunis".to_string(),
                latitude: 36.8092,
                longitude: 10.1339,
            },
            entry_fee: 12.0,
            status: InstitutionStatus::Verified,
            is_verified: true,
            registration_date: days_ago(now, 10),
            acceptance_date: Some(days_ago(now, 5)),
            creation_date: days_ago(now, 10),
            rating: 4.7,
            total_visitors: 50,
            working_hours: bardo_hours,
            images: vec![
                "https://images.pexels.com/photos/5699456/pexels-photo-5699456.jpeg".to_string(),
                "https://images.pexels.com/photos/20967/pexels-photo.jpg".to_string(),
            ],
        },
        Institution {
            id: GALLERY_ID.to_string(),
            name: "National Museum of Carthage".to_string(),
            description: "Explore Punic and Roman history at this iconic site overlooking the Gulf of Tunis."
                .to_string(),
            city: "Carthage".to_string(),
            location: Location {
                address: "Byrsa Hill, Carthage, Tunis".to_string(),
                latitude: 36.8526,
                longitude: 10.3236,
            },
            entry_fee: 10.0,
            status: InstitutionStatus::Verified,
            is_verified: true,
            registration_date: days_ago(now, 20),
            acceptance_date: Some(days_ago(now, 15)),
            creation_date: days_ago(now, 20),
            rating: 4.6,
            total_visitors: 9500,
            working_hours: WorkingHours::uniform(DaySchedule::open("08:30", "17:30")),
            images: vec![
                "https://images.pexels.com/photos/161538/unesco-sites-wall-relief-ancient-times-161538.jpeg"
                    .to_string(),
            ],
        },
        Institution {
            id: PENDING_INSTITUTION_ID.to_string(),
            name: "Cité des Sciences à Tunis".to_string(),
            description: "Interactive science and technology exhibits for all ages.".to_string(),
            city: "Tunis".to_string(),
            location: Location {
                address: "Boulevard Mohamed Bouazizi, Tunis".to_string(),
                latitude: 36.8388,
                longitude: 10.2318,
            },
            entry_fee: 8.0,
            status: InstitutionStatus::Pending,
            is_verified: false,
            registration_date: days_ago(now, 2),
            acceptance_date: None,
            creation_date: days_ago(now, 2),
            rating: 0.0,
            total_visitors: 0,
            working_hours: WorkingHours::default(),
            images: vec!["https://images.pexels.com/photos/2280547/pexels-photo-2280547.jpeg".to_string()],
        },
    ]
}

fn tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    let ticket = |institution_id: &str, name: &str, price: f64, description: &str, age: Duration| Ticket {
        id: Uuid::new_v4().to_string(),
        institution_id: institution_id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        is_active: true,
        created_at: now - age,
    };

    vec![
        ticket(
            MUSEUM_ID,
            "Adult Admission",
            12.0,
            "General admission for one adult to Bardo Museum.",
            Duration::days(3),
        ),
        ticket(
            MUSEUM_ID,
            "Student Admission",
            6.0,
            "Admission for students with valid ID to Bardo Museum.",
            Duration::days(2),
        ),
        ticket(
            GALLERY_ID,
            "Carthage Site Entry",
            10.0,
            "Access to all Carthage archaeological sites.",
            Duration::days(1),
        ),
    ]
}

fn announcements(now: DateTime<Utc>) -> Vec<Announcement> {
    let announcement = |institution_id: &str, title: &str, content: &str| {
        let at = now - Duration::hours(12);
        Announcement {
            id: Uuid::new_v4().to_string(),
            institution_id: institution_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        }
    };

    vec![
        announcement(
            MUSEUM_ID,
            "New Mosaic Exhibit!",
            "Discover newly restored Roman mosaics from Bulla Regia. Opens August 1st!",
        ),
        announcement(
            GALLERY_ID,
            "Lecture on Punic Carthage",
            "Join Dr. Ali Hassan for a talk on the history of Punic Carthage next Saturday at 3 PM.",
        ),
    ]
}

fn complaints(now: DateTime<Utc>) -> Vec<Complaint> {
    vec![Complaint {
        id: Uuid::new_v4().to_string(),
        user_id: VISITOR_ID.to_string(),
        institution_id: MUSEUM_ID.to_string(),
        title: "Long Wait Times".to_string(),
        description: "The queue for the main exhibit was over an hour long.".to_string(),
        status: ComplaintStatus::Pending,
        created_at: now - Duration::hours(6),
        resolution: None,
        resolved_at: None,
    }]
}
