//! Records exchanged with the portfolio REST API.
//!
//! Every record is server-owned: identifiers and timestamps are assigned by the
//! API and are read-only here. Records that live in an ordered collection carry
//! an `order_index` and implement [`Ordered`].

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Opaque numeric identifier assigned by the API.
pub type EntityId = i64;

/// A record type served from a REST collection.
///
/// `COLLECTION` is the list/create path. Single records live under the same
/// path without its trailing slash, followed by the identifier.
pub trait Resource: DeserializeOwned + 'static {
    const COLLECTION: &'static str;

    fn member_path(id: EntityId) -> String {
        format!("{}/{id}", Self::COLLECTION.trim_end_matches('/'))
    }
}

/// A record with a stable identity and a persisted display position.
pub trait Ordered {
    fn id(&self) -> EntityId;
    fn order_index(&self) -> i32;
}

macro_rules! ordered_resource {
    ($ty:ty, $path:literal) => {
        impl Resource for $ty {
            const COLLECTION: &'static str = $path;
        }

        impl Ordered for $ty {
            fn id(&self) -> EntityId {
                self.id
            }

            fn order_index(&self) -> i32 {
                self.order_index
            }
        }
    };
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub id: EntityId,
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub id: EntityId,
    pub name: String,
    pub category_id: EntityId,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AboutSection {
    pub id: EntityId,
    pub section: String,
    pub content: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub id: EntityId,
    pub number: String,
    pub label: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub id: EntityId,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon_name: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A message left through the contact form. Not ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Metadata of the most recently uploaded résumé.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resume {
    pub id: EntityId,
    pub original_filename: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    pub file_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_mime_type() -> String {
    "application/pdf".to_owned()
}

ordered_resource!(Project, "/projects/");
ordered_resource!(Experience, "/experiences/");
ordered_resource!(Skill, "/skills/");
ordered_resource!(SkillCategory, "/skills/categories");
ordered_resource!(AboutSection, "/about/content");
ordered_resource!(Stat, "/about/stats");
ordered_resource!(SocialLink, "/social-links/");

impl Resource for ContactMessage {
    const COLLECTION: &'static str = "/contacts/";
}

// === Request payloads ===

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: String,
    pub order_index: usize,
}

/// Partial update of a project; absent fields are left untouched by the API.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ProjectChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewExperience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub order_index: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewSkillCategory {
    pub name: String,
    pub order_index: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub category_id: EntityId,
    pub order_index: usize,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of the per-record PUT issued when a collection is reordered.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrderUpdate {
    pub order_index: usize,
}
