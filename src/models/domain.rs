use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Gender recorded on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matrimonial listing for a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub location: String,
    #[serde(default)]
    pub bio: String,
    pub occupation: String,
    pub education: String,
    #[serde(default)]
    pub religion: Option<String>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    /// Height in centimeters, treating a zero height as not recorded
    pub fn height_cm(&self) -> Option<u16> {
        self.height.filter(|h| *h > 0)
    }
}

/// Interest sent from one profile to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub status: InterestStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// Direct message between two profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Message {
    /// The other side of the conversation, if `profile_id` took part in it
    pub fn partner_of(&self, profile_id: &str) -> Option<&str> {
        if self.sender_id == profile_id {
            Some(self.receiver_id.as_str())
        } else if self.receiver_id == profile_id {
            Some(self.sender_id.as_str())
        } else {
            None
        }
    }
}

/// Normalized discovery constraints
///
/// Every field is optional. An absent field (or an empty string / empty set)
/// leaves that dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_min: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_max: Option<u16>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub education: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
}

impl FilterCriteria {
    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, str::is_empty)
        }

        self.gender.is_none()
            && self.age_min.is_none()
            && self.age_max.is_none()
            && blank(&self.location)
            && blank(&self.religion)
            && self.height_min.is_none()
            && self.height_max.is_none()
            && self.education.is_empty()
            && blank(&self.occupation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_wire_format() {
        let json = r#"{"gender":"female","ageMin":30,"education":["bachelors"]}"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();

        assert_eq!(criteria.gender, Some(Gender::Female));
        assert_eq!(criteria.age_min, Some(30));
        assert!(criteria.age_max.is_none());
        assert!(criteria.education.contains("bachelors"));

        let empty = serde_json::to_string(&FilterCriteria::default()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_unconstrained_ignores_blank_text() {
        let criteria = FilterCriteria {
            location: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.is_unconstrained());

        let criteria = FilterCriteria {
            height_max: Some(180),
            ..Default::default()
        };
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn test_message_partner() {
        let message = Message {
            id: "m".to_string(),
            sender_id: "2".to_string(),
            receiver_id: "3".to_string(),
            content: "hi".to_string(),
            read: false,
            created_at: None,
        };

        assert_eq!(message.partner_of("2"), Some("3"));
        assert_eq!(message.partner_of("3"), Some("2"));
        assert_eq!(message.partner_of("4"), None);
    }
}
