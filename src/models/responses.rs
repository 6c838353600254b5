use serde::{Deserialize, Serialize};
use crate::models::domain::{FilterCriteria, Message, Profile};

/// Response for the discover endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    pub profiles: Vec<Profile>,
    pub total_results: usize,
    pub active_filters: usize,
    pub criteria: FilterCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Profile page payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: Profile,
    pub height_display: String,
}

/// Random selection for the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedResponse {
    pub profiles: Vec<Profile>,
}

/// First message exchanged with a conversation partner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPreview {
    pub partner_id: String,
    pub partner_name: Option<String>,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub interests_received: usize,
    pub active_conversations: usize,
}

/// Activity overview for the signed-in profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub profile_id: String,
    pub suggested_matches: Vec<Profile>,
    pub recently_viewed: Vec<Profile>,
    pub received_interests: Vec<Profile>,
    pub recent_conversations: Vec<ConversationPreview>,
    pub stats: DashboardStats,
}

/// Session opened by a login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub profile_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profiles: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
