// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, Gender, Interest, InterestStatus, Message, FilterCriteria};
pub use requests::{FilterForm, GenderChoice, LoginRequest, LogoutRequest};
pub use responses::{
    DiscoverResponse, ProfileDetail, FeaturedResponse, ConversationPreview, DashboardStats,
    DashboardResponse, SessionResponse, LogoutResponse, HealthResponse, ErrorResponse,
};
