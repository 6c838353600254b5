use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::{Validate, ValidationError};
use crate::models::domain::Gender;

/// Bounds of the age slider
pub const AGE_SLIDER_MIN: u8 = 18;
pub const AGE_SLIDER_MAX: u8 = 70;
/// Age range shown before the user touches the slider
pub const DEFAULT_AGE_RANGE: (u8, u8) = (21, 45);

/// Bounds of the height slider, in centimeters
pub const HEIGHT_SLIDER_MIN: u16 = 140;
pub const HEIGHT_SLIDER_MAX: u16 = 210;
/// Height range shown before the user touches the slider
pub const DEFAULT_HEIGHT_RANGE: (u16, u16) = (150, 190);

/// Value of the gender select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderChoice {
    #[default]
    #[serde(rename = "any", alias = "")]
    Any,
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
}

impl GenderChoice {
    pub fn as_gender(self) -> Option<Gender> {
        match self {
            GenderChoice::Any => None,
            GenderChoice::Male => Some(Gender::Male),
            GenderChoice::Female => Some(Gender::Female),
            GenderChoice::Other => Some(Gender::Other),
        }
    }
}

/// Raw state of the discovery filter panel
///
/// Fields mirror the panel controls one to one. Missing fields take the
/// control's default, so `{}` is the untouched panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_ranges"))]
pub struct FilterForm {
    #[serde(default)]
    pub gender: GenderChoice,
    #[serde(default = "default_age_min")]
    #[validate(range(min = 18, max = 70))]
    pub age_min: u8,
    #[serde(default = "default_age_max")]
    #[validate(range(min = 18, max = 70))]
    pub age_max: u8,
    #[serde(default = "default_height_min")]
    #[validate(range(min = 140, max = 210))]
    pub height_min: u16,
    #[serde(default = "default_height_max")]
    #[validate(range(min = 140, max = 210))]
    pub height_max: u16,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub education: BTreeSet<String>,
    #[serde(default)]
    pub occupation: String,
}

impl FilterForm {
    pub fn age_range(&self) -> (u8, u8) {
        (self.age_min, self.age_max)
    }

    pub fn height_range(&self) -> (u16, u16) {
        (self.height_min, self.height_max)
    }
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            gender: GenderChoice::Any,
            age_min: default_age_min(),
            age_max: default_age_max(),
            height_min: default_height_min(),
            height_max: default_height_max(),
            location: String::new(),
            religion: String::new(),
            education: BTreeSet::new(),
            occupation: String::new(),
        }
    }
}

fn default_age_min() -> u8 { DEFAULT_AGE_RANGE.0 }
fn default_age_max() -> u8 { DEFAULT_AGE_RANGE.1 }
fn default_height_min() -> u16 { DEFAULT_HEIGHT_RANGE.0 }
fn default_height_max() -> u16 { DEFAULT_HEIGHT_RANGE.1 }

fn validate_ranges(form: &FilterForm) -> Result<(), ValidationError> {
    if form.age_min > form.age_max {
        return Err(ValidationError::new("age_range_inverted"));
    }
    if form.height_min > form.height_max {
        return Err(ValidationError::new("height_range_inverted"));
    }
    Ok(())
}

/// Request to open a session for an existing profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
}

/// Request to close a session
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1))]
    pub token: String,
}
