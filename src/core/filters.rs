use crate::models::{FilterCriteria, Profile};

/// Education checkbox ids offered by the filter panel, with the keyword each
/// one looks for in a profile's free-text education.
pub const EDUCATION_OPTIONS: &[(&str, &str)] = &[
    ("high-school", "high school"),
    ("bachelors", "bachelor"),
    ("masters", "master"),
    ("phd", "phd"),
];

/// Keyword to search for when matching an education pattern
///
/// Known checkbox ids resolve to their keyword, anything else is used as is.
pub fn education_keyword(pattern: &str) -> &str {
    EDUCATION_OPTIONS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(pattern))
        .map(|(_, keyword)| *keyword)
        .unwrap_or(pattern)
}

#[inline]
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Treat empty strings the same as an absent value
#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[inline]
pub fn matches_gender(profile: &Profile, criteria: &FilterCriteria) -> bool {
    criteria.gender.map_or(true, |gender| profile.gender == gender)
}

/// Both age bounds are inclusive and independent of each other
#[inline]
pub fn matches_age(profile: &Profile, criteria: &FilterCriteria) -> bool {
    if criteria.age_min.is_some_and(|min| profile.age < min) {
        return false;
    }
    if criteria.age_max.is_some_and(|max| profile.age > max) {
        return false;
    }
    true
}

/// Case-insensitive partial match, so "usa" finds "New York, USA"
#[inline]
pub fn matches_location(profile: &Profile, criteria: &FilterCriteria) -> bool {
    non_empty(&criteria.location).map_or(true, |location| {
        contains_ignore_case(&profile.location, location)
    })
}

/// Case-insensitive exact match
///
/// A profile without a religion never satisfies a religion constraint.
/// Compare with [`matches_height`], which lets a missing height through.
#[inline]
pub fn matches_religion(profile: &Profile, criteria: &FilterCriteria) -> bool {
    let Some(wanted) = non_empty(&criteria.religion) else {
        return true;
    };

    match profile.religion.as_deref() {
        Some(religion) => religion.to_lowercase() == wanted.to_lowercase(),
        None => false,
    }
}

/// Inclusive height bounds, checked only when the profile records a height
#[inline]
pub fn matches_height(profile: &Profile, criteria: &FilterCriteria) -> bool {
    let Some(height) = profile.height_cm() else {
        return true;
    };

    if criteria.height_min.is_some_and(|min| height < min) {
        return false;
    }
    if criteria.height_max.is_some_and(|max| height > max) {
        return false;
    }
    true
}

/// Passes when any selected pattern occurs in the profile's education
#[inline]
pub fn matches_education(profile: &Profile, criteria: &FilterCriteria) -> bool {
    if criteria.education.is_empty() {
        return true;
    }

    criteria
        .education
        .iter()
        .any(|pattern| contains_ignore_case(&profile.education, education_keyword(pattern)))
}

#[inline]
pub fn matches_occupation(profile: &Profile, criteria: &FilterCriteria) -> bool {
    non_empty(&criteria.occupation).map_or(true, |occupation| {
        contains_ignore_case(&profile.occupation, occupation)
    })
}

/// Check a profile against every dimension of the criteria
#[inline]
pub fn matches_criteria(profile: &Profile, criteria: &FilterCriteria) -> bool {
    matches_gender(profile, criteria)
        && matches_age(profile, criteria)
        && matches_location(profile, criteria)
        && matches_religion(profile, criteria)
        && matches_height(profile, criteria)
        && matches_education(profile, criteria)
        && matches_occupation(profile, criteria)
}

/// Select the profiles that satisfy all constrained dimensions
///
/// Order of the input is preserved and nothing is truncated. Accepts any
/// iterator of profile references, so a previous result can be filtered again.
pub fn evaluate<'a, I>(profiles: I, criteria: &FilterCriteria) -> Vec<&'a Profile>
where
    I: IntoIterator<Item = &'a Profile>,
{
    profiles
        .into_iter()
        .filter(|profile| matches_criteria(profile, criteria))
        .collect()
}
