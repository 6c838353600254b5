use crate::models::requests::{
    AGE_SLIDER_MAX, AGE_SLIDER_MIN, DEFAULT_AGE_RANGE, DEFAULT_HEIGHT_RANGE, HEIGHT_SLIDER_MAX,
    HEIGHT_SLIDER_MIN,
};
use crate::models::{FilterCriteria, FilterForm, GenderChoice};

/// Religion select value meaning "no preference"
const ANY_RELIGION: &str = "any";

fn text_criterion(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn religion_criterion(value: &str) -> Option<String> {
    if value.eq_ignore_ascii_case(ANY_RELIGION) {
        None
    } else {
        text_criterion(value)
    }
}

/// Map panel state to criteria
///
/// Sentinels become unconstrained dimensions: the "any" selections, empty
/// text, an empty education set, and a range slider left at its default.
/// A moved slider constrains both of its bounds.
pub fn normalize(form: &FilterForm) -> FilterCriteria {
    let (age_min, age_max) = if form.age_range() == DEFAULT_AGE_RANGE {
        (None, None)
    } else {
        (Some(form.age_min), Some(form.age_max))
    };

    let (height_min, height_max) = if form.height_range() == DEFAULT_HEIGHT_RANGE {
        (None, None)
    } else {
        (Some(form.height_min), Some(form.height_max))
    };

    FilterCriteria {
        gender: form.gender.as_gender(),
        age_min,
        age_max,
        location: text_criterion(&form.location),
        religion: religion_criterion(&form.religion),
        height_min,
        height_max,
        education: form.education.clone(),
        occupation: text_criterion(&form.occupation),
    }
}

/// Number of panel controls moved away from their default
pub fn active_filter_count(form: &FilterForm) -> usize {
    [
        form.gender != GenderChoice::Any,
        !form.location.is_empty(),
        religion_criterion(&form.religion).is_some(),
        !form.education.is_empty(),
        !form.occupation.is_empty(),
        form.age_range() != DEFAULT_AGE_RANGE,
        form.height_range() != DEFAULT_HEIGHT_RANGE,
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

fn clamp_range<T: Ord + Copy>(low: T, high: T, min: T, max: T) -> (T, T) {
    let low = low.clamp(min, max);
    let high = high.clamp(min, max);
    if low <= high {
        (low, high)
    } else {
        (high, low)
    }
}

/// Stateful filter panel
///
/// Holds the control values between commits. Setters keep every value inside
/// the domain its control allows, so [`FilterBuilder::apply`] cannot fail.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    form: FilterForm,
    active_filters: usize,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing panel state, pulling sliders back into range
    pub fn with_form(form: FilterForm) -> Self {
        let mut builder = Self { form, active_filters: 0 };
        builder.set_age_range(builder.form.age_min, builder.form.age_max);
        builder.set_height_range(builder.form.height_min, builder.form.height_max);
        builder
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    /// Count computed by the last apply or reset
    pub fn active_filters(&self) -> usize {
        self.active_filters
    }

    pub fn set_gender(&mut self, gender: GenderChoice) -> &mut Self {
        self.form.gender = gender;
        self
    }

    pub fn set_age_range(&mut self, min: u8, max: u8) -> &mut Self {
        let (min, max) = clamp_range(min, max, AGE_SLIDER_MIN, AGE_SLIDER_MAX);
        self.form.age_min = min;
        self.form.age_max = max;
        self
    }

    pub fn set_height_range(&mut self, min: u16, max: u16) -> &mut Self {
        let (min, max) = clamp_range(min, max, HEIGHT_SLIDER_MIN, HEIGHT_SLIDER_MAX);
        self.form.height_min = min;
        self.form.height_max = max;
        self
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.form.location = location.into();
        self
    }

    pub fn set_religion(&mut self, religion: impl Into<String>) -> &mut Self {
        self.form.religion = religion.into();
        self
    }

    /// Tick or untick an education checkbox
    pub fn set_education(&mut self, option: impl Into<String>, checked: bool) -> &mut Self {
        let option = option.into();
        if checked {
            self.form.education.insert(option);
        } else {
            self.form.education.remove(&option);
        }
        self
    }

    pub fn set_occupation(&mut self, occupation: impl Into<String>) -> &mut Self {
        self.form.occupation = occupation.into();
        self
    }

    /// Commit the current panel state
    pub fn apply(&mut self) -> FilterCriteria {
        self.active_filters = active_filter_count(&self.form);
        let criteria = normalize(&self.form);

        tracing::debug!(
            active_filters = self.active_filters,
            "Applied filters: {:?}",
            criteria
        );

        criteria
    }

    /// Restore every control to its default and drop all constraints
    pub fn reset(&mut self) -> FilterCriteria {
        self.form = FilterForm::default();
        self.active_filters = 0;
        FilterCriteria::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_default_form_is_unconstrained() {
        let form = FilterForm::default();

        assert!(normalize(&form).is_unconstrained());
        assert_eq!(active_filter_count(&form), 0);
    }

    #[test]
    fn test_sentinels_map_to_none() {
        let form = FilterForm {
            gender: GenderChoice::Any,
            religion: "any".to_string(),
            ..Default::default()
        };
        let criteria = normalize(&form);

        assert!(criteria.gender.is_none());
        assert!(criteria.religion.is_none());
        assert!(criteria.location.is_none());
        assert!(criteria.occupation.is_none());
    }

    #[test]
    fn test_moved_slider_constrains_both_bounds() {
        let form = FilterForm { age_max: 40, ..Default::default() };
        let criteria = normalize(&form);

        assert_eq!(criteria.age_min, Some(21));
        assert_eq!(criteria.age_max, Some(40));
        assert!(criteria.height_min.is_none());
        assert!(criteria.height_max.is_none());
    }

    #[test]
    fn test_text_kept_verbatim() {
        let form = FilterForm {
            location: "New York".to_string(),
            religion: "Hindu".to_string(),
            occupation: "engineer".to_string(),
            ..Default::default()
        };
        let criteria = normalize(&form);

        assert_eq!(criteria.location.as_deref(), Some("New York"));
        assert_eq!(criteria.religion.as_deref(), Some("Hindu"));
        assert_eq!(criteria.occupation.as_deref(), Some("engineer"));
    }

    #[test]
    fn test_active_filter_count() {
        let mut builder = FilterBuilder::new();
        builder
            .set_gender(GenderChoice::Female)
            .set_age_range(25, 45)
            .set_education("bachelors", true)
            .set_religion("any");

        let criteria = builder.apply();

        assert_eq!(builder.active_filters(), 3);
        assert_eq!(criteria.gender, Some(Gender::Female));
        assert_eq!(criteria.age_min, Some(25));
    }

    #[test]
    fn test_sliders_clamped_to_bounds() {
        let mut builder = FilterBuilder::new();
        builder.set_age_range(5, 99).set_height_range(250, 100);

        assert_eq!(builder.form().age_range(), (18, 70));
        assert_eq!(builder.form().height_range(), (140, 210));
    }

    #[test]
    fn test_with_form_clamps() {
        let form = FilterForm { age_min: 60, age_max: 30, ..Default::default() };
        let builder = FilterBuilder::with_form(form);

        assert_eq!(builder.form().age_range(), (30, 60));
    }

    #[test]
    fn test_education_toggle() {
        let mut builder = FilterBuilder::new();
        builder.set_education("masters", true).set_education("phd", true);
        builder.set_education("masters", false);

        let criteria = builder.apply();
        assert_eq!(criteria.education.len(), 1);
        assert!(criteria.education.contains("phd"));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut builder = FilterBuilder::new();
        builder.set_location("USA").set_height_range(160, 200);
        builder.apply();
        assert_eq!(builder.active_filters(), 2);

        let criteria = builder.reset();

        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(builder.form(), &FilterForm::default());
        assert_eq!(builder.active_filters(), 0);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut builder = FilterBuilder::new();
        builder.set_occupation("teacher");

        assert_eq!(builder.apply(), builder.apply());
    }
}
