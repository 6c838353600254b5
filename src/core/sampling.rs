use rand::seq::SliceRandom;
use rand::Rng;
use crate::models::Profile;

/// Profiles picked for the dashboard side panels
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<'a> {
    pub suggested: Vec<&'a Profile>,
    pub recently_viewed: Vec<&'a Profile>,
}

/// All profiles in an order drawn from `rng`
pub fn shuffled<'a, R>(profiles: &'a [Profile], rng: &mut R) -> Vec<&'a Profile>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<&Profile> = profiles.iter().collect();
    order.shuffle(rng);
    order
}

/// Random selection of up to `count` profiles for the landing page
pub fn sample_featured<'a, R>(profiles: &'a [Profile], count: usize, rng: &mut R) -> Vec<&'a Profile>
where
    R: Rng + ?Sized,
{
    let mut order = shuffled(profiles, rng);
    order.truncate(count);
    order
}

/// Suggested matches and recently viewed profiles for `profile_id`
///
/// Both lists come from one shuffle. Neither contains the viewer, and the
/// recently viewed list never repeats a suggestion.
pub fn suggest_for<'a, R>(
    profiles: &'a [Profile],
    profile_id: &str,
    suggested_count: usize,
    viewed_count: usize,
    rng: &mut R,
) -> Suggestions<'a>
where
    R: Rng + ?Sized,
{
    let order = shuffled(profiles, rng);

    let suggested: Vec<&Profile> = order
        .iter()
        .copied()
        .filter(|p| p.id != profile_id)
        .take(suggested_count)
        .collect();

    let recently_viewed = order
        .iter()
        .copied()
        .filter(|p| p.id != profile_id && !suggested.iter().any(|s| s.id == p.id))
        .take(viewed_count)
        .collect();

    Suggestions { suggested, recently_viewed }
}
