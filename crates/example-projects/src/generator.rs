//! Deterministic project generation from a catalogue.
//!
//! Generated projects extend the hand-written catalogue so listings have
//! enough variety for browsing and filtering. The same seed always produces
//! identical output.

use fake::Fake;
use fake::faker::company::raw::{CatchPhrase, CompanyName};
use fake::faker::job::raw::Title;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::ProjectCatalogue;
use crate::seed::{CreatorSeed, ExampleProjectSeed};

const MIN_SKILLS: usize = 1;
const MAX_SKILLS: usize = 3;

/// Two in three generated projects are paid.
const PAID_NUMERATOR: u32 = 2;
const PAID_DENOMINATOR: u32 = 3;

/// Budgets are drawn in hundreds within this range.
const BUDGET_HUNDREDS: std::ops::RangeInclusive<u64> = 5..=80;

const DEADLINE_DAYS: std::ops::RangeInclusive<i64> = 7..=60;
const CREATED_DAYS_AGO: std::ops::RangeInclusive<i64> = 0..=14;
const TEAM_SIZE: std::ops::RangeInclusive<u32> = 1..=5;
const DURATION_WEEKS: std::ops::RangeInclusive<u32> = 1..=12;

const LOCATIONS: [&str; 3] = ["Remote", "Hybrid", "On-site"];
const PLACEHOLDER_AVATAR: &str = "/placeholder-avatar.png";

/// Generates `count` example projects drawn from the catalogue's category
/// and skill pools.
///
/// Every generated project passes
/// [`validate_project_seed`](crate::validate_project_seed).
///
/// # Errors
///
/// Returns [`GenerationError`] if the catalogue has no categories or no
/// skills to draw from.
///
/// # Example
///
/// ```
/// use example_projects::{ProjectCatalogue, generate_example_projects};
///
/// let catalogue = ProjectCatalogue::bundled().expect("valid");
/// let first = generate_example_projects(&catalogue, 7, 4).expect("generated");
/// let second = generate_example_projects(&catalogue, 7, 4).expect("generated");
///
/// assert_eq!(first.len(), 4);
/// assert_eq!(first, second);
/// ```
pub fn generate_example_projects(
    catalogue: &ProjectCatalogue,
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleProjectSeed>, GenerationError> {
    if catalogue.categories().is_empty() {
        return Err(GenerationError::NoCategories);
    }
    if catalogue.skills().is_empty() {
        return Err(GenerationError::NoSkills);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut projects = Vec::with_capacity(count);
    for _ in 0..count {
        projects.push(generate_single_project(&mut rng, catalogue)?);
    }
    Ok(projects)
}

fn generate_single_project(
    rng: &mut ChaCha8Rng,
    catalogue: &ProjectCatalogue,
) -> Result<ExampleProjectSeed, GenerationError> {
    let id = Uuid::from_u128(rng.random());
    let category = catalogue
        .categories()
        .choose(rng)
        .cloned()
        .ok_or(GenerationError::NoCategories)?;
    let required_skills = select_subset(rng, catalogue.skills(), MIN_SKILLS, MAX_SKILLS);
    if required_skills.is_empty() {
        return Err(GenerationError::NoSkills);
    }

    let company: String = CompanyName(EN).fake_with_rng(rng);
    let pitch: String = CatchPhrase(EN).fake_with_rng(rng);

    let is_paid = rng.random_ratio(PAID_NUMERATOR, PAID_DENOMINATOR);
    let budget = if is_paid {
        rng.random_range(BUDGET_HUNDREDS) * 100
    } else {
        0
    };

    let created_by = generate_creator(rng);
    let location = LOCATIONS.choose(rng).copied().unwrap_or("Remote").to_owned();
    let weeks = rng.random_range(DURATION_WEEKS);

    let requirements = required_skills
        .iter()
        .map(|skill| format!("Hands-on experience with {skill}"))
        .collect();

    Ok(ExampleProjectSeed {
        id,
        title: format!("{category} for {company}"),
        description: pitch.clone(),
        detailed_description: format!(
            "{company} is looking for contributors to help with {}. {pitch}.",
            category.to_lowercase()
        ),
        category,
        is_paid,
        budget,
        deadline_in_days: rng.random_range(DEADLINE_DAYS),
        created_days_ago: rng.random_range(CREATED_DAYS_AGO),
        required_skills,
        created_by,
        team_size: rng.random_range(TEAM_SIZE),
        location,
        duration: if weeks == 1 {
            "1 week".to_owned()
        } else {
            format!("{weeks} weeks")
        },
        responsibilities: vec![
            "Collaborate with the project owner on scope".to_owned(),
            "Deliver work in small, reviewable increments".to_owned(),
        ],
        requirements,
    })
}

fn generate_creator(rng: &mut ChaCha8Rng) -> CreatorSeed {
    let id = Uuid::from_u128(rng.random());
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    let title: String = Title(EN).fake_with_rng(rng);

    CreatorSeed {
        id,
        name: format!("{first} {last}"),
        avatar: PLACEHOLDER_AVATAR.to_owned(),
        title,
    }
}

/// Selects a deterministic subset of entries, bounded by `min_count` and
/// `max_count` after clamping to the pool size.
fn select_subset(
    rng: &mut ChaCha8Rng,
    pool: &[String],
    min_count: usize,
    max_count: usize,
) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    let clamped_min = min_count.min(pool.len());
    let clamped_max = max_count.min(pool.len());
    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
