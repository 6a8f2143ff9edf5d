//! Behavioural tests for the example-projects crate.
//!
//! Scenarios cover catalogue parsing and deterministic generation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use example_projects::{
    ExampleProjectSeed, ProjectCatalogue, RegistryError, generate_example_projects,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const BUNDLED_JSON: &str = include_str!("../fixtures/projects.json");

#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    catalogue_result: Slot<Result<ProjectCatalogue, RegistryError>>,
    generated: Slot<Vec<ExampleProjectSeed>>,
    second_generation: Slot<Vec<ExampleProjectSeed>>,
}

impl World {
    fn catalogue(&self) -> ProjectCatalogue {
        self.catalogue_result
            .get()
            .expect("catalogue should be set")
            .expect("catalogue should be valid")
    }

    fn catalogue_result(&self) -> Result<ProjectCatalogue, RegistryError> {
        self.catalogue_result
            .get()
            .expect("catalogue result should be set")
    }

    fn generated(&self) -> Vec<ExampleProjectSeed> {
        self.generated.get().expect("projects should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the bundled catalogue JSON")]
fn the_bundled_catalogue_json(world: &World) {
    world.json_input.set(BUNDLED_JSON.to_owned());
}

#[given("the bundled catalogue")]
fn the_bundled_catalogue(world: &World) {
    world.catalogue_result.set(ProjectCatalogue::bundled());
}

#[given("malformed JSON")]
fn malformed_json(world: &World) {
    world.json_input.set("{ not json".to_owned());
}

#[given("catalogue JSON with an invalid project UUID")]
fn catalogue_json_with_an_invalid_project_uuid(world: &World) {
    let json = BUNDLED_JSON.replacen(
        "b8a1c7e2-5d3f-4a6b-9c01-000000000001",
        "not-a-uuid",
        1,
    );
    world.json_input.set(json);
}

#[when("the catalogue is parsed")]
fn the_catalogue_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.catalogue_result.set(ProjectCatalogue::from_json(&json));
}

#[when("{count:usize} projects are generated with seed {seed:u64}")]
fn projects_are_generated(world: &World, count: usize, seed: u64) {
    let catalogue = world.catalogue();
    let projects = generate_example_projects(&catalogue, seed, count).expect("generated");
    world.generated.set(projects);
}

#[when("{count:usize} projects are generated twice with seed {seed:u64}")]
fn projects_are_generated_twice(world: &World, count: usize, seed: u64) {
    let catalogue = world.catalogue();
    let first = generate_example_projects(&catalogue, seed, count).expect("first generation");
    let second = generate_example_projects(&catalogue, seed, count).expect("second generation");
    world.generated.set(first);
    world.second_generation.set(second);
}

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.catalogue_result();
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("the catalogue lists {count:usize} projects in source order")]
fn the_catalogue_lists_projects_in_source_order(world: &World, count: usize) {
    let catalogue = world.catalogue();
    assert_eq!(catalogue.projects().len(), count);
    let first = catalogue.projects().first().expect("non-empty");
    assert_eq!(first.title, "E-commerce Website Development");
    let last = catalogue.projects().last().expect("non-empty");
    assert_eq!(last.title, "Database Migration Project");
}

#[then("both generations produce identical projects")]
fn both_generations_produce_identical_projects(world: &World) {
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");
    assert_eq!(world.generated(), second);
}

#[then("every generated project uses a catalogue category")]
fn every_generated_project_uses_a_catalogue_category(world: &World) {
    let catalogue = world.catalogue();
    let categories: HashSet<_> = catalogue.categories().iter().collect();
    for project in world.generated() {
        assert!(
            categories.contains(&project.category),
            "Unknown category {}",
            project.category
        );
    }
}

#[then("every generated skill exists in the catalogue")]
fn every_generated_skill_exists_in_the_catalogue(world: &World) {
    let catalogue = world.catalogue();
    let skills: HashSet<_> = catalogue.skills().iter().collect();
    for project in world.generated() {
        for skill in &project.required_skills {
            assert!(skills.contains(skill), "Unknown skill {skill}");
        }
    }
}

#[then("parsing fails with a parse error")]
fn parsing_fails_with_a_parse_error(world: &World) {
    match world.catalogue_result() {
        Err(RegistryError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[then("parsing fails with an invalid project id error")]
fn parsing_fails_with_an_invalid_project_id_error(world: &World) {
    match world.catalogue_result() {
        Err(RegistryError::InvalidProjectId { index: 0, value }) => {
            assert_eq!(value, "not-a-uuid");
        }
        other => panic!("Expected InvalidProjectId, got: {other:?}"),
    }
}

#[scenario(
    path = "tests/features/catalogue.feature",
    name = "Bundled catalogue parses successfully"
)]
fn bundled_catalogue_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue.feature",
    name = "Deterministic generation produces identical projects"
)]
fn deterministic_generation_produces_identical_projects(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue.feature",
    name = "Generated projects stay within catalogue pools"
)]
fn generated_projects_stay_within_catalogue_pools(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue.feature",
    name = "Invalid JSON fails parsing"
)]
fn invalid_json_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalogue.feature",
    name = "Catalogue with an invalid project id fails parsing"
)]
fn catalogue_with_an_invalid_project_id_fails_parsing(world: World) {
    let _ = world;
}
