//! Focused unit tests covering scenario generation.

use std::collections::HashSet;

use super::helpers::Workspace;
use super::*;
use crate::generate::{GenerateConfig, generate_scenario};
use crate::scenario::load_scenario;
use forklift_core::{Cell, Priority};
use rstest::{fixture, rstest};

#[fixture]
fn config() -> GenerateConfig {
    GenerateConfig::from(GenerateArgs::default())
}

#[rstest]
fn defaults_match_the_warehouse_floor(config: GenerateConfig) {
    assert_eq!((config.rows, config.cols), (10, 10));
    assert_eq!(config.items, 8);
    assert_eq!(config.capacity, 3);
    assert_eq!(config.output, None);
}

#[rstest]
fn same_seed_same_scenario(config: GenerateConfig) {
    let first = generate_scenario(&config).expect("generate");
    let second = generate_scenario(&config).expect("generate");
    assert_eq!(first, second);

    let reseeded = GenerateConfig { seed: 99, ..config };
    let third = generate_scenario(&reseeded).expect("generate");
    assert_ne!(first.items, third.items);
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(2024)]
fn items_follow_placement_rules(config: GenerateConfig, #[case] seed: u64) {
    let scenario = generate_scenario(&GenerateConfig { seed, ..config }).expect("generate");
    assert_eq!(scenario.items.len(), 8);
    assert_eq!(scenario.depot, Some(Cell::new(0, 0)));
    assert_eq!(scenario.start, Cell::new(0, 0));

    let cells: HashSet<Cell> = scenario.items.iter().map(|item| item.position).collect();
    assert_eq!(cells.len(), scenario.items.len(), "cells are distinct");
    assert!(!cells.contains(&Cell::new(0, 0)), "depot stays clear");

    for item in &scenario.items {
        let max = match item.priority {
            Priority::Perishable => 2,
            Priority::Standard => 3,
        };
        assert!((1..=max).contains(&item.weight), "weight {}", item.weight);
    }
}

#[rstest]
fn weights_are_capped_at_the_capacity(config: GenerateConfig) {
    let scenario = generate_scenario(&GenerateConfig {
        capacity: 1,
        items: 20,
        ..config
    })
    .expect("generate");
    assert!(scenario.items.iter().all(|item| item.weight == 1));
    assert_eq!(scenario.capacity, Some(1));
}

#[rstest]
fn every_free_cell_can_be_filled(config: GenerateConfig) {
    let scenario = generate_scenario(&GenerateConfig {
        rows: 2,
        cols: 2,
        items: 3,
        ..config
    })
    .expect("generate");
    assert_eq!(scenario.items.len(), 3);
}

#[rstest]
fn too_many_items_are_rejected(config: GenerateConfig) {
    let err = generate_scenario(&GenerateConfig {
        rows: 2,
        cols: 2,
        items: 4,
        ..config
    })
    .expect_err("only three free cells");
    match err {
        CliError::TooManyItems {
            requested,
            available,
            ..
        } => {
            assert_eq!(requested, 4);
            assert_eq!(available, 3);
        }
        other => panic!("expected TooManyItems, found {other:?}"),
    }
}

#[rstest]
fn zero_capacity_is_rejected(config: GenerateConfig) {
    let err = generate_scenario(&GenerateConfig {
        capacity: 0,
        ..config
    })
    .expect_err("an empty forklift cannot carry anything");
    assert!(matches!(err, CliError::ZeroCapacity));
}

#[rstest]
fn zero_capacity_flag_fails_the_command() {
    let err = run_with(["forklift", "generate", "--capacity", "0"], &mut Vec::new())
        .expect_err("capacity zero is rejected");
    assert!(matches!(err, CliError::ZeroCapacity));
}

#[rstest]
fn empty_grids_are_rejected(config: GenerateConfig) {
    let err = generate_scenario(&GenerateConfig { rows: 0, ..config }).expect_err("no rows");
    assert!(matches!(err, CliError::GenerateGrid { rows: 0, .. }));
}

#[rstest]
fn output_option_writes_a_loadable_file() {
    let workspace = Workspace::new();
    let path = workspace.path("floor.json");
    let mut stdout = Vec::new();
    run_with(
        ["forklift", "generate", "--seed", "7", "--output", path.as_str()],
        &mut stdout,
    )
    .expect("generate command succeeds");

    assert!(stdout.is_empty());
    let scenario = load_scenario(&path).expect("scenario loads");
    let expected = generate_scenario(&GenerateConfig {
        seed: 7,
        output: Some(path.clone()),
        ..GenerateConfig::from(GenerateArgs::default())
    })
    .expect("generate");
    assert_eq!(scenario, expected);
}

#[rstest]
fn output_into_a_missing_directory_fails() {
    let workspace = Workspace::new();
    let path = workspace.path("absent/floor.json");
    let err = run_with(
        ["forklift", "generate", "--output", path.as_str()],
        &mut Vec::new(),
    )
    .expect_err("parent directory is absent");
    match err {
        CliError::WriteOutputFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected WriteOutputFile, found {other:?}"),
    }
}
