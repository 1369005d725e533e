//! Shared test harness modules for the forklift CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod generate_unit;
mod helpers;
