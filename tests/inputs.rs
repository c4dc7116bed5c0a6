//! Integration tests for locating, reading and solving puzzle inputs.

use std::fs;
use std::path::Path;

use advent::input::{input_path, read_input};
use advent::{solver, PuzzleError};
use tempfile::TempDir;

fn write_input(dir: &Path, year: u16, day: u8, example: Option<&str>, text: &str) {
    let path = input_path(dir, year, day, example);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn solve_file(dir: &Path, year: u16, day: u8, example: Option<&str>, part: u8) -> Result<String, PuzzleError> {
    let input = read_input(&input_path(dir, year, day, example))?;
    solver(year, day)?(part, &input)
}

#[test]
fn solves_real_and_example_inputs_side_by_side() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), 2024, 1, None, "1 2\n3 4\n");
    write_input(dir.path(), 2024, 1, Some(""), "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n");

    assert_eq!(solve_file(dir.path(), 2024, 1, None, 1).unwrap(), "2");
    assert_eq!(solve_file(dir.path(), 2024, 1, Some(""), 1).unwrap(), "11");
    assert_eq!(solve_file(dir.path(), 2024, 1, Some(""), 2).unwrap(), "31");
}

#[test]
fn suffixed_example_file() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), 2025, 11, Some("part2"), "svr: dac\ndac: fft\nfft: out\n");

    assert!(dir.path().join("2025/Day11/input_example_part2.txt").is_file());
    assert_eq!(solve_file(dir.path(), 2025, 11, Some("part2"), 2).unwrap(), "1");
}

#[test]
fn dial_from_file() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), 2025, 1, Some(""), "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n");

    assert_eq!(solve_file(dir.path(), 2025, 1, Some(""), 1).unwrap(), "3");
    assert_eq!(solve_file(dir.path(), 2025, 1, Some(""), 2).unwrap(), "6");
}

#[test]
fn missing_input_names_path() {
    let dir = TempDir::new().unwrap();
    let err = solve_file(dir.path(), 2025, 3, None, 1).unwrap_err();

    assert!(matches!(err, PuzzleError::Io { .. }));
    assert!(err.to_string().contains("Day3"));
}

#[test]
fn unknown_puzzle_is_rejected_before_reading() {
    assert!(matches!(
        solver(2023, 1),
        Err(PuzzleError::UnknownPuzzle { year: 2023, day: 1 })
    ));
}

#[test]
fn packing_has_no_second_part() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), 2025, 12, None, "0:\n#\n\n1x1: 1\n");

    assert_eq!(solve_file(dir.path(), 2025, 12, None, 1).unwrap(), "1");
    assert!(matches!(
        solve_file(dir.path(), 2025, 12, None, 2),
        Err(PuzzleError::NoSuchPart(2))
    ));
}

#[test]
fn non_numeric_coordinate() {
    let dir = TempDir::new().unwrap();
    write_input(dir.path(), 2025, 8, None, "1,2,3\n4,5,6\nseven\n");

    let err = solve_file(dir.path(), 2025, 8, None, 2).unwrap_err();
    assert!(matches!(err, PuzzleError::InvalidNumber { .. }));
}
