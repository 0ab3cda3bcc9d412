//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;

/// Path to a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Text of the L-shaped room enclosure (16 vertices, 12 surfaces)
pub fn l_shaped_room() -> String {
    std::fs::read_to_string(fixture_path("l_shaped_room.vs3"))
        .expect("l_shaped_room.vs3 fixture should be readable")
}

/// Lines of the L-shaped room with one line replaced (1-based)
pub fn l_shaped_room_with(line_number: usize, replacement: &str) -> Vec<String> {
    l_shaped_room()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i + 1 == line_number {
                replacement.to_string()
            } else {
                line.to_string()
            }
        })
        .collect()
}
