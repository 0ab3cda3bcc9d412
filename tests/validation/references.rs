//! Index order and reference resolution

use crate::common;
use view3d::{Error, Link, LinkKind, Model};

#[test]
fn test_vertex_index_out_of_position() {
    let model = Model::parse("V 1 0 0 0\nV 3 1 0 0");

    assert!(!model.is_valid());
    assert_eq!(model.errors().len(), 1);
    assert!(matches!(
        model.errors()[0],
        Error::IndexMismatch {
            entity: "vertex",
            position: 2,
            index: 3
        }
    ));
}

#[test]
fn test_surface_index_out_of_position() {
    // Line 27 is surface 6
    let lines = common::l_shaped_room_with(27, "S  7    8   3   1  11   0   0   0.90  srf-6");
    let mut model = Model::new();

    assert!(!model.read(&lines));
    assert_eq!(model.errors().len(), 1);
    assert!(
        model.errors()[0]
            .to_string()
            .contains("surface 6: Index \"7\" does not match position")
    );
    // Later passes did not run
    assert_eq!(model.surfaces()[8].combine, Link::Unresolved(7));
}

#[test]
fn test_base_equal_to_own_index() {
    let lines = common::l_shaped_room_with(30, "S  9    1   2  15  14   9   7   0.90  srf-7b");
    let mut model = Model::new();

    assert!(!model.read(&lines));
    assert_eq!(model.errors().len(), 1);
    assert!(model.errors()[0].to_string().contains("must be less than"));
    assert!(matches!(
        model.errors()[0],
        Error::LinkNotLess {
            surface: 9,
            link: LinkKind::Base,
            value: 9
        }
    ));
    // Combination pass is skipped after a base error
    assert_eq!(model.surfaces()[8].combine, Link::Unresolved(7));
}

#[test]
fn test_forward_combine_reference() {
    let lines = common::l_shaped_room_with(30, "S  9    1   2  15  14   0  11   0.90  srf-7b");
    let mut model = Model::new();

    assert!(!model.read(&lines));
    assert_eq!(model.errors().len(), 1);
    assert!(
        model.errors()[0]
            .to_string()
            .contains("Combination surface index \"11\" must be less than surface index")
    );
    assert_eq!(model.surfaces()[8].combine, Link::Absent);
    assert_eq!(model.surfaces()[10].combine, Link::Resolved(7));
}

#[test]
fn test_negative_base_reference() {
    let model = Model::parse("V 1 0 0 0\nS 1 1 1 1 1 0 0 0.9 a\nS 2 1 1 1 1 -1 0 0.9 b");

    assert_eq!(model.errors().len(), 1);
    assert!(
        model.errors()[0]
            .to_string()
            .contains("Negative base surface index \"-1\"")
    );
}

#[test]
fn test_zero_and_negative_vertex_slots() {
    let model = Model::parse(
        "V 1 0 0 0\nV 2 1 0 0\nV 3 0 1 0\nS 1 1 0 3 -4 0 0 0.9 bad",
    );

    assert!(!model.is_valid());
    assert_eq!(model.errors().len(), 2);
    assert!(matches!(model.errors()[0], Error::ZeroVertexIndex { surface: 1 }));
    assert!(
        model.errors()[1]
            .to_string()
            .contains("Negative vertex index \"-4\"")
    );
    assert_eq!(
        model.surfaces()[0].vertices,
        [Link::Resolved(0), Link::Absent, Link::Resolved(2), Link::Absent]
    );
}

#[test]
fn test_vertex_index_too_large_on_several_surfaces() {
    let mut lines = common::l_shaped_room_with(22, "S  1   11  13  10  17   0   0   0.90  srf-1");
    lines[22] = "S  2   10  13  16  99   0   0   0.90  srf-2".to_string();
    let mut model = Model::new();

    assert!(!model.read(&lines));
    let messages = model.error_messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("surface 1: Vertex index \"17\" too large"));
    assert!(messages[1].contains("surface 2: Vertex index \"99\" too large"));
    assert_eq!(model.surfaces()[0].vertices[3], Link::Absent);
    assert_eq!(model.surfaces()[0].vertices[0], Link::Resolved(10));
}

#[test]
fn test_triangle_by_repeated_vertex() {
    let model = Model::parse(
        "V 1 0 0 0\nV 2 1 0 0\nV 3 0 1 0\nV 4 1 1 0\n\
         S 1 1 2 4 3 0 0 0.9 quad\nS 2 1 2 3 3 1 0 0.9 tri",
    );

    assert!(model.is_valid(), "{}", model.error_report());
    assert!(!model.surfaces()[0].is_triangle());
    assert!(model.surfaces()[1].is_triangle());
    assert_eq!(model.surfaces()[1].distinct_vertex_count(), 3);
    assert_eq!(model.surface(&model.surfaces()[1].base).unwrap().name, "quad");
}
