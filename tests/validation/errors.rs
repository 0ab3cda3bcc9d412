//! Record and format errors

use crate::common;
use view3d::{Error, Link, Model};

#[test]
fn test_short_vertex_line_reports_line_number() {
    // Line 9 is "V  5   0.   1.   0."
    let lines = common::l_shaped_room_with(9, "V  5   0.   1.");
    let mut model = Model::new();

    assert!(!model.read(&lines));
    assert_eq!(model.errors().len(), 1);
    assert!(matches!(
        model.errors()[0],
        Error::InsufficientData {
            line: 9,
            record: "vertex"
        }
    ));
    assert!(
        model.errors()[0]
            .to_string()
            .contains("On line 9: Insufficient vertex data")
    );
    assert_eq!(model.vertices().len(), 15);
}

#[test]
fn test_record_errors_leave_links_unresolved() {
    let lines = common::l_shaped_room_with(9, "V  5   0.   1.");
    let mut model = Model::new();
    model.read(&lines);

    for surface in model.surfaces() {
        assert!(surface.vertices.iter().all(Link::is_unresolved));
    }
    assert_eq!(model.surfaces()[8].combine, Link::Unresolved(7));
    assert!(model.surface_vertices(&model.surfaces()[0]).is_none());
}

#[test]
fn test_every_record_error_is_reported() {
    let mut lines: Vec<String> = common::l_shaped_room().lines().map(String::from).collect();
    lines[5] = "V  2   1.   three   3.".to_string();
    lines[22] = "S  2   10  13  16   7   0   0".to_string();
    lines[24] = "S  4    4   6  15   2   0   0   high  srf-4".to_string();
    lines.insert(3, "? what is this".to_string());

    let mut model = Model::new();
    assert!(!model.read(&lines));

    let messages = model.error_messages();
    assert_eq!(messages.len(), 4, "{:?}", messages);
    assert!(messages[0].contains("line 4: Unrecognized input type \"?\""));
    assert!(messages[1].contains("line 7: Non-numeric y coordinate \"three\""));
    assert!(messages[2].contains("line 24: Insufficient surface data"));
    assert!(messages[3].contains("line 26: Non-numeric emissivity \"high\""));
}

#[test]
fn test_unsupported_format_stops_reading() {
    let lines = common::l_shaped_room_with(3, "F  4");
    let mut model = Model::new();

    assert!(!model.read(&lines));
    assert_eq!(model.errors().len(), 1);
    assert_eq!(
        model.errors()[0].to_string(),
        "[E4001] Error on line 3: Unsupported format \"4\""
    );
    assert!(model.vertices().is_empty());
    assert!(model.surfaces().is_empty());
    // Records before the format line were read
    assert!(model.title().starts_with("Pinney & Bean"));
}

#[test]
fn test_missing_format_is_accepted() {
    let lines = common::l_shaped_room_with(3, "! no format record");
    let mut model = Model::new();
    assert!(model.read(&lines), "{}", model.error_report());
    assert_eq!(model.format(), None);
}

#[test]
fn test_error_report_joins_messages() {
    let model = Model::parse("Q\nV 1 2");
    let report = model.error_report();
    assert_eq!(report.lines().count(), 2);
    assert!(report.contains("Unrecognized input type \"Q\""));
    assert!(report.contains("Insufficient vertex data"));
}
