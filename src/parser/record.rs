//! Classification and field conversion for single input lines

use crate::error::{Error, Result};
use crate::model::{Surface, Vertex};

/// Number of fields required after the `V` tag
const VERTEX_FIELDS: usize = 4;

/// Number of fields required after the `S` tag
const SURFACE_FIELDS: usize = 9;

/// The kind of a record, given by the first character of its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `T`: title
    Title,
    /// `F`: format version
    Format,
    /// `C`: control parameters
    Control,
    /// `V`: vertex
    Vertex,
    /// `S`: surface
    Surface,
    /// `!`: comment
    Comment,
    /// `E`: end of data
    End,
}

impl RecordKind {
    /// Classify a leading character, ignoring case
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag.to_ascii_uppercase() {
            'T' => Some(RecordKind::Title),
            'F' => Some(RecordKind::Format),
            'C' => Some(RecordKind::Control),
            'V' => Some(RecordKind::Vertex),
            'S' => Some(RecordKind::Surface),
            '!' => Some(RecordKind::Comment),
            'E' => Some(RecordKind::End),
            _ => None,
        }
    }
}

/// One classified and converted input line
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Title text
    Title(String),
    /// Format version string
    Format(String),
    /// Raw control text
    Control(String),
    /// A vertex, with the number of unused fields that followed it
    Vertex {
        /// Converted vertex
        vertex: Vertex,
        /// Fields beyond the required count, excluding inline comments
        extra_fields: usize,
    },
    /// A surface with unresolved references
    Surface {
        /// Converted surface
        surface: Surface,
        /// Fields beyond the required count, excluding inline comments
        extra_fields: usize,
    },
    /// Comment line
    Comment,
    /// End of data
    End,
}

/// Classify and convert one line
///
/// Returns `Ok(None)` for a blank line. `line_number` is 1-based and is
/// carried in every error.
pub fn parse_record(line: &str, line_number: usize) -> Result<Option<Record>> {
    let line = line.trim();
    let Some(tag) = line.chars().next() else {
        return Ok(None);
    };
    let kind = RecordKind::from_tag(tag).ok_or(Error::UnrecognizedRecord {
        line: line_number,
        tag,
    })?;
    let rest = line[tag.len_utf8()..].trim();

    let record = match kind {
        RecordKind::Title => Record::Title(rest.to_string()),
        RecordKind::Format => Record::Format(rest.to_string()),
        RecordKind::Control => Record::Control(rest.to_string()),
        RecordKind::Vertex => parse_vertex(rest, line_number)?,
        RecordKind::Surface => parse_surface(rest, line_number)?,
        RecordKind::Comment => Record::Comment,
        RecordKind::End => Record::End,
    };
    Ok(Some(record))
}

/// `index x y z`
fn parse_vertex(fields: &str, line: usize) -> Result<Record> {
    let data: Vec<&str> = fields.split_whitespace().collect();
    if data.len() < VERTEX_FIELDS {
        return Err(Error::InsufficientData {
            line,
            record: "vertex",
        });
    }

    let index = to_integer(data[0], line, "vertex number")?;
    let x = to_float(data[1], line, "x coordinate")?;
    let y = to_float(data[2], line, "y coordinate")?;
    let z = to_float(data[3], line, "z coordinate")?;

    Ok(Record::Vertex {
        vertex: Vertex::new(index, x, y, z),
        extra_fields: count_extra(&data[VERTEX_FIELDS..]),
    })
}

/// `index v1 v2 v3 v4 base combine emissivity name`
fn parse_surface(fields: &str, line: usize) -> Result<Record> {
    let data: Vec<&str> = fields.split_whitespace().collect();
    if data.len() < SURFACE_FIELDS {
        return Err(Error::InsufficientData {
            line,
            record: "surface",
        });
    }

    let index = to_integer(data[0], line, "surface number")?;
    let v1 = to_integer(data[1], line, "vertex 1 number")?;
    let v2 = to_integer(data[2], line, "vertex 2 number")?;
    let v3 = to_integer(data[3], line, "vertex 3 number")?;
    let v4 = to_integer(data[4], line, "vertex 4 number")?;
    let base = to_integer(data[5], line, "base surface number")?;
    let combine = to_integer(data[6], line, "combination surface number")?;
    let emissivity = to_float(data[7], line, "emissivity")?;
    let name = data[8];

    Ok(Record::Surface {
        surface: Surface::new(name, index, [v1, v2, v3, v4], emissivity, base, combine),
        extra_fields: count_extra(&data[SURFACE_FIELDS..]),
    })
}

/// Trailing fields up to the first inline comment
fn count_extra(trailing: &[&str]) -> usize {
    trailing
        .iter()
        .take_while(|token| !token.starts_with('!'))
        .count()
}

fn to_integer(token: &str, line: usize, field: &'static str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| Error::non_integral(line, field, token))
}

fn to_float(token: &str, line: usize, field: &'static str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| Error::non_numeric(line, field, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    #[test]
    fn test_blank_line_is_no_record() {
        assert_eq!(parse_record("", 1).unwrap(), None);
        assert_eq!(parse_record("   \t ", 2).unwrap(), None);
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        assert_eq!(
            parse_record("t  A room ", 1).unwrap(),
            Some(Record::Title("A room".to_string()))
        );
        assert_eq!(
            parse_record("  f 3", 1).unwrap(),
            Some(Record::Format("3".to_string()))
        );
        assert_eq!(parse_record("end of data", 1).unwrap(), Some(Record::End));
        assert_eq!(parse_record("! anything", 1).unwrap(), Some(Record::Comment));
    }

    #[test]
    fn test_control_is_verbatim() {
        let record = parse_record("C  encl=1 list=2 eps=1.e-4", 3).unwrap();
        assert_eq!(
            record,
            Some(Record::Control("encl=1 list=2 eps=1.e-4".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_tag() {
        let err = parse_record("X 1 2 3", 5).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedRecord { line: 5, tag: 'X' }));
        assert!(err.to_string().contains("Unrecognized input type \"X\""));
    }

    #[test]
    fn test_vertex_record() {
        let record = parse_record("V 10   3.   0.   0.", 14).unwrap().unwrap();
        assert_eq!(
            record,
            Record::Vertex {
                vertex: Vertex::new(10, 3.0, 0.0, 0.0),
                extra_fields: 0,
            }
        );
    }

    #[test]
    fn test_vertex_insufficient_data() {
        let err = parse_record("V 1 0. 3.", 9).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                line: 9,
                record: "vertex"
            }
        ));
        assert!(err.to_string().contains("On line 9: Insufficient vertex data"));
    }

    #[test]
    fn test_vertex_conversion_errors_quote_token() {
        let err = parse_record("V 1.5 0 0 0", 2).unwrap_err();
        assert!(err.to_string().contains("Non-integral vertex number \"1.5\""));

        let err = parse_record("V 1 0 abc 0", 2).unwrap_err();
        assert!(err.to_string().contains("Non-numeric y coordinate \"abc\""));
    }

    #[test]
    fn test_vertex_extra_fields_counted() {
        match parse_record("V 1 0 0 0 7 8", 1).unwrap().unwrap() {
            Record::Vertex { extra_fields, .. } => assert_eq!(extra_fields, 2),
            other => panic!("expected vertex, got {:?}", other),
        }
    }

    #[test]
    fn test_surface_record() {
        let record = parse_record("S  9    1   2  15  14   0   7   0.90  srf-7b    ! combine", 29)
            .unwrap()
            .unwrap();
        match record {
            Record::Surface {
                surface,
                extra_fields,
            } => {
                assert_eq!(surface.index, 9);
                assert_eq!(surface.name, "srf-7b");
                assert_eq!(surface.vertices, [1, 2, 15, 14].map(Link::Unresolved));
                assert_eq!(surface.base, Link::Absent);
                assert_eq!(surface.combine, Link::Unresolved(7));
                assert_eq!(surface.emissivity, 0.9);
                assert_eq!(extra_fields, 0);
            }
            other => panic!("expected surface, got {:?}", other),
        }
    }

    #[test]
    fn test_surface_insufficient_data() {
        let err = parse_record("S 1 1 2 3 4 0 0 0.9", 4).unwrap_err();
        assert!(err.to_string().contains("Insufficient surface data"));
    }

    #[test]
    fn test_surface_conversion_errors_name_field() {
        let err = parse_record("S 1 1 2 x 4 0 0 0.9 a", 4).unwrap_err();
        assert!(err.to_string().contains("Non-integral vertex 3 number \"x\""));

        let err = parse_record("S 1 1 2 3 4 0 0 hot a", 4).unwrap_err();
        assert!(err.to_string().contains("Non-numeric emissivity \"hot\""));

        let err = parse_record("S 1 1 2 3 4 b 0 0.9 a", 4).unwrap_err();
        assert!(err.to_string().contains("Non-integral base surface number \"b\""));
    }
}
