//! Line-by-line reading of View3D geometry input
//!
//! Reading happens in two phases. First every line is classified and
//! converted; conversion errors are logged and reading continues with the
//! next line. Only an unsupported format version stops reading early. If the
//! first phase logged nothing, the validation passes resolve the surface
//! references.

pub mod record;

pub use record::{Record, RecordKind, parse_record};

use crate::error::Error;
use crate::model::{CONTROL_KEY, FORMAT_VERSION, Model, ParserConfig, Warning};
use crate::validator;

/// Read a sequence of lines into `model`, replacing its previous contents
///
/// Returns `true` when the model is free of errors, in which case all
/// surface references are resolved.
pub fn read_lines<I, S>(model: &mut Model, lines: I, config: &ParserConfig) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    model.clear();

    for (offset, line) in lines.into_iter().enumerate() {
        let line_number = offset + 1;
        let record = match parse_record(line.as_ref(), line_number) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(err) => {
                tracing::trace!(line = line_number, error = %err, "rejected record");
                model.errors.push(err);
                continue;
            }
        };

        match record {
            Record::Format(format) => {
                let supported = format == FORMAT_VERSION;
                model.format = Some(format.clone());
                if !supported {
                    tracing::error!(line = line_number, format = %format, "unsupported format");
                    model.errors.push(Error::UnsupportedFormat {
                        line: line_number,
                        format,
                    });
                    return false;
                }
            }
            Record::Title(title) => model.title = title,
            Record::Control(control) => {
                model.control.insert(CONTROL_KEY.to_string(), control);
            }
            Record::Vertex {
                vertex,
                extra_fields,
            } => {
                note_extra_fields(model, config, line_number, "vertex", extra_fields);
                model.vertices.push(vertex);
            }
            Record::Surface {
                surface,
                extra_fields,
            } => {
                note_extra_fields(model, config, line_number, "surface", extra_fields);
                model.surfaces.push(surface);
            }
            Record::Comment => {}
            Record::End => {
                tracing::trace!(line = line_number, "end of data");
                break;
            }
        }
    }

    if !model.errors.is_empty() {
        tracing::debug!(
            errors = model.errors.len(),
            "record errors, skipping validation"
        );
        return false;
    }

    validator::validate_model(model)
}

fn note_extra_fields(
    model: &mut Model,
    config: &ParserConfig,
    line: usize,
    record: &str,
    extra_fields: usize,
) {
    if extra_fields == 0 || !config.warns_on_extra_fields() {
        return;
    }
    tracing::warn!(line, extra_fields, "ignoring extra {} fields", record);
    model.warnings.push(Warning {
        line,
        message: format!("Ignoring {} extra {} field(s)", extra_fields, record),
    });
}
