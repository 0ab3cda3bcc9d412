//! Structural validation and reference resolution
//!
//! The passes run in a fixed order and each one only runs if every earlier
//! pass logged nothing. Within a pass every entry is checked, so one pass
//! can report many problems.

use crate::error::Error;
use crate::model::{Link, LinkKind, Model};

/// Run all validation passes, returning whether the model is error free
pub(crate) fn validate_model(model: &mut Model) -> bool {
    let passes: [(&str, fn(&mut Model)); 4] = [
        ("index order", validate_index_order),
        ("vertex references", resolve_vertex_links),
        ("base references", |model| {
            resolve_surface_links(model, LinkKind::Base)
        }),
        ("combination references", |model| {
            resolve_surface_links(model, LinkKind::Combine)
        }),
    ];

    for (name, pass) in passes {
        pass(model);
        if !model.errors.is_empty() {
            tracing::debug!(pass = name, errors = model.errors.len(), "validation failed");
            return false;
        }
        tracing::debug!(pass = name, "validation pass complete");
    }
    true
}

/// Declared indices must equal 1-based positions
fn validate_index_order(model: &mut Model) {
    for (position, vertex) in (1..).zip(&model.vertices) {
        if vertex.index != position as i64 {
            model.errors.push(Error::IndexMismatch {
                entity: "vertex",
                position,
                index: vertex.index,
            });
        }
    }
    for (position, surface) in (1..).zip(&model.surfaces) {
        if surface.index != position as i64 {
            model.errors.push(Error::IndexMismatch {
                entity: "surface",
                position,
                index: surface.index,
            });
        }
    }
}

/// Replace raw vertex numbers with vertex positions
///
/// Slots that fail are set to [`Link::Absent`]; the other slots of the same
/// surface are still resolved.
fn resolve_vertex_links(model: &mut Model) {
    let count = model.vertices.len();
    for surface in &mut model.surfaces {
        for slot in &mut surface.vertices {
            let Link::Unresolved(raw) = *slot else {
                continue;
            };
            *slot = match raw {
                raw if raw < 0 => {
                    model.errors.push(Error::NegativeVertexIndex {
                        surface: surface.index,
                        value: raw,
                    });
                    Link::Absent
                }
                0 => {
                    model.errors.push(Error::ZeroVertexIndex {
                        surface: surface.index,
                    });
                    Link::Absent
                }
                raw if raw as u64 > count as u64 => {
                    model.errors.push(Error::VertexIndexTooLarge {
                        surface: surface.index,
                        value: raw,
                        count,
                    });
                    Link::Absent
                }
                raw => Link::Resolved(raw as usize - 1),
            };
        }
    }
}

/// Replace raw base or combination numbers with surface positions
///
/// A reference must name an earlier surface, which rules out cycles. Runs
/// only after index order is confirmed, so a surface's index is its
/// position.
fn resolve_surface_links(model: &mut Model, kind: LinkKind) {
    for surface in &mut model.surfaces {
        let own = surface.index;
        let link = surface.link_mut(kind);
        let Link::Unresolved(raw) = *link else {
            continue;
        };
        *link = if raw == 0 {
            Link::Absent
        } else if raw >= own {
            model.errors.push(Error::LinkNotLess {
                surface: own,
                link: kind,
                value: raw,
            });
            Link::Absent
        } else if raw < 0 {
            model.errors.push(Error::NegativeLink {
                surface: own,
                link: kind,
                value: raw,
            });
            Link::Absent
        } else {
            Link::Resolved(raw as usize - 1)
        };
    }
}
