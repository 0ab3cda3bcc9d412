//! Writing models back to View3D line format
//!
//! Output uses format version 3 and ends with an end-of-data record.
//! Resolved references are written as 1-based numbers and absent ones as 0,
//! so a valid model reads back to the same vertices and surfaces.

use crate::error::Result;
use crate::model::{FORMAT_VERSION, Model, Surface, Vertex};
use std::io::Write;

/// Write a model to `writer`
pub fn write_vs3<W: Write>(model: &Model, writer: &mut W) -> Result<()> {
    if !model.title().is_empty() {
        writeln!(writer, "T {}", model.title())?;
    }
    if let Some(control) = model.control() {
        writeln!(writer, "C {}", control)?;
    }
    writeln!(writer, "F {}", FORMAT_VERSION)?;

    if !model.vertices().is_empty() {
        writeln!(writer, "!  #   x    y    z      coordinates of vertices")?;
        for vertex in model.vertices() {
            write_vertex(writer, vertex)?;
        }
    }

    if !model.surfaces().is_empty() {
        writeln!(
            writer,
            "!  #   v1  v2  v3  v4 base cmb  emit  name      surface data"
        )?;
        for surface in model.surfaces() {
            write_surface(writer, surface)?;
        }
    }

    writeln!(writer, "End of data")?;
    Ok(())
}

/// Write a model to a string
pub fn to_vs3_string(model: &Model) -> Result<String> {
    let mut buffer = Vec::new();
    write_vs3(model, &mut buffer)?;
    // Every piece written above is valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_vertex<W: Write>(writer: &mut W, vertex: &Vertex) -> Result<()> {
    writeln!(
        writer,
        "V {:>2} {} {} {}",
        vertex.index, vertex.x, vertex.y, vertex.z
    )?;
    Ok(())
}

fn write_surface<W: Write>(writer: &mut W, surface: &Surface) -> Result<()> {
    let [v1, v2, v3, v4] = surface.vertices.map(|link| link.number());
    writeln!(
        writer,
        "S {:>2} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {} {}",
        surface.index,
        v1,
        v2,
        v3,
        v4,
        surface.base.number(),
        surface.combine.number(),
        surface.emissivity,
        surface.name
    )?;
    Ok(())
}
