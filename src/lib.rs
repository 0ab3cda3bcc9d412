//! # view3d
//!
//! A pure Rust reader and validator for View3D enclosure geometry.
//!
//! View3D input describes a radiative enclosure as a list of vertices and
//! planar surfaces, one record per line:
//!
//! ```text
//! T <title>
//! C <control parameters, kept verbatim>
//! F 3
//! V <index> <x> <y> <z>
//! S <index> <v1> <v2> <v3> <v4> <base> <combine> <emissivity> <name>
//! ! <comment>
//! E
//! ```
//!
//! Reading never stops at the first problem. Every record error is
//! collected, and once all lines are read the surface references are
//! resolved in four passes. Surfaces are only safe to use when
//! [`Model::errors`] is empty.
//!
//! ## Example
//!
//! ```
//! use view3d::Model;
//!
//! let model = Model::parse(
//!     "T triangle\nF 3\nV 1 0 0 0\nV 2 1 0 0\nV 3 0 1 0\nS 1 1 2 3 3 0 0 0.9 floor\nE",
//! );
//! assert!(model.is_valid(), "{}", model.error_report());
//! for surface in model.surfaces() {
//!     let vertices = model.surface_vertices(surface).unwrap();
//!     println!("{}: first vertex at {:?}", surface.name, vertices[0].coords());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
#[cfg(feature = "mesh-ops")]
pub mod mesh_ops;
pub mod model;
pub mod parser;
mod validator;
pub mod writer;

pub use error::{Error, Result};
pub use model::{
    CONTROL_KEY, FORMAT_VERSION, Link, LinkKind, Model, ParserConfig, Surface, Vertex, Warning,
};

use std::io::{BufRead, Write};
use std::path::Path;

impl Model {
    /// Read a sequence of lines, replacing the model's contents
    ///
    /// Returns `true` when no errors were found. On `false`, inspect
    /// [`Model::errors`]; surface references are left unresolved whenever a
    /// record could not be read.
    ///
    /// # Example
    ///
    /// ```
    /// use view3d::Model;
    ///
    /// let mut model = Model::new();
    /// assert!(!model.read(["V 1 0 0"]));
    /// assert!(model.errors()[0].to_string().contains("Insufficient vertex data"));
    /// ```
    pub fn read<I, S>(&mut self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.read_with_config(lines, &ParserConfig::default())
    }

    /// Read a sequence of lines with a custom configuration
    pub fn read_with_config<I, S>(&mut self, lines: I, config: &ParserConfig) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parser::read_lines(self, lines, config)
    }

    /// Read a model from text held in memory
    pub fn parse(text: &str) -> Self {
        let mut model = Model::new();
        model.read(text.lines());
        model
    }

    /// Read a model from a buffered reader
    ///
    /// Only I/O failures are returned as `Err`; problems with the geometry
    /// itself are recorded in the returned model's error log.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use view3d::Model;
    /// use std::fs::File;
    /// use std::io::BufReader;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("room.vs3")?;
    /// let model = Model::from_reader(BufReader::new(file))?;
    /// if !model.is_valid() {
    ///     eprintln!("Errors in input:\n{}", model.error_report());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        let mut model = Model::new();
        model.read(&lines);
        Ok(model)
    }

    /// Read a model from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Write the model in View3D line format
    ///
    /// # Example
    ///
    /// ```
    /// use view3d::Model;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::parse("T box\nF 3\nV 1 0 0 0\nE");
    /// let bytes = model.to_writer(Vec::new())?;
    /// let reread = Model::parse(std::str::from_utf8(&bytes)?);
    /// assert_eq!(reread.vertices(), model.vertices());
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<W> {
        crate::writer::write_vs3(self, &mut writer)?;
        Ok(writer)
    }

    /// Write the model to a file path
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = self.to_writer(std::io::BufWriter::new(file))?;
        writer.flush()?;
        Ok(())
    }
}
