//! Data structures representing View3D enclosure geometry

use crate::error::Error;
use std::collections::HashMap;
use std::fmt;

/// The only geometry format version this reader accepts
pub const FORMAT_VERSION: &str = "3";

/// Key under which the raw control record is stored
pub const CONTROL_KEY: &str = "all";

/// A reference from a surface to a vertex or to another surface
///
/// References start out as the raw integer read from the input and are
/// replaced during validation by the 0-based position of the referenced
/// entity in its owning list, or by [`Link::Absent`] when the reference is
/// empty or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Link {
    /// Raw 1-based index as written in the input
    Unresolved(i64),
    /// 0-based position in the model's vertex or surface list
    Resolved(usize),
    /// No reference
    Absent,
}

impl Link {
    /// Build a surface link from a raw field, where 0 means "none"
    pub fn optional(raw: i64) -> Self {
        if raw == 0 {
            Link::Absent
        } else {
            Link::Unresolved(raw)
        }
    }

    /// The resolved 0-based position, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            Link::Resolved(position) => Some(*position),
            _ => None,
        }
    }

    /// Whether this link has been resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, Link::Resolved(_))
    }

    /// Whether this link is still the raw value from the input
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Link::Unresolved(_))
    }

    /// The 1-based number this link would be written as (0 when absent)
    pub fn number(&self) -> i64 {
        match self {
            Link::Unresolved(raw) => *raw,
            Link::Resolved(position) => *position as i64 + 1,
            Link::Absent => 0,
        }
    }
}

/// Which surface-to-surface reference a link represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkKind {
    /// Base surface (the surface a subsurface lies on)
    Base,
    /// Combination surface (results are merged into it)
    Combine,
}

impl LinkKind {
    /// Lower-case name used inside messages
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Base => "base",
            LinkKind::Combine => "combination",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Base => write!(f, "Base"),
            LinkKind::Combine => write!(f, "Combination"),
        }
    }
}

/// A vertex of the enclosure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Declared 1-based index
    pub index: i64,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(index: i64, x: f64, y: f64, z: f64) -> Self {
        Self { index, x, y, z }
    }

    /// Coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// A planar surface with four vertex slots
///
/// Triangles repeat one of their vertices, so all four slots are always
/// present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface {
    /// Surface name
    pub name: String,
    /// Declared 1-based index
    pub index: i64,
    /// Vertex references in order
    pub vertices: [Link; 4],
    /// Emissivity
    pub emissivity: f64,
    /// Base surface reference
    pub base: Link,
    /// Combination surface reference
    pub combine: Link,
}

impl Surface {
    /// Create a surface from the raw integer fields of a record
    pub fn new(
        name: impl Into<String>,
        index: i64,
        vertices: [i64; 4],
        emissivity: f64,
        base: i64,
        combine: i64,
    ) -> Self {
        Self {
            name: name.into(),
            index,
            vertices: vertices.map(Link::Unresolved),
            emissivity,
            base: Link::optional(base),
            combine: Link::optional(combine),
        }
    }

    /// The link for a base or combination reference
    pub fn link(&self, kind: LinkKind) -> &Link {
        match kind {
            LinkKind::Base => &self.base,
            LinkKind::Combine => &self.combine,
        }
    }

    pub(crate) fn link_mut(&mut self, kind: LinkKind) -> &mut Link {
        match kind {
            LinkKind::Base => &mut self.base,
            LinkKind::Combine => &mut self.combine,
        }
    }

    /// Resolved vertex positions, if all four slots are resolved
    pub fn vertex_positions(&self) -> Option<[usize; 4]> {
        let mut positions = [0; 4];
        for (slot, link) in positions.iter_mut().zip(&self.vertices) {
            *slot = link.position()?;
        }
        Some(positions)
    }

    /// Number of distinct resolved vertices (0 if any slot is unresolved)
    pub fn distinct_vertex_count(&self) -> usize {
        match self.vertex_positions() {
            Some(mut positions) => {
                positions.sort_unstable();
                1 + positions.windows(2).filter(|w| w[0] != w[1]).count()
            }
            None => 0,
        }
    }

    /// Whether the surface is a triangle encoded by repeating a vertex
    pub fn is_triangle(&self) -> bool {
        self.distinct_vertex_count() == 3
    }
}

/// A non-fatal remark about the input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    /// 1-based line number
    pub line: usize,
    /// Description
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Warning on line {}: {}", self.line, self.message)
    }
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    warn_on_extra_fields: bool,
}

impl ParserConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            warn_on_extra_fields: true,
        }
    }

    /// Record a warning for `V`/`S` lines that carry unused fields
    ///
    /// Fields after a token starting with `!` are an inline comment and never
    /// produce a warning.
    pub fn with_extra_field_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_extra_fields = enabled;
        self
    }

    /// Whether extra fields produce warnings
    pub fn warns_on_extra_fields(&self) -> bool {
        self.warn_on_extra_fields
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A View3D enclosure model
///
/// A model is filled by [`Model::read`]. Surface references are only
/// resolved when the error log is empty, so callers must check
/// [`Model::errors`] (or [`Model::is_valid`]) before using surfaces.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    pub(crate) title: String,
    pub(crate) format: Option<String>,
    pub(crate) control: HashMap<String, String>,
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) surfaces: Vec<Surface>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) errors: Vec<Error>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) warnings: Vec<Warning>,
}

impl Model {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the model to its empty state
    pub fn clear(&mut self) {
        self.title.clear();
        self.format = None;
        self.control.clear();
        self.vertices.clear();
        self.surfaces.clear();
        self.errors.clear();
        self.warnings.clear();
    }

    /// Title line text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Format version, if a format record was present
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Control records keyed by [`CONTROL_KEY`]
    pub fn control_map(&self) -> &HashMap<String, String> {
        &self.control
    }

    /// The raw control record text, if present
    pub fn control(&self) -> Option<&str> {
        self.control.get(CONTROL_KEY).map(String::as_str)
    }

    /// Vertices in input order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Surfaces in input order
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// All errors found by the last read, in the order they were found
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Non-fatal remarks from the last read
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether the last read produced no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rendered error messages
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// All error messages joined by newlines, for presenting to a user
    pub fn error_report(&self) -> String {
        self.error_messages().join("\n")
    }

    /// The vertex a resolved link points to
    pub fn vertex(&self, link: &Link) -> Option<&Vertex> {
        link.position().and_then(|p| self.vertices.get(p))
    }

    /// The surface a resolved link points to
    pub fn surface(&self, link: &Link) -> Option<&Surface> {
        link.position().and_then(|p| self.surfaces.get(p))
    }

    /// The four vertices of a surface, if all slots are resolved
    pub fn surface_vertices(&self, surface: &Surface) -> Option<[&Vertex; 4]> {
        let [a, b, c, d] = surface.vertex_positions()?;
        Some([
            self.vertices.get(a)?,
            self.vertices.get(b)?,
            self.vertices.get(c)?,
            self.vertices.get(d)?,
        ])
    }
}
