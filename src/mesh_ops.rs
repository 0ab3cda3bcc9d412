//! Surface geometry using nalgebra
//!
//! This module derives per-surface quantities from the resolved vertices:
//! - Shape (triangle, parallelogram, other)
//! - Area
//! - Direction cosines of the unit normal and the plane offset
//! - Area-weighted centroid
//! - Radius of the sphere around the centroid enclosing the surface
//!
//! All functions require resolved references and return
//! [`Error::Unresolved`] otherwise.

use crate::error::{Error, Result};
use crate::model::{Model, Surface, Vertex};
use nalgebra::{Point3, Vector3};

/// A 3D point represented as (x, y, z)
pub type Point3d = (f64, f64, f64);

/// An axis-aligned bounding box represented as (min_point, max_point)
pub type BoundingBox = (Point3d, Point3d);

/// Twice-area below which a surface counts as degenerate
const MIN_DOUBLE_AREA: f64 = 1.0e-12;

/// Relative tolerance for the parallelogram check
const SHAPE_TOLERANCE: f64 = 1.0e-6;

/// Classification of a surface outline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceShape {
    /// Three distinct vertices
    Triangle,
    /// Four vertices with opposite sides parallel
    Parallelogram,
    /// Any other quadrilateral
    Other,
}

/// Geometric properties of one surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGeometry {
    /// Outline classification
    pub shape: SurfaceShape,
    /// Number of distinct vertices (3 or 4)
    pub vertex_count: usize,
    /// Surface area
    pub area: f64,
    /// Unit normal (direction cosines), right-handed in vertex order
    pub normal: Vector3<f64>,
    /// Signed plane offset: `normal . p + w == 0` for points `p` on the plane
    pub w: f64,
    /// Area-weighted centroid
    pub centroid: Point3<f64>,
    /// Largest distance from the centroid to a vertex
    pub radius: f64,
}

/// Compute the geometry of one surface of a validated model
pub fn surface_geometry(model: &Model, surface: &Surface) -> Result<SurfaceGeometry> {
    let vertices = model.surface_vertices(surface).ok_or_else(|| {
        Error::Unresolved(format!(
            "surface {} has unresolved vertex references",
            surface.index
        ))
    })?;
    let outline = outline(&vertices);
    if outline.len() < 3 {
        return Err(Error::Geometry(format!(
            "surface {} has only {} distinct vertices",
            surface.index,
            outline.len()
        )));
    }

    // Fan triangulation from the first vertex
    let origin = outline[0];
    let mut double_area = Vector3::zeros();
    let mut weighted = Vector3::zeros();
    let mut weight = 0.0;
    for pair in outline[1..].windows(2) {
        let cross = (pair[0] - origin).cross(&(pair[1] - origin));
        double_area += cross;
        let centre = (origin.coords + pair[0].coords + pair[1].coords) / 3.0;
        weighted += centre * cross.norm();
        weight += cross.norm();
    }

    let length = double_area.norm();
    if length < MIN_DOUBLE_AREA {
        return Err(Error::Geometry(format!(
            "surface {} has zero area",
            surface.index
        )));
    }

    let normal = double_area / length;
    let centroid = Point3::from(weighted / weight);
    let radius = outline
        .iter()
        .map(|p| (*p - centroid).norm())
        .fold(0.0, f64::max);

    Ok(SurfaceGeometry {
        shape: classify(&outline),
        vertex_count: outline.len(),
        area: 0.5 * length,
        normal,
        w: -normal.dot(&centroid.coords),
        centroid,
        radius,
    })
}

/// Compute the geometry of every surface in a validated model
pub fn model_geometry(model: &Model) -> Result<Vec<SurfaceGeometry>> {
    if !model.is_valid() {
        return Err(Error::Unresolved(format!(
            "model has {} error(s)",
            model.errors().len()
        )));
    }
    model
        .surfaces()
        .iter()
        .map(|surface| surface_geometry(model, surface))
        .collect()
}

/// Total area of all surfaces in a validated model
pub fn total_area(model: &Model) -> Result<f64> {
    Ok(model_geometry(model)?.iter().map(|g| g.area).sum())
}

/// Compute the axis-aligned bounding box of all vertices
pub fn compute_bounding_box(model: &Model) -> Result<BoundingBox> {
    let mut vertices = model.vertices().iter();
    let first = vertices
        .next()
        .ok_or_else(|| Error::Geometry("Cannot compute bounding box of empty model".to_string()))?;

    let start = (point(first), point(first));
    let (min, max) = vertices.fold(start, |(min, max), v| {
        let p = point(v);
        (min.inf(&p), max.sup(&p))
    });
    Ok(((min.x, min.y, min.z), (max.x, max.y, max.z)))
}

fn point(vertex: &Vertex) -> Point3<f64> {
    Point3::new(vertex.x, vertex.y, vertex.z)
}

/// Distinct vertices in order, dropping repeats of earlier slots
fn outline(vertices: &[&Vertex; 4]) -> Vec<Point3<f64>> {
    let mut points: Vec<Point3<f64>> = Vec::with_capacity(4);
    for (slot, vertex) in vertices.iter().enumerate() {
        if vertices[..slot].iter().any(|earlier| earlier.index == vertex.index) {
            continue;
        }
        points.push(point(vertex));
    }
    points
}

fn classify(outline: &[Point3<f64>]) -> SurfaceShape {
    match outline {
        [_, _, _] => SurfaceShape::Triangle,
        [a, b, c, d] => {
            let diagonal_gap = (a.coords + c.coords) - (b.coords + d.coords);
            let scale = (*c - *a).norm().max((*d - *b).norm());
            if diagonal_gap.norm() <= SHAPE_TOLERANCE * scale {
                SurfaceShape::Parallelogram
            } else {
                SurfaceShape::Other
            }
        }
        _ => SurfaceShape::Other,
    }
}
