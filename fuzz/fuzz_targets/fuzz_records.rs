#![no_main]

use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};

/// An enclosure built from structured random fields
#[derive(Debug)]
struct FuzzEnclosure {
    vertices: Vec<(i64, f64, f64, f64)>,
    surfaces: Vec<(i64, [i64; 4], i64, i64, f64)>,
}

impl<'a> Arbitrary<'a> for FuzzEnclosure {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=40)?;
        let mut vertices = Vec::new();
        for _ in 0..vertex_count {
            vertices.push((
                u.int_in_range(-2..=45)?,
                u.arbitrary()?,
                u.arbitrary()?,
                u.arbitrary()?,
            ));
        }

        // Indices stay near the valid range so that validation passes run
        let surface_count = u.int_in_range(0..=30)?;
        let mut surfaces = Vec::new();
        for _ in 0..surface_count {
            surfaces.push((
                u.int_in_range(-2..=35)?,
                [
                    u.int_in_range(-2..=45)?,
                    u.int_in_range(-2..=45)?,
                    u.int_in_range(-2..=45)?,
                    u.int_in_range(-2..=45)?,
                ],
                u.int_in_range(-2..=35)?,
                u.int_in_range(-2..=35)?,
                u.arbitrary()?,
            ));
        }

        Ok(FuzzEnclosure { vertices, surfaces })
    }
}

fuzz_target!(|enclosure: FuzzEnclosure| {
    let mut lines = vec!["F 3".to_string()];
    for (index, x, y, z) in &enclosure.vertices {
        lines.push(format!("V {} {} {} {}", index, x, y, z));
    }
    for (index, v, base, combine, emissivity) in &enclosure.surfaces {
        lines.push(format!(
            "S {} {} {} {} {} {} {} {} srf",
            index, v[0], v[1], v[2], v[3], base, combine, emissivity
        ));
    }

    let mut model = view3d::Model::new();
    let ok = model.read(&lines);
    assert_eq!(ok, model.errors().is_empty());

    if ok {
        for surface in model.surfaces() {
            if let Some(base) = model.surface(&surface.base) {
                assert!(base.index < surface.index);
            }
            if let Some(combine) = model.surface(&surface.combine) {
                assert!(combine.index < surface.index);
            }
        }
    }
});
