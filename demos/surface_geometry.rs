//! Print the area, normal and centroid of every surface
//!
//! Usage: `cargo run --example surface_geometry -- <file.vs3>`

use view3d::Model;
use view3d::mesh_ops::{compute_bounding_box, model_geometry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/l_shaped_room.vs3".to_string());

    let model = Model::from_path(&path)?;
    if !model.is_valid() {
        eprintln!("Errors in input:\n{}", model.error_report());
        std::process::exit(1);
    }

    let (min, max) = compute_bounding_box(&model)?;
    println!("Bounding box: {:?} to {:?}\n", min, max);

    println!("   #  name            area  shape          normal                centroid");
    let geometry = model_geometry(&model)?;
    let mut total = 0.0;
    for (surface, g) in model.surfaces().iter().zip(&geometry) {
        total += g.area;
        println!(
            "{:>4}  {:<12} {:>7.3}  {:<13} ({:>6.3} {:>6.3} {:>6.3})  ({:.3} {:.3} {:.3})",
            surface.index,
            surface.name,
            g.area,
            format!("{:?}", g.shape),
            g.normal.x,
            g.normal.y,
            g.normal.z,
            g.centroid.x,
            g.centroid.y,
            g.centroid.z
        );
    }
    println!("\nTotal area: {:.3}", total);

    Ok(())
}
