//! Read a View3D geometry file and summarize it
//!
//! Usage: `cargo run --example parse_vs3 -- <file.vs3>`
//!
//! Without an argument the bundled L-shaped room is used.

use view3d::Model;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/l_shaped_room.vs3".to_string());

    println!("Reading {}...\n", path);
    let model = Model::from_path(&path)?;

    if !model.is_valid() {
        eprintln!("Errors in input:\n{}", model.error_report());
        std::process::exit(1);
    }

    for warning in model.warnings() {
        println!("{}", warning);
    }

    println!("Title:    {}", model.title());
    println!("Format:   {}", model.format().unwrap_or("(none)"));
    println!("Control:  {}", model.control().unwrap_or("(none)"));
    println!("Vertices: {}", model.vertices().len());
    println!("Surfaces: {}\n", model.surfaces().len());

    println!("   #  name          emit  verts  base  cmb");
    for surface in model.surfaces() {
        let base = model
            .surface(&surface.base)
            .map(|s| s.name.as_str())
            .unwrap_or("-");
        let combine = model
            .surface(&surface.combine)
            .map(|s| s.name.as_str())
            .unwrap_or("-");
        println!(
            "{:>4}  {:<12} {:>5.2}  {:>5}  {:<5} {}",
            surface.index,
            surface.name,
            surface.emissivity,
            surface.distinct_vertex_count(),
            base,
            combine
        );
    }

    Ok(())
}
