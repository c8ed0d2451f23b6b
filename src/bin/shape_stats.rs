//! Generates one parametric shape and prints its buffer statistics.
//!
//! ```text
//! shape_stats <quad|sphere|ring|torus|room> [splits]
//! ```
//!
//! Set `RUST_LOG=debug` to see generator logging.

use anyhow::{bail, Context, Result};
use parametric_shapes::error::split_count;
use parametric_shapes::gfx::geometry::{PackedMesh, ShapeDescriptor};
use parametric_shapes::gfx::scene::RoomConfig;
use parametric_shapes::MeshData;

fn shape_from_args(name: &str, splits: u32) -> Result<ShapeDescriptor> {
    let shape = match name {
        "quad" => ShapeDescriptor::Quad {
            width: 10.0,
            height: 10.0,
            u_splits: splits,
            v_splits: splits,
        },
        "sphere" => ShapeDescriptor::Sphere {
            radius: 1.0,
            longitude_splits: splits,
            latitude_splits: splits,
        },
        "ring" => ShapeDescriptor::CircleRing {
            radius: 2.0,
            spread_length: 0.5,
            circle_splits: splits,
            spread_splits: splits,
        },
        "torus" => ShapeDescriptor::Torus {
            major_radius: 2.0,
            minor_radius: 0.5,
            major_splits: splits,
            minor_splits: splits,
        },
        other => bail!("Unknown shape '{}' (expected quad, sphere, ring, torus or room)", other),
    };
    Ok(shape)
}

fn print_stats(label: &str, mesh: &MeshData) -> Result<()> {
    mesh.validate()
        .with_context(|| format!("Generated {} mesh is inconsistent", label))?;

    let packed = PackedMesh::pack(mesh);
    let (min, max) = mesh.bounding_box();

    println!("=== {} ===", label);
    println!("Vertices:  {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());
    println!("Bounds:    {:?} .. {:?}", min, max);
    println!(
        "Attribute bytes: {} x 5 = {}",
        mesh.attribute_byte_size(),
        packed.layout.total_size()
    );
    println!("Index bytes:     {}", mesh.index_byte_size());
    for region in packed.layout.regions() {
        println!(
            "  {:<9} offset {:>8}  size {:>8}",
            region.attribute.name(),
            region.offset,
            region.size
        );
    }
    if mesh.is_empty() {
        println!("(shape not available: empty mesh)");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "sphere".to_string());
    let splits: i64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Split count '{}' is not an integer", raw))?,
        None => 8,
    };
    let splits = split_count("splits", splits)?;

    if name == "room" {
        let scene = RoomConfig {
            u_splits: splits,
            v_splits: splits,
            ..RoomConfig::default()
        }
        .build_scene();
        for node in scene.nodes() {
            print_stats(&node.name, node.mesh())?;
            println!("World bounds: {:?}", node.world_bounds());
        }
        return Ok(());
    }

    let shape = shape_from_args(&name, splits)?;
    log::info!("Generating {} with {} splits", shape.name(), splits);
    print_stats(shape.name(), &shape.generate())
}
