//! # Parametric Surface Generation
//!
//! Each generator samples its surface over a 2D parameter grid, attaches a
//! tangent-space frame to every sample, and connects the grid into triangles
//! through [`GridResolution::triangulate`].
//!
//! Angular parameters are sampled over the closed interval `[0, 2π]`, so the
//! last column coincides with the first. The seam is intentionally not welded:
//! the duplicated column carries its own texture coordinates.

use super::grid::{edges_for_splits, GridResolution, Winding};
use super::{MeshData, SurfaceSample};
use cgmath::{InnerSpace, Vector3};
use std::f32::consts::PI;

#[inline]
fn to_array(v: Vector3<f32>) -> [f32; 3] {
    [v.x, v.y, v.z]
}

/// Generate a flat quad grid in the XZ plane at `y = 0`
///
/// # Arguments
/// * `width` - Extent along X (the `j` axis)
/// * `height` - Extent along Z (the `i` axis)
/// * `u_splits` - Interior subdivisions along the width
/// * `v_splits` - Interior subdivisions along the height
///
/// Positions step by `width / U_count` where `U_count` is the vertex count,
/// so the far edge stops one step short of the nominal extent. Texture
/// coordinates divide by the edge count and span exactly `[0, 1]`.
///
/// The frame is constant: tangent `+Z`, binormal `+X`, normal `+Y`.
pub fn generate_quad(width: f32, height: f32, u_splits: u32, v_splits: u32) -> MeshData {
    // outer loop walks the height, inner loop the width
    let grid = GridResolution::from_splits(v_splits, u_splits);
    let u_edges = edges_for_splits(u_splits) as f32;
    let v_edges = edges_for_splits(v_splits) as f32;
    let u_count = grid.inner_vertices as f32;
    let v_count = grid.outer_vertices as f32;

    let mut data = MeshData::with_capacity(grid.vertex_count(), grid.triangle_count());

    for i in 0..grid.outer_vertices {
        for j in 0..grid.inner_vertices {
            let (i, j) = (i as f32, j as f32);
            data.push_sample(SurfaceSample {
                position: [j * width / u_count, 0.0, i * height / v_count],
                normal: [0.0, 1.0, 0.0],
                tangent: [0.0, 0.0, 1.0],
                binormal: [1.0, 0.0, 0.0],
                texcoord: [j / u_edges, i / v_edges],
            });
        }
    }

    // Reverse winding faces +Y with this axis assignment. This departs from the
    // reference createQuad index order, whose triangles face -Y here.
    data.set_indices(grid.triangulate(Winding::Reverse));

    log::debug!(
        "Generated quad {}x{}: {} vertices, {} triangles",
        width,
        height,
        data.vertex_count(),
        data.triangle_count()
    );
    data
}

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `longitude_splits` - Interior subdivisions around the Y axis (`theta`)
/// * `latitude_splits` - Interior subdivisions from pole to pole (`phi`)
///
/// `theta` runs over `[0, 2π]` and `phi` over `[0, π]`, starting at the
/// south pole (`-Y`). The normal is rebuilt as `tangent × binormal` so it
/// always agrees with the frame used for normal mapping.
pub fn generate_sphere(radius: f32, longitude_splits: u32, latitude_splits: u32) -> MeshData {
    let grid = GridResolution::from_splits(longitude_splits, latitude_splits);
    let d_theta = 2.0 * PI / grid.outer_edges() as f32;
    let d_phi = PI / grid.inner_edges() as f32;
    let longitude_count = grid.outer_vertices as f32;
    let latitude_count = grid.inner_vertices as f32;

    let mut data = MeshData::with_capacity(grid.vertex_count(), grid.triangle_count());

    for i in 0..grid.outer_vertices {
        let theta = i as f32 * d_theta;
        let (sin_theta, cos_theta) = theta.sin_cos();

        // dP/dtheta, independent of phi
        let tangent = Vector3::new(cos_theta, 0.0, -sin_theta).normalize();

        for j in 0..grid.inner_vertices {
            let phi = j as f32 * d_phi;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = Vector3::new(
                radius * sin_theta * sin_phi,
                -radius * cos_phi,
                radius * cos_theta * sin_phi,
            );
            let binormal =
                Vector3::new(sin_theta * cos_phi, sin_phi, cos_theta * cos_phi).normalize();
            let normal = tangent.cross(binormal);

            data.push_sample(SurfaceSample {
                position: to_array(position),
                normal: to_array(normal),
                tangent: to_array(tangent),
                binormal: to_array(binormal),
                texcoord: [i as f32 / longitude_count, j as f32 / latitude_count],
            });
        }
    }

    data.set_indices(grid.triangulate(Winding::Reverse));

    log::debug!(
        "Generated sphere r={}: {} vertices, {} triangles",
        radius,
        data.vertex_count(),
        data.triangle_count()
    );
    data
}

/// Generate a flat ring (annulus) in the XY plane
///
/// # Arguments
/// * `radius` - Distance from the center to the middle of the band
/// * `spread_length` - Radial width of the band
/// * `circle_splits` - Interior subdivisions around the circle
/// * `spread_splits` - Interior subdivisions across the band
///
/// The band covers radial distances `[radius - spread_length/2, radius + spread_length/2]`.
/// Tangent is the radial direction, binormal the angular direction, and
/// the normal `tangent × binormal` is `+Z`.
pub fn generate_circle_ring(
    radius: f32,
    spread_length: f32,
    circle_splits: u32,
    spread_splits: u32,
) -> MeshData {
    let grid = GridResolution::from_splits(circle_splits, spread_splits);
    let spread_start = radius - 0.5 * spread_length;
    let d_theta = 2.0 * PI / grid.outer_edges() as f32;
    let d_spread = spread_length / grid.inner_edges() as f32;
    let circle_count = grid.outer_vertices as f32;
    let spread_count = grid.inner_vertices as f32;

    let mut data = MeshData::with_capacity(grid.vertex_count(), grid.triangle_count());

    for i in 0..grid.outer_vertices {
        let theta = i as f32 * d_theta;
        let (sin_theta, cos_theta) = theta.sin_cos();

        let tangent = Vector3::new(cos_theta, sin_theta, 0.0);
        let binormal = Vector3::new(-sin_theta, cos_theta, 0.0);
        let normal = tangent.cross(binormal);

        for j in 0..grid.inner_vertices {
            let distance = spread_start + j as f32 * d_spread;

            data.push_sample(SurfaceSample {
                position: [distance * cos_theta, distance * sin_theta, 0.0],
                normal: to_array(normal),
                tangent: to_array(tangent),
                binormal: to_array(binormal),
                texcoord: [j as f32 / spread_count, i as f32 / circle_count],
            });
        }
    }

    data.set_indices(grid.triangulate(Winding::Forward));

    log::debug!(
        "Generated circle ring r={} spread={}: {} vertices, {} triangles",
        radius,
        spread_length,
        data.vertex_count(),
        data.triangle_count()
    );
    data
}

/// Torus generation is not available yet.
///
/// Always returns the empty [`MeshData`] sentinel regardless of the inputs,
/// so callers can detect the gap with [`MeshData::is_empty`].
pub fn generate_torus(
    major_radius: f32,
    minor_radius: f32,
    major_splits: u32,
    minor_splits: u32,
) -> MeshData {
    log::warn!(
        "Torus generation is not implemented (R={}, r={}, splits {}x{}); returning an empty mesh",
        major_radius,
        minor_radius,
        major_splits,
        minor_splits
    );
    MeshData::default()
}
