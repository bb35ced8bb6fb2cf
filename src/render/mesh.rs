// Procedural stand-in for the scene's figure: a surface of revolution built
// from a height/radius profile, on a dark ground disc.

use glam::Vec3;
use tribute_core::error::Result;
use tribute_core::KeyframeTrack;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub albedo: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u16;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }
}

// (height, radius) from the base of the figure up to the crown of the head
pub const FIGURE_PROFILE: [(f32, f32); 12] = [
    (-1.0, 0.62),
    (-0.85, 0.66),
    (-0.6, 0.56),
    (-0.3, 0.40),
    (0.0, 0.34),
    (0.25, 0.42),
    (0.42, 0.30),
    (0.52, 0.14),
    (0.62, 0.16),
    (0.78, 0.27),
    (0.98, 0.24),
    (1.12, 0.0),
];

pub const FIGURE_ALBEDO: [f32; 3] = [0.78, 0.74, 0.70];
pub const GROUND_ALBEDO: [f32; 3] = [0.05, 0.05, 0.07];
pub const GROUND_Y: f32 = -1.05;
pub const GROUND_RADIUS: f32 = 1.6;

/// Revolve `profile` around the Y axis. `rings` samples are taken evenly
/// along the profile's height; normals come from the sampled slope.
pub fn lathe(profile: &[(f32, f32)], rings: u32, segments: u32, albedo: [f32; 3]) -> Result<MeshData> {
    let track = KeyframeTrack::from_scalars("figure profile", profile)?;
    let rings = rings.max(2);
    let segments = segments.max(3);
    let (y0, y1) = (track.start_time(), track.end_time());
    let dy = (y1 - y0) / (rings - 1) as f32;

    let mut mesh = MeshData::default();
    for ring in 0..rings {
        let y = y0 + dy * ring as f32;
        let r = track.sample(y).max(0.0);
        // central difference of r(y), one-sided at the ends
        let r_lo = track.sample((y - dy).max(y0));
        let r_hi = track.sample((y + dy).min(y1));
        let span = ((y + dy).min(y1) - (y - dy).max(y0)).max(f32::EPSILON);
        let slope = (r_hi - r_lo) / span;
        // outward normal of the profile curve in (radial, y)
        let n2 = glam::Vec2::new(1.0, -slope).normalize_or_zero();
        for seg in 0..=segments {
            let theta = seg as f32 / segments as f32 * std::f32::consts::TAU;
            let (s, c) = theta.sin_cos();
            mesh.vertices.push(Vertex {
                position: [r * c, y, r * s],
                normal: Vec3::new(n2.x * c, n2.y, n2.x * s).normalize_or_zero().to_array(),
                albedo,
            });
        }
    }
    let stride = (segments + 1) as u16;
    for ring in 0..(rings - 1) as u16 {
        for seg in 0..segments as u16 {
            let a = ring * stride + seg;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    Ok(mesh)
}

pub fn ground_disc(y: f32, radius: f32, segments: u32, albedo: [f32; 3]) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();
    mesh.vertices.push(Vertex {
        position: [0.0, y, 0.0],
        normal: [0.0, 1.0, 0.0],
        albedo,
    });
    for seg in 0..=segments {
        let theta = seg as f32 / segments as f32 * std::f32::consts::TAU;
        let (s, c) = theta.sin_cos();
        mesh.vertices.push(Vertex {
            position: [radius * c, y, radius * s],
            normal: [0.0, 1.0, 0.0],
            albedo,
        });
    }
    for seg in 1..=segments as u16 {
        mesh.indices.extend_from_slice(&[0, seg + 1, seg]);
    }
    mesh
}

pub fn stand_in_figure(rings: u32, segments: u32) -> Result<MeshData> {
    let mut mesh = lathe(&FIGURE_PROFILE, rings, segments, FIGURE_ALBEDO)?;
    mesh.append(ground_disc(GROUND_Y, GROUND_RADIUS, segments, GROUND_ALBEDO));
    Ok(mesh)
}
