//! Plane grid generation, jitter and per-frame displacement.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

use super::Vertex;
use crate::params::PlaneConfig;
use crate::picking::{self, Aabb, Hit, Ray};

/// Plane grid with immutable jittered originals and animated positions
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Jittered rest positions, fixed at generation
    original_positions: Vec<Vec3>,
    /// Per-vertex animation phase in [0, 2π)
    phases: Vec<f32>,
    config: PlaneConfig,
    /// Vertex data changed since the renderer last uploaded it
    dirty: bool,
}

/// Un-jittered position of grid vertex (ix, iy), row 0 at the top edge
pub fn grid_position(config: &PlaneConfig, ix: u32, iy: u32) -> Vec3 {
    let cell_w = config.width / config.width_segments as f32;
    let cell_h = config.height / config.height_segments as f32;
    let x = ix as f32 * cell_w - config.width / 2.0;
    let y = iy as f32 * cell_h - config.height / 2.0;
    Vec3::new(x, -y, 0.0)
}

impl PlaneMesh {
    /// Build a fresh plane: grid topology, random jitter, random phases, base color
    pub fn generate<R: Rng>(config: &PlaneConfig, rng: &mut R) -> Self {
        let columns = config.width_segments + 1;
        let rows = config.height_segments + 1;
        let vertex_count = (columns * rows) as usize;
        let jitter = config.jitter;
        let color = config.color.to_array();

        let mut vertices = Vec::with_capacity(vertex_count);
        let mut original_positions = Vec::with_capacity(vertex_count);
        let mut phases = Vec::with_capacity(vertex_count);

        for iy in 0..rows {
            for ix in 0..columns {
                let offset = Vec3::new(
                    rng.gen_range(-jitter..=jitter),
                    rng.gen_range(-jitter..=jitter),
                    rng.gen_range(-jitter..=jitter),
                );
                let position = grid_position(config, ix, iy) + offset;

                original_positions.push(position);
                phases.push(rng.gen_range(0.0..TAU));
                vertices.push(Vertex {
                    position: position.to_array(),
                    color,
                });
            }
        }

        // Two triangles per cell, counter-clockwise seen from +Z
        let mut indices =
            Vec::with_capacity((config.width_segments * config.height_segments * 6) as usize);
        for iy in 0..config.height_segments {
            for ix in 0..config.width_segments {
                let a = ix + columns * iy;
                let b = ix + columns * (iy + 1);
                let c = b + 1;
                let d = a + 1;

                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            original_positions,
            phases,
            config: config.clone(),
            dirty: true,
        }
    }

    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn original_position(&self, index: usize) -> Vec3 {
        self.original_positions[index]
    }

    pub fn phase(&self, index: usize) -> f32 {
        self.phases[index]
    }

    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.vertices[index].position)
    }

    pub fn color(&self, index: usize) -> Vec3 {
        Vec3::from_array(self.vertices[index].color)
    }

    /// Offset of a vertex with the given phase at animation time `time`
    ///
    /// Z is never displaced.
    pub fn displacement(time: f32, phase: f32, amplitude: f32) -> Vec3 {
        Vec3::new(
            (time + phase).cos() * amplitude,
            (time + phase).sin() * amplitude,
            0.0,
        )
    }

    /// Recompute every vertex from its original position
    pub fn displace(&mut self, time: f32, amplitude: f32) {
        for ((vertex, original), phase) in self
            .vertices
            .iter_mut()
            .zip(&self.original_positions)
            .zip(&self.phases)
        {
            let offset = Self::displacement(time, *phase, amplitude);
            vertex.position = [
                original.x + offset.x,
                original.y + offset.y,
                original.z,
            ];
        }
        self.dirty = true;
    }

    pub fn set_color(&mut self, index: u32, color: Vec3) {
        if let Some(vertex) = self.vertices.get_mut(index as usize) {
            vertex.color = color.to_array();
            self.dirty = true;
        }
    }

    /// Nearest face hit by the ray, seen from either side
    pub fn raycast(&self, ray: &Ray) -> Option<Hit> {
        let positions: Vec<Vec3> = (0..self.vertex_count()).map(|i| self.position(i)).collect();

        let bounds = Aabb::from_points(positions.iter().copied())?;
        if !bounds.intersects(ray) {
            return None;
        }

        picking::intersect_mesh(ray, &positions, &self.indices)
    }

    /// Return whether vertex data changed since the last call, clearing the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
