//! Static star field backdrop.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::Rng;

use crate::params::StarFieldConfig;

/// One star (local position; the field's offset is applied by the renderer)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
}

/// Randomly scattered points, generated once and never modified
pub struct StarField {
    stars: Vec<StarVertex>,
    offset: Vec3,
}

impl StarField {
    pub fn generate<R: Rng>(config: &StarFieldConfig, rng: &mut R) -> Self {
        let half = config.spread / 2.0;
        let stars = (0..config.count)
            .map(|_| StarVertex {
                position: [
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                    rng.gen_range(-half..=half),
                ],
            })
            .collect();

        Self {
            stars,
            offset: config.offset,
        }
    }

    pub fn stars(&self) -> &[StarVertex] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// World-space translation of the whole field
    pub fn offset(&self) -> Vec3 {
        self.offset
    }
}
