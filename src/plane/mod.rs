//! Displaced, vertex-colored plane with hover flashes.

mod hover;
mod mesh;

// Re-export public types
pub use hover::HoverFlashes;
pub use mesh::{grid_position, PlaneMesh};

use bytemuck::{Pod, Zeroable};

/// Vertex data for the plane mesh (position + linear RGB color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}
