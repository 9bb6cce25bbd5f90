//! Hover flashes: per-face color tweens that decay back to the plane color.

use glam::Vec3;

use super::PlaneMesh;
use crate::params::HoverConfig;
use crate::tween::Tween;

struct HoverFlash {
    face: [u32; 3],
    tween: Tween<Vec3>,
}

/// All in-flight hover flashes
///
/// Flashes are never cancelled. Several may cover the same vertex; they write in
/// start order each frame, so the newest one wins.
pub struct HoverFlashes {
    config: HoverConfig,
    active: Vec<HoverFlash>,
}

impl HoverFlashes {
    pub fn new(config: HoverConfig) -> Self {
        Self {
            config,
            active: Vec::new(),
        }
    }

    /// Flash the three vertices of `face`, starting at the hovered color
    pub fn start(&mut self, face: [u32; 3], mesh: &mut PlaneMesh) {
        let tween = Tween::new(
            self.config.hovered_color,
            mesh.config().color,
            self.config.duration_s,
        );
        paint(mesh, face, tween.value());
        self.active.push(HoverFlash { face, tween });
    }

    /// Step every flash and write its color; finished flashes write their final color and retire
    pub fn advance(&mut self, dt_s: f32, mesh: &mut PlaneMesh) {
        for flash in &mut self.active {
            let color = flash.tween.advance(dt_s);
            paint(mesh, flash.face, color);
        }
        self.active.retain(|flash| !flash.tween.is_finished());
    }

    /// Drop every flash without touching colors (face indices are stale after regeneration)
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

fn paint(mesh: &mut PlaneMesh, face: [u32; 3], color: Vec3) {
    for index in face {
        mesh.set_color(index, color);
    }
}
