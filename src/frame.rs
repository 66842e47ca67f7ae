// The vortex's reference frame. Particles live in frame-local coordinates;
// moving the tornado only moves this origin, the renderer applies it.

use crate::params::{PAN_SPEED, TORNADO_HEIGHT};

/// Which pan directions are currently held. Up is -z, left is -x.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

pub struct VortexFrame {
    pub origin: glm::Vec3,
    pub pan: PanInput,
    pending: glm::Vec3,
}

impl VortexFrame {
    pub fn new() -> Self {
        VortexFrame {
            origin: glm::vec3(0.0, 0.0, 0.0),
            pan: PanInput::default(),
            pending: glm::vec3(0.0, 0.0, 0.0),
        }
    }

    /// Queues a one-off horizontal move, consumed on the next tick.
    pub fn move_by(&mut self, delta_x: f32, delta_z: f32) {
        self.pending += glm::vec3(delta_x, 0.0, delta_z);
    }

    /// Applies held pan directions and any queued move. Called once per tick.
    pub fn advance(&mut self) {
        let mut step = self.pending;
        if self.pan.up {
            step.z -= PAN_SPEED;
        }
        if self.pan.down {
            step.z += PAN_SPEED;
        }
        if self.pan.left {
            step.x -= PAN_SPEED;
        }
        if self.pan.right {
            step.x += PAN_SPEED;
        }
        self.origin += step;
        self.pending = glm::vec3(0.0, 0.0, 0.0);
    }

    /// Point halfway up the funnel, for a camera to orbit around.
    pub fn focus_point(&self) -> glm::Vec3 {
        self.origin + glm::vec3(0.0, TORNADO_HEIGHT / 2.0, 0.0)
    }
}

impl Default for VortexFrame {
    fn default() -> Self {
        VortexFrame::new()
    }
}
