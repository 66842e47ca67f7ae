// Per-particle extended state. Positions live in the population's flat buffer;
// this record holds everything else for the same slot.

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Species {
    Funnel,
    Debris,
}

#[derive(Copy, Clone, Debug)]
pub struct ParticleState {
    pub velocity: glm::Vec3,
    /// Remaining ticks. Zero or below means the slot respawns this tick.
    pub lifetime: i32,
    /// Current angular position around the vortex axis, radians.
    pub phase: f32,
    /// Radians per tick, smoothed toward the force field's target.
    pub rotational_speed: f32,
}

impl ParticleState {
    /// Placeholder for a slot that has not been spawned yet. Fails `is_valid`.
    pub fn unspawned() -> ParticleState {
        ParticleState {
            velocity: glm::vec3(f32::NAN, f32::NAN, f32::NAN),
            lifetime: 0,
            phase: f32::NAN,
            rotational_speed: f32::NAN,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lifetime >= 0
            && self.phase.is_finite()
            && self.rotational_speed.is_finite()
            && self.velocity.iter().all(|v| v.is_finite())
    }
}
