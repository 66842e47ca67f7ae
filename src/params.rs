// Tornado shape constants and the runtime-tunable parameter set.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

pub const BASE_FUNNEL_PARTICLE_COUNT: usize = 5000;
pub const BASE_DEBRIS_PARTICLE_COUNT: usize = 1000;
/// Upper bound on any one population, whatever the density multiplier.
pub const MAX_POPULATION: usize = 1_000_000;

pub const TORNADO_HEIGHT: f32 = 20.0;
pub const FUNNEL_PARTICLE_LIFETIME: i32 = 200;
pub const DEBRIS_PARTICLE_LIFETIME: i32 = 150;
pub const DEBRIS_GRAVITY: f32 = 0.001;

pub const CORE_RADIUS_RATIO: f32 = 0.3;
pub const DEBRIS_EMISSION_RATIO: f32 = 0.75;

/// Distance from the axis below which the inverse falloff and the pull are clamped.
pub const AXIS_EPSILON: f32 = 0.01;
/// Radius below which the inward pull tapers off linearly.
pub const NEAR_AXIS_PULL_RADIUS: f32 = 0.2;
/// Smallest spawn radius for funnel particles, keeps the apex off the axis.
pub const MIN_FUNNEL_SPAWN_RADIUS: f32 = 0.1;

pub const ROTATION_BLEND: f32 = 0.1;
pub const VERTICAL_BLEND: f32 = 0.05;

/// Debris vertical velocity under a held updraft target settles at
/// `target - DEBRIS_GRAVITY / VERTICAL_BLEND` by geometric decay (factor 0.95
/// per tick, no overshoot). Within 1% of the initial gap after this many ticks.
pub const DEBRIS_VELOCITY_SETTLE_TICKS: u32 = 90;

/// World units per tick the vortex moves for each held pan direction.
pub const PAN_SPEED: f32 = 0.1;

/// Externally mutable vortex configuration. Read once per tick as a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexParams {
    pub max_rotational_speed: f32,
    pub inward_pull_strength: f32,
    pub max_upward_velocity: f32,
    pub max_radius: f32,
    pub funnel_density: f64,
    pub debris_density: f64,
}

impl Default for VortexParams {
    fn default() -> Self {
        VortexParams {
            max_rotational_speed: 0.2,
            inward_pull_strength: 0.01,
            max_upward_velocity: 0.15,
            max_radius: 5.0,
            funnel_density: 1.0,
            debris_density: 1.0,
        }
    }
}

impl VortexParams {
    pub fn core_radius(&self) -> f32 {
        self.max_radius * CORE_RADIUS_RATIO
    }

    pub fn debris_emission_radius(&self) -> f32 {
        self.max_radius * DEBRIS_EMISSION_RATIO
    }

    pub fn funnel_count(&self) -> usize {
        scaled_count(BASE_FUNNEL_PARTICLE_COUNT, self.funnel_density)
    }

    pub fn debris_count(&self) -> usize {
        scaled_count(BASE_DEBRIS_PARTICLE_COUNT, self.debris_density)
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `floor(base * density)`, capped at `MAX_POPULATION`. Negative or NaN
/// densities saturate to zero.
pub fn scaled_count(base: usize, density: f64) -> usize {
    ((base as f64 * density).floor() as usize).min(MAX_POPULATION)
}
