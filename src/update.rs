// Per-tick update passes. Each walks the flat position buffer three floats at a
// time in lockstep with the extended-state slice, so slot `i` always pairs
// `positions[3 * i..3 * i + 3]` with `states[i]`. No allocation happens here.

use crate::forces::{
    contract, damp, orbit, pull_factor, radial_distance, target_rotational_speed, updraft_factor,
};
use crate::params::{VortexParams, DEBRIS_GRAVITY, ROTATION_BLEND, TORNADO_HEIGHT, VERTICAL_BLEND};
use crate::particle::ParticleState;
use crate::spawn::{spawn_debris, spawn_funnel};
use rand::Rng;
use std::f32::consts::PI;

const FUNNEL_CEILING: f32 = TORNADO_HEIGHT * 1.1;
const FUNNEL_FLOOR: f32 = -0.5;
const FUNNEL_UPDRAFT_FADE: f32 = 0.75;

const DEBRIS_CEILING: f32 = TORNADO_HEIGHT * 0.75;
const DEBRIS_FLOOR: f32 = 0.0;
const DEBRIS_PULL_FADE_HEIGHT: f32 = TORNADO_HEIGHT * 0.75;
const DEBRIS_PULL_SCALE: f32 = 0.5;
const DEBRIS_UPDRAFT_SCALE: f32 = 0.75;
const DEBRIS_UPDRAFT_FADE: f32 = 0.85;
const DEBRIS_ESCAPE_RADIUS: f32 = 1.5;

fn is_intact(pos: &[f32], state: &ParticleState) -> bool {
    state.is_valid() && pos.iter().all(|p| p.is_finite())
}

/// Spins the particle around the axis at its current radius and returns the
/// new horizontal position. The radius is untouched.
fn swirl(state: &mut ParticleState, radius: f32, params: &VortexParams) -> [f32; 2] {
    let target = target_rotational_speed(radius, params.core_radius(), params.max_rotational_speed);
    state.rotational_speed = damp(state.rotational_speed, target, ROTATION_BLEND);
    state.phase = (state.phase + state.rotational_speed).rem_euclid(PI * 2.0);
    orbit(radius, state.phase)
}

/// Advances every funnel particle by one tick. Returns how many slots respawned.
pub fn update_funnel<R: Rng>(
    rng: &mut R,
    params: &VortexParams,
    positions: &mut [f32],
    states: &mut [ParticleState],
) -> usize {
    let mut respawned = 0;
    for (pos, state) in positions.chunks_exact_mut(3).zip(states.iter_mut()) {
        if !is_intact(pos, state) {
            spawn_funnel(rng, params, pos, state);
        }

        state.lifetime -= 1;
        if state.lifetime <= 0 {
            spawn_funnel(rng, params, pos, state);
            respawned += 1;
            continue;
        }

        let y = pos[1];
        let radius = radial_distance(pos);

        let horizontal = swirl(state, radius, params);
        let pull = pull_factor(params.inward_pull_strength, y, TORNADO_HEIGHT, radius);
        let [x, z] = contract(horizontal, pull);
        pos[0] = x;
        pos[2] = z;

        let updraft = updraft_factor(radius, params.max_radius * FUNNEL_UPDRAFT_FADE);
        let target_vy = params.max_upward_velocity * updraft;
        state.velocity.y = damp(state.velocity.y, target_vy, VERTICAL_BLEND);
        pos[1] += state.velocity.y;

        if pos[1] > FUNNEL_CEILING || pos[1] < FUNNEL_FLOOR {
            spawn_funnel(rng, params, pos, state);
            respawned += 1;
        }
    }
    respawned
}

/// Advances every debris particle by one tick. Same field as the funnel with
/// a lower ceiling, half-strength pull, weaker updraft and constant gravity.
pub fn update_debris<R: Rng>(
    rng: &mut R,
    params: &VortexParams,
    positions: &mut [f32],
    states: &mut [ParticleState],
) -> usize {
    let mut respawned = 0;
    for (pos, state) in positions.chunks_exact_mut(3).zip(states.iter_mut()) {
        if !is_intact(pos, state) {
            spawn_debris(rng, params, pos, state);
        }

        state.lifetime -= 1;
        if state.lifetime <= 0 {
            spawn_debris(rng, params, pos, state);
            respawned += 1;
            continue;
        }

        let y = pos[1];
        let radius = radial_distance(pos);

        let horizontal = swirl(state, radius, params);
        let pull = pull_factor(params.inward_pull_strength, y, DEBRIS_PULL_FADE_HEIGHT, radius)
            * DEBRIS_PULL_SCALE;
        let [x, z] = contract(horizontal, pull);
        pos[0] = x;
        pos[2] = z;
        let radius = radial_distance(pos);

        let updraft = updraft_factor(radius, params.max_radius * DEBRIS_UPDRAFT_FADE);
        let target_vy = params.max_upward_velocity * DEBRIS_UPDRAFT_SCALE * updraft;
        state.velocity.y = damp(state.velocity.y, target_vy, VERTICAL_BLEND) - DEBRIS_GRAVITY;
        pos[1] += state.velocity.y;

        if pos[1] > DEBRIS_CEILING
            || pos[1] <= DEBRIS_FLOOR
            || radius > params.max_radius * DEBRIS_ESCAPE_RADIUS
        {
            spawn_debris(rng, params, pos, state);
            respawned += 1;
        }
    }
    respawned
}
