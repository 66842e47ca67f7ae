// Particle initializers. Both overwrite a slot in place: three floats of the
// position buffer plus the matching extended state.

use crate::params::{
    VortexParams, DEBRIS_PARTICLE_LIFETIME, FUNNEL_PARTICLE_LIFETIME, MIN_FUNNEL_SPAWN_RADIUS,
    TORNADO_HEIGHT,
};
use crate::particle::{ParticleState, Species};
use rand::Rng;
use std::f32::consts::PI;

/// Cone radius at height `y`: widest at the ground, narrowing to the apex.
pub fn funnel_spawn_radius(y: f32, height: f32, max_radius: f32) -> f32 {
    ((height - y) / height * max_radius).max(MIN_FUNNEL_SPAWN_RADIUS)
}

pub fn spawn<R: Rng>(
    species: Species,
    rng: &mut R,
    params: &VortexParams,
    pos: &mut [f32],
    state: &mut ParticleState,
) {
    match species {
        Species::Funnel => spawn_funnel(rng, params, pos, state),
        Species::Debris => spawn_debris(rng, params, pos, state),
    }
}

pub fn spawn_funnel<R: Rng>(
    rng: &mut R,
    params: &VortexParams,
    pos: &mut [f32],
    state: &mut ParticleState,
) {
    let y = rng.gen::<f32>() * TORNADO_HEIGHT;
    let radius = funnel_spawn_radius(y, TORNADO_HEIGHT, params.max_radius);
    let angle = rng.gen::<f32>() * PI * 2.0;

    pos[0] = angle.cos() * radius;
    pos[1] = y;
    pos[2] = angle.sin() * radius;

    let upward_velocity = 0.01 + rng.gen::<f32>() * 0.02;
    *state = ParticleState {
        velocity: glm::vec3(0.0, upward_velocity, 0.0),
        lifetime: rng.gen_range(0, FUNNEL_PARTICLE_LIFETIME),
        phase: angle,
        rotational_speed: 0.01 + rng.gen::<f32>() * 0.01,
    };
}

pub fn spawn_debris<R: Rng>(
    rng: &mut R,
    params: &VortexParams,
    pos: &mut [f32],
    state: &mut ParticleState,
) {
    let angle = rng.gen::<f32>() * PI * 2.0;
    let radius = rng.gen::<f32>() * params.debris_emission_radius();

    pos[0] = angle.cos() * radius;
    pos[1] = 0.1 + rng.gen::<f32>() * 0.1;
    pos[2] = angle.sin() * radius;

    let upward_velocity = 0.05 + rng.gen::<f32>() * 0.05;
    let tangential_speed = 0.01 + rng.gen::<f32>() * 0.01;
    *state = ParticleState {
        // Tangent to the spawn circle so debris starts out already swirling.
        velocity: glm::vec3(
            angle.sin() * tangential_speed,
            upward_velocity,
            -angle.cos() * tangential_speed,
        ),
        lifetime: rng.gen_range(0, DEBRIS_PARTICLE_LIFETIME),
        phase: angle,
        rotational_speed: 0.01 + rng.gen::<f32>() * 0.01,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn horizontal(pos: &[f32]) -> f32 {
        vecmath::vec2_len([pos[0], pos[2]])
    }

    #[test]
    fn cone_radius_at_half_height() {
        assert!((funnel_spawn_radius(10.0, 20.0, 5.0) - 2.5).abs() < 1e-6);
        assert!((funnel_spawn_radius(0.0, 20.0, 5.0) - 5.0).abs() < 1e-6);
        assert_eq!(funnel_spawn_radius(20.0, 20.0, 5.0), MIN_FUNNEL_SPAWN_RADIUS);
        assert_eq!(funnel_spawn_radius(19.9, 20.0, 5.0), MIN_FUNNEL_SPAWN_RADIUS);
    }

    #[test]
    fn funnel_spawns_on_the_cone() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = VortexParams::default();
        let mut pos = [0.0f32; 3];
        let mut state = ParticleState::unspawned();

        for _ in 0..2000 {
            spawn_funnel(&mut rng, &params, &mut pos, &mut state);
            let y = pos[1];
            assert!(y >= 0.0 && y < TORNADO_HEIGHT);
            let expected = funnel_spawn_radius(y, TORNADO_HEIGHT, params.max_radius);
            assert!((horizontal(&pos) - expected).abs() < 1e-4);
            assert!(state.lifetime >= 0 && state.lifetime < FUNNEL_PARTICLE_LIFETIME);
            assert!(state.velocity.y >= 0.01 && state.velocity.y <= 0.03);
            assert!(state.rotational_speed >= 0.01 && state.rotational_speed <= 0.02);
            assert!((pos[2].atan2(pos[0]) - state.phase).sin().abs() < 1e-3);
            assert!(state.is_valid());
        }
    }

    #[test]
    fn debris_spawns_inside_emission_disk() {
        let mut rng = StdRng::seed_from_u64(12);
        let params = VortexParams {
            max_radius: 6.0,
            ..VortexParams::default()
        };
        let emission = params.debris_emission_radius();
        let mut pos = [0.0f32; 3];
        let mut state = ParticleState::unspawned();

        for _ in 0..2000 {
            spawn_debris(&mut rng, &params, &mut pos, &mut state);
            assert!(horizontal(&pos) <= emission + 1e-4);
            assert!(pos[1] >= 0.1 && pos[1] <= 0.2);
            assert!(state.velocity.y >= 0.05 && state.velocity.y <= 0.1);
            assert!(state.lifetime >= 0 && state.lifetime < DEBRIS_PARTICLE_LIFETIME);

            // Tangential component is perpendicular to the spawn direction.
            let radial = [state.phase.cos(), state.phase.sin()];
            let tangential = [state.velocity.x, state.velocity.z];
            assert!(vecmath::vec2_dot(radial, tangential).abs() < 1e-6);
        }
    }
}
