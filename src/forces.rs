// The hand-tuned vortex force field, shared by the funnel and debris passes.
// Everything here is a pure function of the particle's horizontal position,
// its height and the current parameter snapshot.

use crate::params::{AXIS_EPSILON, NEAR_AXIS_PULL_RADIUS};
use vecmath::Vector2;

/// Horizontal distance from the vortex axis for a position `[x, y, z]`.
pub fn radial_distance(pos: &[f32]) -> f32 {
    vecmath::vec2_len([pos[0], pos[2]])
}

/// Rigid-body rotation inside the core, angular-momentum falloff outside it.
pub fn target_rotational_speed(radius: f32, core_radius: f32, max_rotational_speed: f32) -> f32 {
    if radius < core_radius {
        (radius / core_radius) * max_rotational_speed
    } else {
        (core_radius / radius.max(AXIS_EPSILON)) * max_rotational_speed
    }
}

/// First-order blend of `current` toward `target`.
#[inline]
pub fn damp(current: f32, target: f32, blend: f32) -> f32 {
    current + (target - current) * blend
}

/// Places a particle at `radius` along `phase` on the horizontal plane.
pub fn orbit(radius: f32, phase: f32) -> Vector2<f32> {
    [radius * phase.cos(), radius * phase.sin()]
}

/// Pull that fades linearly to zero at `fade_height`, tapered near the axis.
/// Zero for anything at or inside `AXIS_EPSILON`.
pub fn pull_factor(strength: f32, y: f32, fade_height: f32, radius: f32) -> f32 {
    if radius <= AXIS_EPSILON {
        return 0.0;
    }
    let mut pull = (strength * (1.0 - (y / fade_height).min(1.0))).max(0.0);
    if radius < NEAR_AXIS_PULL_RADIUS {
        pull *= radius / NEAR_AXIS_PULL_RADIUS;
    }
    pull
}

/// Contracts a horizontal position toward the axis by the fraction `pull`.
pub fn contract(horizontal: Vector2<f32>, pull: f32) -> Vector2<f32> {
    vecmath::vec2_sub(horizontal, vecmath::vec2_scale(horizontal, pull))
}

/// 1 on the axis, falling linearly to 0 at `fade_radius` and beyond.
pub fn updraft_factor(radius: f32, fade_radius: f32) -> f32 {
    if fade_radius <= 0.0 {
        return 0.0;
    }
    1.0 - (radius / fade_radius).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{
        DEBRIS_GRAVITY, DEBRIS_VELOCITY_SETTLE_TICKS, ROTATION_BLEND, VERTICAL_BLEND,
    };

    #[test]
    fn rotation_is_rigid_inside_core_and_falls_off_outside() {
        let core = 1.5;
        let max = 0.2;
        assert!((target_rotational_speed(0.75, core, max) - 0.1).abs() < 1e-6);
        assert!((target_rotational_speed(1.5, core, max) - 0.2).abs() < 1e-6);
        assert!((target_rotational_speed(3.0, core, max) - 0.1).abs() < 1e-6);
        assert_eq!(target_rotational_speed(0.0, core, max), 0.0);
    }

    #[test]
    fn inverse_falloff_never_divides_by_zero() {
        let speed = target_rotational_speed(0.0, 0.0, 0.2);
        assert!(speed.is_finite());
        assert!(updraft_factor(1.0, 0.0).is_finite());
    }

    #[test]
    fn damping_converges_monotonically() {
        let target = target_rotational_speed(4.0, 1.5, 0.2);
        let mut speed = 0.01;
        let mut gap = (speed - target).abs();
        for _ in 0..60 {
            speed = damp(speed, target, ROTATION_BLEND);
            let next_gap = (speed - target).abs();
            assert!(next_gap < gap);
            gap = next_gap;
        }
    }

    #[test]
    fn orbit_keeps_radius() {
        let [x, z] = orbit(2.5, 1.3);
        assert!((vecmath::vec2_len([x, z]) - 2.5).abs() < 1e-5);
    }

    #[test]
    fn pull_fades_with_height_and_near_axis() {
        assert!((pull_factor(0.01, 0.0, 20.0, 3.0) - 0.01).abs() < 1e-7);
        assert!((pull_factor(0.01, 10.0, 20.0, 3.0) - 0.005).abs() < 1e-7);
        assert_eq!(pull_factor(0.01, 25.0, 20.0, 3.0), 0.0);
        assert!((pull_factor(0.01, 0.0, 20.0, 0.1) - 0.005).abs() < 1e-7);
        assert_eq!(pull_factor(0.01, 0.0, 20.0, 0.005), 0.0);
        assert_eq!(pull_factor(0.01, -5.0, 20.0, 3.0), 0.01 * 1.25);
    }

    #[test]
    fn contraction_moves_toward_axis() {
        let [x, z] = contract([3.0, -4.0], 0.1);
        assert!((x - 2.7).abs() < 1e-6);
        assert!((z + 3.6).abs() < 1e-6);
    }

    #[test]
    fn updraft_is_strongest_on_axis() {
        assert_eq!(updraft_factor(0.0, 3.75), 1.0);
        assert!((updraft_factor(1.875, 3.75) - 0.5).abs() < 1e-6);
        assert_eq!(updraft_factor(5.0, 3.75), 0.0);
    }

    #[test]
    fn debris_vertical_velocity_decays_to_gravity_offset() {
        let target = 0.1125 * updraft_factor(1.0, 4.25);
        let settled = target - DEBRIS_GRAVITY / VERTICAL_BLEND;
        let mut vy = 0.08;
        let mut gap = (vy - settled).abs();
        let initial_gap = gap;
        for _ in 0..DEBRIS_VELOCITY_SETTLE_TICKS {
            vy = damp(vy, target, VERTICAL_BLEND) - DEBRIS_GRAVITY;
            let next_gap = (vy - settled).abs();
            assert!(next_gap <= gap);
            gap = next_gap;
        }
        assert!(gap <= initial_gap * 0.01 + 1e-6);
    }
}
