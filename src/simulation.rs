// Tornado simulation driver.
//
// One `tick` per rendered frame: move the vortex frame, run the funnel pass,
// run the debris pass, then raise the redraw flag. Parameter changes land
// between ticks; density changes rebuild the affected population right away
// so a tick never sees a half-resized population.

use crate::frame::{PanInput, VortexFrame};
use crate::params::VortexParams;
use crate::particle::Species;
use crate::population::Population;
use crate::timer::Timer;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Simulation {
    params: VortexParams,
    rng: StdRng,
    funnel: Population,
    debris: Population,
    frame: VortexFrame,
    tick_count: u64,
    needs_redraw: bool,
    profiling: bool,
}

impl Simulation {
    pub fn new(params: VortexParams) -> Self {
        Simulation::with_rng(params, StdRng::from_entropy())
    }

    /// Reproducible simulation: same seed and inputs, same particles.
    pub fn with_seed(params: VortexParams, seed: u64) -> Self {
        Simulation::with_rng(params, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: VortexParams, mut rng: StdRng) -> Self {
        let funnel = Population::new(Species::Funnel, params.funnel_count(), &mut rng, &params);
        let debris = Population::new(Species::Debris, params.debris_count(), &mut rng, &params);
        console_log!(
            "tornado simulation ready: {} funnel, {} debris particles",
            funnel.len(),
            debris.len()
        );
        Simulation {
            params,
            rng,
            funnel,
            debris,
            frame: VortexFrame::new(),
            tick_count: 0,
            needs_redraw: false,
            profiling: false,
        }
    }

    pub fn tick(&mut self) {
        let _timer = if self.profiling {
            Some(Timer::new("Simulation::tick()"))
        } else {
            None
        };
        let params = self.params;

        self.frame.advance();
        {
            let _timer = if self.profiling {
                Some(Timer::new("funnel pass"))
            } else {
                None
            };
            self.funnel.update(&mut self.rng, &params);
        }
        {
            let _timer = if self.profiling {
                Some(Timer::new("debris pass"))
            } else {
                None
            };
            self.debris.update(&mut self.rng, &params);
        }

        self.tick_count += 1;
        self.needs_redraw = true;
    }

    pub fn params(&self) -> &VortexParams {
        &self.params
    }

    /// Replaces every parameter at once. Populations whose size changed are rebuilt.
    pub fn set_params(&mut self, params: VortexParams) {
        let funnel_changed = params.funnel_count() != self.funnel.len();
        let debris_changed = params.debris_count() != self.debris.len();
        self.params = params;
        if funnel_changed {
            self.rebuild(Species::Funnel);
        }
        if debris_changed {
            self.rebuild(Species::Debris);
        }
    }

    pub fn set_max_rotational_speed(&mut self, value: f32) {
        self.params.max_rotational_speed = value;
    }

    pub fn set_inward_pull_strength(&mut self, value: f32) {
        self.params.inward_pull_strength = value;
    }

    pub fn set_max_upward_velocity(&mut self, value: f32) {
        self.params.max_upward_velocity = value;
    }

    /// Core and emission radii are derived from this on every read.
    pub fn set_max_radius(&mut self, value: f32) {
        self.params.max_radius = value;
    }

    pub fn set_funnel_density(&mut self, density: f64) {
        self.params.funnel_density = density;
        self.rebuild(Species::Funnel);
    }

    pub fn set_debris_density(&mut self, density: f64) {
        self.params.debris_density = density;
        self.rebuild(Species::Debris);
    }

    fn rebuild(&mut self, species: Species) {
        let params = self.params;
        let (population, count) = match species {
            Species::Funnel => (&mut self.funnel, params.funnel_count()),
            Species::Debris => (&mut self.debris, params.debris_count()),
        };
        population.resize(count, &mut self.rng, &params);
        console_log!("rebuilt {:?} population with {} particles", species, count);
    }

    pub fn set_pan_input(&mut self, pan: PanInput) {
        self.frame.pan = pan;
    }

    pub fn translate(&mut self, delta_x: f32, delta_z: f32) {
        self.frame.move_by(delta_x, delta_z);
    }

    pub fn frame(&self) -> &VortexFrame {
        &self.frame
    }

    pub fn funnel(&self) -> &Population {
        &self.funnel
    }

    pub fn debris(&self) -> &Population {
        &self.debris
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True once after each tick; reading it clears it.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    pub fn set_profiling(&mut self, enabled: bool) {
        self.profiling = enabled;
    }

    #[cfg(test)]
    pub(crate) fn funnel_mut(&mut self) -> &mut Population {
        &mut self.funnel
    }
}
