// A fixed-capacity particle population: the flat render buffer and the
// extended-state arena for one species, always the same length.

use crate::params::VortexParams;
use crate::particle::{ParticleState, Species};
use crate::spawn::spawn;
use crate::update::{update_debris, update_funnel};
use rand::Rng;

pub struct Population {
    species: Species,
    positions: Vec<f32>,
    states: Vec<ParticleState>,
}

impl Population {
    /// Allocates `count` slots and spawns every one of them.
    pub fn new<R: Rng>(species: Species, count: usize, rng: &mut R, params: &VortexParams) -> Self {
        let mut positions = vec![0.0; count * 3];
        let mut states = vec![ParticleState::unspawned(); count];
        for (pos, state) in positions.chunks_exact_mut(3).zip(states.iter_mut()) {
            spawn(species, rng, params, pos, state);
        }
        Population {
            species,
            positions,
            states,
        }
    }

    /// Throws away every particle and rebuilds the population at `count`.
    /// The replacement is built in full before it is swapped in.
    pub fn resize<R: Rng>(&mut self, count: usize, rng: &mut R, params: &VortexParams) {
        *self = Population::new(self.species, count, rng, params);
    }

    /// One tick of this population's update pass. Returns the respawn count.
    pub fn update<R: Rng>(&mut self, rng: &mut R, params: &VortexParams) -> usize {
        debug_assert!(self.is_consistent());
        match self.species {
            Species::Funnel => update_funnel(rng, params, &mut self.positions, &mut self.states),
            Species::Debris => update_debris(rng, params, &mut self.positions, &mut self.states),
        }
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Interleaved `x, y, z` per particle, in vortex-local coordinates.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn states(&self) -> &[ParticleState] {
        &self.states
    }

    pub fn position(&self, slot: usize) -> Option<[f32; 3]> {
        self.positions
            .get(slot * 3..slot * 3 + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    pub fn is_consistent(&self) -> bool {
        self.positions.len() == self.states.len() * 3
    }

    #[cfg(test)]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> (&mut [f32], &mut ParticleState) {
        (
            &mut self.positions[slot * 3..slot * 3 + 3],
            &mut self.states[slot],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{scaled_count, BASE_FUNNEL_PARTICLE_COUNT, DEBRIS_PARTICLE_LIFETIME};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_population_is_fully_spawned() {
        let mut rng = StdRng::seed_from_u64(21);
        let params = VortexParams::default();
        let population = Population::new(Species::Debris, 1000, &mut rng, &params);

        assert_eq!(population.len(), 1000);
        assert!(population.is_consistent());
        assert!(population.states().iter().all(|s| s.is_valid()));
        assert!(population
            .states()
            .iter()
            .all(|s| s.lifetime >= 0 && s.lifetime < DEBRIS_PARTICLE_LIFETIME));
    }

    #[test]
    fn halving_density_halves_the_population() {
        let mut rng = StdRng::seed_from_u64(22);
        let params = VortexParams::default();
        let mut population = Population::new(Species::Funnel, 5000, &mut rng, &params);

        population.resize(scaled_count(BASE_FUNNEL_PARTICLE_COUNT, 0.5), &mut rng, &params);

        assert_eq!(population.len(), 2500);
        assert_eq!(population.positions().len(), 7500);
        assert!(population.states().iter().all(|s| s.is_valid()));
        assert_eq!(population.species(), Species::Funnel);
    }

    #[test]
    fn resizing_twice_to_the_same_size_is_stable() {
        let mut rng = StdRng::seed_from_u64(23);
        let params = VortexParams::default();
        let mut population = Population::new(Species::Funnel, 300, &mut rng, &params);

        population.resize(120, &mut rng, &params);
        population.resize(120, &mut rng, &params);

        assert_eq!(population.len(), 120);
        assert!(population.is_consistent());
        assert!(population.position(119).is_some());
        assert!(population.position(120).is_none());
    }

    #[test]
    fn resize_to_zero_leaves_an_empty_population() {
        let mut rng = StdRng::seed_from_u64(24);
        let params = VortexParams::default();
        let mut population = Population::new(Species::Debris, 10, &mut rng, &params);

        population.resize(0, &mut rng, &params);
        assert!(population.is_empty());
        assert_eq!(population.update(&mut rng, &params), 0);
    }

    #[test]
    fn corrupted_slot_heals_on_next_update() {
        let mut rng = StdRng::seed_from_u64(25);
        let params = VortexParams::default();
        let mut population = Population::new(Species::Debris, 4, &mut rng, &params);

        {
            let (pos, state) = population.slot_mut(2);
            pos[0] = f32::INFINITY;
            *state = ParticleState::unspawned();
        }
        population.update(&mut rng, &params);

        assert!(population.positions().iter().all(|p| p.is_finite()));
        assert!(population.states().iter().all(|s| s.is_valid()));
    }
}
