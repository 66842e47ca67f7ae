// JS-facing wrapper around `Simulation`. The page drives `tick()` from its
// animation frame callback, forwards slider and key state through the setters,
// and uploads the two position buffers to its point clouds.

use crate::frame::PanInput;
use crate::params::VortexParams;
use crate::population::Population;
use crate::simulation::Simulation;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TornadoSim {
    sim: Simulation,
}

#[wasm_bindgen]
impl TornadoSim {
    #[wasm_bindgen(constructor)]
    pub fn new() -> TornadoSim {
        TornadoSim {
            sim: Simulation::new(VortexParams::default()),
        }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(seed: u32) -> TornadoSim {
        TornadoSim {
            sim: Simulation::with_seed(VortexParams::default(), seed as u64),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<TornadoSim, JsValue> {
        let params = VortexParams::from_json(json)?;
        console_log!("loaded vortex config: {:?}", params);
        Ok(TornadoSim {
            sim: Simulation::new(params),
        })
    }

    pub fn tick(&mut self) {
        self.sim.tick();
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.sim.params().to_json().map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = loadConfigJson)]
    pub fn load_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        let params = VortexParams::from_json(json)?;
        self.sim.set_params(params);
        Ok(())
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_rotational_speed(&mut self, value: f32) {
        self.sim.set_max_rotational_speed(value);
    }

    #[wasm_bindgen(getter)]
    pub fn max_rotational_speed(&self) -> f32 {
        self.sim.params().max_rotational_speed
    }

    #[wasm_bindgen(setter)]
    pub fn set_inward_pull_strength(&mut self, value: f32) {
        self.sim.set_inward_pull_strength(value);
    }

    #[wasm_bindgen(getter)]
    pub fn inward_pull_strength(&self) -> f32 {
        self.sim.params().inward_pull_strength
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_upward_velocity(&mut self, value: f32) {
        self.sim.set_max_upward_velocity(value);
    }

    #[wasm_bindgen(getter)]
    pub fn max_upward_velocity(&self) -> f32 {
        self.sim.params().max_upward_velocity
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_radius(&mut self, value: f32) {
        self.sim.set_max_radius(value);
    }

    #[wasm_bindgen(getter)]
    pub fn max_radius(&self) -> f32 {
        self.sim.params().max_radius
    }

    #[wasm_bindgen(getter)]
    pub fn core_radius(&self) -> f32 {
        self.sim.params().core_radius()
    }

    #[wasm_bindgen(getter)]
    pub fn debris_emission_radius(&self) -> f32 {
        self.sim.params().debris_emission_radius()
    }

    #[wasm_bindgen(setter)]
    pub fn set_funnel_density(&mut self, density: f64) {
        self.sim.set_funnel_density(density);
    }

    #[wasm_bindgen(getter)]
    pub fn funnel_density(&self) -> f64 {
        self.sim.params().funnel_density
    }

    #[wasm_bindgen(setter)]
    pub fn set_debris_density(&mut self, density: f64) {
        self.sim.set_debris_density(density);
    }

    #[wasm_bindgen(getter)]
    pub fn debris_density(&self) -> f64 {
        self.sim.params().debris_density
    }

    /// Held arrow keys. Applied every tick until changed.
    pub fn set_pan_input(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.sim.set_pan_input(PanInput {
            up,
            down,
            left,
            right,
        });
    }

    pub fn translate(&mut self, delta_x: f32, delta_z: f32) {
        self.sim.translate(delta_x, delta_z);
    }

    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> f32 {
        self.sim.frame().origin.x
    }

    #[wasm_bindgen(getter)]
    pub fn origin_y(&self) -> f32 {
        self.sim.frame().origin.y
    }

    #[wasm_bindgen(getter)]
    pub fn origin_z(&self) -> f32 {
        self.sim.frame().origin.z
    }

    /// `[x, y, z]` the camera should orbit around.
    pub fn focus_point(&self) -> Vec<f32> {
        let focus = self.sim.frame().focus_point();
        vec![focus.x, focus.y, focus.z]
    }

    #[wasm_bindgen(getter)]
    pub fn funnel_count(&self) -> usize {
        self.sim.funnel().len()
    }

    #[wasm_bindgen(getter)]
    pub fn debris_count(&self) -> usize {
        self.sim.debris().len()
    }

    #[wasm_bindgen(getter)]
    pub fn tick_count(&self) -> u64 {
        self.sim.tick_count()
    }

    /// Start of the funnel buffer in wasm memory, for a zero-copy view.
    /// Invalid after the funnel density changes.
    pub fn funnel_positions_ptr(&self) -> *const f32 {
        self.sim.funnel().positions().as_ptr()
    }

    /// Length of the funnel buffer in floats.
    pub fn funnel_positions_len(&self) -> usize {
        self.sim.funnel().positions().len()
    }

    pub fn debris_positions_ptr(&self) -> *const f32 {
        self.sim.debris().positions().as_ptr()
    }

    pub fn debris_positions_len(&self) -> usize {
        self.sim.debris().positions().len()
    }

    /// Copy of the funnel buffer.
    pub fn funnel_positions(&self) -> Float32Array {
        copy_positions(self.sim.funnel())
    }

    /// Copy of the debris buffer.
    pub fn debris_positions(&self) -> Float32Array {
        copy_positions(self.sim.debris())
    }

    /// True once after each tick.
    pub fn take_needs_redraw(&mut self) -> bool {
        self.sim.take_needs_redraw()
    }

    /// Wraps each tick and pass in `console.time` labels.
    pub fn set_profiling(&mut self, enabled: bool) {
        self.sim.set_profiling(enabled);
    }
}

impl Default for TornadoSim {
    fn default() -> Self {
        TornadoSim::new()
    }
}

fn copy_positions(population: &Population) -> Float32Array {
    Float32Array::from(population.positions())
}
