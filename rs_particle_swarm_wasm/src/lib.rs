// rs_particle_swarm_wasm/src/lib.rs
// Browser-facing wrapper: the page forwards pointer presses as spawn events,
// calls `step` once per animation frame and draws the returned segments.

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;
use rs_particle_swarm::simulation::{RenderSegment, Simulation, SpawnEvent};
use rs_particle_swarm::utils::SimulationConfig;

/// Values per particle in the array returned by [`WasmSimulation::step`]:
/// previous x, previous y, x, y, radius, intensity.
pub const SEGMENT_STRIDE: usize = 6;

pub fn flatten(frame: &[RenderSegment]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(frame.len() * SEGMENT_STRIDE);
    for segment in frame {
        flat.extend_from_slice(&[
            segment.previous.0,
            segment.previous.1,
            segment.current.0,
            segment.current.1,
            segment.radius,
            segment.intensity,
        ]);
    }
    flat
}

#[wasm_bindgen]
pub struct WasmSimulation {
    simulation: Simulation,
    pending: Vec<SpawnEvent>,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Builds a simulation covering a `width` x `height` canvas. Without a seed
    /// one is drawn from `Math.random`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: Option<u32>) -> Result<WasmSimulation, JsValue> {
        let seed = seed.map(u64::from).unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64);
        let config = SimulationConfig::new(None, None, None, None, None, Some(width), Some(height)).with_seed(seed);
        Simulation::new(config)
            .map(|simulation| WasmSimulation { simulation, pending: Vec::new() })
            .map_err(|e| {
                let message = format!("Could not create simulation: {}", e);
                web_sys::console::warn_1(&JsValue::from_str(&message));
                JsValue::from_str(&message)
            })
    }

    /// Queues a spawn event for the next `step`.
    #[wasm_bindgen]
    pub fn spawn(&mut self, x: f64, y: f64) {
        self.pending.push(SpawnEvent::new(x, y));
    }

    /// Advances one tick and returns `SEGMENT_STRIDE` values per particle.
    #[wasm_bindgen]
    pub fn step(&mut self) -> Float64Array {
        let events = std::mem::take(&mut self.pending);
        let frame = self.simulation.step(&events);
        Float64Array::from(flatten(&frame).as_slice())
    }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> usize {
        self.simulation.population().len()
    }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> f64 {
        self.simulation.tick() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.simulation.config().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.simulation.config().height
    }
}
