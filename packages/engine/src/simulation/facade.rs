use wasm_bindgen::prelude::*;

use crate::core::Vec2;
use crate::domain::{Particle, PressurePolicy};

use super::perf_stats::PerfStats;
use super::render_extract::RENDER_STRIDE;
use super::SolverCore;

/// JS-facing solver handle
#[wasm_bindgen]
pub struct Solver {
    core: SolverCore,
}

#[wasm_bindgen]
impl Solver {
    /// Create a solver for a `width` x `height` world (panics on zero values)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, substeps: u32, solver_iterations: u32) -> Self {
        Self {
            core: SolverCore::new(width, height, substeps, solver_iterations),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Solver, JsValue> {
        let core = SolverCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.core.substeps() }

    #[wasm_bindgen(getter)]
    pub fn solver_iterations(&self) -> u32 { self.core.solver_iterations() }

    // === Tunables ===

    #[wasm_bindgen(getter)]
    pub fn response_coef(&self) -> f32 { self.core.response_coef() }

    #[wasm_bindgen(setter)]
    pub fn set_response_coef(&mut self, coef: f32) {
        self.core.set_response_coef(coef);
    }

    #[wasm_bindgen(getter)]
    pub fn velocity_coef(&self) -> f32 { self.core.velocity_coef() }

    #[wasm_bindgen(setter)]
    pub fn set_velocity_coef(&mut self, coef: f32) {
        self.core.set_velocity_coef(coef);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn gravity_x(&self) -> f32 { self.core.gravity().x }

    pub fn gravity_y(&self) -> f32 { self.core.gravity().y }

    /// true: pressure accumulates forever, false: reset every update
    pub fn set_pressure_cumulative(&mut self, cumulative: bool) {
        let policy = if cumulative { PressurePolicy::Cumulative } else { PressurePolicy::PerFrame };
        self.core.set_pressure_policy(policy);
    }

    /// Enable or disable per-update perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last update perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config_json().map_err(|e| JsValue::from_str(&e))
    }

    // === Commands ===

    /// Add a resting particle, returns its permanent id
    pub fn add_object(&mut self, x: f32, y: f32) -> u32 {
        self.core.add_object(Particle::at(x, y))
    }

    pub fn add_object_with_velocity(&mut self, x: f32, y: f32, vx: f32, vy: f32) -> u32 {
        self.core.add_object(Particle::with_velocity(x, y, Vec2::new(vx, vy)))
    }

    /// Scatter `count` particles over the world, returns the first id
    pub fn add_random_objects(&mut self, count: u32, seed: u32) -> u32 {
        self.core.add_random_objects(count, seed)
    }

    pub fn apply_central_force(&mut self, cx: f32, cy: f32, strength: f32) {
        self.core.apply_central_force(Vec2::new(cx, cy), strength);
    }

    pub fn apply_drag(&mut self, coef: f32) {
        self.core.apply_drag(coef);
    }

    /// Step the simulation forward by `dt`
    pub fn update(&mut self, dt: f32) {
        self.core.update(dt);
    }

    // === Readback (NaN for unknown ids) ===

    pub fn position_x(&self, id: u32) -> f32 {
        self.core.particles().get(id).map_or(f32::NAN, |p| p.position.x)
    }

    pub fn position_y(&self, id: u32) -> f32 {
        self.core.particles().get(id).map_or(f32::NAN, |p| p.position.y)
    }

    pub fn velocity_x(&self, id: u32) -> f32 {
        self.core.particles().get(id).map_or(f32::NAN, |p| p.velocity().x)
    }

    pub fn velocity_y(&self, id: u32) -> f32 {
        self.core.particles().get(id).map_or(f32::NAN, |p| p.velocity().y)
    }

    pub fn pressure(&self, id: u32) -> f32 {
        self.core.particles().get(id).map_or(f32::NAN, |p| p.pressure)
    }

    // === Render buffers ===

    /// Pointer to `x, y` pairs (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    /// Float count behind `positions_ptr`
    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    pub fn pressures_ptr(&self) -> *const f32 {
        self.core.pressures_ptr()
    }

    pub fn pressures_len(&self) -> usize {
        self.core.pressures_len()
    }

    /// Fill the interleaved `[x, y, pressure]` buffer, returns its pointer
    pub fn extract_render_buffer(&mut self) -> *const f32 {
        self.core.extract_render_buffer().as_ptr()
    }

    /// Float count of the interleaved render buffer
    pub fn render_buffer_len(&self) -> usize {
        self.core.particle_count() * RENDER_STRIDE
    }
}
