use wasm_bindgen::prelude::*;

/// Snapshot of the last `update()` (all zeros while metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grid_ms: f64,
    pub(super) contacts_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) particle_count: u32,
    pub(super) occupied_cells: u32,
    pub(super) dropped_inserts: u32,
    pub(super) out_of_margin: u32,
    pub(super) substeps: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grid_ms(&self) -> f64 { self.grid_ms }
    #[wasm_bindgen(getter)]
    pub fn contacts_ms(&self) -> f64 { self.contacts_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn dropped_inserts(&self) -> u32 { self.dropped_inserts }
    #[wasm_bindgen(getter)]
    pub fn out_of_margin(&self) -> u32 { self.out_of_margin }
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
}
