use super::SolverCore;

/// Floats per particle in the interleaved render buffer: x, y, pressure
pub(crate) const RENDER_STRIDE: usize = 3;

pub(super) fn extract_render_buffer(solver: &mut SolverCore) -> &[f32] {
    let n = solver.particles.len();
    solver.render_buffer.resize(n * RENDER_STRIDE, 0.0);

    let positions = solver.particles.positions();
    let pressures = solver.particles.pressures();
    for (i, out) in solver.render_buffer.chunks_exact_mut(RENDER_STRIDE).enumerate() {
        out[0] = positions[i].x;
        out[1] = positions[i].y;
        out[2] = pressures[i];
    }
    &solver.render_buffer
}

/// Flat `x, y, x, y, ...` view of the positions (Vec2 is repr(C))
pub(super) fn positions_ptr(solver: &SolverCore) -> *const f32 {
    solver.particles.positions().as_ptr() as *const f32
}

/// Number of floats behind `positions_ptr`
pub(super) fn positions_len(solver: &SolverCore) -> usize {
    solver.particles.len() * 2
}

pub(super) fn pressures_ptr(solver: &SolverCore) -> *const f32 {
    solver.particles.pressures().as_ptr()
}
