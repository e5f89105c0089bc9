use serde::{Deserialize, Serialize};

use crate::core::Vec2;

pub const DEFAULT_SUBSTEPS: u32 = 2;
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 1;
pub const DEFAULT_RESPONSE_COEF: f32 = 0.8;
pub const DEFAULT_VELOCITY_COEF: f32 = 0.0025;

/// When the per-particle pressure accumulator is cleared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PressurePolicy {
    /// Zeroed at the start of every `update()`: pressure = crowding this frame
    PerFrame,
    /// Never cleared by the solver: pressure = lifetime sum of contact corrections
    #[default]
    Cumulative,
}

/// Solver configuration, loadable from JSON
///
/// ```json
/// { "worldWidth": 300, "worldHeight": 200, "substeps": 8,
///   "gravity": { "x": 0.0, "y": 20.0 }, "pressurePolicy": "cumulative" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    pub world_width: u32,
    pub world_height: u32,
    #[serde(default = "default_substeps")]
    pub substeps: u32,
    #[serde(default = "default_solver_iterations")]
    pub solver_iterations: u32,
    #[serde(default = "default_response_coef")]
    pub response_coef: f32,
    #[serde(default = "default_velocity_coef")]
    pub velocity_coef: f32,
    #[serde(default)]
    pub gravity: Vec2,
    #[serde(default)]
    pub pressure_policy: PressurePolicy,
}

fn default_substeps() -> u32 { DEFAULT_SUBSTEPS }
fn default_solver_iterations() -> u32 { DEFAULT_SOLVER_ITERATIONS }
fn default_response_coef() -> f32 { DEFAULT_RESPONSE_COEF }
fn default_velocity_coef() -> f32 { DEFAULT_VELOCITY_COEF }

impl SolverConfig {
    pub fn new(world_width: u32, world_height: u32) -> Self {
        Self {
            world_width,
            world_height,
            substeps: DEFAULT_SUBSTEPS,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            response_coef: DEFAULT_RESPONSE_COEF,
            velocity_coef: DEFAULT_VELOCITY_COEF,
            gravity: Vec2::ZERO,
            pressure_policy: PressurePolicy::Cumulative,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SolverConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(format!(
                "world dimensions must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        // Cell indices are u32
        if (self.world_width as u64) * (self.world_height as u64) > u32::MAX as u64 {
            return Err(format!(
                "world {}x{} exceeds the addressable cell count",
                self.world_width, self.world_height
            ));
        }
        if self.substeps == 0 {
            return Err("substeps must be at least 1".to_string());
        }
        if self.solver_iterations == 0 {
            return Err("solverIterations must be at least 1".to_string());
        }
        if !self.response_coef.is_finite() {
            return Err(format!("responseCoef must be finite, got {}", self.response_coef));
        }
        if !self.velocity_coef.is_finite() {
            return Err(format!("velocityCoef must be finite, got {}", self.velocity_coef));
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_uses_defaults() {
        let config = SolverConfig::from_json(r#"{ "worldWidth": 64, "worldHeight": 32 }"#)
            .expect("minimal config should parse");
        assert_eq!(config, SolverConfig::new(64, 32));
    }

    #[test]
    fn full_json_roundtrips_through_serializer() {
        let json = r#"{
            "worldWidth": 300, "worldHeight": 200, "substeps": 8, "solverIterations": 2,
            "responseCoef": 0.5, "velocityCoef": 0.1,
            "gravity": { "x": 0.0, "y": 20.0 }, "pressurePolicy": "cumulative"
        }"#;
        let config = SolverConfig::from_json(json).expect("config should parse");
        assert_eq!(config.substeps, 8);
        assert_eq!(config.solver_iterations, 2);
        assert_eq!(config.gravity, Vec2::new(0.0, 20.0));
        assert_eq!(config.pressure_policy, PressurePolicy::Cumulative);

        let json = config.to_json().expect("config should serialize");
        let again = SolverConfig::from_json(&json).expect("serialized config should parse");
        assert_eq!(again, config);
    }

    #[test]
    fn pressure_accumulates_unless_asked_otherwise() {
        assert_eq!(PressurePolicy::default(), PressurePolicy::Cumulative);
        assert_eq!(SolverConfig::new(8, 8).pressure_policy, PressurePolicy::Cumulative);

        let config = SolverConfig::from_json(r#"{ "worldWidth": 8, "worldHeight": 8, "pressurePolicy": "perFrame" }"#)
            .expect("config should parse");
        assert_eq!(config.pressure_policy, PressurePolicy::PerFrame);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = SolverConfig::from_json(r#"{ "worldWidth": 0, "worldHeight": 10 }"#).unwrap_err();
        assert!(err.contains("positive"));
    }

    #[test]
    fn rejects_zero_substeps_and_iterations() {
        let mut config = SolverConfig::new(10, 10);
        config.substeps = 0;
        assert!(config.validate().is_err());
        config.substeps = 1;
        config.solver_iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SolverConfig::from_json("{ not json").is_err());
        assert!(SolverConfig::from_json(r#"{ "worldHeight": 10 }"#).is_err());
    }

    #[test]
    fn rejects_non_finite_tunables() {
        let mut config = SolverConfig::new(10, 10);
        config.response_coef = f32::NAN;
        assert!(config.validate().is_err());
    }
}
