//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and tuned constants
//! - [`PlanetConfig`]     – initial state for each explicitly listed planet
//! - [`CloudConfig`]      – optional randomly generated planet cloud
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   h0: 0.016                 # fixed step size
//!   G: 6.67                   # gravitational constant (sim-scaled)
//!   max_acceleration: 10000.0 # stability ceiling
//!   trail_length: 10
//!   trail_skip_steps: 8
//!   min_existing_radius: 2.0
//!   mass_giveaway_factor: 0.2
//!   mass_epsilon: 0.1
//!   seed: 42
//!
//! cloud:
//!   count: 200
//!   position_range: 1000.0    # positions sampled in [-range, range]
//!   velocity_range: 100.0
//!   radius_min: 3.0
//!   radius_max: 40.0
//!
//! planets:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 50.0
//! ```
//!
//! Every parameter is optional; omitted fields fall back to the defaults
//! in [`Parameters`](crate::simulation::params::Parameters).

use serde::Deserialize;

use crate::simulation::params::Parameters;

/// Global numerical parameters and tuned constants for a scenario.
/// Field-by-field optional overlay over the [`Parameters`] defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    pub t_end: Option<f64>,                // total time (benchmarks only)
    pub h0: Option<f64>,                   // fixed step size
    #[serde(rename = "G")]
    pub g: Option<f64>,                    // gravitational constant
    pub max_acceleration: Option<f64>,     // acceleration ceiling
    pub trail_length: Option<usize>,       // max trail samples per planet
    pub trail_skip_steps: Option<u32>,     // ticks between trail appends
    pub min_existing_radius: Option<f64>,  // full-absorption radius threshold
    pub mass_giveaway_factor: Option<f64>, // merge transfer rate
    pub mass_epsilon: Option<f64>,         // removal mass floor
    pub seed: Option<u64>,                 // cloud generation seed
}

impl ParametersConfig {
    /// Resolve against the built-in defaults.
    pub fn resolve(&self) -> Parameters {
        let d = Parameters::default();
        Parameters {
            t_end: self.t_end.unwrap_or(d.t_end),
            h0: self.h0.unwrap_or(d.h0),
            g: self.g.unwrap_or(d.g),
            max_acceleration: self.max_acceleration.unwrap_or(d.max_acceleration),
            trail_length: self.trail_length.unwrap_or(d.trail_length),
            trail_skip_steps: self.trail_skip_steps.unwrap_or(d.trail_skip_steps),
            min_existing_radius: self.min_existing_radius.unwrap_or(d.min_existing_radius),
            mass_giveaway_factor: self.mass_giveaway_factor.unwrap_or(d.mass_giveaway_factor),
            mass_epsilon: self.mass_epsilon.unwrap_or(d.mass_epsilon),
            seed: self.seed.unwrap_or(d.seed),
        }
    }
}

fn default_density() -> f64 {
    1.0
}

/// Initial state of a single explicitly listed planet.
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub x: [f64; 2],       // initial position
    pub v: [f64; 2],       // initial velocity
    pub radius: f64,       // radius; mass derives from radius and density
    #[serde(default = "default_density")]
    pub density: f64,
}

/// Randomly generated planet cloud, sampled with the scenario seed.
#[derive(Deserialize, Debug, Clone)]
pub struct CloudConfig {
    pub count: usize,
    pub position_range: f64, // positions in [-position_range, position_range]
    pub velocity_range: f64, // velocities in [-velocity_range, velocity_range]
    pub radius_min: f64,
    pub radius_max: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub planets: Vec<PlanetConfig>, // explicit planets, kept ahead of the cloud
    pub cloud: Option<CloudConfig>, // optional random cloud appended after
}
