//! Tuned simulation constants
//!
//! `Parameters` holds every knob of the accretion model:
//! - step size and end time,
//! - gravitational scale and acceleration ceiling,
//! - trail length / decimation,
//! - merge rate, minimum existence radius, removal epsilon
//!
//! These are visual-plausibility tunings, not SI units.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64,                // time end (benchmarks; the viewer runs unbounded)
    pub h0: f64,                   // fixed step size dt
    pub g: f64,                    // gravitational constant (scaled up for sim scale)
    pub max_acceleration: f64,     // stability ceiling on |a|
    pub trail_length: usize,       // max retained trail samples per planet
    pub trail_skip_steps: u32,     // ticks between trail appends (decimation)
    pub min_existing_radius: f64,  // below this a merging planet gives all mass at once
    pub mass_giveaway_factor: f64, // fraction of mass transferred per overlap tick
    pub mass_epsilon: f64,         // mass at or below this marks the planet removed
    pub seed: u64,                 // deterministic seed for cloud generation
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 100.0,
            h0: 0.016,
            g: 6.67e-11 * 10e10,
            max_acceleration: 10_000.0,
            trail_length: 10,
            trail_skip_steps: 8,
            min_existing_radius: 2.0,
            mass_giveaway_factor: 0.2,
            mass_epsilon: 0.1,
            seed: 42,
        }
    }
}
