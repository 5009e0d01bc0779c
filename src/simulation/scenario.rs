//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - resolved numerical parameters (`Parameters`)
//! - system state (`System` with all planets at t = 0)
//!
//! Explicit planets come first, then the optional random cloud, sampled
//! from a seeded rng so the same scenario file always produces the same
//! sky. The scenario is inserted into Bevy as a `Resource` and consumed by
//! the physics-step and rendering systems.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{CloudConfig, PlanetConfig, ScenarioConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Planet, System};

/// Bevy resource representing a fully-initialized simulation scenario:
/// resolved parameters plus the current system state.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = cfg.parameters.resolve();

        // Explicit planets first.
        let mut planets: Vec<Planet> = cfg
            .planets
            .iter()
            .map(|pc: &PlanetConfig| {
                Planet::new(
                    NVec2::new(pc.x[0], pc.x[1]),
                    NVec2::new(pc.v[0], pc.v[1]),
                    pc.radius,
                    pc.density,
                )
            })
            .collect();

        // Then the seeded random cloud, if any.
        if let Some(cloud) = &cfg.cloud {
            let mut rng = StdRng::seed_from_u64(parameters.seed);
            planets.extend(generate_cloud(cloud, &mut rng));
        }

        let system = System::new(planets);

        Self { parameters, system }
    }
}

/// Sample `cloud.count` planets with uniform positions, velocities and
/// radii, unit density.
fn generate_cloud(cloud: &CloudConfig, rng: &mut StdRng) -> Vec<Planet> {
    let pr = cloud.position_range;
    let vr = cloud.velocity_range;

    (0..cloud.count)
        .map(|_| {
            Planet::new(
                NVec2::new(rng.gen_range(-pr..pr), rng.gen_range(-pr..pr)),
                NVec2::new(rng.gen_range(-vr..vr), rng.gen_range(-vr..vr)),
                rng.gen_range(cloud.radius_min..cloud.radius_max),
                1.0,
            )
        })
        .collect()
}
