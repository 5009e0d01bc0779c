pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Planet, System, TrailSample};
pub use simulation::params::Parameters;
pub use simulation::forces::{attraction, newton_gravitation_law, total_force};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{CloudConfig, ParametersConfig, PlanetConfig, ScenarioConfig};

pub use visualization::planetsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_forces, bench_step, bench_step_curve};
