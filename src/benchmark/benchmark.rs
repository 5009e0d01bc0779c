use std::time::Instant;

use crate::simulation::forces::total_force;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Planet, System};

/// Helper to build a deterministic `System` of size `n`.
/// Trig-scattered positions, no rand needed.
fn make_system(n: usize) -> System {
    let mut planets = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 1000.0, (i_f * 0.13).cos() * 1000.0);

        planets.push(Planet::new(x, NVec2::zeros(), 1.0, 1.0));
    }

    System::new(planets)
}

/// Time one full force accumulation (all n planets, O(n^2)) for a range of
/// system sizes.
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let params = Parameters::default();

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        for i in 0..n {
            out[i] = total_force(&sys.planets, i, params.g);
        }

        let t0 = Instant::now();
        for i in 0..n {
            out[i] = total_force(&sys.planets, i, params.g);
        }
        let dt_forces = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, forces = {dt_forces:8.6} s");
    }
}

/// Time the full integrator step (merge scan + forces + Euler + trails)
/// for a range of system sizes.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 2; // steps per size (tune as needed)

    for n in ns {
        let mut sys = make_system(n);
        let params = Parameters::default();

        // Warm-up
        euler_step(&mut sys, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}

/// Benchmark the integrator step over a fine-grained size sweep.
/// Paste output directly into a spreadsheet to graph.
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise.
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n);
        let params = Parameters::default();

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut sys, &params);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
