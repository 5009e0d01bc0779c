//! Fixed-step time integration for the accretion system
//!
//! One `euler_step` advances every planet by `params.h0` using
//! semi-implicit Euler: velocity is committed first, then position is
//! advanced with the already-updated velocity. Merges resolve before a
//! planet integrates, so the mass and radius used this tick already
//! reflect the transfer.

use super::forces::total_force;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one tick of size `params.h0`.
///
/// Planets are visited in collection order. A planet drained to nothing by
/// its merge is evicted mid-pass and never revisited; later planets in the
/// same pass see the shrunken collection.
pub fn euler_step(sys: &mut System, params: &Parameters) {
    let dt = params.h0;

    let mut i = 0;
    while i < sys.planets.len() {
        step_planet(sys, i, dt, params);

        if sys.planets[i].removed {
            sys.remove_planet(i);
        } else {
            i += 1;
        }
    }

    sys.t += dt;
}

/// Integrate planet `i` through one tick.
fn step_planet(sys: &mut System, i: usize, dt: f64, params: &Parameters) {
    // An already-removed planet takes no further part in any pass.
    if sys.planets[i].removed {
        return;
    }

    // Resolve the merge first so this tick integrates post-transfer mass.
    if let Some(j) = sys.colliding_partner(i) {
        sys.merge(i, j, dt, params);
        if sys.planets[i].removed {
            // Drained to nothing; no force or motion left to compute.
            return;
        }
    }

    let force = total_force(&sys.planets, i, params.g);

    let planet = &mut sys.planets[i];
    planet.force = force;

    // a = F / m
    let acceleration = force / planet.mass;

    // Stability clamp: near-singular separations produce accelerations that
    // would fling the planet off in one tick. The acceleration is zeroed
    // outright for this tick, not capped to the ceiling, and the flag is
    // surfaced to the renderer.
    if acceleration.norm() > params.max_acceleration {
        planet.exceeded_max_acceleration = true;
        planet.acceleration = NVec2::zeros();
    } else {
        planet.exceeded_max_acceleration = false;
        planet.acceleration = acceleration;
    }

    // Semi-implicit Euler: v_n+1 = v_n + a dt, then x_n+1 = x_n + v_n+1 dt.
    planet.velocity += planet.acceleration * dt;
    planet.position += planet.velocity * dt;

    planet.record_trail(params);
}
