//! Gravitational force accumulation for the accretion engine
//!
//! Direct Newtonian pairwise gravity, evaluated per body: each planet sums
//! its attraction to every peer in collection order. No softening and no
//! symmetric pair update; the per-body accumulation order is part of the
//! numeric contract.

use super::states::{NVec2, Planet};

/// Newton's law of gravitation: scalar force magnitude between masses
/// `m1` and `m2` at separation `d`.
///
/// `g` is the tuned gravitational constant, not the SI value. No zero
/// check; callers guarantee `d > 0`.
pub fn newton_gravitation_law(g: f64, m1: f64, m2: f64, d: f64) -> f64 {
    g * (m1 * m2 / (d * d))
}

/// Attraction force on planet `i` toward planet `j`.
///
/// Zero for `j == i` (self-attraction is excluded). Otherwise the
/// displacement from i to j, normalized, scaled by the gravitation law, so
/// the force always points from i toward j.
pub fn attraction(planets: &[Planet], i: usize, j: usize, g: f64) -> NVec2 {
    if j == i {
        return NVec2::zeros();
    }

    let displacement = planets[j].position - planets[i].position;
    let distance = displacement.norm();

    // Exact center overlap would normalize to non-finite components. The
    // merge pass evicts near-zero-radius planets before separation reaches
    // zero, so this only trips on a broken scenario.
    debug_assert!(distance > 0.0, "zero separation between planets {i} and {j}");

    let force_scalar = newton_gravitation_law(g, planets[i].mass, planets[j].mass, distance);

    displacement / distance * force_scalar
}

/// Total gravitational force on planet `i`: sum of `attraction` over every
/// planet in the collection, in collection order (including `i` itself,
/// which contributes zero).
///
/// This is the O(n^2) cost center: every planet visits all n peers each
/// tick.
pub fn total_force(planets: &[Planet], i: usize, g: f64) -> NVec2 {
    let mut force = NVec2::zeros();
    for j in 0..planets.len() {
        force += attraction(planets, i, j, g);
    }
    force
}
