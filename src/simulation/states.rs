//! Core state types for the accretion simulation.
//!
//! Defines:
//! - `Planet`  – a body with position/velocity/force state, mass geometry
//!   derived from radius and density, and a bounded motion trail
//! - `System`  – the owning collection of planets plus the simulation time `t`
//! - `TrailSample` – one decimated trail entry (position + speed)
//!
//! Planets never hold a reference back to their system; all pairwise
//! operations (attraction, collision, merge) address peers by index into
//! `System::planets`.

use std::collections::VecDeque;
use std::f64::consts::PI;

use nalgebra::Vector2;

use super::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// One retained trail entry: where the planet was and how fast it moved.
#[derive(Debug, Clone)]
pub struct TrailSample {
    pub position: NVec2,
    pub speed: f64,
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: u32,            // stable identity, survives collection reshuffles
    pub position: NVec2,
    pub velocity: NVec2,
    pub acceleration: NVec2,
    pub force: NVec2,       // last accumulated total force (diagnostic)

    pub radius: f64,
    pub density: f64,       // constant over the planet's lifetime
    pub volume: f64,        // derived: 4/3 pi r^3
    pub mass: f64,          // derived: volume * density

    pub trail: VecDeque<TrailSample>,
    trail_step: u32,        // ticks since the last trail append

    pub exceeded_max_acceleration: bool, // last-tick clamp diagnostic
    pub removed: bool,      // mass fell to the epsilon floor; evict from system
}

impl Planet {
    /// Build a planet from its initial state. Volume and mass are derived
    /// from `radius` and `density` and stay consistent through `add_mass`.
    pub fn new(position: NVec2, velocity: NVec2, radius: f64, density: f64) -> Self {
        let volume = 4.0 / 3.0 * PI * radius.powi(3);
        Self {
            id: 0,
            position,
            velocity,
            acceleration: NVec2::zeros(),
            force: NVec2::zeros(),
            radius,
            density,
            volume,
            mass: volume * density,
            trail: VecDeque::new(),
            trail_step: 0,
            exceeded_max_acceleration: false,
            removed: false,
        }
    }

    /// Current speed, recorded into trail samples.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Transfer `delta` mass in (positive) or out (negative).
    ///
    /// Volume grows by the same ratio as mass, then radius is recomputed
    /// from the inverse-cube relation r = (3/(4 pi) V)^(1/3), keeping
    /// mass = volume * density exact for constant density.
    pub fn add_mass(&mut self, delta: f64) {
        let increase = (self.mass + delta) / self.mass;
        self.volume *= increase;
        self.radius = (3.0 / 4.0 / PI * self.volume).cbrt();
        self.mass += delta;
    }

    /// Record the post-integration trail sample for this tick.
    ///
    /// Appends only every `trail_skip_steps + 2`-th tick; in between, the
    /// newest retained sample is overwritten so the visible trail end tracks
    /// the live position without growing. The trail never exceeds
    /// `trail_length` samples; the oldest are dropped first.
    pub fn record_trail(&mut self, params: &Parameters) {
        let sample = TrailSample {
            position: self.position,
            speed: self.speed(),
        };

        if self.trail_step > params.trail_skip_steps {
            self.trail.push_back(sample);
            while self.trail.len() > params.trail_length {
                self.trail.pop_front();
            }
            self.trail_step = 0;
        } else {
            self.trail_step += 1;
            if let Some(last) = self.trail.back_mut() {
                *last = sample;
            }
        }
    }
}

/// The owning collection of planets plus the current simulation time.
///
/// Collection order is stable: physics does not depend on it, but force
/// accumulation and collision lookup visit peers in this order, which keeps
/// runs reproducible.
#[derive(Debug, Clone)]
pub struct System {
    pub planets: Vec<Planet>,
    pub t: f64,
}

impl System {
    /// Take ownership of the initial planet list, assigning each planet a
    /// stable id. Planets are only added here; merges remove them later.
    pub fn new(mut planets: Vec<Planet>) -> Self {
        for (i, p) in planets.iter_mut().enumerate() {
            p.id = i as u32;
        }
        Self { planets, t: 0.0 }
    }

    /// Collision check from planet `i`'s perspective.
    ///
    /// Asymmetric: only the lighter planet of an overlapping pair reports
    /// the collision, so a pair is never merge-processed from both sides in
    /// one tick. A removed planet reports no collisions.
    pub fn colliding_with(&self, i: usize, j: usize) -> bool {
        if j == i || self.planets[j].mass < self.planets[i].mass || self.planets[i].removed {
            return false;
        }

        let distance = (self.planets[j].position - self.planets[i].position).norm();
        distance < self.planets[j].radius + self.planets[i].radius
    }

    /// First peer (in collection order) that planet `i` is colliding with.
    pub fn colliding_partner(&self, i: usize) -> Option<usize> {
        (0..self.planets.len()).find(|&j| self.colliding_with(i, j))
    }

    /// One tick of mass giveaway from lighter planet `i` to heavier `j`.
    ///
    /// The transfer rate is proportional to the lighter planet's mass and
    /// `dt`, except once its radius drops below the minimum existence
    /// threshold: then all remaining mass goes in a single step, avoiding an
    /// asymptotically shrinking residual. A planet drained to the epsilon
    /// floor is flagged removed; the caller evicts it immediately.
    pub fn merge(&mut self, i: usize, j: usize, dt: f64, params: &Parameters) {
        let mut give_mass = params.mass_giveaway_factor * self.planets[i].mass * dt * 100.0;

        if self.planets[i].radius < params.min_existing_radius {
            give_mass = self.planets[i].mass;
        }

        self.planets[j].add_mass(give_mass);
        self.planets[i].add_mass(-give_mass);

        if self.planets[i].mass <= params.mass_epsilon {
            self.planets[i].removed = true;
        }
    }

    /// Drop planet `i`, preserving the order of the rest.
    pub fn remove_planet(&mut self, i: usize) {
        self.planets.remove(i);
    }
}
