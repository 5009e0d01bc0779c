use planetsim::simulation::forces::{attraction, newton_gravitation_law, total_force};
use planetsim::simulation::integrator::euler_step;
use planetsim::simulation::params::Parameters;
use planetsim::simulation::states::{NVec2, Planet, System};

/// Build a simple two-planet System separated along the x-axis, at rest.
pub fn two_planet_system(dist: f64, r1: f64, r2: f64) -> System {
    let p1 = Planet::new(
        NVec2::new(-dist / 2.0, 0.0),
        NVec2::zeros(),
        r1,
        1.0,
    );
    let p2 = Planet::new(
        NVec2::new(dist / 2.0, 0.0),
        NVec2::zeros(),
        r2,
        1.0,
    );
    System::new(vec![p1, p2])
}

/// Default physics parameters for tests.
pub fn test_params() -> Parameters {
    Parameters::default()
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn self_attraction_is_zero() {
    let sys = two_planet_system(100.0, 3.0, 5.0);
    let p = test_params();

    let f = attraction(&sys.planets, 0, 0, p.g);
    assert_eq!(f, NVec2::zeros());

    // A system of one planet feels no net force at all.
    let lone = System::new(vec![Planet::new(NVec2::zeros(), NVec2::zeros(), 10.0, 1.0)]);
    assert_eq!(total_force(&lone.planets, 0, p.g), NVec2::zeros());
}

#[test]
fn attraction_newton_third_law() {
    let sys = two_planet_system(100.0, 3.0, 5.0);
    let p = test_params();

    let f01 = attraction(&sys.planets, 0, 1, p.g);
    let f10 = attraction(&sys.planets, 1, 0, p.g);

    // Equal magnitude, antiparallel direction.
    assert!((f01 + f10).norm() < 1e-9, "Forces not antiparallel: {:?} {:?}", f01, f10);
    assert!((f01.norm() - f10.norm()).abs() < 1e-9);
}

#[test]
fn attraction_points_toward_other_planet() {
    let sys = two_planet_system(100.0, 3.0, 5.0);
    let p = test_params();

    let dx = sys.planets[1].position - sys.planets[0].position;
    let f01 = attraction(&sys.planets, 0, 1, p.g);

    assert!(dx.norm() > 0.0);
    assert!(f01.dot(&dx) > 0.0, "Force is not toward the second planet");
}

#[test]
fn gravitation_inverse_square_law() {
    let p = test_params();

    let f_d = newton_gravitation_law(p.g, 2.0, 3.0, 10.0);
    let f_2d = newton_gravitation_law(p.g, 2.0, 3.0, 20.0);

    let ratio = f_d / f_2d;
    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

// ==================================================================================
// Mass geometry tests
// ==================================================================================

#[test]
fn mass_volume_radius_stay_consistent() {
    use std::f64::consts::PI;

    let mut planet = Planet::new(NVec2::zeros(), NVec2::zeros(), 7.0, 2.5);

    for delta in [150.0, -40.0, 1000.0, -0.5] {
        planet.add_mass(delta);

        // volume matches the radius cube relation
        let volume_from_radius = 4.0 / 3.0 * PI * planet.radius.powi(3);
        assert!(
            (volume_from_radius - planet.volume).abs() / planet.volume < 1e-9,
            "volume drifted from radius relation after add_mass({delta})"
        );

        // mass matches volume * density
        assert!(
            (planet.volume * planet.density - planet.mass).abs() / planet.mass < 1e-9,
            "mass drifted from volume * density after add_mass({delta})"
        );
    }
}

// ==================================================================================
// Collision tests
// ==================================================================================

#[test]
fn collision_reported_only_from_lighter_side() {
    // Overlapping: centers 12 apart, radii sum to 15.
    let sys = two_planet_system(12.0, 5.0, 10.0);

    assert!(sys.colliding_with(0, 1), "lighter planet should report the collision");
    assert!(!sys.colliding_with(1, 0), "heavier planet should not report it");
}

#[test]
fn collision_requires_overlap() {
    let sys = two_planet_system(100.0, 5.0, 10.0);

    assert!(!sys.colliding_with(0, 1));
    assert!(!sys.colliding_with(1, 0));
    assert_eq!(sys.colliding_partner(0), None);
}

#[test]
fn removed_planet_reports_no_collision() {
    let mut sys = two_planet_system(12.0, 5.0, 10.0);
    sys.planets[0].removed = true;

    assert!(!sys.colliding_with(0, 1));
}

// ==================================================================================
// Merge tests
// ==================================================================================

#[test]
fn merge_conserves_total_mass() {
    let mut sys = two_planet_system(12.0, 5.0, 10.0);
    let p = test_params();

    let total_before = sys.planets[0].mass + sys.planets[1].mass;
    let lighter_before = sys.planets[0].mass;

    sys.merge(0, 1, p.h0, &p);

    let total_after = sys.planets[0].mass + sys.planets[1].mass;
    assert!(
        (total_before - total_after).abs() / total_before < 1e-9,
        "mass not conserved across merge transfer"
    );

    // A rate-limited transfer, not an instantaneous absorption.
    assert!(sys.planets[0].mass > 0.0);
    assert!(sys.planets[0].mass < lighter_before);
    assert!(!sys.planets[0].removed);
}

#[test]
fn sub_min_radius_planet_fully_absorbed_in_one_tick() {
    // Lighter planet below the minimum existence radius, overlapping a
    // heavy one: it gives away all mass at once instead of shrinking
    // asymptotically.
    let dust = Planet::new(NVec2::new(25.0, 0.0), NVec2::zeros(), 1.5, 1.0);
    let giant = Planet::new(NVec2::new(50.0, 0.0), NVec2::zeros(), 30.0, 1.0);
    let total_mass = dust.mass + giant.mass;

    let mut sys = System::new(vec![dust, giant]);
    let p = test_params();

    euler_step(&mut sys, &p);

    assert_eq!(sys.planets.len(), 1, "dust planet should be evicted");
    assert!(
        (sys.planets[0].mass - total_mass).abs() / total_mass < 1e-9,
        "absorbed mass should all land on the heavy planet"
    );
}

#[test]
fn drained_planet_is_flagged_then_evicted() {
    let mut sys = two_planet_system(12.0, 1.5, 10.0);
    let p = test_params();

    // Below the minimum existence radius: one merge call drains it fully.
    sys.merge(0, 1, p.h0, &p);

    assert!(sys.planets[0].removed);
    assert!(sys.planets[0].mass <= p.mass_epsilon);

    // Gone from the collection by the next update.
    euler_step(&mut sys, &p);
    assert_eq!(sys.planets.len(), 1);
}

#[test]
fn mid_pass_eviction_is_seen_by_later_planets() {
    // Order: dust (absorbed during the pass), giant, observer. The observer
    // integrates after the eviction, so its accumulated force must come from
    // the giant alone, with its post-merge mass and post-step position.
    let dust = Planet::new(NVec2::new(25.0, 0.0), NVec2::zeros(), 1.5, 1.0);
    let giant = Planet::new(NVec2::new(50.0, 0.0), NVec2::zeros(), 30.0, 1.0);
    let observer = Planet::new(NVec2::new(0.0, 0.0), NVec2::zeros(), 3.0, 1.0);

    let mut sys = System::new(vec![dust, giant, observer]);
    let p = test_params();

    euler_step(&mut sys, &p);

    assert_eq!(sys.planets.len(), 2);

    let giant = &sys.planets[0];
    let observer = &sys.planets[1];

    // Recompute what the observer should have seen at its pre-step position.
    let displacement = giant.position - NVec2::new(0.0, 0.0);
    let distance = displacement.norm();
    let expected = displacement / distance
        * newton_gravitation_law(p.g, observer.mass, giant.mass, distance);

    assert!(
        (observer.force - expected).norm() / expected.norm() < 1e-9,
        "observer force should be the post-merge giant's pull only"
    );
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn acceleration_clamp_zeroes_velocity_change() {
    // A light planet next to an extremely dense giant, just outside
    // collision range: computed acceleration blows past the ceiling, so it
    // is zeroed outright for the tick and the overload flag is raised.
    let light = Planet::new(NVec2::zeros(), NVec2::zeros(), 3.0, 1.0);
    let dense = Planet::new(NVec2::new(43.1, 0.0), NVec2::zeros(), 40.0, 1000.0);

    let mut sys = System::new(vec![light, dense]);
    let p = test_params();

    euler_step(&mut sys, &p);

    let light = &sys.planets[0];
    assert!(light.exceeded_max_acceleration);
    assert_eq!(light.velocity, NVec2::zeros(), "clamped tick must not change velocity");
    assert_eq!(light.position, NVec2::zeros());

    // The giant barely feels the light planet; no clamp on its side.
    assert!(!sys.planets[1].exceeded_max_acceleration);
}

#[test]
fn two_equal_masses_first_tick_velocity() {
    let d = 100.0;
    let mut sys = two_planet_system(d, 5.0, 5.0);
    let p = test_params();

    let m = sys.planets[0].mass;
    let expected_speed = p.g * m / (d * d) * p.h0;

    euler_step(&mut sys, &p);

    // First planet integrates against untouched peer positions: exact.
    let v0 = sys.planets[0].velocity;
    assert!((v0.x - expected_speed).abs() / expected_speed < 1e-12);
    assert_eq!(v0.y, 0.0);

    // Second planet sees the first one's slightly advanced position.
    let v1 = sys.planets[1].velocity;
    assert!(v1.x < 0.0, "second planet should accelerate toward the first");
    assert!((v1.norm() - expected_speed).abs() / expected_speed < 1e-4);
}

#[test]
fn isolated_planet_never_moves() {
    let mut sys = System::new(vec![Planet::new(
        NVec2::new(3.0, -7.0),
        NVec2::zeros(),
        10.0,
        1.0,
    )]);
    let p = test_params();

    for _ in 0..100 {
        euler_step(&mut sys, &p);
    }

    let planet = &sys.planets[0];
    assert_eq!(planet.position, NVec2::new(3.0, -7.0));
    assert_eq!(planet.velocity, NVec2::zeros());
    assert!(!planet.exceeded_max_acceleration);
}

#[test]
fn simulation_time_advances_by_fixed_step() {
    let mut sys = two_planet_system(500.0, 5.0, 5.0);
    let p = test_params();

    for _ in 0..10 {
        euler_step(&mut sys, &p);
    }

    assert!((sys.t - 10.0 * p.h0).abs() < 1e-12);
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_never_exceeds_configured_length() {
    let mut sys = System::new(vec![Planet::new(
        NVec2::zeros(),
        NVec2::new(10.0, 0.0),
        10.0,
        1.0,
    )]);
    let p = test_params();

    for _ in 0..300 {
        euler_step(&mut sys, &p);
        assert!(sys.planets[0].trail.len() <= p.trail_length);
    }

    // Far more ticks than needed to fill the trail: exactly at the cap.
    assert_eq!(sys.planets[0].trail.len(), p.trail_length);
}

#[test]
fn pending_trail_sample_tracks_live_position() {
    let mut sys = System::new(vec![Planet::new(
        NVec2::zeros(),
        NVec2::new(10.0, 0.0),
        10.0,
        1.0,
    )]);
    let p = test_params();

    // Appends happen every trail_skip_steps + 2 ticks; run one append plus
    // one in-between tick.
    let append_period = p.trail_skip_steps + 2;
    for _ in 0..=append_period {
        euler_step(&mut sys, &p);
    }

    let planet = &sys.planets[0];
    assert_eq!(planet.trail.len(), 1);

    // The in-between tick overwrote the newest sample with the live state.
    let last = planet.trail.back().unwrap();
    assert_eq!(last.position, planet.position);
    assert!((last.speed - planet.speed()).abs() < 1e-12);
}
