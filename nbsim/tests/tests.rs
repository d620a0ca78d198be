use approx::assert_relative_eq;

use nbsim::simulation::forces::{accumulate_forces, ForceKernel};
use nbsim::{
    first_non_finite, run_kernel, run_kernel_with, Body, ConfigurationError, DirectGravity, Kernel,
    NVec2, NoopObserver, SimulationRun, SymmetricGravity, System, MAX_BODIES,
};

/// Bodies at rest along the x axis
pub fn line_system(xs: &[f64], masses: &[f64]) -> System {
    xs.iter()
        .zip(masses)
        .map(|(&x, &m)| Body::at_rest(NVec2::new(x, 0.0), m))
        .collect::<Vec<_>>()
        .into()
}

/// Run with G = 1 and unit steps, easy to follow by hand
pub fn unit_run(n: usize, use_third_law: bool, steps: u64) -> SimulationRun {
    SimulationRun {
        body_count: n,
        use_third_law,
        step_count: steps,
        step_size: 1.0,
        G: 1.0,
        ..SimulationRun::default()
    }
}

/// Step-zero forces of `kernel` on `sys`
pub fn forces_of(kernel: &mut dyn ForceKernel, sys: &System) -> Vec<NVec2> {
    let mut out = vec![NVec2::zeros(); sys.len()];
    accumulate_forces(kernel, sys, &mut out);
    out
}

// ==================================================================================
// Body store tests
// ==================================================================================

#[test]
fn initial_layout() {
    let n = 8;
    let sys = System::initialize(n, 1.0);

    assert_eq!(sys.len(), n);
    for (i, b) in sys.bodies.iter().enumerate() {
        assert_eq!(b.x, NVec2::new(i as f64 / n as f64, 0.0));
        assert_eq!(b.v, NVec2::zeros());
        assert_eq!(b.m, 2.0);
    }
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn three_body_forces_by_hand() {
    let sys = line_system(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);

    // body 0: 1 * 1 / 1^2 from body 1, 1 * 2 / 2^3 from body 2
    let expected = [NVec2::new(1.25, 0.0), NVec2::new(0.0, 0.0), NVec2::new(-1.25, 0.0)];

    let direct = forces_of(&mut DirectGravity { G: 1.0 }, &sys);
    let symmetric = forces_of(&mut SymmetricGravity::new(1.0), &sys);

    for i in 0..3 {
        assert_relative_eq!(direct[i].x, expected[i].x, epsilon = 1e-12);
        assert_relative_eq!(symmetric[i].x, expected[i].x, epsilon = 1e-12);
        assert_eq!(direct[i].y, 0.0);
        assert_eq!(symmetric[i].y, 0.0);
    }
}

#[test]
fn three_body_mirrored_pairs() {
    let sys = line_system(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);
    let mut kernel = SymmetricGravity::recording(1.0, 3);
    let out = forces_of(&mut kernel, &sys);

    let cache = kernel.pair_cache().unwrap();
    assert_eq!(cache.action(0, 1), NVec2::new(1.0, 0.0));
    assert_eq!(cache.action(0, 2), NVec2::new(0.25, 0.0));
    assert_eq!(out[0], cache.action(0, 1) + cache.action(0, 2));
    assert_eq!(out[2], cache.reaction(0, 2) + cache.reaction(1, 2));
}

#[test]
fn third_law_equivalence_on_default_layout() {
    let sys = System::initialize(40, 1.0);

    let mut direct_kernel = Kernel::new(SimulationRun::new(40, false)).unwrap();
    let mut symmetric_kernel = Kernel::new(SimulationRun::new(40, true)).unwrap();

    let direct = direct_kernel.compute_forces(&sys).unwrap().to_vec();
    let symmetric = symmetric_kernel.compute_forces(&sys).unwrap();

    assert_eq!(direct.len(), 40);
    assert!(direct.iter().all(|f| f.norm() > 0.0));
    for (a, b) in direct.iter().zip(symmetric) {
        assert_relative_eq!(a.norm(), b.norm(), max_relative = 1e-9);
        assert_relative_eq!(a.x, b.x, max_relative = 1e-9);
    }
}

#[test]
fn pairwise_antisymmetry() {
    let sys = line_system(&[0.0, 0.3, 1.1, 2.0], &[1.0, 2.0, 0.5, 4.0]);
    let mut kernel = SymmetricGravity::recording(1.0, sys.len());
    let out = forces_of(&mut kernel, &sys);
    let cache = kernel.pair_cache().unwrap();

    // replaying the cache in storage order reproduces the accumulator bit for bit
    let mut replay = vec![NVec2::zeros(); sys.len()];
    for (i, j, f) in cache.iter() {
        assert_eq!(cache.reaction(i, j), -f);
        replay[i] += f;
        replay[j] += cache.reaction(i, j);
    }
    assert_eq!(replay, out);
}

#[test]
fn symmetric_loop_mirrors_the_action_vector() {
    // the mirrored term reuses m_j, so unequal masses differ from the full loop on j
    let sys = line_system(&[0.0, 1.0], &[1.0, 3.0]);

    let direct = forces_of(&mut DirectGravity { G: 1.0 }, &sys);
    let symmetric = forces_of(&mut SymmetricGravity::new(1.0), &sys);

    assert_eq!(direct, vec![NVec2::new(3.0, 0.0), NVec2::new(-1.0, 0.0)]);
    assert_eq!(symmetric, vec![NVec2::new(3.0, 0.0), NVec2::new(-3.0, 0.0)]);
}

// ==================================================================================
// Kernel tests
// ==================================================================================

#[test]
fn three_body_integration_by_hand() {
    for third_law in [false, true] {
        let mut kernel = Kernel::new(unit_run(3, third_law, 2)).unwrap();
        let mut sys = line_system(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);
        kernel.advance(&mut sys, &mut NoopObserver).unwrap();

        // step 1 moves nothing (previous velocity was zero), so step 2 sees the same forces
        assert_eq!(kernel.forces()[0], NVec2::new(1.25, 0.0));
        assert_eq!(sys.bodies[0].v, NVec2::new(2.5, 0.0));
        assert_eq!(sys.bodies[0].x, NVec2::new(1.25, 0.0));
        assert_eq!(sys.bodies[1].v, NVec2::zeros());
        assert_eq!(sys.bodies[1].x, NVec2::new(1.0, 0.0));
        assert_eq!(sys.bodies[2].x, NVec2::new(0.75, 0.0));
    }
}

#[test]
fn runs_are_deterministic() {
    for third_law in [false, true] {
        let run = SimulationRun::new(64, third_law);
        let a = run_kernel(&run).unwrap();
        let b = run_kernel(&run).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn empty_run() {
    let run = SimulationRun::new(0, true);
    assert!(run_kernel(&run).unwrap().is_empty());

    let mut kernel = Kernel::new(run).unwrap();
    let mut sys = System::initialize(0, 1.0);
    let stats = kernel.advance(&mut sys, &mut NoopObserver).unwrap();
    assert_eq!(stats.pair_evaluations, 0);
}

#[test]
fn single_body_stays_put() {
    for third_law in [false, true] {
        let mut run = unit_run(1, third_law, 25);
        run.spacing_extent = 1.0;
        let sys = run_kernel(&run).unwrap();

        assert_eq!(sys.len(), 1);
        assert_eq!(sys.bodies[0].x, NVec2::zeros());
        assert_eq!(sys.bodies[0].v, NVec2::zeros());
    }
}

#[test]
fn stepping_one_at_a_time_matches_one_call() {
    let k = 5;
    for third_law in [false, true] {
        let all_at_once = run_kernel(&unit_run(2, third_law, k)).unwrap();

        let mut sys = System::initialize(2, 1.0);
        for _ in 0..k {
            let mut kernel = Kernel::new(unit_run(2, third_law, 1)).unwrap();
            kernel.advance(&mut sys, &mut NoopObserver).unwrap();
        }

        assert_eq!(sys, all_at_once);
    }
}

#[test]
fn observer_does_not_change_results() {
    let mut run = SimulationRun::new(20, true);
    run.report_every = 1;

    let mut snapshots = Vec::new();
    let mut keep = |step: u64, sys: &System| snapshots.push((step, sys.clone()));
    let observed = run_kernel_with(&run, &mut keep).unwrap();

    assert_eq!(observed, run_kernel(&run).unwrap());
    assert_eq!(snapshots.len() as u64, run.step_count + 1);
    assert_eq!(snapshots[0].1, System::initialize(20, 1.0));
    assert_eq!(snapshots.last().unwrap().1, observed);
}

#[test]
fn compute_forces_leaves_state_alone() {
    let sys = line_system(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);
    let before = sys.clone();
    let mut kernel = Kernel::new(unit_run(3, true, 1)).unwrap();

    let forces = kernel.compute_forces(&sys).unwrap().to_vec();

    assert_eq!(forces[0], NVec2::new(1.25, 0.0));
    assert_eq!(kernel.forces(), &forces[..]);
    assert_eq!(sys, before);
}

#[test]
fn over_capacity_is_a_configuration_error() {
    let run = SimulationRun::new(MAX_BODIES + 1, false);
    assert_eq!(
        run_kernel(&run).unwrap_err(),
        ConfigurationError::CapacityExceeded {
            requested: MAX_BODIES + 1,
            capacity: MAX_BODIES
        }
    );
}

#[test]
fn coincident_bodies_propagate_non_finite_values() {
    let mut sys = line_system(&[0.5, 0.5], &[1.0, 1.0]);
    let mut kernel = Kernel::new(unit_run(2, true, 1)).unwrap();

    // no error: the degenerate pair just poisons the state
    assert!(kernel.advance(&mut sys, &mut NoopObserver).is_ok());
    assert_eq!(first_non_finite(&sys), Some(0));
}
