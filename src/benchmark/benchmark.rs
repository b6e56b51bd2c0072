use std::time::Instant;

use crate::configuration::config::SimulationConfig;
use crate::error::Result;
use crate::simulation::forces::ForceSample;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::scenario::Scenario;

/// Solar system with `asteroids` belt bodies, unbounded trails
fn make_scenario(asteroids: usize) -> Result<Scenario> {
    let mut cfg = SimulationConfig::default();
    cfg.asteroids.count = asteroids;
    Scenario::initialize(&cfg)
}

/// Time one force pass for growing belt sizes
pub fn bench_gravity() -> Result<()> {
    // Different belt sizes to test
    let ns = [250, 500, 1000, 2000, 4000];

    for n in ns {
        let scenario = make_scenario(n)?;
        let mut out = vec![ForceSample::default(); scenario.system.len()];

        // Warm up
        scenario.forces.accumulate_forces(&scenario.system, &mut out)?;

        let t0 = Instant::now();
        scenario.forces.accumulate_forces(&scenario.system, &mut out)?;
        let dt_forces = t0.elapsed().as_secs_f64();

        println!("N = {:5}, forces = {:8.6} s", scenario.system.len(), dt_forces);
    }
    Ok(())
}

/// Time full integrator steps, CSV output: N,step_ms
pub fn bench_step_curve() -> Result<()> {
    println!("N,step_ms");

    for n in (250..=4000).step_by(250) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1000 { 5 } else { 1 };

        let mut scenario = make_scenario(n)?;
        let dt = scenario.engine.clock.dt();

        let t0 = Instant::now();
        for _ in 0..steps {
            symplectic_euler(&mut scenario.system, &scenario.forces, dt)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", scenario.system.len(), ms);
    }
    Ok(())
}
