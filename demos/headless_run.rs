// demos/headless_run.rs
//
// Runs the swarm without a window. A scripted "cursor" drags across the bounds
// and emits spawn events the way a held mouse button would.
//
// RUST_LOG=debug cargo run --example headless_run

use log::info;
use rs_particle_swarm::simulation::{Simulation, SpawnEvent};
use rs_particle_swarm::utils::{SimulationConfig, SimulationError};

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let config = SimulationConfig::default().with_seed(2024);
    let mut sim = Simulation::new(config)?;

    println!("Bounds: {} x {}, population cap {}", config.width, config.height, config.population_cap);

    let ticks = 600;
    for tick in 0..ticks {
        // Hold the button for the first 60 ticks, sweeping left to right.
        let events: Vec<SpawnEvent> = if tick < 60 {
            let t = tick as f64 / 60.0;
            vec![SpawnEvent::new(config.width * (0.2 + 0.6 * t), config.height * 0.5)]
        } else {
            Vec::new()
        };

        let frame = sim.step(&events);

        if tick % 100 == 0 {
            let stats = sim.last_stats();
            let mean_intensity = frame.iter().map(|s| s.intensity).sum::<f64>() / frame.len().max(1) as f64;
            info!(
                "tick {}: {} particles, tree depth {}, {} interactions",
                stats.tick, stats.population, stats.tree_depth, stats.interactions
            );
            println!("Tick {:>4}: population={:>3}, mean intensity={:.3}", stats.tick, stats.population, mean_intensity);
        }
    }

    let population = sim.population();
    println!("\nAfter {} ticks:", ticks);
    println!("Population: {}", population.len());
    println!("Particles ever created: {}", population.total_admitted());
    if let Some(oldest) = population.oldest() {
        println!("Oldest surviving particle: #{}", oldest.serial());
    }

    Ok(())
}
