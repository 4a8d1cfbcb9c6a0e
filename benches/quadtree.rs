use criterion::{black_box, criterion_group, criterion_main, Criterion};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_particle_swarm::particles::Particle;
use rs_particle_swarm::simulation::Simulation;
use rs_particle_swarm::spatial::{QuadTree, RangeQuery};
use rs_particle_swarm::utils::{IntegrationMode, SimulationConfig};

fn scatter(count: usize, config: &SimulationConfig, rng: &mut StdRng) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let position = (rng.random_range(0.0..config.width), rng.random_range(0.0..config.height));
            Particle::spawn(position, None, None, rng).expect("Failed to spawn particle")
        })
        .collect()
}

pub fn bench_quadtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    let particles = scatter(2_000, &config, &mut rng);
    let tree = QuadTree::build(&config, &particles);
    debug!("benchmark tree: {} nodes, depth {}", tree.node_count(), tree.depth());

    group.bench_function("build", |b| b.iter(|| {
        black_box(QuadTree::build(&config, black_box(&particles)));
    }));

    group.bench_function("query_all", |b| b.iter(|| {
        let mut found = Vec::new();
        for p in &particles {
            found.clear();
            tree.query_into(&RangeQuery::around(p, config.detection_range), &particles, &mut found);
        }
        black_box(found.len())
    }));

    group.bench_function("brute_force_all", |b| b.iter(|| {
        let mut hits = 0usize;
        for p in &particles {
            let range = RangeQuery::around(p, config.detection_range);
            hits += particles.iter().filter(|q| range.contains(*q)).count();
        }
        black_box(hits)
    }));
}

pub fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(50);

    for mode in [IntegrationMode::Sequential, IntegrationMode::Snapshot] {
        let config = SimulationConfig::new(None, None, None, None, Some(2_000), None, None)
            .with_seed(1)
            .with_integration_mode(mode);
        let mut rng = StdRng::seed_from_u64(1);
        let particles = scatter(2_000, &config, &mut rng);
        let mut sim = Simulation::with_particles(config, particles).expect("Failed to build simulation");

        group.bench_function(format!("{:?}", mode), |b| b.iter(|| {
            black_box(sim.advance());
        }));
    }
}

criterion_group!(benches, bench_quadtree, bench_step);
criterion_main!(benches);
