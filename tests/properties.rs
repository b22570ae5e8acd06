//! Seeded sweeps over generated environments.
//!
//! Every generated grid is checked against the generator postconditions, and
//! every search result is checked against an independent brute-force optimum.

mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use vastu_khoj::{
    CellType, CollectSearch, EnvironmentConfig, EnvironmentGenerator, Position, is_reachable,
};

const SEEDS: u64 = 150;

fn configs() -> Vec<EnvironmentConfig> {
    vec![
        EnvironmentConfig::default(),
        EnvironmentConfig::new(4, 2, 4),
        EnvironmentConfig::new(6, 4, 10),
        EnvironmentConfig::new(7, 3, 0),
        EnvironmentConfig::new(5, 0, 8),
    ]
}

#[test]
fn test_generated_environments_meet_postconditions() {
    for config in configs() {
        let generator = EnvironmentGenerator::new(config.clone()).unwrap();
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let env = generator.generate_with_rng(&mut rng).unwrap();
            let size = config.size as i32;

            assert_eq!(env.start, Position::new(0, 0));
            assert_eq!(env.exit, Position::new(size - 1, size - 1));
            assert_eq!(env.grid.get(env.start), Some(CellType::Start));
            assert_eq!(env.grid.get(env.exit), Some(CellType::Exit));

            let counts = env.grid.count_by_type();
            assert_eq!(counts.start, 1);
            assert_eq!(counts.exit, 1);
            assert_eq!(counts.collectible, config.collectibles, "seed {}", seed);
            assert_eq!(counts.obstacle, config.obstacles, "seed {}", seed);
            assert_eq!(counts.total(), config.size * config.size);

            assert_eq!(env.collectibles.len(), config.collectibles);
            for c in env.collectibles.iter() {
                assert_eq!(env.grid.get(*c), Some(CellType::Collectible));
            }

            assert!(is_reachable(&env.grid, env.start, env.exit), "seed {}", seed);
            assert!(env.attempts >= 1 && env.attempts <= config.max_attempts);
        }
    }
}

#[test]
fn test_search_matches_brute_force() {
    for config in configs() {
        let generator = EnvironmentGenerator::new(config).unwrap();
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let env = generator.generate_with_rng(&mut rng).unwrap();

            let result = CollectSearch::for_environment(&env).find_path();
            let expected = common::brute_force_steps(&env);

            match expected {
                Some(steps) => {
                    assert!(result.success, "seed {}: search missed a path", seed);
                    common::assert_valid_walk(&env, &result.path);
                    assert_eq!(result.steps(), steps, "seed {}: not shortest", seed);
                    assert_eq!(result.collected, env.collectibles.len());
                }
                None => {
                    assert!(result.path.is_empty(), "seed {}: path without tour", seed);
                    assert!(!result.success);
                }
            }
        }
    }
}

#[test]
fn test_start_appears_once() {
    let generator = EnvironmentGenerator::new(EnvironmentConfig::new(6, 3, 6)).unwrap();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let env = generator.generate_with_rng(&mut rng).unwrap();
        let result = CollectSearch::for_environment(&env).find_path();
        let starts = result.path.iter().filter(|p| **p == env.start).count();
        if result.success {
            assert_eq!(starts, 1, "seed {}", seed);
        }
    }
}

#[test]
fn test_visit_stream_never_crosses_obstacles() {
    let generator = EnvironmentGenerator::new(EnvironmentConfig::new(6, 2, 8)).unwrap();
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let env = generator.generate_with_rng(&mut rng).unwrap();

        let mut last_depth = 0;
        for event in CollectSearch::for_environment(&env).steps() {
            assert_ne!(env.grid.get(event.position), Some(CellType::Obstacle));
            assert_eq!(event.path.last(), Some(&event.position));
            assert_eq!(event.path.len(), event.depth + 1);
            assert!(event.depth >= last_depth);
            last_depth = event.depth;
        }
    }
}
