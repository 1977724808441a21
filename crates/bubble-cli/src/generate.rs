use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::InputConfig;

/// Draw `count` integers uniformly from `min..=max`.
pub fn random_numbers(input: &InputConfig) -> Vec<i64> {
    let mut rng = match input.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..input.count)
        .map(|_| rng.gen_range(input.min..=input.max))
        .collect()
}

/// Benchmark inputs per size: random, nearly sorted (about 10% swapped)
/// and reversed.
pub fn bench_cases(sizes: &[usize], rng: &mut impl Rng) -> Vec<Vec<i32>> {
    let mut cases = Vec::new();

    for &size in sizes {
        for _ in 0..5 {
            let data: Vec<i32> = (0..size).map(|_| rng.gen_range(-10000..10000)).collect();
            cases.push(data);
        }

        for _ in 0..2 {
            let mut data: Vec<i32> = (0..size as i32).collect();
            if size > 0 {
                for _ in 0..size / 10 {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    data.swap(i, j);
                }
            }
            cases.push(data);
        }

        cases.push((0..size as i32).rev().collect());
    }

    cases
}
