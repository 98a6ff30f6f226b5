use interposort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_array(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}

#[test]
fn test_fixed_seed_reproduces_output() {
    let input = random_array(100_000, 1);

    let mut first = input.clone();
    interposort_seeded(&mut first, 99).unwrap();

    let mut second = input.clone();
    interposort_seeded(&mut second, 99).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_seeded_matches_explicit_std_rng() {
    // `interposort_seeded` is exactly `interposort_with` over a seeded StdRng.
    let input = random_array(50_000, 2);

    let mut seeded = input.clone();
    interposort_seeded(&mut seeded, 7).unwrap();

    let mut explicit = input.clone();
    let mut rng = StdRng::seed_from_u64(7);
    interposort_with(&mut explicit, &mut rng).unwrap();

    assert_eq!(seeded, explicit);
}

#[test]
fn test_timed_run_is_observation_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    let input = random_array(200_000, 3);

    let mut plain = input.clone();
    interposort_seeded(&mut plain, 13).unwrap();

    let mut timed = input.clone();
    let mut rng = StdRng::seed_from_u64(13);
    let timings = interposort_timed(&mut timed, &mut rng).unwrap();

    assert_eq!(plain, timed);
    assert!(timings.total() > Duration::ZERO);
    println!("{timings}");
}

#[test]
fn test_small_range_reports_empty_timings() {
    // Below the pipeline threshold no phase ever runs.
    let mut data = vec![3, 1, 2];
    let mut rng = StdRng::seed_from_u64(0);
    let timings = interposort_timed(&mut data, &mut rng).unwrap();
    assert_eq!(data, vec![1, 2, 3]);
    assert_eq!(timings.total(), Duration::ZERO);
}
