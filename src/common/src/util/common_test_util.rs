use rand::rngs::SmallRng;
use rand::{rng, Rng, SeedableRng};
use std::env;

/// Seeded rng for test data. Set SLOTSTORE_SEED to reproduce a failing run.
pub fn get_rng() -> SmallRng {
    match env::var("SLOTSTORE_SEED") {
        Ok(seed_str) => match seed_str.parse::<u64>() {
            Ok(seed) => {
                log::debug!("Using seed from SLOTSTORE_SEED: {}", seed);
                SmallRng::seed_from_u64(seed)
            }
            Err(_) => {
                let seed = rng().random::<u64>();
                log::debug!("Failed to parse SLOTSTORE_SEED, using random seed: {}", seed);
                SmallRng::seed_from_u64(seed)
            }
        },
        Err(_) => {
            let seed = rng().random::<u64>();
            log::debug!("No SLOTSTORE_SEED provided, using random seed: {}", seed);
            SmallRng::seed_from_u64(seed)
        }
    }
}

pub fn init() {
    // To change the log level for tests change the filter_level
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

pub fn get_random_byte_vec(rng: &mut SmallRng, n: usize) -> Vec<u8> {
    let random_bytes: Vec<u8> = (0..n).map(|_| rng.random::<u8>()).collect();
    random_bytes
}

pub fn get_random_vec_of_byte_vec(
    rng: &mut SmallRng,
    n: usize,
    min_size: usize,
    max_size: usize,
) -> Vec<Vec<u8>> {
    let mut res: Vec<Vec<u8>> = Vec::new();
    assert!(max_size >= min_size);
    let size_diff = max_size - min_size;
    for _ in 0..n {
        let size = if size_diff == 0 {
            min_size
        } else {
            rng.random_range(min_size..size_diff + min_size)
        };
        res.push((0..size).map(|_| rng.random::<u8>()).collect());
    }
    res
}

/// Create a Vec<Vec<u8>> where every byte of the k-th vec holds the same
/// marker value, ascending 1..=255 and wrapping. Handy for eyeballing page
/// dumps when a placement test fails.
pub fn get_ascending_vec_of_byte_vec_02x(
    rng: &mut SmallRng,
    n: usize,
    min_size: usize,
    max_size: usize,
) -> Vec<Vec<u8>> {
    let mut res: Vec<Vec<u8>> = Vec::new();
    assert!(max_size >= min_size);
    let size_diff = max_size - min_size;
    let mut elements = 1;
    for _ in 0..n {
        let size = if size_diff == 0 {
            min_size
        } else {
            rng.random_range(min_size..size_diff + min_size)
        };
        res.push((0..size).map(|_| elements).collect());
        if elements == 255 {
            elements = 1;
        } else {
            elements += 1;
        }
    }
    res
}
