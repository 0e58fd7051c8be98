use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Input shapes used to exercise and benchmark the sort implementations.
/// All patterns produce i32 values, the element type of the fixed scenarios.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    // A handful of values make up most of the input, which produces large mid groups.
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();

    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        return random_vec(len);
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn descending_runs(len: usize, run_count: usize) -> Vec<i32> {
    // :.  :.  :.
    // ::.:::.:::.

    // The same descending run `run_len..=1` repeated, every value shows up `run_count` times.
    let run_count = run_count.max(1);
    let run_len = len / run_count;

    let mut vals: Vec<i32> = (0..run_count)
        .flat_map(|_| (1..=run_len as i32).rev())
        .collect();

    // Pad with the largest value so the requested len is honored.
    vals.resize(len, run_len as i32);

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(saw_directions) {
        if direction == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

pub fn middle_pivot_killer(len: usize) -> Vec<i32> {
    //  .:.
    // .:::.

    // The element at `len / 2` is always the maximum of what is left after removing the previous
    // maximum, a middle index pivot peels off one element per partition level.
    let mut vals = Vec::with_capacity(len);
    for val in 0..len as i32 {
        let new_len = vals.len() + 1;
        vals.insert(new_len / 2, val);
    }

    vals
}

/// Makes each call to a random derived pattern yield new random values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation, which
/// makes a failure reproducible with `OVERRIDE_SEED`. Benchmarks should call this.
pub fn use_random_seed_each_time() {
    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    *PER_PROCESS_SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);
static PER_PROCESS_SEED: OnceCell<u64> = OnceCell::new();

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
