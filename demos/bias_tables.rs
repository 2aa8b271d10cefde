//! Regenerates empirical bias tables for the 64-bit estimator.
//!
//! Usage: `cargo run --release --example bias_tables -- [precision] [trials]`
//!
//! For each of the evenly spaced cardinalities in `[0, 5 * 2^p]` the mean raw estimate over
//! `trials` independent simulations is printed together with its mean bias.
use hll_sketch::estimator::raw_estimate;
use hll_sketch::{hash_rank, Registers, MAX_PRECISION, MIN_PRECISION};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let mut args = std::env::args().skip(1);
    let precision: u32 = args.next().and_then(|v| v.parse().ok()).unwrap_or(10);
    assert!(
        (MIN_PRECISION..=MAX_PRECISION).contains(&precision),
        "precision should be in range [{MIN_PRECISION}, {MAX_PRECISION}]"
    );
    let m = 1usize << precision;
    let trials: usize = args
        .next()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| ((1usize << 30) / (5 * m)).clamp(200, 20000));

    let points = match precision {
        4 => 81,
        5 => 161,
        _ => 201,
    };
    let cardinalities: Vec<usize> = (0..points).map(|i| i * 5 * m / (points - 1)).collect();

    let mut raw_sums = vec![0.0; points];
    let mut rng = StdRng::seed_from_u64(precision.into());
    for _ in 0..trials {
        let mut registers = Registers::new(m);
        let mut appended = 0;
        for (sum, &cardinality) in raw_sums.iter_mut().zip(&cardinalities) {
            for _ in appended..cardinality {
                let (idx, rank) = hash_rank(rng.gen(), precision, 64);
                registers.update(idx, rank);
            }
            appended = cardinality;
            *sum += raw_estimate(&registers);
        }
    }

    println!("// precision = {precision}, trials = {trials}");
    println!("raw_estimate bias");
    for (sum, &cardinality) in raw_sums.iter().zip(&cardinalities) {
        let raw = sum / trials as f64;
        println!("{raw:.4} {:.4}", raw - cardinality as f64);
    }
}
