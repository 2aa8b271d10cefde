use hll_sketch::{
    estimate_distinct, BiasCorrection, Config, Sha1Hasher, Sketch, SketchError,
    StandardCorrection,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

fn items(range: std::ops::Range<usize>) -> impl DoubleEndedIterator<Item = String> {
    range.map(|i| format!("item{i}"))
}

fn sketch(high_precision: bool, requested: usize) -> Sketch {
    if high_precision {
        Sketch::high_precision(requested).unwrap()
    } else {
        Sketch::new(requested).unwrap()
    }
}

#[test_case(false, 1 << 10; "standard p10")]
#[test_case(false, 1 << 12; "standard p12")]
#[test_case(false, 1 << 14; "standard p14")]
#[test_case(true, 1 << 10; "high precision p10")]
#[test_case(true, 1 << 12; "high precision p12")]
#[test_case(true, 1 << 14; "high precision p14")]
fn test_accuracy(high_precision: bool, requested: usize) {
    let mut sketch = sketch(high_precision, requested);
    let mut appended = 0;
    for n in [10, 100, 1000, 5000, 20000, 100000] {
        sketch.extend(items(appended..n));
        appended = n;
        let estimate = sketch.cardinality();
        let error = (estimate - n as f64).abs() / n as f64;
        assert!(
            error < 3.5 * sketch.error_bound(),
            "n = {n}: estimate = {estimate}, relative error = {error}"
        );
    }
}

#[test]
fn test_small_cardinalities_are_near_exact() {
    // linear counting dominates while most registers are empty
    for n in [1, 2, 3, 5, 10, 20] {
        let mut sketch = Sketch::high_precision(1 << 14).unwrap();
        sketch.extend(items(0..n));
        assert!((sketch.cardinality() - n as f64).abs() < 0.05, "n = {n}");
    }
}

#[test_case(false, 16; "standard p4")]
#[test_case(false, 1 << 16; "standard p16")]
#[test_case(true, 16; "high precision p4")]
#[test_case(true, 1 << 18; "high precision p18")]
fn test_range_invariant(high_precision: bool, requested: usize) {
    let mut sketch = sketch(high_precision, requested);
    let max_rank = sketch.config().max_rank();
    let mut rng = StdRng::seed_from_u64(12345);
    for _ in 0..10000 {
        sketch.append_hash(rng.gen());
    }
    // extreme digests
    sketch.append_hash(0);
    sketch.append_hash(u64::MAX);
    sketch.append_hash(1);
    assert!(sketch.registers().as_slice().iter().all(|&r| r <= max_rank));
    assert_eq!(sketch.registers().get(0), Some(max_rank));
    assert!(sketch.cardinality() >= 0.0);
}

#[test]
fn test_appending_never_decreases_registers() {
    let mut sketch = Sketch::new(64).unwrap();
    let mut previous = sketch.registers().clone();
    for item in items(0..2000) {
        sketch.append(&item);
        let current = sketch.registers();
        assert!(previous
            .as_slice()
            .iter()
            .zip(current.as_slice())
            .all(|(before, after)| before <= after));
        previous = current.clone();
    }
}

#[test]
fn test_merging_never_decreases_registers() {
    let mut receiver = Sketch::high_precision(64).unwrap();
    receiver.extend(items(0..500));
    let before = receiver.registers().clone();
    let mut other = Sketch::high_precision(64).unwrap();
    other.extend(items(500..510));
    receiver.merge([&other]).unwrap();
    assert!(before
        .as_slice()
        .iter()
        .zip(receiver.registers().as_slice())
        .all(|(before, after)| before <= after));
}

#[test_case("abc"; "string")]
#[test_case("654941.845"; "numeric string")]
#[test_case(""; "empty string")]
fn test_duplicates_are_idempotent(element: &str) {
    let mut once = Sketch::new(256).unwrap();
    once.append(element);
    let mut twice = once.clone();
    twice.append(element);
    assert_eq!(once, twice);
    assert_eq!(once.cardinality(), twice.cardinality());
}

#[test]
fn test_order_does_not_matter() {
    let mut forward = Sketch::high_precision(512).unwrap();
    forward.extend(items(0..3000));
    let mut backward = Sketch::high_precision(512).unwrap();
    backward.extend(items(0..3000).rev());
    assert_eq!(forward, backward);
}

#[test]
fn test_merge_laws() {
    let parts: Vec<Sketch> = [0..300, 200..900, 850..2000]
        .into_iter()
        .map(|range| {
            let mut sketch = Sketch::new(256).unwrap();
            sketch.extend(items(range));
            sketch
        })
        .collect();
    let (a, b, c) = (&parts[0], &parts[1], &parts[2]);

    assert_eq!(
        Sketch::combine(a, b).unwrap().registers(),
        Sketch::combine(b, a).unwrap().registers()
    );
    let left = Sketch::combine(&Sketch::combine(a, b).unwrap(), c).unwrap();
    let right = Sketch::combine(a, &Sketch::combine(b, c).unwrap()).unwrap();
    assert_eq!(left.registers(), right.registers());
    assert_eq!(left, (&(a + b).unwrap() + c).unwrap());

    // merging a sketch with itself changes nothing
    assert_eq!(Sketch::combine(a, a).unwrap(), *a);
}

#[test]
fn test_merge_of_disjoint_shards_equals_single_sketch() {
    let mut whole = Sketch::high_precision(4096).unwrap();
    whole.extend(items(0..50000));

    let mut merged = Sketch::high_precision(4096).unwrap();
    let shards: Vec<Sketch> = (0..5)
        .map(|shard| {
            let mut sketch = Sketch::high_precision(4096).unwrap();
            sketch.extend(items(shard * 10000..(shard + 1) * 10000));
            sketch
        })
        .collect();
    merged.merge(&shards).unwrap();

    assert_eq!(merged, whole);
    assert_eq!(merged.cardinality(), whole.cardinality());
}

#[test]
fn test_sharded_threads() {
    let data: Vec<String> = items(0..40000).collect();
    let shards: Vec<Sketch> = std::thread::scope(|scope| {
        let handles: Vec<_> = data
            .chunks(10000)
            .map(|chunk| {
                scope.spawn(move || {
                    let mut sketch = Sketch::high_precision(4096).unwrap();
                    sketch.extend(chunk);
                    sketch
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    // tree shaped reduction
    let left = (&shards[0] + &shards[1]).unwrap();
    let right = (&shards[2] + &shards[3]).unwrap();
    let tree = (&left + &right).unwrap();
    let linear = Sketch::merge_all(shards).unwrap().unwrap();

    let mut expected = Sketch::high_precision(4096).unwrap();
    expected.extend(&data);
    assert_eq!(tree, expected);
    assert_eq!(linear, expected);
}

#[test_case(Sketch::new(256).unwrap(), Sketch::new(512).unwrap(); "register count")]
#[test_case(Sketch::new(256).unwrap(), Sketch::high_precision(256).unwrap(); "hash width")]
#[test_case(Sketch::high_precision(1 << 17).unwrap(), Sketch::high_precision(1 << 16).unwrap(); "high precision register count")]
fn test_incompatible_merge(mut lhs: Sketch, mut rhs: Sketch) {
    lhs.extend(items(0..100));
    rhs.extend(items(100..200));
    let (lhs_before, rhs_before) = (lhs.clone(), rhs.clone());

    assert!(matches!(
        lhs.merge([&rhs]),
        Err(SketchError::IncompatibleSketches { .. })
    ));
    assert!(Sketch::combine(&rhs, &lhs).is_err());
    assert!(Sketch::merge_all([lhs.clone(), rhs.clone()]).is_err());
    assert_eq!(lhs, lhs_before);
    assert_eq!(rhs, rhs_before);
}

#[test]
fn test_same_width_with_different_correction_merges() {
    // neighbors only affect interpolation, not the register layout
    let config = Config::new(256, BiasCorrection::new(3).unwrap()).unwrap();
    let mut lhs = Sketch::from_config(config, Sha1Hasher);
    lhs.extend(items(0..100));
    let mut rhs = Sketch::high_precision(256).unwrap();
    rhs.extend(items(100..200));
    lhs.merge([&rhs]).unwrap();

    let mut expected = Sketch::from_config(config, Sha1Hasher);
    expected.extend(items(0..200));
    assert_eq!(lhs, expected);
}

#[test_case(0; "zero")]
#[test_case(15; "below minimum")]
#[test_case(1 << 19; "above maximum")]
fn test_invalid_register_count(requested: usize) {
    assert!(Sketch::new(requested).unwrap_err().is_configuration_error());
    assert!(Sketch::high_precision(requested)
        .unwrap_err()
        .is_configuration_error());
    assert!(Sketch::with_hasher(requested, StandardCorrection, Sha1Hasher).is_err());
}

#[test]
fn test_precision_limits_differ_by_variant() {
    assert!(Sketch::new(1 << 17).is_err());
    assert_eq!(Sketch::high_precision(1 << 17).unwrap().precision(), 17);
    assert_eq!(Sketch::high_precision(200_000).unwrap().precision(), 18);
}

#[test]
fn test_estimate_distinct() {
    let data: Vec<String> = items(0..5000).chain(items(0..5000)).collect();
    let estimate = estimate_distinct(&data, 1 << 12).unwrap();
    assert!((estimate - 5000.0).abs() < 3.5 * 0.01625 * 5000.0, "{estimate}");
}
