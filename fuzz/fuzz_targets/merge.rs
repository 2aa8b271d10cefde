#![no_main]

use hll_sketch::Sketch;
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);

    let mut sketch1 = Sketch::high_precision(256).unwrap();
    for chunk in first_half.chunks(4) {
        sketch1.append(chunk);
        assert!(sketch1.cardinality() > 0.0);
    }

    let mut sketch2 = Sketch::high_precision(256).unwrap();
    for chunk in second_half.chunks(4) {
        sketch2.append(chunk);
        assert!(sketch2.cardinality() > 0.0);
    }

    let combined = (&sketch2 + &sketch1).unwrap();
    sketch1.merge([&sketch2]).unwrap();
    assert_eq!(sketch1, combined);

    let max_rank = sketch1.config().max_rank();
    assert!(sketch1.registers().as_slice().iter().all(|&r| r <= max_rank));
});
