#![no_main]

use hll_sketch::Sketch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut sketch) = serde_json::from_slice::<Sketch>(data) {
        sketch.append("abc");
        assert!(!sketch.cardinality().is_nan());
        let max_rank = sketch.config().max_rank();
        assert!(sketch.registers().as_slice().iter().all(|&r| r <= max_rank));
    }
});
