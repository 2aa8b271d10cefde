use hll_sketch::Sketch;

fn main() {
    // Each shard is sketched independently, e.g. by a different worker.
    let shards = [0..10usize, 10..15, 5..20];
    let sketches: Vec<Sketch> = shards
        .iter()
        .map(|shard| {
            let mut sketch = Sketch::high_precision(4096).unwrap();
            sketch.extend(shard.clone());
            println!("shard {:?} estimate = {:.2}", shard, sketch.cardinality());
            sketch
        })
        .collect();

    let merged = Sketch::merge_all(sketches).unwrap().unwrap();
    println!("merged estimate = {:.2}", merged.cardinality());

    let mut standard = Sketch::new(4096).unwrap();
    standard.extend(["abc", "def", "ghi", "def", "abc"]);
    println!(
        "standard estimate = {:.2} (error bound {:.4})",
        standard.cardinality(),
        standard.error_bound()
    );
}
