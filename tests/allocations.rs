#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hll_sketch::Sketch;
use hyperloglogplus::{HyperLogLog, HyperLogLogPlus};
use std::hash::BuildHasherDefault;
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};
use wyhash::WyHash;

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    standard: String,
    high_precision: String,
    hyperloglog: String,
    hyperloglogplus: String,
}

struct Usage {
    size: usize,
    total_bytes: u64,
    total_blocks: u64,
}

impl Usage {
    fn format(&self) -> String {
        format!("{} / {} / {}", self.size, self.total_bytes, self.total_blocks)
    }
}

fn measure_memory_usage<T, E: ?Sized>(
    elements: &[&E],
    create: impl Fn() -> T,
    append: impl Fn(&mut T, &E),
) -> Usage
where
    T: Sized,
{
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = create();
    for element in elements {
        append(&mut estimator, *element);
    }
    let stats = dhat::HeapStats::get();
    Usage {
        size: std::mem::size_of::<T>(),
        total_bytes: stats.total_bytes,
        total_blocks: stats.total_blocks,
    }
}

// dhat allows a single running profiler, so all measurements share one test.
#[test]
fn test_allocations() {
    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= 1 << 16)
        .collect();

    let max_cardinality = *cardinalities.last().unwrap();
    let strings: Vec<String> = (0..max_cardinality).map(|i| format!("item{i}")).collect();
    let numbers: Vec<usize> = (0..max_cardinality).collect();

    // Appending borrowed bytes never allocates: the only heap block is the register array.
    for &cardinality in &cardinalities {
        let elements: Vec<&str> = strings[..cardinality].iter().map(String::as_str).collect();
        for create in [Sketch::new as fn(usize) -> _, Sketch::high_precision] {
            let usage = measure_memory_usage(
                &elements,
                || create(4096).unwrap(),
                |sketch, element| sketch.append(element),
            );
            assert_eq!(usage.total_blocks, 1, "cardinality {cardinality}");
            assert_eq!(usage.total_bytes, 4096, "cardinality {cardinality}");
        }
    }

    let results: Vec<Record> = cardinalities
        .iter()
        .map(|&cardinality| {
            let elements: Vec<&usize> = numbers[..cardinality].iter().collect();
            Record {
                cardinality,
                standard: measure_memory_usage(
                    &elements,
                    || Sketch::new(4096).unwrap(),
                    |sketch, i| sketch.append(i),
                )
                .format(),
                high_precision: measure_memory_usage(
                    &elements,
                    || Sketch::high_precision(4096).unwrap(),
                    |sketch, i| sketch.append(i),
                )
                .format(),
                hyperloglog: measure_memory_usage(
                    &elements,
                    || hyperloglog::HyperLogLog::new(0.01625),
                    |est, i| est.insert(i),
                )
                .format(),
                hyperloglogplus: measure_memory_usage(
                    &elements,
                    || {
                        HyperLogLogPlus::<usize, _>::new(
                            12,
                            BuildHasherDefault::<WyHash>::default(),
                        )
                        .unwrap()
                    },
                    |est, i| est.insert(i),
                )
                .format(),
            }
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    std::fs::write(
        format!("{}/target/memory_allocations.md", env!("CARGO_MANIFEST_DIR")),
        &markdown,
    )
    .unwrap();
    println!("{}", markdown);
}
