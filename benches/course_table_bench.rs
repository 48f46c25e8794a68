use course_table::{Course, CourseTable};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn course_id(n: u64) -> String {
    format!("CS{:06}", n % 1_000_000)
}

fn course(n: u64) -> Course {
    Course::new(course_id(n), "Benchmark Course", ["CS000001"])
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("course_table_insert_10k", |b| {
        b.iter_batched(
            || lcg(1).take(10_000).map(course).collect::<Vec<_>>(),
            |courses| {
                // Starts at the default 179 buckets, so this includes every resize.
                let mut t = CourseTable::new();
                for c in courses {
                    t.insert(c);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_search_hit(c: &mut Criterion) {
    c.bench_function("course_table_search_hit", |b| {
        let mut t = CourseTable::new();
        let ids: Vec<_> = lcg(7).take(20_000).map(course_id).collect();
        for id in &ids {
            t.insert(Course::new(id.clone(), "t", Vec::<String>::new()));
        }
        let mut it = ids.iter().cycle();
        b.iter(|| {
            let id = it.next().unwrap();
            black_box(t.search(id).unwrap());
        })
    });
}

fn bench_search_miss(c: &mut Criterion) {
    c.bench_function("course_table_search_miss", |b| {
        let mut t = CourseTable::new();
        for x in lcg(11).take(10_000) {
            t.insert(course(x));
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // Lowercase prefix never matches a stored id.
            let id = format!("cs{:06}", miss.next().unwrap() % 1_000_000);
            black_box(t.search(&id));
        })
    });
}

fn bench_entries_ordered(c: &mut Criterion) {
    c.bench_function("course_table_entries_ordered_10k", |b| {
        let mut t = CourseTable::new();
        for x in lcg(3).take(10_000) {
            t.insert(course(x));
        }
        b.iter(|| black_box(t.entries_ordered().len()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_search_hit, bench_search_miss, bench_entries_ordered
}
criterion_main!(benches);
