use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ringlist::{Direction, Queue};

const N: usize = 10_000;

/// Deterministic shuffled-looking strings without pulling in a RNG.
fn scrambled_words(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("{:06}", i.wrapping_mul(2_654_435_761) % 1_000_000))
        .collect()
}

fn queue_of(words: &[String]) -> Queue {
    let mut q = Queue::try_with_capacity(words.len()).unwrap();
    for w in words {
        q.push_back(w).unwrap();
    }
    q
}

fn bench_push_pop(c: &mut Criterion) {
    let words = scrambled_words(N);
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("push_back_pop_front", |b| {
        b.iter(|| {
            let mut q = queue_of(&words);
            while let Some(w) = q.pop_front() {
                black_box(w);
            }
        });
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let words = scrambled_words(N);
    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("merge_sort_ascending", |b| {
        b.iter_batched(
            || queue_of(&words),
            |mut q| q.sort(Direction::Ascending),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_rearrange(c: &mut Criterion) {
    let words = scrambled_words(N);
    let mut group = c.benchmark_group("rearrange");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("reverse", |b| {
        b.iter_batched(
            || queue_of(&words),
            |mut q| q.reverse(),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("reverse_k_8", |b| {
        b.iter_batched(
            || queue_of(&words),
            |mut q| q.reverse_k(8),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_sort, bench_rearrange);
criterion_main!(benches);
