// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use slacktide_algebra::{
    extend::extend, intersect::intersect, negate::negate, offset::offset, union::union,
};
use slacktide_core::window::TimeWindow;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

/// Generates a canonical sequence of `n` windows with randomized widths and
/// gaps, deterministic per size for comparable runs.
fn synthetic_sequence(n: usize, seed: u64) -> Vec<TimeWindow<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut windows = Vec::with_capacity(n);
    let mut t = 0_i64;
    for _ in 0..n {
        let start = t + rng.gen_range(1..100);
        let end = start + rng.gen_range(1..100);
        windows.push(TimeWindow::new(start, end));
        t = end;
    }
    windows
}

fn bench_negate(c: &mut Criterion) {
    let mut group = c.benchmark_group("negate");
    for n in SIZES {
        let input = synthetic_sequence(n, 1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                negate(black_box(input.iter().copied())).for_each(|w| {
                    black_box(w);
                })
            })
        });
    }
    group.finish();
}

fn bench_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("extend");
    for n in SIZES {
        let input = synthetic_sequence(n, 2);
        group.throughput(Throughput::Elements(n as u64));
        // Half the windows merge with a neighbor at this delta, so the merge
        // path is actually exercised
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                extend(black_box(input.iter().copied()), 25).for_each(|w| {
                    black_box(w);
                })
            })
        });
    }
    group.finish();
}

fn bench_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset");
    for n in SIZES {
        let input = synthetic_sequence(n, 3);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                offset(black_box(input.iter().copied()), 37).for_each(|w| {
                    black_box(w);
                })
            })
        });
    }
    group.finish();
}

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersect");
    for n in SIZES {
        let inputs: Vec<Vec<TimeWindow<i64>>> = (0..4)
            .map(|i| synthetic_sequence(n, 10 + i))
            .collect();
        group.throughput(Throughput::Elements(4 * n as u64));
        group.bench_with_input(BenchmarkId::new("4-way", n), &inputs, |b, inputs| {
            b.iter(|| {
                intersect(black_box(inputs.iter().map(|s| s.iter().copied()))).for_each(|w| {
                    black_box(w);
                })
            })
        });
    }
    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    for n in SIZES {
        let inputs: Vec<Vec<TimeWindow<i64>>> = (0..4)
            .map(|i| synthetic_sequence(n, 20 + i))
            .collect();
        group.throughput(Throughput::Elements(4 * n as u64));
        group.bench_with_input(BenchmarkId::new("4-way", n), &inputs, |b, inputs| {
            b.iter(|| {
                union(black_box(inputs.iter().map(|s| s.iter().copied()))).for_each(|w| {
                    black_box(w);
                })
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_negate,
    bench_extend,
    bench_offset,
    bench_intersect,
    bench_union
);
criterion_main!(benches);
