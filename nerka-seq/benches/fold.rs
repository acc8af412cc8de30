use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nerka_seq::nussinov;

fn random_rna(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            match (state >> 33) % 4 {
                0 => b'A',
                1 => b'C',
                2 => b'G',
                _ => b'U',
            }
        })
        .collect()
}

fn bench_nussinov(c: &mut Criterion) {
    for len in [50, 100, 200] {
        let seq = random_rna(len, 42);
        c.bench_function(&format!("nussinov_{len}"), |b| {
            b.iter(|| nussinov(black_box(&seq), 3))
        });
    }
}

criterion_group!(benches, bench_nussinov);
criterion_main!(benches);
