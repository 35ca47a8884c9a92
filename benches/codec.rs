use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hashcodec_core::codec::ByteOrder;
use hashcodec_core::counter::Counter64;

fn bench_pack(c: &mut Criterion) {
    let mut buf = [0u8; 64];
    c.bench_function("pack_i64_checked", |b| {
        b.iter(|| {
            for i in 0..8 {
                ByteOrder::Big
                    .pack_i64(black_box(0x0102030405060708), &mut buf, i * 8)
                    .unwrap();
            }
            black_box(&buf);
        })
    });
    c.bench_function("pack_i64_unchecked", |b| {
        b.iter(|| {
            for i in 0..8 {
                ByteOrder::Big.pack_i64_unchecked(black_box(0x0102030405060708), &mut buf, i * 8);
            }
            black_box(&buf);
        })
    });
}

fn bench_read(c: &mut Criterion) {
    let buf = [0xA5u8; 64];
    c.bench_function("i64_from", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for i in 0..8 {
                acc ^= ByteOrder::Little.i64_from(black_box(&buf), i * 8).unwrap();
            }
            black_box(acc)
        })
    });
}

fn bench_counter(c: &mut Criterion) {
    c.bench_function("counter64_increment", |b| {
        let mut counter = Counter64::new(64).unwrap();
        b.iter(|| {
            for _ in 0..1024 {
                counter.increment();
            }
            black_box(counter.lo())
        })
    });
}

criterion_group!(benches, bench_pack, bench_read, bench_counter);
criterion_main!(benches);
