use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use flatcsv::{ParseOptions, parse_csv};

fn gen_document(n: usize, quoted: bool) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut doc = String::from("id,name,note\n");
    for i in 0..n {
        let word = (0..8)
            .map(|_| (b'a' + (rng.random::<u8>() % 26)) as char)
            .collect::<String>();
        if quoted {
            doc.push_str(&format!("{i},\"{word}\",\"x,\"\"{word}\"\"\ny\"\n"));
        } else {
            doc.push_str(&format!("{i},{word},{word}\n"));
        }
    }
    doc
}

pub fn decode_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &n in &[100, 1_000, 10_000] {
        for &quoted in &[false, true] {
            let doc = gen_document(n, quoted);
            let options = ParseOptions::default();
            group.throughput(Throughput::Bytes(doc.len() as u64));
            let label = if quoted { "quoted" } else { "plain" };
            group.bench_function(format!("parse_csv::{label}::{n}"), |b| {
                b.iter(|| parse_csv(black_box(&doc), &options).expect("parse"))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, decode_benchmarks);
criterion_main!(benches);
