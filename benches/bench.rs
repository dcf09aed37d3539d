use criterion::{criterion_group, criterion_main};

mod checksum_benchmark {
    use br_tax_id::{Cnpj, Cpf};
    use criterion::Criterion;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let cnpjs = vec![
            "31.214.261/0001-38",
            "31214261000138",
            "00.623.904/0001-73",
            // wrong checksum
            "31.214.261/0001-39",
            // wrong shape
            "453.178.287-91",
            "not an identifier",
        ];
        c.bench_function("cnpj-checksum", |b| {
            b.iter(|| {
                for id in cnpjs.clone().into_iter() {
                    Cnpj::is_valid(id);
                }
            })
        });

        let cpfs = vec![
            "453.178.287-91",
            "45317828791",
            "083.358.948-25",
            // wrong checksum
            "345.675.677-78",
            // wrong shape
            "31.214.261/0001-38",
            "not an identifier",
        ];
        c.bench_function("cpf-checksum", |b| {
            b.iter(|| {
                for id in cpfs.clone().into_iter() {
                    Cpf::is_valid(id);
                }
            })
        });
    }
}

mod random_benchmark {
    use br_tax_id::{Cnpj, Cpf};
    use criterion::Criterion;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn criterion_benchmark(c: &mut Criterion) {
        let mut rng = StdRng::seed_from_u64(0);
        c.bench_function("cnpj-random", |b| b.iter(|| Cnpj::random_with(&mut rng)));

        let mut rng = StdRng::seed_from_u64(0);
        c.bench_function("cpf-random", |b| b.iter(|| Cpf::random_with(&mut rng)));
    }
}

criterion_group!(
    benches,
    checksum_benchmark::criterion_benchmark,
    random_benchmark::criterion_benchmark
);
criterion_main!(benches);
