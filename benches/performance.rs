use criterion::{criterion_group, criterion_main, Criterion};

use atlasq_core::prelude::{FieldRef, Record, Value};
use atlasq_query::{aggregate, CmpOp, Direction, Predicate, Query};

fn make_dataset(rows: usize) -> Vec<Record> {
    let continents = ["Europe", "Asia", "Africa", "Oceania"];
    (0..rows)
        .map(|i| Record {
            code: format!("C{:03}", i),
            name: format!("Country {}", i),
            continent: continents[i % continents.len()].to_string(),
            population: ((i * 7919) % 1_000_000) as i64,
            surface_area: ((i * 104_729) % 10_000_000) as f64,
            life_expectancy: if i % 10 == 0 { None } else { Some(40.0 + (i % 40) as f64) },
            gnp: Some((i % 5000) as f64),
            independence_year: Some(1800 + (i % 200) as i32),
            government_form: if i % 3 == 0 { "Republic".into() } else { "Monarchy".into() },
        })
        .collect()
}

fn bench_filter_order_limit(c: &mut Criterion) {
    let data = make_dataset(10_000);
    c.bench_function("filter_order_limit", |b| {
        b.iter(|| {
            Query::new(&data)
                .filter(Predicate::Equals(FieldRef::Continent, Value::Str("Europe".into())))
                .filter(Predicate::Compare(FieldRef::Population, CmpOp::Gt, Value::Int(100_000)))
                .order_by(FieldRef::Population, Direction::Descending)
                .limit(10)
                .to_list()
                .unwrap()
        })
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let data = make_dataset(10_000);
    c.bench_function("sum_and_extreme", |b| {
        b.iter(|| {
            let total = aggregate::sum(&data, FieldRef::SurfaceArea).unwrap();
            let best = aggregate::extreme_by(&data, |x, y| aggregate::cmp_nullable(x.gnp, y.gnp));
            (total, best.map(|r| r.code.clone()))
        })
    });
}

criterion_group!(queries, bench_filter_order_limit, bench_aggregate);
criterion_main!(queries);
