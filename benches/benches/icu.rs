use criterion::{criterion_group, criterion_main, Criterion};
use icu_casemap::CaseMapper;

mod group;

group!(
    fold,
    "fold",
    "icu",
    CaseMapper::new(),
    |mapper: &CaseMapper, code| mapper.simple_fold(char::from_u32(code).unwrap())
);

group!(
    upper,
    "upper",
    "icu",
    CaseMapper::new(),
    |mapper: &CaseMapper, code| mapper.simple_uppercase(char::from_u32(code).unwrap())
);

criterion_group!(benches, fold, upper);
criterion_main!(benches);
