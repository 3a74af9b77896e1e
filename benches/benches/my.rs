use criterion::{criterion_group, criterion_main, Criterion};
use unicode_casing::CaseConverter;

mod group;

group!(
    fold,
    "fold",
    "my",
    CaseConverter::new(),
    |converter: &CaseConverter, code| converter.fold(code)
);

group!(
    upper,
    "upper",
    "my",
    CaseConverter::new(),
    |converter: &CaseConverter, code| converter.uppercase(code)
);

group!(
    sens,
    "sens",
    "my",
    CaseConverter::new(),
    |converter: &CaseConverter, code| converter.is_case_sensitive(code)
);

criterion_group!(benches, fold, upper, sens);
criterion_main!(benches);
