pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $name: expr, $converter: expr, $test: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let converter = $converter;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (sample_name, codes) in group::samples() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, sample_name),
                    &codes,
                    |b, codes| {
                        b.iter(|| {
                            for &code in codes.iter() {
                                criterion::black_box($test(
                                    &converter,
                                    criterion::black_box(code),
                                ));
                            }
                        })
                    },
                );
            }

            group.finish();
        }
    };
}

/// наборы кодпоинтов для замеров
pub fn samples() -> Vec<(&'static str, Vec<u32>)>
{
    vec![
        ("ascii", (0 .. 0x80).collect()),
        ("latin", (0x80 .. 0x600).collect()),
        ("bmp", codepoints(0x600, 0x10000)),
        ("astral", codepoints(0x10000, 0x20000)),
    ]
}

/// диапазон кодпоинтов без суррогатов
fn codepoints(from: u32, to: u32) -> Vec<u32>
{
    (from .. to)
        .filter(|&code| !(0xD800 ..= 0xDFFF).contains(&code))
        .collect()
}
