#[macro_use]
extern crate lazy_static;

use std::collections::HashSet;

use unicode_casing::{CaseClass, CaseConverter, CaseTables};

use unicode_casing_prepare::bitmap::{build_bitmap, DIRECT_END};
use unicode_casing_prepare::classify::{classify, Classification};
use unicode_casing_prepare::encode::{complex_record, pack_range, pack_single, unescape};
use unicode_casing_prepare::index::compress;
use unicode_casing_prepare::ranges::group_ranges;

use unicode_casing_source::{is_surrogate, CODEPOINT_COUNT, ORACLE};

lazy_static! {
    /// классификация выполняется один раз на все тесты
    static ref CLASSIFICATION: Classification = classify();
}

/// восстановить сырые байты записи из экранированного текста
fn raw_record(record: &str) -> Vec<u8>
{
    let mut raw = vec![];

    for field in record.split('|') {
        raw.extend(unescape(field).unwrap());
        raw.push(b'|');
    }

    // после завершающего разделителя split даёт пустое поле
    raw.pop();
    raw
}

/// собрать таблицы из классификации и прогнать через рантайм-декодер
fn with_converter<T>(check: impl Fn(&CaseConverter) -> T) -> T
{
    let classification = &*CLASSIFICATION;

    let (ranges, singles) = group_ranges(&classification.symmetrics);
    let bitmap = build_bitmap(&classification.sensitives);
    let compressed = compress(&bitmap);

    let packed_ranges: Vec<u64> = ranges.iter().map(pack_range).collect();
    let packed_singles: Vec<u64> = singles.iter().map(|&(l, u)| pack_single(l, u)).collect();
    let raw_complexes: Vec<Vec<u8>> = classification
        .complexes
        .iter()
        .map(|entry| raw_record(&complex_record(entry)))
        .collect();
    let complexes: Vec<&[u8]> = raw_complexes.iter().map(|r| r.as_slice()).collect();

    let converter = CaseConverter::from_tables(CaseTables {
        ranges: &packed_ranges,
        singles: &packed_singles,
        complexes: &complexes,
        sensitivity_pool: &compressed.pool,
        sensitivity_blocks: &compressed.blocks,
        sensitivity_index: &compressed.index,
        direct_end: DIRECT_END,
        max_code: bitmap.max_code,
        block_bits: compressed.block_bits,
    });

    check(&converter)
}

/// каждый несуррогатный кодпоинт попадает ровно в одну из групп: диапазоны,
/// синглтоны, сложные случаи или отсутствие кейс-поведения
#[test]
fn coverage_partition()
{
    let classification = &*CLASSIFICATION;
    let (ranges, singles) = group_ranges(&classification.symmetrics);

    let mut seen: HashSet<u32> = HashSet::new();

    for range in &ranges {
        for i in 0 .. range.length {
            assert!(seen.insert(range.lower + i * range.pitch));
        }
    }

    for &(lower, _) in &singles {
        assert!(seen.insert(lower));
    }

    let pair_lowers: HashSet<u32> = classification.symmetrics.iter().map(|s| s.lower).collect();

    assert_eq!(seen, pair_lowers);

    // симметричные пары и сложные случаи не пересекаются
    let pair_codes: HashSet<u32> = classification
        .symmetrics
        .iter()
        .flat_map(|s| [s.lower, s.upper])
        .collect();

    for entry in &classification.complexes {
        assert!(!pair_codes.contains(&entry.code), "U+{:04X}", entry.code);
    }
}

/// свойства диапазонов: длина и шаг, упорядоченность, отсутствие пересечений
#[test]
fn range_properties()
{
    let (ranges, _) = group_ranges(&CLASSIFICATION.symmetrics);

    let mut covered: HashSet<u32> = HashSet::new();
    let mut previous = 0;

    for range in &ranges {
        assert!(range.length > 4);
        assert!(range.pitch == 1 || range.pitch == 2);
        assert!(range.lower >= previous);
        previous = range.lower;

        for i in 0 .. range.length {
            assert!(covered.insert(range.lower + i * range.pitch));
            assert!(covered.insert(range.upper + i * range.pitch));
        }
    }
}

/// обе стороны каждой пары восстанавливаются декодером: для каждого члена
/// диапазона и каждого синглтона партнёры взаимны
#[test]
fn pair_round_trip()
{
    with_converter(|converter| {
        for pair in &CLASSIFICATION.symmetrics {
            assert_eq!(
                converter.classify(pair.lower),
                CaseClass::Pair(pair.upper),
                "U+{:04X}",
                pair.lower
            );
            assert_eq!(
                converter.classify(pair.upper),
                CaseClass::Pair(pair.lower),
                "U+{:04X}",
                pair.upper
            );
        }
    });
}

/// экранирование обратимо для каждого поля каждой записи
#[test]
fn escape_round_trip()
{
    use unicode_casing_prepare::encode::escape;

    for entry in &CLASSIFICATION.complexes {
        let record = complex_record(entry);

        for (field, codes) in record.split('|').zip([
            vec![entry.code],
            entry.fold.clone(),
            entry.upper.clone(),
            entry.lower.clone(),
        ]) {
            let expected: String = codes.iter().map(|&c| char::from_u32(c).unwrap()).collect();

            assert_eq!(unescape(field).unwrap(), expected.as_bytes());
            assert_eq!(escape(expected.as_bytes()), field);
        }
    }
}

/// битовая карта с индексом воспроизводит предикат чувствительности для всех
/// кодпоинтов до старшего записанного, и false - выше него
#[test]
fn bitmap_fidelity()
{
    let sensitives: HashSet<u32> = CLASSIFICATION.sensitives.iter().copied().collect();
    let max_code = *CLASSIFICATION.sensitives.last().unwrap();

    with_converter(|converter| {
        for code in 0 ..= max_code {
            assert_eq!(
                converter.is_case_sensitive(code),
                sensitives.contains(&code),
                "U+{:04X}",
                code
            );
        }

        for code in max_code + 1 .. max_code + 0x100 {
            assert!(!converter.is_case_sensitive(code));
        }
    });
}

/// предикат чувствительности совпадает с брутфорсом по оракулу
#[test]
fn sensitives_match_oracle()
{
    let sensitives: HashSet<u32> = CLASSIFICATION.sensitives.iter().copied().collect();

    for code in 0 .. CODEPOINT_COUNT {
        if is_surrogate(code) {
            continue;
        }

        assert_eq!(
            ORACLE.forms(code).is_case_sensitive(),
            sensitives.contains(&code),
            "U+{:04X}",
            code
        );
    }
}

/// кодпоинты со значимым фолдингом, отличным от строчной формы, не попадают
/// в пары: Чероки фолдится в прописные
#[test]
fn cherokee_is_complex()
{
    let classification = &*CLASSIFICATION;

    assert!(classification.symmetrics.iter().all(|s| s.lower != 0xAB70 && s.upper != 0x13A0));
    assert!(classification.complexes.iter().any(|e| e.code == 0x13A0));
}
