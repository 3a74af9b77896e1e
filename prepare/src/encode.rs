use crate::classify::ComplexEntry;
use crate::ranges::RangeGroup;

/// разделитель полей в записи сложного случая; экранирование не может его
/// породить - все байты, кроме ASCII-букв, записываются эскейпами
pub const DELIMITER: char = '|';

/// максимальная длина полной формы кейс-маппинга, кодпоинтов
pub const MAX_FORM_LENGTH: usize = 3;

/// битовые поля упакованных записей
pub const CODE_BITS: u32 = 21;
pub const LENGTH_SHIFT: u32 = 42;
pub const LENGTH_BITS: u32 = 16;
pub const PITCH_SHIFT: u32 = 58;

/// упаковать диапазон в u64:
///
///   биты 0 .. 21  - стартовый строчный кодпоинт
///   биты 21 .. 42 - стартовый прописной кодпоинт
///   биты 42 .. 58 - длина
///   биты 58 .. 60 - шаг
pub fn pack_range(range: &RangeGroup) -> u64
{
    assert!(range.length < 1 << LENGTH_BITS);
    assert!(range.pitch <= 2);

    pack_single(range.lower, range.upper)
        | ((range.length as u64) << LENGTH_SHIFT)
        | ((range.pitch as u64) << PITCH_SHIFT)
}

/// упаковать синглтон в u64: строчный кодпоинт | прописной << 21
pub fn pack_single(lower: u32, upper: u32) -> u64
{
    assert!(lower < 1 << CODE_BITS && upper < 1 << CODE_BITS);

    (lower as u64) | ((upper as u64) << CODE_BITS)
}

/// запись сложного случая: исходный кодпоинт, фолдинг, прописная и строчная
/// формы, разделённые '|', с завершающим разделителем
pub fn complex_record(entry: &ComplexEntry) -> String
{
    assert!(entry.fold.len() <= MAX_FORM_LENGTH);
    assert!(entry.upper.len() <= MAX_FORM_LENGTH);
    assert!(entry.lower.len() <= MAX_FORM_LENGTH);

    let fields = [
        utf8(&[entry.code]),
        utf8(&entry.fold),
        utf8(&entry.upper),
        utf8(&entry.lower),
    ];

    fields
        .iter()
        .map(|field| {
            let escaped = escape(field);

            // поле обязано восстанавливаться обратным разбором
            assert_eq!(unescape(&escaped).as_deref(), Some(field.as_slice()));

            format!("{}{}", escaped, DELIMITER)
        })
        .collect()
}

/// экранировать байты: ASCII-буквы остаются как есть, все остальные байты
/// записываются как \xHH - два hex-символа, требование байтовых литералов Rust
pub fn escape(bytes: &[u8]) -> String
{
    bytes
        .iter()
        .map(|&b| match b.is_ascii_alphabetic() {
            true => (b as char).to_string(),
            false => format!("\\x{:02x}", b),
        })
        .collect()
}

/// обратный разбор экранированной строки; None - текст не соответствует схеме
pub fn unescape(text: &str) -> Option<Vec<u8>>
{
    let mut bytes = vec![];
    let mut iter = text.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'\\' => {
                if iter.next()? != b'x' {
                    return None;
                }

                let hi = (iter.next()? as char).to_digit(16)?;
                let lo = (iter.next()? as char).to_digit(16)?;

                bytes.push((hi * 16 + lo) as u8);
            }
            b if b.is_ascii_alphabetic() => bytes.push(b),
            _ => return None,
        }
    }

    Some(bytes)
}

/// последовательность кодпоинтов в виде UTF-8 байт
fn utf8(codes: &[u32]) -> Vec<u8>
{
    codes
        .iter()
        .map(|&c| char::from_u32(c).unwrap())
        .collect::<String>()
        .into_bytes()
}
