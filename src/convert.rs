use crate::CaseClass;
use crate::CaseConverter;
use crate::CaseSeq;
use crate::ComplexForms;

/// битовые поля упакованных записей (см. prepare)
const CODE_BITS: u32 = 21;
const CODE_MASK: u64 = (1 << CODE_BITS) - 1;
const LENGTH_SHIFT: u32 = 42;
const LENGTH_MASK: u64 = (1 << 16) - 1;
const PITCH_SHIFT: u32 = 58;

/// сторона симметричной пары, на которой находится кодпоинт
#[derive(Clone, Copy, PartialEq, Eq)]
enum Side
{
    Lower,
    Upper,
}

impl<'a> CaseConverter<'a>
{
    /// классификация кодпоинта: симметричная пара, сложный случай или
    /// отсутствие кейс-поведения
    #[inline]
    pub fn classify(&self, code: u32) -> CaseClass
    {
        if let Some((partner, _)) = self.pair(code) {
            return CaseClass::Pair(partner);
        }

        match self.complex(code) {
            Some(forms) => CaseClass::Complex(forms),
            None => CaseClass::None,
        }
    }

    /// прописная форма кодпоинта
    pub fn uppercase(&self, code: u32) -> CaseSeq
    {
        if let Some((partner, side)) = self.pair(code) {
            return match side {
                Side::Lower => CaseSeq::one(partner),
                Side::Upper => CaseSeq::one(code),
            };
        }

        match self.complex(code) {
            Some(forms) => forms.upper,
            None => CaseSeq::one(code),
        }
    }

    /// строчная форма кодпоинта
    pub fn lowercase(&self, code: u32) -> CaseSeq
    {
        if let Some((partner, side)) = self.pair(code) {
            return match side {
                Side::Lower => CaseSeq::one(code),
                Side::Upper => CaseSeq::one(partner),
            };
        }

        match self.complex(code) {
            Some(forms) => forms.lower,
            None => CaseSeq::one(code),
        }
    }

    /// фолдинг кодпоинта; для симметричных пар совпадает со строчной формой
    pub fn fold(&self, code: u32) -> CaseSeq
    {
        if let Some((partner, side)) = self.pair(code) {
            return match side {
                Side::Lower => CaseSeq::one(code),
                Side::Upper => CaseSeq::one(partner),
            };
        }

        match self.complex(code) {
            Some(forms) => forms.fold,
            None => CaseSeq::one(code),
        }
    }

    /// поиск в таблицах симметричных пар: диапазоны, затем синглтоны.
    /// возвращает партнёра и сторону, на которой находится кодпоинт
    fn pair(&self, code: u32) -> Option<(u32, Side)>
    {
        let tables = self.tables();

        // диапазоны упорядочены по стартовому кодпоинту и не пересекаются,
        // выигрывает первый покрывающий
        for &packed in tables.ranges {
            let lower = (packed & CODE_MASK) as u32;
            let upper = ((packed >> CODE_BITS) & CODE_MASK) as u32;
            let length = ((packed >> LENGTH_SHIFT) & LENGTH_MASK) as u32;
            let pitch = (packed >> PITCH_SHIFT) as u32;

            if let Some(partner) = in_range(code, lower, upper, length, pitch) {
                return Some((partner, Side::Lower));
            }

            if let Some(partner) = in_range(code, upper, lower, length, pitch) {
                return Some((partner, Side::Upper));
            }
        }

        // синглтоны упорядочены по строчному кодпоинту - двоичный поиск;
        // по прописному порядок не гарантирован, поиск линейный
        if let Ok(position) = tables
            .singles
            .binary_search_by_key(&(code as u64), |&s| s & CODE_MASK)
        {
            let upper = ((tables.singles[position] >> CODE_BITS) & CODE_MASK) as u32;

            return Some((upper, Side::Lower));
        }

        for &packed in tables.singles {
            if ((packed >> CODE_BITS) & CODE_MASK) as u32 == code {
                return Some(((packed & CODE_MASK) as u32, Side::Upper));
            }
        }

        None
    }

    /// поиск в таблице сложных случаев с разбором найденной записи
    fn complex(&self, code: u32) -> Option<ComplexForms>
    {
        for &record in self.tables().complexes {
            // запись: исходный|фолд|прописная|строчная|
            let mut fields = record.split(|&b| b == b'|');

            let original = decode_field(fields.next().unwrap_or(&[]));

            // записи упорядочены по исходному кодпоинту
            match original.as_slice().first() {
                Some(&first) if first == code => {}
                Some(&first) if first > code => return None,
                _ => continue,
            }

            let fold = decode_field(fields.next().unwrap_or(&[]));
            let upper = decode_field(fields.next().unwrap_or(&[]));
            let lower = decode_field(fields.next().unwrap_or(&[]));

            return Some(ComplexForms {
                fold: or_identity(fold, code),
                upper: or_identity(upper, code),
                lower: or_identity(lower, code),
            });
        }

        None
    }
}

/// проверить попадание кодпоинта в прогрессию и вернуть партнёра
#[inline(always)]
fn in_range(code: u32, start: u32, partner_start: u32, length: u32, pitch: u32) -> Option<u32>
{
    if code < start {
        return None;
    }

    let offset = code - start;

    match offset % pitch == 0 && offset / pitch < length {
        true => Some(partner_start + offset),
        false => None,
    }
}

/// разобрать поле записи: UTF-8 байты в последовательность кодпоинтов
#[inline]
fn decode_field(field: &[u8]) -> CaseSeq
{
    // запечённые данные - корректный UTF-8
    let text = unsafe { core::str::from_utf8_unchecked(field) };

    let mut seq = CaseSeq::empty();

    for ch in text.chars() {
        seq.push(u32::from(ch));
    }

    seq
}

/// пустое поле означает форму без изменений
#[inline]
fn or_identity(seq: CaseSeq, code: u32) -> CaseSeq
{
    match seq.is_empty() {
        true => CaseSeq::one(code),
        false => seq,
    }
}
