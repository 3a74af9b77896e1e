/// запечённые таблицы кейс-конверсии и чувствительности к регистру
pub struct CaseTables<'a>
{
    /// диапазоны симметричных пар, упакованные в u64:
    /// строчный старт | прописной старт << 21 | длина << 42 | шаг << 58
    pub ranges: &'a [u64],
    /// одиночные симметричные пары: строчный | прописной << 21
    pub singles: &'a [u64],
    /// записи сложных случаев: "исходный|фолд|прописная|строчная|",
    /// UTF-8 байты, по возрастанию исходного кодпоинта
    pub complexes: &'a [&'a [u8]],
    /// пул уникальных слов битовой карты; префикс пула - прямая область как есть
    pub sensitivity_pool: &'a [u32],
    /// уникальные блоки индексов слов, склеенные подряд, по 1 << block_bits
    pub sensitivity_blocks: &'a [u16],
    /// верхний индекс: номер блока для каждой позиции сжатой области
    pub sensitivity_index: &'a [u8],
    /// ниже этой границы чувствительность проверяется прямой индексацией пула
    pub direct_end: u32,
    /// старший чувствительный к регистру кодпоинт
    pub max_code: u32,
    /// ширина блочного уровня индекса
    pub block_bits: u32,
}

/// запечённые данные
pub fn case_tables<'a>() -> CaseTables<'a>
{
    include!("./../data/case_tables.rs.txt")
}
