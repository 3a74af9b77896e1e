use crate::bitmap::{build_bitmap, DIRECT_END};
use crate::classify::classify;
use crate::encode::{complex_record, pack_range, pack_single};
use crate::index::compress;
use crate::ranges::group_ranges;

/// подготовленные таблицы для записи
pub struct CaseConvertTables
{
    /// упакованные диапазоны симметричных пар
    pub ranges: Vec<u64>,
    /// упакованные одиночные пары
    pub singles: Vec<u64>,
    /// экранированные записи сложных случаев
    pub complexes: Vec<String>,
    /// пул слов битовой карты чувствительности
    pub pool: Vec<u32>,
    /// блоки индексов слов
    pub blocks: Vec<u16>,
    /// верхний индекс блоков
    pub index: Vec<u8>,
    /// граница прямой области
    pub direct_end: u32,
    /// старший чувствительный кодпоинт
    pub max_code: u32,
    /// ширина блочного уровня
    pub block_bits: u32,
    /// статистика для вывода
    pub stats: TableStats,
}

/// сводные показатели прохода конвейера
pub struct TableStats
{
    pub pairs: usize,
    pub ranges: usize,
    pub singles: usize,
    pub complexes: usize,
    pub sensitives: usize,
}

/// полный проход конвейера: классификация, группировка диапазонов, кодирование
/// сложных случаев, битовая карта чувствительности и её индекс
pub fn prepare() -> CaseConvertTables
{
    let classification = classify();

    let (ranges, singles) = group_ranges(&classification.symmetrics);
    let bitmap = build_bitmap(&classification.sensitives);
    let compressed = compress(&bitmap);

    let stats = TableStats {
        pairs: classification.symmetrics.len(),
        ranges: ranges.len(),
        singles: singles.len(),
        complexes: classification.complexes.len(),
        sensitives: classification.sensitives.len(),
    };

    CaseConvertTables {
        ranges: ranges.iter().map(pack_range).collect(),
        singles: singles.iter().map(|&(l, u)| pack_single(l, u)).collect(),
        complexes: classification.complexes.iter().map(complex_record).collect(),
        pool: compressed.pool,
        blocks: compressed.blocks,
        index: compressed.index,
        direct_end: DIRECT_END,
        max_code: bitmap.max_code,
        block_bits: compressed.block_bits,
        stats,
    }
}
