use unicode_casing_source::ORACLE;

use crate::tables::CaseConvertTables;

/// сводка по подготовленным таблицам
pub fn print(tables: &CaseConvertTables)
{
    let stats = &tables.stats;
    let max_name = ORACLE.name(tables.max_code).unwrap_or_default();

    let table_size = tables.ranges.len() * 8
        + tables.singles.len() * 8
        + tables.complexes.iter().map(|r| r.len()).sum::<usize>()
        + tables.pool.len() * 4
        + tables.blocks.len() * 2
        + tables.index.len();

    println!(
        "таблицы кейс-конверсии:\n  \
         симметричных пар: {}\n  \
         диапазонов: {}\n  \
         синглтонов: {}\n  \
         сложных случаев: {}\n  \
         чувствительных кодпоинтов: {} (старший - U+{:04X} {})\n  \
         пул слов: {}, блоки: {}, индекс: {} (ширина блока: {} бит)\n  \
         общий размер: {} байт",
        stats.pairs,
        stats.ranges,
        stats.singles,
        stats.complexes,
        stats.sensitives,
        tables.max_code,
        max_name,
        tables.pool.len(),
        tables.blocks.len(),
        tables.index.len(),
        tables.block_bits,
        table_size,
    );
}
