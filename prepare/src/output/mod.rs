mod format;
mod regenerate;
mod stats;

pub use regenerate::RegenerateError;

use self::format::{format_num_vec, format_str_vec};
use self::regenerate::regenerate;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// маркеры области автогенерации в файле данных
const MARKER_BEGIN: &str = "// -- автогенерация: начало --";
const MARKER_END: &str = "// -- автогенерация: конец --";

/// собрать таблицы и вписать их в размеченную область файла данных
pub fn write(path: &str) -> Result<(), RegenerateError>
{
    let tables = crate::tables::prepare();

    let literal = format!(
        "CaseTables {{\n  \
            ranges: &[{}  ],\n  \
            singles: &[{}  ],\n  \
            complexes: &[{}  ],\n  \
            sensitivity_pool: &[{}  ],\n  \
            sensitivity_blocks: &[{}  ],\n  \
            sensitivity_index: &[{}  ],\n  \
            direct_end: 0x{:04X},\n  \
            max_code: 0x{:04X},\n  \
            block_bits: {},\n\
        }}\n",
        format_num_vec(tables.ranges.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(tables.singles.as_slice(), FORMAT_STRING_LENGTH),
        format_str_vec(tables.complexes.as_slice()),
        format_num_vec(tables.pool.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(tables.blocks.as_slice(), FORMAT_STRING_LENGTH),
        format_num_vec(tables.index.as_slice(), FORMAT_STRING_LENGTH),
        tables.direct_end,
        tables.max_code,
        tables.block_bits,
    );

    regenerate(path, MARKER_BEGIN, MARKER_END, &literal)?;

    stats::print(&tables);

    Ok(())
}
