/// граница прямой области: кодпоинты ниже неё проверяются прямой индексацией
/// таблицы слов, без многоуровневого индекса. покрывает латиницу, кириллицу,
/// греческий и прочие часто используемые младшие блоки
pub const DIRECT_END: u32 = 0x600;

/// битовая карта чувствительности к регистру: одно 32-битное слово на 32
/// кодпоинта, от U+0000 до старшего чувствительного кодпоинта включительно
pub struct Bitmap
{
    pub words: Vec<u32>,
    /// старший чувствительный к регистру кодпоинт
    pub max_code: u32,
}

/// построить битовую карту по упорядоченному списку чувствительных кодпоинтов
pub fn build_bitmap(sensitives: &[u32]) -> Bitmap
{
    let max_code = *sensitives.last().unwrap();
    let mut words = vec![0u32; (max_code >> 5) as usize + 1];

    for &code in sensitives {
        words[(code >> 5) as usize] |= 1 << (code & 31);
    }

    Bitmap { words, max_code }
}
