use crate::CaseConverter;

impl<'a> CaseConverter<'a>
{
    /// чувствителен ли кодпоинт к регистру: отличается ли какая-либо из его
    /// форм от него самого. для кодпоинтов выше старшего записанного - false
    #[inline]
    pub fn is_case_sensitive(&self, code: u32) -> bool
    {
        let tables = self.tables();

        // префикс пула - слова прямой области
        if code < tables.direct_end {
            return bit(tables.sensitivity_pool[(code >> 5) as usize], code);
        }

        if code > tables.max_code {
            return false;
        }

        let position = ((code - tables.direct_end) >> 5) as usize;
        let block = tables.sensitivity_index[position >> tables.block_bits] as usize;
        let mask = (1usize << tables.block_bits) - 1;
        let word = tables.sensitivity_blocks[(block << tables.block_bits) | (position & mask)];

        bit(tables.sensitivity_pool[word as usize], code)
    }
}

/// бит кодпоинта в слове битовой карты
#[inline(always)]
fn bit(word: u32, code: u32) -> bool
{
    (word >> (code & 31)) & 1 == 1
}
