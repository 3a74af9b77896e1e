use std::collections::HashMap;
use std::hash::Hash;

use crate::bitmap::{Bitmap, DIRECT_END};

/// перебираемые ширины блочного уровня
const BLOCK_BITS_CANDIDATES: std::ops::RangeInclusive<u32> = 3 ..= 8;

/// многоуровневый индекс сжатой области битовой карты
pub struct SensitivityIndex
{
    /// пул уникальных слов; префикс пула - слова прямой области как есть
    pub pool: Vec<u32>,
    /// уникальные блоки индексов слов, склеенные подряд, по 1 << block_bits
    pub blocks: Vec<u16>,
    /// верхний индекс: номер блока для каждой позиции сжатой области
    pub index: Vec<u8>,
    /// выбранная ширина блочного уровня
    pub block_bits: u32,
}

/// сжать область битовой карты начиная с DIRECT_END.
///
/// слова дедуплицируются через пул (слова, совпадающие с прямой областью, не
/// хранятся повторно), над индексами слов строится блочный уровень. ширина
/// блока выбирается детерминированно: перебор кандидатов по минимуму
/// суммарного размера таблиц в байтах, при равенстве - меньшая ширина;
/// кандидаты, у которых номер блока не помещается в u8, отбрасываются
pub fn compress(bitmap: &Bitmap) -> SensitivityIndex
{
    let direct_words = (DIRECT_END >> 5) as usize;
    assert!(bitmap.words.len() > direct_words);

    // слова прямой области попадают в пул без дедупликации между собой:
    // прямой поиск индексирует префикс пула напрямую
    let mut pool = Pool::new();

    for &word in &bitmap.words[.. direct_words] {
        pool.seed(word);
    }

    let word_indexes: Vec<u16> = bitmap.words[direct_words ..]
        .iter()
        .map(|&word| {
            let position = pool.intern(word);
            assert!(position <= u16::MAX as usize);

            position as u16
        })
        .collect();

    let mut best: Option<(usize, u32, Vec<u16>, Vec<u8>)> = None;

    for bits in BLOCK_BITS_CANDIDATES {
        let (blocks, index) = match block_level(&word_indexes, bits) {
            Some(level) => level,
            None => continue,
        };

        let size = pool.items.len() * 4 + blocks.len() * 2 + index.len();

        match &best {
            Some((best_size, ..)) if size >= *best_size => {}
            _ => best = Some((size, bits, blocks, index)),
        }
    }

    let (_, block_bits, blocks, index) = best.unwrap();

    SensitivityIndex {
        pool: pool.items,
        blocks,
        index,
        block_bits,
    }
}

/// блочный уровень: последовательность индексов слов нарезается на куски по
/// 1 << bits (последний дополняется нулями), уникальные куски дедуплицируются,
/// верхний индекс ссылается на них по номеру.
/// None - номера блоков не помещаются в u8
fn block_level(word_indexes: &[u16], bits: u32) -> Option<(Vec<u16>, Vec<u8>)>
{
    let block_len = 1usize << bits;
    let mut pool = Pool::new();
    let mut index = vec![];

    for chunk in word_indexes.chunks(block_len) {
        let mut block = chunk.to_vec();
        block.resize(block_len, 0);

        let position = pool.intern(block);

        if position > u8::MAX as usize {
            return None;
        }

        index.push(position as u8);
    }

    Some((pool.items.concat(), index))
}

/// пул с дедупликацией, сохраняющий порядок первого вхождения.
/// обратный индекс: значение -> первая позиция
struct Pool<T>
{
    items: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T: Clone + Eq + Hash> Pool<T>
{
    fn new() -> Self
    {
        Self {
            items: vec![],
            positions: HashMap::new(),
        }
    }

    /// позиция значения в пуле; новые значения дописываются в конец
    fn intern(&mut self, value: T) -> usize
    {
        match self.positions.get(&value) {
            Some(&position) => position,
            None => {
                let position = self.items.len();

                self.positions.insert(value.clone(), position);
                self.items.push(value);

                position
            }
        }
    }

    /// добавить значение без дедупликации (префикс прямой области); intern
    /// того же значения вернёт первое вхождение
    fn seed(&mut self, value: T)
    {
        let position = self.items.len();

        self.positions.entry(value.clone()).or_insert(position);
        self.items.push(value);
    }
}
