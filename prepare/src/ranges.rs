use std::collections::HashSet;

use crate::classify::SymmetricPair;

/// минимальная длина диапазона: более короткие серии не окупают накладные
/// расходы на запись диапазона и остаются синглтонами
pub const MIN_RANGE_LENGTH: usize = 5;

/// диапазон симметричных пар: length пар, строчные кодпоинты идут с шагом
/// pitch, прописные отличаются на постоянную дельту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeGroup
{
    /// стартовый строчный кодпоинт
    pub lower: u32,
    /// стартовый прописной кодпоинт
    pub upper: u32,
    pub length: u32,
    pub pitch: u32,
}

/// сгруппировать пары в диапазоны-прогрессии и синглтоны.
///
/// сначала - серии с шагом 1 внутри групп с одинаковой дельтой, затем серии
/// с шагом 2 среди пар с дельтой 1 (чередующиеся алфавиты); пары, уже покрытые
/// диапазонами с шагом 1, повторно не рассматриваются
pub fn group_ranges(symmetrics: &[SymmetricPair]) -> (Vec<RangeGroup>, Vec<(u32, u32)>)
{
    let mut ranges: Vec<RangeGroup> = vec![];

    for group in runs(symmetrics, |a, b| a.delta == b.delta) {
        for run in runs(group, |a, b| b.lower == a.lower + 1) {
            if run.len() >= MIN_RANGE_LENGTH {
                ranges.push(range(run, 1));
            }
        }
    }

    let covered = coverage(&ranges);

    let one_diffs: Vec<SymmetricPair> = symmetrics
        .iter()
        .filter(|s| s.delta == 1 && !covered.contains(&s.lower))
        .copied()
        .collect();

    for run in runs(&one_diffs, |a, b| b.lower == a.lower + 2) {
        if run.len() >= MIN_RANGE_LENGTH {
            ranges.push(range(run, 2));
        }
    }

    ranges.sort_by_key(|r| r.lower);

    let covered = coverage(&ranges);

    let singles = symmetrics
        .iter()
        .filter(|s| !covered.contains(&s.lower))
        .map(|s| (s.lower, s.upper))
        .collect();

    (ranges, singles)
}

/// строчные кодпоинты, покрытые диапазонами
fn coverage(ranges: &[RangeGroup]) -> HashSet<u32>
{
    ranges
        .iter()
        .flat_map(|r| (0 .. r.length).map(move |i| r.lower + i * r.pitch))
        .collect()
}

/// разбить упорядоченный слайс на максимальные серии, в которых каждый
/// следующий элемент удовлетворяет предикату относительно предыдущего.
/// один линейный проход с закрытием границ серий
fn runs<T>(items: &[T], successor: impl Fn(&T, &T) -> bool) -> Vec<&[T]>
{
    let mut out = vec![];
    let mut start = 0;

    for i in 1 .. items.len() {
        if !successor(&items[i - 1], &items[i]) {
            out.push(&items[start .. i]);
            start = i;
        }
    }

    if start < items.len() {
        out.push(&items[start ..]);
    }

    out
}

fn range(run: &[SymmetricPair], pitch: u32) -> RangeGroup
{
    RangeGroup {
        lower: run[0].lower,
        upper: run[0].upper,
        length: run.len() as u32,
        pitch,
    }
}
