use std::collections::HashSet;

use unicode_casing_source::{is_surrogate, CaseForms, CODEPOINT_COUNT, ORACLE};

/// симметричная пара: строчный и прописной кодпоинты переходят друг в друга
/// одиночными маппингами, фолдинг прописного совпадает со строчным
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetricPair
{
    pub lower: u32,
    pub upper: u32,
    /// строчный минус прописной
    pub delta: i32,
}

/// сложный случай: мультикодпоинтная форма, либо фолдинг отличается от строчной
/// формы, либо маппинги не взаимно обратны. формы без изменений - пустые
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexEntry
{
    pub code: u32,
    pub fold: Vec<u32>,
    pub upper: Vec<u32>,
    pub lower: Vec<u32>,
}

/// результат классификации пространства кодпоинтов
pub struct Classification
{
    /// симметричные пары, по возрастанию строчного кодпоинта
    pub symmetrics: Vec<SymmetricPair>,
    /// сложные случаи, по возрастанию кодпоинта
    pub complexes: Vec<ComplexEntry>,
    /// чувствительные к регистру кодпоинты, по возрастанию
    pub sensitives: Vec<u32>,
}

/// проход по всем кодпоинтам, кроме суррогатов: разложить кейс-поведение на
/// симметричные пары, сложные случаи и множество чувствительных к регистру
pub fn classify() -> Classification
{
    let mut symmetrics = vec![];
    let mut sensitives = vec![];

    // кандидаты в сложные случаи с пометкой "прошёл только строчный тест"
    let mut candidates: Vec<(ComplexEntry, bool)> = vec![];
    // прописные кодпоинты, для которых реально записана пара
    let mut recorded_uppers: HashSet<u32> = HashSet::new();

    for code in 0 .. CODEPOINT_COUNT {
        if is_surrogate(code) {
            continue;
        }

        let forms = ORACLE.forms(code);

        if forms.is_case_sensitive() {
            sensitives.push(code);
        }

        // тест с опорой на прописную форму: кодпоинт строчный, прописная форма
        // однокодпоинтная, и оба её маппинга возвращают нас обратно
        let mut symmetric = false;

        if forms.upper != [code] && forms.upper.len() == 1
            && forms.lower == [code]
            && forms.fold == [code]
        {
            let upper = ORACLE.forms(forms.upper[0]);

            if upper.lower == [code] && upper.fold == [code] {
                symmetric = true;
                symmetrics.push(SymmetricPair {
                    lower: code,
                    upper: upper.code,
                    delta: code as i32 - upper.code as i32,
                });
                recorded_uppers.insert(upper.code);
            }
        }

        // тест с опорой на строчную форму: сама пара записывается при обработке
        // строчного кодпоинта, здесь только помечается симметричность
        let mut lower_rooted = false;

        if forms.lower != [code] && forms.lower.len() == 1
            && forms.upper == [code]
            && forms.lower == forms.fold
        {
            let lower = ORACLE.forms(forms.lower[0]);

            if lower.upper == [code] {
                lower_rooted = true;
            }
        }

        if symmetric {
            continue;
        }

        let entry = ComplexEntry {
            code,
            fold: collapse(forms.fold, code),
            upper: collapse(forms.upper, code),
            lower: collapse(forms.lower, code),
        };

        // кодпоинт без кейс-поведения не попадает ни в одну таблицу
        if entry.fold.is_empty() && entry.upper.is_empty() && entry.lower.is_empty() {
            continue;
        }

        candidates.push((entry, lower_rooted));
    }

    // кодпоинт, прошедший только строчный тест, считается симметричным лишь если
    // парная запись реально попала в таблицу; несогласованные данные оракула
    // уходят в сложные случаи, а не теряются
    let complexes = candidates
        .into_iter()
        .filter(|(entry, lower_rooted)| !(*lower_rooted && recorded_uppers.contains(&entry.code)))
        .map(|(entry, _)| entry)
        .collect();

    Classification {
        symmetrics,
        complexes,
        sensitives,
    }
}

/// форма, совпадающая с исходным кодпоинтом, кодируется пустой
fn collapse(form: Vec<u32>, code: u32) -> Vec<u32>
{
    match form == [code] {
        true => vec![],
        false => form,
    }
}
