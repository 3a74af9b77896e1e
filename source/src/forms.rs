/// кейс-маппинги кодпоинта: фолдинг, прописная и строчная формы
///
/// каждая форма - непустая последовательность кодпоинтов; форма, состоящая из
/// самого кодпоинта, означает "без изменений"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseForms
{
    /// код символа
    pub code: u32,
    /// фолдинг (полный, full case folding)
    pub fold: Vec<u32>,
    /// прописная форма (полная)
    pub upper: Vec<u32>,
    /// строчная форма (полная)
    pub lower: Vec<u32>,
}

impl CaseForms
{
    /// кодпоинт без кейс-маппингов - все формы совпадают с ним самим
    pub fn identity(code: u32) -> Self
    {
        Self {
            code,
            fold: vec![code],
            upper: vec![code],
            lower: vec![code],
        }
    }

    /// кодпоинт чувствителен к регистру - хотя бы одна из форм отличается
    /// от него самого
    pub fn is_case_sensitive(&self) -> bool
    {
        self.fold != [self.code] || self.upper != [self.code] || self.lower != [self.code]
    }
}
