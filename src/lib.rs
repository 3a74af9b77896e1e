pub use codepoint::CaseSeq;
pub use data::{case_tables, CaseTables};

mod codepoint;
mod convert;
mod data;
mod sensitivity;

/// классификация кодпоинта по кейс-поведению
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass
{
    /// кейс-поведения нет
    None,
    /// симметричная пара: партнёр в противоположном регистре
    Pair(u32),
    /// сложный случай: полные формы фолдинга, прописной и строчной
    Complex(ComplexForms),
}

/// разобранные формы сложного случая; форма без изменений содержит сам кодпоинт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexForms
{
    pub fold: CaseSeq,
    pub upper: CaseSeq,
    pub lower: CaseSeq,
}

/// конвертер регистра по запечённым таблицам.
/// только чтение неизменяемых данных: безопасен для конкурентного
/// использования, не аллоцирует и не завершается с ошибкой
pub struct CaseConverter<'a>
{
    tables: CaseTables<'a>,
}

impl CaseConverter<'static>
{
    /// конвертер над запечёнными таблицами
    pub fn new() -> Self
    {
        Self::from_tables(data::case_tables())
    }
}

impl Default for CaseConverter<'static>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<'a> CaseConverter<'a>
{
    /// конвертер над внешними таблицами (используется тестами конвейера)
    pub fn from_tables(tables: CaseTables<'a>) -> Self
    {
        Self { tables }
    }

    pub(crate) fn tables(&self) -> &CaseTables<'a>
    {
        &self.tables
    }
}
