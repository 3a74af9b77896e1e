use icu_casemap::CaseMapper;
use icu_locid::LanguageIdentifier;

use crate::forms::CaseForms;

/// источник кейс-маппингов Unicode - полные маппинги ICU4X, корневая локаль.
/// версия Unicode зафиксирована скомпилированными данными icu_casemap
pub struct CaseOracle
{
    mapper: CaseMapper,
    root: LanguageIdentifier,
}

impl CaseOracle
{
    pub fn new() -> Self
    {
        Self {
            mapper: CaseMapper::new(),
            root: LanguageIdentifier::default(),
        }
    }

    /// формы кодпоинта; для суррогатов и неназначенных кодпоинтов - identity
    pub fn forms(&self, code: u32) -> CaseForms
    {
        let ch = match char::from_u32(code) {
            Some(ch) => ch,
            None => return CaseForms::identity(code),
        };

        let source = ch.to_string();

        CaseForms {
            code,
            fold: to_codes(self.mapper.fold_string(&source)),
            upper: to_codes(self.mapper.uppercase_to_string(&source, &self.root)),
            lower: to_codes(self.mapper.lowercase_to_string(&source, &self.root)),
        }
    }

    /// название кодпоинта (если есть)
    pub fn name(&self, code: u32) -> Option<String>
    {
        let ch = char::from_u32(code)?;

        unicode_names2::name(ch).map(|name| name.to_string())
    }
}

impl Default for CaseOracle
{
    fn default() -> Self
    {
        Self::new()
    }
}

/// строка как последовательность кодпоинтов
fn to_codes(source: String) -> Vec<u32>
{
    source.chars().map(u32::from).collect()
}
