#[macro_use]
extern crate lazy_static;

mod forms;
mod oracle;

pub use forms::CaseForms;
pub use oracle::CaseOracle;

lazy_static! {
    /// оракул кейс-маппингов Unicode
    pub static ref ORACLE: CaseOracle = CaseOracle::new();
}

/// количество кодпоинтов Unicode
pub const CODEPOINT_COUNT: u32 = 0x110000;

/// суррогат?
#[inline]
pub fn is_surrogate(code: u32) -> bool
{
    (0xD800 ..= 0xDFFF).contains(&code)
}
