/// последовательность кодпоинтов кейс-маппинга; полные формы Unicode
/// не длиннее трёх кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseSeq
{
    codes: [u32; 3],
    len: u8,
}

impl CaseSeq
{
    /// последовательность из одного кодпоинта
    #[inline(always)]
    pub fn one(code: u32) -> Self
    {
        Self {
            codes: [code, 0, 0],
            len: 1,
        }
    }

    #[inline(always)]
    pub(crate) fn empty() -> Self
    {
        Self {
            codes: [0; 3],
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, code: u32)
    {
        debug_assert!(self.len < 3);

        self.codes[self.len as usize] = code;
        self.len += 1;
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[u32]
    {
        &self.codes[.. self.len as usize]
    }

    #[inline(always)]
    pub fn len(&self) -> usize
    {
        self.len as usize
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// символы последовательности
    #[inline]
    pub fn chars(&self) -> impl Iterator<Item = char> + '_
    {
        // запечённые данные содержат только корректные кодпоинты
        self.as_slice()
            .iter()
            .map(|&code| unsafe { char::from_u32_unchecked(code) })
    }
}
