use std::fmt;
use std::fs;
use std::io;

/// ошибка обновления размеченной области файла данных
#[derive(Debug)]
pub enum RegenerateError
{
    /// маркеры области не найдены или идут в неверном порядке
    MissingMarkers(String),
    Io(io::Error),
}

impl fmt::Display for RegenerateError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::MissingMarkers(path) => write!(f, "маркеры автогенерации не найдены: {}", path),
            Self::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RegenerateError {}

impl From<io::Error> for RegenerateError
{
    fn from(e: io::Error) -> Self
    {
        Self::Io(e)
    }
}

/// заменить содержимое файла между маркерами, сохранив весь остальной текст
/// как есть. если маркеры отсутствуют - файл не изменяется, весь прогон
/// завершается ошибкой
pub fn regenerate(path: &str, begin: &str, end: &str, content: &str) -> Result<(), RegenerateError>
{
    let source = fs::read_to_string(path)?;

    let begin_at = match source.find(begin) {
        Some(position) => position + begin.len(),
        None => return Err(RegenerateError::MissingMarkers(path.to_owned())),
    };

    let end_at = match source[begin_at ..].find(end) {
        Some(position) => begin_at + position,
        None => return Err(RegenerateError::MissingMarkers(path.to_owned())),
    };

    let mut output = String::with_capacity(source.len() + content.len());

    output.push_str(&source[.. begin_at]);
    output.push('\n');
    output.push_str(content);
    output.push_str(&source[end_at ..]);

    fs::write(path, output)?;

    Ok(())
}
