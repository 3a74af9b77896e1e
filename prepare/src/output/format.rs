use std::fmt::UpperHex;

/// представить массив чисел в текстовом виде с переносом строк по границе
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], boundary: usize) -> String
{
    let mut output = String::new();
    let mut cur_len = boundary;

    for &e in input {
        let e_str = match e.into() == 0 {
            true => "0, ".to_owned(),
            false => format!("0x{:X}, ", e),
        };

        cur_len += e_str.len();

        if cur_len > boundary {
            output.push_str("\n    ");
            cur_len = e_str.len();
        }

        output.push_str(e_str.as_str());
    }

    output.push('\n');
    output
}

/// представить записи сложных случаев как байтовые литералы, по одному на строку
pub fn format_str_vec(input: &[String]) -> String
{
    let mut output = String::new();

    for record in input {
        output.push_str(format!("\n    b\"{}\",", record).as_str());
    }

    output.push('\n');
    output
}
