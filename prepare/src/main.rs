use unicode_casing_prepare::output;

fn main()
{
    output::write("./../data/case_tables.rs.txt").unwrap();
}
