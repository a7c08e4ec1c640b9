mod csv;
mod render;

pub use self::csv::{export_file_name, table_to_csv, write_csv};
pub use render::{print_json, print_table};
