/// JSON-lines file-backed record source implementation.
pub mod json_lines;
