pub mod line_buffer;
pub mod serial_console;

pub use line_buffer::LineBuffer;
pub use serial_console::{print_bytes, read_line, Console};
