//! CSV decoding for published sheets.

mod decode;
mod line;

pub use decode::decode;
pub use line::parse_line;
