mod convert;
mod endian;
mod format;
pub mod rom;

pub use convert::{Conversion, UnrecognizedFormat};
pub use endian::{byte_swap_four, byte_swap_two, swap_pair, swap_quad, DataNotAligned, Swap};
pub use format::{RomFormat, N64_MAGIC, V64_MAGIC, Z64_MAGIC};
