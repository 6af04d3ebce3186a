pub mod dump;
pub mod error;

pub use dump::{CourierDump, parse_dump, read_dump};
pub use error::{DumpError, Result};
