mod format;

pub use format::{format_number, format_price};
