pub mod string_util;

pub use string_util::TextStats;
