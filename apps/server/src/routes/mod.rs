pub mod stats;
pub mod study;
pub mod words;
