pub mod chain_quick_sort;
pub mod common;
pub mod level_quick_sort;
