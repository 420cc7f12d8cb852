pub mod check;
pub mod handle;
pub mod matrix;
pub mod ops;
pub mod output;
pub mod resolve;
pub mod table_loader;
pub mod types;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod table_loader_tests;
