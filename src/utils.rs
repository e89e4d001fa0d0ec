//! Internal utilities shared by the collections.

#[macro_use]
pub mod log;

pub mod growth;
pub mod root;
pub mod stamp;

#[cfg(test)]
pub mod tester;
