#[cfg(test)]
pub mod forum_tests;
#[cfg(test)]
pub mod utils;
