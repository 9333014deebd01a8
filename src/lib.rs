//! Halifax Housing Hub: rental listing filtering, nearest-sibling highlighting
//! and nearest-parking lookup, plus the small web shell that serves them.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod responses;
pub mod router;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
