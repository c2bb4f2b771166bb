// src/catalogs/mod.rs

// Built-in item tables from concrete games. Each catalog is feature-gated so
// the ranking core never carries data a caller did not ask for.

#[cfg(feature = "catalog-clicker")]
pub mod clicker;
