//! Input/Output operations
//!
//! This module handles logging setup and the plain-text g(r) tables handed to
//! plotting tools.

mod output;

pub use output::{setup_output, write_rdf_table, write_rdf_table_to_file};
