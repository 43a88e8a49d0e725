//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_date_listing, print_share, print_simple_outcome, print_unavailable,
};
