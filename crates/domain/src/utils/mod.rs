//! Pure helper functions

pub mod date_format;
