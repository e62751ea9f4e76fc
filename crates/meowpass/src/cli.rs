//! Command line interface.
pub mod meowpass;
