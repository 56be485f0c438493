//! # CLI Command Implementations
//!
//! Each subcommand lives in its own file and follows the same shape: an
//! `Args` struct derived with `clap`, and an `execute` function that
//! takes the parsed `Args` and calls into the `sds_build` library to
//! perform the work.

pub mod build;
