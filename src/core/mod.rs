//! Core module - Escaping rules, file reading and diagnostics
//!
//! This module provides:
//! - The lyrics escaping rule table
//! - Strict whole-file text reading
//! - Verbose stderr diagnostics

pub mod diag;
pub mod escape;
pub mod file_reader;
