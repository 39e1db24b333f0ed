//! Bridgestub - placeholder Objective-C bridging headers for Swift code
//!
//! Bridgestub walks Swift source directories, asks `sourcekitten` for the
//! structure of every Swift file, and writes one `<Dir>-Swift.h` header per
//! directory that declares each public protocol and class as an empty stub.
//! Objective-C code can then refer to those names without the real
//! Swift-generated headers.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, collection and header generation
//! - `reporter`: Console progress and diagnostics

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
