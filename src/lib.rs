//! Lidcheck - language audit for Android string resources
//!
//! Lidcheck is a CLI tool and library that detects the language of every
//! translatable `<string>` in a `strings.xml` file and reports the entries that
//! are not in the expected language, ranked by detector confidence. It catches
//! untranslated or mistranslated strings before release.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, console output)
//! - `config`: Configuration file loading and resolution
//! - `core`: Audit engine (extract, classify, report)

pub mod cli;
pub mod config;
pub mod core;
