// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod duration_formatter;
pub mod duration_parser;
pub mod time_unit;

// Re-export.
pub use duration_formatter::*;
pub use duration_parser::*;
pub use time_unit::*;
