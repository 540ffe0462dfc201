// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod enum_matcher;
pub mod string_helper;

// Re-export.
pub use enum_matcher::*;
pub use string_helper::*;
