// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod commons_config;
pub mod config_section;

// Re-export.
pub use commons_config::*;
pub use config_section::*;
