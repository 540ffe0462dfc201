// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod loop_around_list;
pub mod pagination_list;
pub mod replaceable_list;

// Re-export.
pub use loop_around_list::*;
pub use pagination_list::*;
pub use replaceable_list::*;
