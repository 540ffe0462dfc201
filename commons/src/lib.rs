// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # plugin_commons
//!
//! Small utility helpers meant to be linked into a larger host application, such as a
//! game server plugin runtime. The interesting part of this crate is a pair of index
//! arithmetic container views:
//!
//! 1. [`LoopAroundList`] keeps a cursor over a backing [`Vec`] and exposes a fixed size
//!    "cutout" that wraps around the ends of the sequence.
//! 2. [`PaginationList`] exposes a backing [`Vec`] as a series of fixed size pages.
//!
//! Both views own their backing storage and recompute every bound from the current
//! length on every call, so the sequence can grow or shrink between operations.
//!
//! ```
//! use plugin_commons::{LoopAroundList, PaginationList};
//!
//! # fn main() -> miette::Result<()> {
//! let mut list = LoopAroundList::try_from_vec(5, (1..=8).collect())?;
//! assert_eq!(list.cutout()?, vec![1, 2, 3, 4, 5]);
//! list.set_cursor(6)?;
//! assert_eq!(list.cutout()?, vec![7, 8, 1, 2, 3]);
//!
//! let pages = PaginationList::try_from_vec(3, (0..10).collect())?;
//! assert_eq!(pages.pages(), 4);
//! assert_eq!(pages.page(3)?, &[9]);
//! # Ok(())
//! # }
//! ```
//!
//! The rest of the crate is made up of pure helpers: duration formatting and parsing
//! ([`time`]), string and enum helpers ([`misc`]), numeric helpers ([`common`]), JSON
//! configuration ([`config`]) and [`tracing`] subscriber setup ([`log`]).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod collections;
pub mod common;
pub mod config;
pub mod decl_macros;
pub mod log;
pub mod misc;
pub mod time;

// Re-export.
pub use collections::*;
pub use common::*;
pub use config::*;
pub use log::*;
pub use misc::*;
pub use time::*;
