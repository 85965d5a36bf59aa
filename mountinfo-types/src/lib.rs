// SPDX-License-Identifier: GPL-3.0-only

//! Canonical data models for the mount table of a process
//!
//! These models are produced by `mountinfo-sys` when it parses
//! `/proc/<pid>/mountinfo`, and consumed by anything that needs to reason
//! about which filesystem backs a path:
//!
//! - `MountRecord` → one mounted filesystem, decoded and immutable
//! - `MountTable` → every record of a single snapshot, in kernel order

pub mod record;
pub mod table;

pub use record::*;
pub use table::*;
