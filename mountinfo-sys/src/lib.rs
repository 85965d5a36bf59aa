// SPDX-License-Identifier: GPL-3.0-only

//! Mount table parsing and mount resolution
//!
//! This crate reads the kernel's per-process mount table and answers which
//! mount governs a given path:
//! - Parsing `/proc/self/mountinfo` (or any file in that format)
//! - Decoding the kernel's octal escaping of path fields
//! - Longest-prefix resolution of a path against a loaded table
//!
//! Loading and resolving are separate steps, so one snapshot can answer
//! many queries.

pub mod error;
pub mod escape;
pub mod mountinfo;
pub mod path;
pub mod resolve;

pub use error::{MountInfoError, Result};
pub use escape::{escape_mount_field, unescape_mount_field};
pub use mountinfo::{
    load_mount_table, load_mount_table_from, parse_mount_lines, parse_mount_record,
    parse_mount_table, SELF_MOUNTINFO,
};
pub use mountinfo_types::{MountRecord, MountTable};
pub use path::{absolutize, tokenize, PathToken};
pub use resolve::{resolve_filesystem_type, resolve_mount, resolve_mount_from};
