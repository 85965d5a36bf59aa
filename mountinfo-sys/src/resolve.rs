// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use mountinfo_types::{MountRecord, MountTable};
use tracing::debug;

use crate::error::{MountInfoError, Result};
use crate::path::{absolutize, common_prefix_len, tokenize};

/// Find the mount governing `path`. Relative paths are taken against the
/// current working directory of the process.
pub fn resolve_mount<'a>(table: &'a MountTable, path: &Path) -> Result<&'a MountRecord> {
    if path.is_absolute() {
        return resolve_mount_from(table, path, Path::new("/"));
    }

    let cwd = std::env::current_dir().map_err(|e| {
        MountInfoError::PathResolution(format!("cannot read working directory: {e}"))
    })?;
    resolve_mount_from(table, path, &cwd)
}

/// Find the mount governing `path`, resolving relative paths against `cwd`.
///
/// The winner is the record whose mount point is the deepest lexical
/// ancestor of (or equal to) the path. When several records share that
/// mount point the last one in table order wins, since a later mount at
/// the same point shadows the earlier ones.
pub fn resolve_mount_from<'a>(
    table: &'a MountTable,
    path: &Path,
    cwd: &Path,
) -> Result<&'a MountRecord> {
    let absolute = absolutize(path, cwd)?;
    let query = tokenize(&absolute)?;

    let mut best: Option<(usize, &MountRecord)> = None;
    for record in table {
        let mount_tokens = tokenize(Path::new(&record.mount_point))?;
        let depth = mount_tokens.len();
        if common_prefix_len(&mount_tokens, &query) != depth {
            continue;
        }

        if best.is_none_or(|(best_depth, _)| depth >= best_depth) {
            best = Some((depth, record));
        }
    }

    match best {
        Some((_, record)) => {
            debug!("{} resolved to mount {} ({})", absolute.display(), record.mount_id, record);
            Ok(record)
        }
        None => Err(MountInfoError::NoMatchingMount(absolute)),
    }
}

/// Filesystem type of the mount governing `path`.
pub fn resolve_filesystem_type<'a>(table: &'a MountTable, path: &Path) -> Result<&'a str> {
    resolve_mount(table, path).map(|record| record.fs_type.as_str())
}
