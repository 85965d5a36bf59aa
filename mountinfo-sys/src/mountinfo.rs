// SPDX-License-Identifier: GPL-3.0-only

//! Parser for the `/proc/<pid>/mountinfo` format.
//!
//! Each line is:
//!
//! ```text
//! 36 25 8:2 / /home rw,relatime shared:1 - ext4 /dev/nvme0n1p3 rw,errors=remount-ro
//! (1)(2)(3)(4)(5)   (6)        (7..)    (s)(8)  (9)            (10)
//! ```
//!
//! Six fixed fields, a variable number of optional fields, a lone `-`
//! separator and three trailing fields.

use std::fs;
use std::path::Path;

use mountinfo_types::{MountRecord, MountTable};
use tracing::{debug, warn};

use crate::error::{MountInfoError, Result};
use crate::escape::unescape_mount_field;

pub const SELF_MOUNTINFO: &str = "/proc/self/mountinfo";

const MIN_FIELDS: usize = 10;
const SEPARATOR: &str = "-";

/// Read and parse the mount table of the calling process.
pub fn load_mount_table() -> Result<MountTable> {
    load_mount_table_from(Path::new(SELF_MOUNTINFO))
}

/// Read and parse any file laid out like `/proc/<pid>/mountinfo`.
pub fn load_mount_table_from(path: &Path) -> Result<MountTable> {
    debug!("Loading mount table from {}", path.display());

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| MountInfoError::Encoding {
        value: path.display().to_string(),
        reason: format!("mount table is not valid UTF-8: {e}"),
    })?;

    let table = parse_mount_table(&text)?;
    debug!("Loaded {} mount records", table.len());
    Ok(table)
}

/// Parse a whole mountinfo text. A trailing newline does not count as a line.
pub fn parse_mount_table(input: &str) -> Result<MountTable> {
    parse_mount_lines(input.lines())
}

/// Parse a sequence of mountinfo lines, failing on the first bad one.
pub fn parse_mount_lines<I, S>(lines: I) -> Result<MountTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            parse_mount_record(line.as_ref()).map_err(|err| annotate_line(err, index + 1))
        })
        .collect()
}

/// Parse a single mountinfo line into a record.
pub fn parse_mount_record(line: &str) -> Result<MountRecord> {
    // The kernel escapes only ASCII whitespace, so other whitespace characters
    // can appear literally inside path fields.
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();

    let [
        mount_id,
        parent_id,
        device,
        root,
        mount_point,
        mount_options,
        optional @ ..,
        separator,
        fs_type,
        mount_source,
        super_options,
    ] = tokens.as_slice()
    else {
        return Err(MountInfoError::malformed(
            line,
            format!("expected at least {MIN_FIELDS} fields, found {}", tokens.len()),
        ));
    };

    if *separator != SEPARATOR {
        return Err(MountInfoError::malformed(line, "missing separator"));
    }

    Ok(MountRecord {
        mount_id: parse_id(line, mount_id, "mount id")?,
        parent_id: parse_id(line, parent_id, "parent id")?,
        device: device.to_string(),
        root: unescape_mount_field(root)?,
        mount_point: unescape_mount_field(mount_point)?,
        mount_options: split_options(mount_options),
        optional_fields: optional.iter().map(|s| s.to_string()).collect(),
        fs_type: fs_type.to_string(),
        mount_source: mount_source.to_string(),
        super_options: split_options(super_options),
    })
}

fn parse_id(line: &str, token: &str, what: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| MountInfoError::malformed(line, format!("{what} {token:?} is not an integer")))
}

fn split_options(token: &str) -> Vec<String> {
    token.split(',').map(str::to_string).collect()
}

fn annotate_line(err: MountInfoError, line_number: usize) -> MountInfoError {
    match err {
        MountInfoError::MalformedRecord { line, reason } => {
            warn!("Rejecting mount table: line {line_number}: {reason}");
            MountInfoError::MalformedRecord {
                line,
                reason: format!("line {line_number}: {reason}"),
            }
        }
        MountInfoError::Encoding { value, reason } => {
            warn!("Rejecting mount table: line {line_number}: {reason}");
            MountInfoError::Encoding {
                value,
                reason: format!("line {line_number}: {reason}"),
            }
        }
        other => other,
    }
}
