// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of a mountinfo table, with `root` and `mount_point` already
/// decoded from the kernel's octal escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MountRecord {
    pub mount_id: u32,
    pub parent_id: u32,
    /// `major:minor`, kept verbatim
    pub device: String,
    pub root: String,
    pub mount_point: String,
    pub mount_options: Vec<String>,
    /// Propagation tags such as `shared:1` or `master:2`
    pub optional_fields: Vec<String>,
    pub fs_type: String,
    pub mount_source: String,
    pub super_options: Vec<String>,
}

impl MountRecord {
    pub fn has_mount_option(&self, option: &str) -> bool {
        self.mount_options.iter().any(|o| o == option)
    }

    pub fn has_super_option(&self, option: &str) -> bool {
        self.super_options.iter().any(|o| o == option)
    }

    pub fn is_read_only(&self) -> bool {
        self.has_mount_option("ro")
    }
}

impl fmt::Display for MountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.fs_type, self.mount_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MountRecord {
        MountRecord {
            mount_id: 36,
            parent_id: 25,
            device: "8:2".to_string(),
            root: "/".to_string(),
            mount_point: "/home".to_string(),
            mount_options: vec!["ro".to_string(), "relatime".to_string()],
            optional_fields: vec!["shared:1".to_string()],
            fs_type: "ext4".to_string(),
            mount_source: "/dev/nvme0n1p3".to_string(),
            super_options: vec!["rw".to_string(), "errors=remount-ro".to_string()],
        }
    }

    #[test]
    fn display_names_type_and_mount_point() {
        assert_eq!(sample().to_string(), "ext4 on /home");
    }

    #[test]
    fn option_lookups_match_whole_tokens() {
        let record = sample();
        assert!(record.is_read_only());
        assert!(record.has_super_option("errors=remount-ro"));
        assert!(!record.has_super_option("errors"));
        assert!(!record.has_mount_option("rw"));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let json = serde_json::to_value(sample()).expect("record should serialize");
        assert_eq!(json["fs_type"], "ext4");
        assert_eq!(json["mount_point"], "/home");
        assert_eq!(json["optional_fields"][0], "shared:1");
    }
}
