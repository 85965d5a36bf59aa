// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::MountRecord;

/// A parsed mountinfo snapshot.
///
/// Records keep the order the kernel emitted them in, which is the order the
/// mounts were established. Nothing is sorted by path. A table is never
/// mutated after it has been built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MountTable {
    records: Vec<MountRecord>,
}

impl MountTable {
    pub fn new(records: Vec<MountRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MountRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MountRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<MountRecord> for MountTable {
    fn from_iter<I: IntoIterator<Item = MountRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MountTable {
    type Item = &'a MountRecord;
    type IntoIter = std::slice::Iter<'a, MountRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for MountTable {
    type Item = MountRecord;
    type IntoIter = std::vec::IntoIter<MountRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mount_id: u32, mount_point: &str) -> MountRecord {
        MountRecord {
            mount_id,
            parent_id: 1,
            device: "0:1".to_string(),
            root: "/".to_string(),
            mount_point: mount_point.to_string(),
            mount_options: vec!["rw".to_string()],
            optional_fields: Vec::new(),
            fs_type: "tmpfs".to_string(),
            mount_source: "tmpfs".to_string(),
            super_options: vec!["rw".to_string()],
        }
    }

    #[test]
    fn collect_preserves_read_order() {
        let table: MountTable = [record(3, "/b"), record(1, "/a"), record(2, "/b")]
            .into_iter()
            .collect();

        let ids: Vec<u32> = table.iter().map(|r| r.mount_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn serializes_as_plain_array() {
        let table = MountTable::new(vec![record(1, "/")]);
        let json = serde_json::to_value(&table).expect("table should serialize");
        assert!(json.is_array());
        assert_eq!(json[0]["mount_point"], "/");
    }
}
