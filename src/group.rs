//! Grouping of extracted files by library

use std::collections::HashMap;

use crate::extract::FileRecord;

/// The files of one library, in encounter order.
///
/// A group is always created together with its first file, so it can
/// never be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryGroup {
    name: String,
    files: Vec<String>,
}

impl LibraryGroup {
    pub fn new(name: impl Into<String>, first_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: vec![first_file.into()],
        }
    }

    pub fn push(&mut self, file: impl Into<String>) {
        self.files.push(file.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Group records by library, keeping first-seen library order and the
/// original file order within each library.
pub fn group_by_library(records: &[FileRecord]) -> Vec<LibraryGroup> {
    let mut groups: Vec<LibraryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.library.as_str()) {
            Some(&i) => groups[i].push(record.path.as_str()),
            None => {
                index.insert(record.library.as_str(), groups.len());
                groups.push(LibraryGroup::new(
                    record.library.as_str(),
                    record.path.as_str(),
                ));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(path: &str, lib: &str) -> FileRecord {
        FileRecord::new(path, lib)
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_library(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_library_order() {
        let records = [
            rec("b1.vhd", "lib_b"),
            rec("w1.vhd", "work"),
            rec("a1.vhd", "lib_a"),
            rec("b2.vhd", "lib_b"),
        ];
        let names: Vec<_> = group_by_library(&records)
            .iter()
            .map(|g| g.name().to_string())
            .collect();
        assert_eq!(names, vec!["lib_b", "work", "lib_a"]);
    }

    #[test]
    fn test_intra_library_order_preserved() {
        let records = [
            rec("x.vhd", "work"),
            rec("p.vhd", "lib"),
            rec("y.vhd", "work"),
            rec("q.vhd", "lib"),
            rec("z.vhd", "work"),
        ];
        let groups = group_by_library(&records);
        assert_eq!(groups[0].files(), ["x.vhd", "y.vhd", "z.vhd"]);
        assert_eq!(groups[1].files(), ["p.vhd", "q.vhd"]);
    }

    #[test]
    fn test_file_count_preserved() {
        let records: Vec<_> = (0..50)
            .map(|i| rec(&format!("f{}.vhd", i), &format!("lib{}", i % 7)))
            .collect();
        let groups = group_by_library(&records);
        assert_eq!(groups.len(), 7);
        let total: usize = groups.iter().map(|g| g.files().len()).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_regrouping_is_stable_clustering() {
        let records = [
            rec("1", "a"),
            rec("2", "b"),
            rec("3", "a"),
            rec("4", "c"),
            rec("5", "b"),
        ];
        let flat: Vec<_> = group_by_library(&records)
            .iter()
            .flat_map(|g| g.files().to_vec())
            .collect();
        assert_eq!(flat, vec!["1", "3", "2", "5", "4"]);
    }

    #[test]
    fn test_library_names_case_sensitive() {
        let records = [rec("a.vhd", "Work"), rec("b.vhd", "work")];
        let groups = group_by_library(&records);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_groups_never_empty() {
        let records = [rec("a.vhd", "x"), rec("b.vhd", "y")];
        assert!(group_by_library(&records).iter().all(|g| !g.files().is_empty()));
    }
}
