// src/store.rs
// In-memory accumulation of fetched records, in fetch order.

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

/// One flat record: field name → cell text, in source order.
pub type Record = IndexMap<String, String>;

/// Rectangular table ready for export: every row is `headers.len()` wide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Growing collection of records plus the union of their field names
/// (first-seen order, so the header follows the source).
#[derive(Clone, Debug, Default)]
pub struct Accumulator {
    columns: IndexSet<String>,
    records: Vec<Record>,
}

impl Accumulator {
    pub fn new() -> Self { Self::default() }

    /// Pin the leading columns, whatever order records arrive with.
    pub fn with_columns(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| s!(*c)).collect(),
            records: Vec::new(),
        }
    }

    /// Records with no fields carry nothing to export and are dropped.
    pub fn push(&mut self, record: Record) {
        if record.is_empty() {
            warn!("skipping a record with no fields");
            return;
        }
        for key in record.keys() {
            if !self.columns.contains(key) {
                self.columns.insert(key.clone());
            }
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Project every record onto the full column list; absent fields are empty cells.
    pub fn into_dataset(self) -> DataSet {
        let headers: Vec<String> = self.columns.into_iter().collect();
        let rows = self
            .records
            .into_iter()
            .map(|mut rec| {
                headers
                    .iter()
                    .map(|h| rec.swap_remove(h).unwrap_or_default())
                    .collect()
            })
            .collect();
        DataSet { headers, rows }
    }
}

impl Extend<Record> for Accumulator {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect()
    }

    #[test]
    fn rows_follow_the_union_of_columns() {
        let mut acc = Accumulator::new();
        acc.push(rec(&[("id", "1"), ("home", "A")]));
        acc.push(rec(&[("id", "2"), ("away", "B")]));
        acc.extend(vec![rec(&[("home", "C"), ("id", "3")])]);

        let ds = acc.into_dataset();
        assert_eq!(ds.headers, vec!["id", "home", "away"]);
        assert_eq!(ds.rows, vec![
            vec![s!("1"), s!("A"), s!()],
            vec![s!("2"), s!(), s!("B")],
            vec![s!("3"), s!("C"), s!()],
        ]);
        assert!(ds.rows.iter().all(|r| r.len() == ds.headers.len()));
    }

    #[test]
    fn pinned_columns_lead() {
        let mut acc = Accumulator::with_columns(&["a", "b"]);
        acc.push(rec(&[("c", "3"), ("b", "2")]));
        let ds = acc.into_dataset();
        assert_eq!(ds.headers, vec!["a", "b", "c"]);
        assert_eq!(ds.rows, vec![vec![s!(), s!("2"), s!("3")]]);
    }

    #[test]
    fn records_without_fields_are_not_counted() {
        let mut acc = Accumulator::new();
        acc.extend(vec![Record::new(), Record::new()]);
        assert!(acc.is_empty());

        acc.push(rec(&[("id", "1")]));
        acc.push(Record::new());
        assert_eq!(acc.len(), 1);
        assert_eq!(acc.into_dataset().rows, vec![vec![s!("1")]]);
    }
}
