use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Record – one row of the source file
// ---------------------------------------------------------------------------

/// A single data row: field name → value.
///
/// Rows shorter than the header simply lack the trailing fields; [`Record::get`]
/// reads those as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Pair each header with the value at the same position, stopping at the
    /// shorter of the two.
    pub fn from_pairs<H, V>(headers: &[H], values: &[V]) -> Self
    where
        H: AsRef<str>,
        V: AsRef<str>,
    {
        let fields = headers
            .iter()
            .zip(values.iter())
            .map(|(h, v)| (h.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        Record { fields }
    }

    /// Value for `field`, or `""` when the row had no value for it.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether the row explicitly carried a value for `field`.
    #[cfg(test)]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields explicitly present in this row.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The parsed file: header, rows in file order and per-column distinct values.
///
/// Built once and never edited; filtering produces a new `Dataset`.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
    /// For each column the sorted set of distinct non-empty values.
    unique_values: BTreeMap<String, BTreeSet<String>>,
}

impl Dataset {
    /// Build the column index from the loaded records.
    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for record in &records {
            for (col, val) in &record.fields {
                if val.is_empty() {
                    continue;
                }
                unique_values
                    .entry(col.clone())
                    .or_default()
                    .insert(val.clone());
            }
        }

        Dataset {
            headers,
            records,
            unique_values,
        }
    }

    /// Ordered header names as read from the first line.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted distinct non-empty values seen in `column`.
    pub fn distinct_values(&self, column: &str) -> impl Iterator<Item = &str> {
        self.unique_values
            .get(column)
            .into_iter()
            .flat_map(|vals| vals.iter().map(String::as_str))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// One group of an aggregation: the shared field value and how many rows had it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub key: String,
    pub count: usize,
}

impl RankingEntry {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        RankingEntry {
            key: key.into(),
            count,
        }
    }
}

impl fmt::Display for RankingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.count)
    }
}
