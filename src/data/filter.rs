use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter predicate: one equality constraint per column
// ---------------------------------------------------------------------------

/// What a single column must hold for a row to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// No constraint on this column.
    Any,
    /// The column must equal this value exactly (case-sensitive).
    Equals(String),
}

impl Criterion {
    /// Blank input means "no constraint"; anything else is taken verbatim.
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Criterion::Any
        } else {
            Criterion::Equals(input.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Equals(wanted) => wanted == value,
        }
    }
}

/// A criterion bound to the column it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: String,
    pub criterion: Criterion,
}

impl FieldFilter {
    pub fn new(field: impl Into<String>, criterion: Criterion) -> Self {
        FieldFilter {
            field: field.into(),
            criterion,
        }
    }

    pub fn any(field: impl Into<String>) -> Self {
        Self::new(field, Criterion::Any)
    }

    #[cfg(test)]
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Criterion::Equals(value.into()))
    }
}

/// The four column constraints of a query, in prompt order.
pub type FilterSet = [FieldFilter; 4];

/// A record passes when every filter is satisfied.
pub fn record_matches(record: &Record, filters: &[FieldFilter]) -> bool {
    filters
        .iter()
        .all(|f| f.criterion.matches(record.get(&f.field)))
}

/// Return indices of records that pass all filters.
pub fn matching_indices(dataset: &Dataset, filters: &[FieldFilter]) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, filters))
        .map(|(i, _)| i)
        .collect()
}

/// Copy the passing records, in their original order, into a new dataset.
pub fn filter(dataset: &Dataset, filters: &[FieldFilter]) -> Dataset {
    let records: Vec<Record> = matching_indices(dataset, filters)
        .into_iter()
        .map(|i| dataset.records()[i].clone())
        .collect();

    log::debug!(
        "filter kept {} of {} records",
        records.len(),
        dataset.len()
    );
    Dataset::from_records(dataset.headers().to_vec(), records)
}
