use std::collections::HashMap;

use super::model::{Dataset, RankingEntry};

// ---------------------------------------------------------------------------
// Group-and-count ranking
// ---------------------------------------------------------------------------

/// Count records per value of `field` and return the `n` largest groups.
///
/// Groups are sorted by count, largest first. Equal counts keep the order in
/// which their key first appeared in `dataset`. Rows without a value for
/// `field` are counted under the empty key.
pub fn top_n(dataset: &Dataset, field: &str, n: usize) -> Vec<RankingEntry> {
    let mut groups: Vec<RankingEntry> = Vec::new();
    let mut slot_of: HashMap<&str, usize> = HashMap::new();

    for record in dataset.records() {
        let key = record.get(field);
        match slot_of.get(key) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slot_of.insert(key, groups.len());
                groups.push(RankingEntry::new(key, 1));
            }
        }
    }

    // stable: ties stay in first-appearance order
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(n);

    log::debug!(
        "ranked {} distinct '{field}' values from {} records",
        slot_of.len(),
        dataset.len()
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn cities(values: &[&str]) -> Dataset {
        let headers = vec!["Ciudad".to_string()];
        let records = values
            .iter()
            .map(|v| Record::from_pairs(&headers, &[*v]))
            .collect();
        Dataset::from_records(headers, records)
    }

    fn keys(ranking: &[RankingEntry]) -> Vec<&str> {
        ranking.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn keeps_three_largest_with_first_seen_tie_break() {
        let mut values = Vec::new();
        values.extend(["D"]);
        values.extend(["A"; 5]);
        values.extend(["C"; 3]);
        values.extend(["B"; 5]);
        let data = cities(&values);

        let ranking = top_n(&data, "Ciudad", 3);
        assert_eq!(
            ranking,
            vec![
                RankingEntry::new("A", 5),
                RankingEntry::new("B", 5),
                RankingEntry::new("C", 3),
            ]
        );
    }

    #[test]
    fn tie_order_follows_first_appearance_not_key() {
        let data = cities(&["Quito", "Cuenca", "Cuenca", "Quito"]);
        assert_eq!(keys(&top_n(&data, "Ciudad", 3)), vec!["Quito", "Cuenca"]);
    }

    #[test]
    fn fewer_groups_than_n_are_not_padded() {
        let data = cities(&["Quito", "Guayaquil", "Quito"]);
        let ranking = top_n(&data, "Ciudad", 3);
        assert_eq!(
            ranking,
            vec![RankingEntry::new("Quito", 2), RankingEntry::new("Guayaquil", 1)]
        );
    }

    #[test]
    fn missing_values_group_under_empty_key() {
        let headers = vec!["Ciudad".to_string(), "Edad".to_string()];
        let records = vec![
            Record::from_pairs(&headers, &["", "30"]),
            Record::from_pairs(&headers[1..], &["41"]),
            Record::from_pairs(&headers, &["Quito", "22"]),
        ];
        let data = Dataset::from_records(headers, records);

        let ranking = top_n(&data, "Ciudad", 3);
        assert_eq!(
            ranking,
            vec![RankingEntry::new("", 2), RankingEntry::new("Quito", 1)]
        );
    }

    #[test]
    fn empty_dataset_yields_empty_ranking() {
        assert!(top_n(&cities(&[]), "Ciudad", 3).is_empty());
    }

    #[test]
    fn zero_limit_yields_empty_ranking() {
        assert!(top_n(&cities(&["Quito"]), "Ciudad", 0).is_empty());
    }
}
