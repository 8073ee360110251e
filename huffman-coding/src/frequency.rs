use linked_hash_map::LinkedHashMap;

/// Symbol occurrence counts, iterated in first-occurrence order.
///
/// The insertion-order-preserving map matters downstream: entries of equal
/// count compete for queue position during tree construction, so the table's
/// iteration order is part of what makes the resulting tree reproducible.
pub type FrequencyTable = LinkedHashMap<char, usize>;

/// Count symbol occurrences in a single pass.
///
/// Returns `None` for empty input. "No input" is deliberately distinct from
/// "a table with no entries"; callers never see an empty table.
pub fn frequency_table(input: &str) -> Option<FrequencyTable> {
    if input.is_empty() {
        return None;
    }

    let mut table = FrequencyTable::new();
    for symbol in input.chars() {
        *table.entry(symbol).or_insert(0) += 1;
    }

    Some(table)
}
