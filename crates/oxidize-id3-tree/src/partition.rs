use std::collections::BTreeMap;

use oxidize_id3_core::Record;

use crate::entropy::partition_entropy;

/// Examples grouped by the value they hold for one attribute.
///
/// The `None` key collects examples that lack the attribute entirely.
pub type Partition<'a, R> = BTreeMap<Option<&'a str>, Vec<&'a R>>;

/// Group examples by their value for `attribute`.
///
/// Each example lands in exactly one group, in input order.
pub fn partition_by<'a, R: Record>(examples: &'a [R], attribute: &str) -> Partition<'a, R> {
    let mut groups: Partition<'a, R> = BTreeMap::new();
    for example in examples {
        let key = example.attributes().get(attribute);
        groups.entry(key).or_default().push(example);
    }
    groups
}

/// Weighted entropy of partitioning `examples` by `attribute`.
pub fn partition_entropy_by<R: Record>(examples: &[R], attribute: &str) -> f64 {
    let groups: Vec<Vec<&R>> = partition_by(examples, attribute).into_values().collect();
    partition_entropy(&groups)
}
