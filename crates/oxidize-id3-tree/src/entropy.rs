use oxidize_id3_core::Record;

/// Shannon entropy in bits of a class distribution: `-Σ p·log2(p)`.
///
/// Zero probabilities contribute nothing. The input is not normalized.
pub fn entropy(class_probabilities: &[f64]) -> f64 {
    class_probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

/// Fraction of each distinct label value, one entry per label present.
pub fn class_probabilities(labels: &[bool]) -> Vec<f64> {
    if labels.is_empty() {
        return Vec::new();
    }
    let total = labels.len() as f64;
    let trues = labels.iter().filter(|&&l| l).count();
    let falses = labels.len() - trues;
    [trues, falses]
        .into_iter()
        .filter(|&c| c > 0)
        .map(|c| c as f64 / total)
        .collect()
}

/// Entropy of the label distribution of a set of examples.
pub fn data_entropy<R: Record>(examples: &[R]) -> f64 {
    let labels: Vec<bool> = examples.iter().map(Record::label).collect();
    entropy(&class_probabilities(&labels))
}

/// Size-weighted entropy of a partitioning: `Σ |s_i| / total · data_entropy(s_i)`.
///
/// Terms are summed in ascending order, so the result does not depend on the
/// order of `subsets`.
pub fn partition_entropy<R: Record, S: AsRef<[R]>>(subsets: &[S]) -> f64 {
    let total: usize = subsets.iter().map(|s| s.as_ref().len()).sum();
    if total == 0 {
        return 0.0;
    }
    let mut terms: Vec<f64> = subsets
        .iter()
        .map(|s| {
            let s = s.as_ref();
            data_entropy(s) * s.len() as f64 / total as f64
        })
        .collect();
    terms.sort_by(f64::total_cmp);
    terms.into_iter().sum()
}

/// Count of `(true, false)` labels.
pub(crate) fn label_counts<R: Record>(examples: &[R]) -> (usize, usize) {
    let trues = examples.iter().filter(|e| e.label()).count();
    (trues, examples.len() - trues)
}

/// Majority label; ties go to `true`.
pub(crate) fn majority_label<R: Record>(examples: &[R]) -> bool {
    let (trues, falses) = label_counts(examples);
    trues >= falses
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use oxidize_id3_core::{Attributes, LabeledExample};

    fn labeled(labels: &[bool]) -> Vec<LabeledExample> {
        labels
            .iter()
            .map(|&l| LabeledExample::new(Attributes::new(), l))
            .collect()
    }

    #[test]
    fn test_entropy_known_values() {
        assert_abs_diff_eq!(entropy(&[1.0]), 0.0);
        assert_abs_diff_eq!(entropy(&[0.5, 0.5]), 1.0);
        assert_abs_diff_eq!(entropy(&[0.25, 0.75]), 0.811278, epsilon = 1e-6);
    }

    #[test]
    fn test_entropy_skips_zero_probability() {
        assert_abs_diff_eq!(entropy(&[0.0, 1.0]), 0.0);
        assert!(entropy(&[0.0, 0.5, 0.5]).is_finite());
    }

    #[test]
    fn test_class_probabilities_cover_each_label_once() {
        let probs = class_probabilities(&[true, false, true, true]);
        assert_eq!(probs.len(), 2);
        assert_abs_diff_eq!(probs.iter().sum::<f64>(), 1.0);
        assert!(probs.contains(&0.75));
        assert_eq!(class_probabilities(&[false, false]), vec![1.0]);
        assert!(class_probabilities(&[]).is_empty());
    }

    #[test]
    fn test_data_entropy_pure_and_even() {
        assert_abs_diff_eq!(data_entropy(&labeled(&[true, true, true])), 0.0);
        assert_abs_diff_eq!(data_entropy(&labeled(&[false; 5])), 0.0);
        assert_abs_diff_eq!(data_entropy(&labeled(&[true, false, false, true])), 1.0);
    }

    #[test]
    fn test_partition_entropy_weighted() {
        let pure_a = labeled(&[true, true]);
        let pure_b = labeled(&[false]);
        assert_abs_diff_eq!(partition_entropy(&[pure_a.clone(), pure_b]), 0.0);

        let mixed = labeled(&[true, false]);
        // 2/4 * 0 + 2/4 * 1
        assert_abs_diff_eq!(partition_entropy(&[pure_a, mixed]), 0.5);
    }

    #[test]
    fn test_partition_entropy_ignores_subset_order() {
        for groups in [
            vec![(1, 1), (1, 1), (1, 2)],
            vec![(1, 1), (2, 2), (3, 3)],
            vec![(1, 0), (2, 3), (4, 1), (1, 5)],
        ] {
            let subsets: Vec<Vec<LabeledExample>> = groups
                .iter()
                .map(|&(t, f)| {
                    let mut labels = vec![true; t];
                    labels.extend(vec![false; f]);
                    labeled(&labels)
                })
                .collect();
            let mut reversed = subsets.clone();
            reversed.reverse();
            assert_eq!(
                partition_entropy(&subsets).to_bits(),
                partition_entropy(&reversed).to_bits()
            );
        }
    }

    #[test]
    fn test_majority_ties_favor_true() {
        assert!(majority_label(&labeled(&[true, false])));
        assert!(!majority_label(&labeled(&[true, false, false])));
        assert_eq!(label_counts(&labeled(&[true, false, false])), (1, 2));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_uniform_label_sets_have_zero_entropy(label in any::<bool>(), n in 1usize..40) {
                prop_assert!(data_entropy(&labeled(&vec![label; n])).abs() < 1e-12);
            }

            #[test]
            fn prop_even_split_has_unit_entropy(n in 1usize..40) {
                let mut labels = vec![true; n];
                labels.extend(vec![false; n]);
                prop_assert!((data_entropy(&labeled(&labels)) - 1.0).abs() < 1e-12);
            }

            #[test]
            fn prop_binary_entropy_bounded(labels in proptest::collection::vec(any::<bool>(), 1..60)) {
                let h = data_entropy(&labeled(&labels));
                prop_assert!((0.0..=1.0 + 1e-12).contains(&h));
            }
        }
    }
}
