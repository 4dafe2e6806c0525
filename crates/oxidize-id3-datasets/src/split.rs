use oxidize_id3_core::{Id3Error, Id3Result, LabeledExample};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split examples into training and test sets.
///
/// Returns `(train, test)` with `test.len() == round(n * test_ratio)`.
pub fn train_test_split(
    examples: &[LabeledExample],
    test_ratio: f64,
    seed: Option<u64>,
) -> Id3Result<(Vec<LabeledExample>, Vec<LabeledExample>)> {
    if !(0.0..=1.0).contains(&test_ratio) {
        return Err(Id3Error::InvalidParameter(format!(
            "test_ratio must be in [0, 1], got {test_ratio}"
        )));
    }

    let n = examples.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    indices.shuffle(&mut rng);

    let test_size = (n as f64 * test_ratio).round() as usize;
    let train_size = n - test_size;

    let train = indices[..train_size].iter().map(|&i| examples[i].clone()).collect();
    let test = indices[train_size..].iter().map(|&i| examples[i].clone()).collect();
    Ok((train, test))
}
