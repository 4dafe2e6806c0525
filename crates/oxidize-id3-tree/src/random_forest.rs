use oxidize_id3_core::{Attributes, Id3Error, Id3Result, LabeledExample};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::decision_tree::{grow_tree, resolve_attributes, DecisionTree};

/// Non-empty ordered collection of trees combined by majority vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DecisionTree>", into = "Vec<DecisionTree>")]
pub struct Forest {
    trees: Vec<DecisionTree>,
}

impl TryFrom<Vec<DecisionTree>> for Forest {
    type Error = Id3Error;

    fn try_from(trees: Vec<DecisionTree>) -> Id3Result<Self> {
        Forest::new(trees)
    }
}

impl From<Forest> for Vec<DecisionTree> {
    fn from(forest: Forest) -> Self {
        forest.trees
    }
}

impl Forest {
    pub fn new(trees: Vec<DecisionTree>) -> Id3Result<Self> {
        if trees.is_empty() {
            return Err(Id3Error::InvalidInput("a forest needs at least one tree".into()));
        }
        Ok(Forest { trees })
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Number of member trees, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// `(true, false)` vote counts for one input.
    pub fn votes(&self, input: &Attributes) -> (usize, usize) {
        tally(&self.trees, input)
    }

    /// Majority vote; a tie predicts `true`.
    pub fn classify(&self, input: &Attributes) -> bool {
        let (trues, falses) = self.votes(input);
        trues >= falses
    }
}

fn tally(trees: &[DecisionTree], input: &Attributes) -> (usize, usize) {
    let trues = trees.iter().filter(|t| t.classify(input)).count();
    (trues, trees.len() - trues)
}

/// Majority vote over `trees`; a tie predicts `true`.
pub fn forest_classify(trees: &[DecisionTree], input: &Attributes) -> Id3Result<bool> {
    if trees.is_empty() {
        return Err(Id3Error::InvalidInput("cannot vote with zero trees".into()));
    }
    let (trues, falses) = tally(trees, input);
    Ok(trues >= falses)
}

/// Build `n_trees` members, each by plain ID3 on the full training set.
///
/// No rows or attributes are resampled, so every member is identical.
pub fn build_forest<S: AsRef<str> + Sync>(
    examples: &[LabeledExample],
    attributes: &[S],
    n_trees: usize,
) -> Id3Result<Forest> {
    grow_forest(examples, attributes, n_trees, None, false)
}

#[instrument(skip_all, fields(n_trees = n_trees, parallel = parallel))]
fn grow_forest<S: AsRef<str> + Sync>(
    examples: &[LabeledExample],
    attributes: &[S],
    n_trees: usize,
    max_depth: Option<usize>,
    parallel: bool,
) -> Id3Result<Forest> {
    if n_trees == 0 {
        return Err(Id3Error::InvalidParameter(
            "n_estimators must be at least 1, got 0".into(),
        ));
    }

    let trees: Vec<DecisionTree> = if parallel {
        (0..n_trees)
            .into_par_iter()
            .map(|_| grow_tree(examples, attributes, max_depth))
            .collect::<Id3Result<_>>()?
    } else {
        (0..n_trees)
            .map(|_| grow_tree(examples, attributes, max_depth))
            .collect::<Id3Result<_>>()?
    };

    info!(
        n_trees = trees.len(),
        n_examples = examples.len(),
        max_member_depth = trees.iter().map(DecisionTree::depth).max().unwrap_or(0),
        "forest built"
    );
    Forest::new(trees)
}

/// Majority-vote ensemble of ID3 trees.
#[derive(Debug, Clone)]
pub struct RandomForestClassifier {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub attributes: Option<Vec<String>>,
    /// Build members on the rayon pool.
    pub parallel: bool,
    forest: Option<Forest>,
}

impl RandomForestClassifier {
    pub fn new(n_estimators: usize) -> Self {
        RandomForestClassifier {
            n_estimators,
            max_depth: None,
            attributes: None,
            parallel: false,
            forest: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_attributes<S: Into<String>>(mut self, attributes: impl IntoIterator<Item = S>) -> Self {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn fit(&mut self, examples: &[LabeledExample]) -> Id3Result<()> {
        let attributes = resolve_attributes(self.attributes.as_deref(), examples);
        self.forest = Some(grow_forest(
            examples,
            &attributes,
            self.n_estimators,
            self.max_depth,
            self.parallel,
        )?);
        Ok(())
    }

    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_ref()
    }

    pub fn predict_one(&self, input: &Attributes) -> Id3Result<bool> {
        let forest = self.forest.as_ref().ok_or(Id3Error::NotFitted)?;
        Ok(forest.classify(input))
    }

    pub fn predict(&self, inputs: &[Attributes]) -> Id3Result<Vec<bool>> {
        let forest = self.forest.as_ref().ok_or(Id3Error::NotFitted)?;
        Ok(inputs.iter().map(|input| forest.classify(input)).collect())
    }
}
