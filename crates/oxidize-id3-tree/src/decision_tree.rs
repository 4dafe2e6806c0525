use std::collections::{BTreeMap, BTreeSet};

use oxidize_id3_core::{Attributes, Id3Error, Id3Result, LabeledExample};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::entropy::{label_counts, majority_label};
use crate::partition::{partition_by, partition_entropy_by};

/// A node in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionTree {
    /// Leaf: always predicts this label.
    Leaf(bool),
    /// Internal node: dispatches on the value of `attribute`.
    Decision {
        attribute: String,
        /// One child per value observed during training.
        branches: BTreeMap<String, DecisionTree>,
        /// Followed when the input lacks `attribute` or holds an unseen value.
        fallback: Box<DecisionTree>,
    },
}

impl DecisionTree {
    /// Walk the tree for one input. Never fails.
    pub fn classify(&self, input: &Attributes) -> bool {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf(label) => return *label,
                DecisionTree::Decision {
                    attribute,
                    branches,
                    fallback,
                } => {
                    node = input
                        .get(attribute)
                        .and_then(|value| branches.get(value))
                        .unwrap_or(fallback.as_ref());
                }
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionTree::Leaf(_))
    }

    /// Number of decision levels below this node. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Decision {
                branches, fallback, ..
            } => {
                1 + branches
                    .values()
                    .map(DecisionTree::depth)
                    .chain(std::iter::once(fallback.depth()))
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Total node count, fallback children included.
    pub fn node_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Decision {
                branches, fallback, ..
            } => {
                1 + fallback.node_count()
                    + branches.values().map(DecisionTree::node_count).sum::<usize>()
            }
        }
    }
}

/// Build an unbounded ID3 tree from `examples`, splitting only on `attributes`.
///
/// Candidates are deduplicated and tried in ascending name order; on equal
/// partition entropy the first one wins.
pub fn build_tree<S: AsRef<str>>(
    examples: &[LabeledExample],
    attributes: &[S],
) -> Id3Result<DecisionTree> {
    grow_tree(examples, attributes, None)
}

#[instrument(skip_all, fields(n_examples = examples.len(), n_attributes = attributes.len()))]
pub(crate) fn grow_tree<S: AsRef<str>>(
    examples: &[LabeledExample],
    attributes: &[S],
    max_depth: Option<usize>,
) -> Id3Result<DecisionTree> {
    if examples.is_empty() {
        return Err(Id3Error::InvalidInput(
            "cannot build a tree from zero training examples".into(),
        ));
    }
    for (i, example) in examples.iter().enumerate() {
        example.attributes.validate().map_err(|e| match e {
            Id3Error::InvalidInput(msg) => Id3Error::InvalidInput(format!("example {i}: {msg}")),
            other => other,
        })?;
    }

    let candidates: BTreeSet<&str> = attributes.iter().map(AsRef::as_ref).collect();
    if candidates.contains("") {
        return Err(Id3Error::InvalidInput(
            "candidate attributes contain an empty name".into(),
        ));
    }
    let candidates: Vec<&str> = candidates.into_iter().collect();

    let rows: Vec<&LabeledExample> = examples.iter().collect();
    let tree = grow(&rows, &candidates, 0, max_depth)?;
    debug!(depth = tree.depth(), nodes = tree.node_count(), "tree built");
    Ok(tree)
}

fn grow(
    examples: &[&LabeledExample],
    candidates: &[&str],
    depth: usize,
    max_depth: Option<usize>,
) -> Id3Result<DecisionTree> {
    if examples.is_empty() {
        return Err(Id3Error::InvalidInput(format!(
            "empty example set at depth {depth}"
        )));
    }

    let (trues, falses) = label_counts(examples);
    if falses == 0 {
        return Ok(DecisionTree::Leaf(true));
    }
    if trues == 0 {
        return Ok(DecisionTree::Leaf(false));
    }
    if candidates.is_empty() || max_depth.is_some_and(|d| depth >= d) {
        return Ok(DecisionTree::Leaf(trues >= falses));
    }

    let (attribute, entropy) = best_split(examples, candidates);
    debug!(attribute, entropy, depth, n_examples = examples.len(), "selected split");

    let remaining: Vec<&str> = candidates.iter().copied().filter(|&c| c != attribute).collect();
    let mut branches = BTreeMap::new();
    for (value, group) in partition_by(examples, attribute) {
        // Examples lacking the attribute are covered by the fallback child.
        let Some(value) = value else { continue };
        let group: Vec<&LabeledExample> = group.into_iter().copied().collect();
        let subtree = grow(&group, &remaining, depth + 1, max_depth)?;
        branches.insert(value.to_string(), subtree);
    }

    Ok(DecisionTree::Decision {
        attribute: attribute.to_string(),
        branches,
        fallback: Box::new(DecisionTree::Leaf(majority_label(examples))),
    })
}

/// Entropies closer than this are treated as a tie.
const ENTROPY_TOLERANCE: f64 = 1e-12;

/// Candidate with the strictly lowest partition entropy; `candidates` is non-empty.
fn best_split<'c>(examples: &[&LabeledExample], candidates: &[&'c str]) -> (&'c str, f64) {
    let mut best_attribute = candidates[0];
    let mut best_entropy = f64::INFINITY;
    for &candidate in candidates {
        let entropy = partition_entropy_by(examples, candidate);
        if entropy < best_entropy - ENTROPY_TOLERANCE {
            best_entropy = entropy;
            best_attribute = candidate;
        }
    }
    (best_attribute, best_entropy)
}

/// ID3 decision tree classifier over categorical attributes.
#[derive(Debug, Clone, Default)]
pub struct Id3Classifier {
    /// Depth at which growth stops with a majority leaf. `None` grows until
    /// nodes are pure or attributes run out.
    pub max_depth: Option<usize>,
    /// Candidate split attributes. `None` uses every attribute name seen in
    /// the training data.
    pub attributes: Option<Vec<String>>,
    tree: Option<DecisionTree>,
}

impl Id3Classifier {
    pub fn new() -> Self {
        Id3Classifier::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_attributes<S: Into<String>>(mut self, attributes: impl IntoIterator<Item = S>) -> Self {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn fit(&mut self, examples: &[LabeledExample]) -> Id3Result<()> {
        let attributes = resolve_attributes(self.attributes.as_deref(), examples);
        self.tree = Some(grow_tree(examples, &attributes, self.max_depth)?);
        Ok(())
    }

    pub fn tree(&self) -> Option<&DecisionTree> {
        self.tree.as_ref()
    }

    pub fn predict_one(&self, input: &Attributes) -> Id3Result<bool> {
        let tree = self.tree.as_ref().ok_or(Id3Error::NotFitted)?;
        Ok(tree.classify(input))
    }

    pub fn predict(&self, inputs: &[Attributes]) -> Id3Result<Vec<bool>> {
        let tree = self.tree.as_ref().ok_or(Id3Error::NotFitted)?;
        Ok(inputs.iter().map(|input| tree.classify(input)).collect())
    }
}

/// Explicit candidates, or the union of attribute names in `examples`.
pub(crate) fn resolve_attributes(
    explicit: Option<&[String]>,
    examples: &[LabeledExample],
) -> Vec<String> {
    match explicit {
        Some(attrs) => attrs.to_vec(),
        None => examples
            .iter()
            .flat_map(|e| e.attributes.names())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}
