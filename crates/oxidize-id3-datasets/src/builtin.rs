use oxidize_id3_core::{Attributes, LabeledExample};

/// Attribute names of the hiring dataset.
pub const HIRING_ATTRIBUTES: [&str; 4] = ["level", "lang", "tweets", "phd"];

/// Load the hiring dataset (14 interview candidates, 4 categorical attributes).
///
/// Label: whether the candidate interviewed well. 9 true, 5 false.
pub fn load_hiring() -> Vec<LabeledExample> {
    // level, lang, tweets, phd, label
    let rows: [(&str, &str, &str, &str, bool); 14] = [
        ("Senior", "Java", "no", "no", false),
        ("Senior", "Java", "no", "yes", false),
        ("Mid", "Python", "no", "no", true),
        ("Junior", "Python", "no", "no", true),
        ("Junior", "R", "yes", "no", true),
        ("Junior", "R", "yes", "yes", false),
        ("Mid", "R", "yes", "yes", true),
        ("Senior", "Python", "no", "no", false),
        ("Senior", "R", "yes", "no", true),
        ("Junior", "Python", "yes", "no", true),
        ("Senior", "Python", "yes", "yes", true),
        ("Mid", "Python", "no", "yes", true),
        ("Mid", "Java", "yes", "no", true),
        ("Junior", "Python", "no", "yes", false),
    ];

    rows.iter()
        .map(|&(level, lang, tweets, phd, label)| {
            let attrs: Attributes = HIRING_ATTRIBUTES
                .iter()
                .copied()
                .zip([level, lang, tweets, phd])
                .collect();
            LabeledExample::new(attrs, label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_hiring() {
        let data = load_hiring();
        assert_eq!(data.len(), 14);
        assert_eq!(data.iter().filter(|e| e.label).count(), 9);
        for example in &data {
            assert_eq!(example.attributes.len(), HIRING_ATTRIBUTES.len());
            for name in HIRING_ATTRIBUTES {
                assert!(example.attributes.contains(name));
            }
        }
        assert_eq!(data[0].attributes.get("level"), Some("Senior"));
        assert!(!data[0].label);
    }
}
