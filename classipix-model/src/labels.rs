//! Label vocabulary and top-k decoding.

use std::path::Path;

use classipix_core::error::{Error, Result};
use classipix_core::pipeline::LabelDecoder;
use classipix_core::prediction::Prediction;

/// Fixed label vocabulary loaded from a JSON array of strings, indexed
/// by class position in the model output.
#[derive(Debug, Clone)]
pub struct ImageNetLabels {
    labels: Vec<String>,
}

impl ImageNetLabels {
    /// Wraps an in-memory vocabulary.
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::LabelDecode("label vocabulary is empty".to_string()));
        }
        Ok(Self { labels })
    }

    /// Loads the vocabulary from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::LabelDecode(format!("{}: {e}", path.display())))?;
        let labels: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| Error::LabelDecode(format!("{}: {e}", path.display())))?;
        Self::new(labels)
    }

    /// Number of classes in the vocabulary.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the vocabulary is empty (never true after construction).
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelDecoder for ImageNetLabels {
    fn decode_top_k(&self, scores: &[f32], k: usize) -> Result<Vec<Prediction>> {
        if scores.len() != self.labels.len() {
            return Err(Error::LabelDecode(format!(
                "model returned {} scores for a vocabulary of {} labels",
                scores.len(),
                self.labels.len()
            )));
        }

        let mut indexed: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(k);

        Ok(indexed
            .into_iter()
            .map(|(index, score)| {
                Prediction::new(self.labels[index].clone(), score.clamp(0.0, 1.0))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> ImageNetLabels {
        ImageNetLabels::new(vec![
            "tench".to_string(),
            "goldfish".to_string(),
            "great white shark".to_string(),
            "tiger shark".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_decodes_top_k_sorted_descending() {
        let predictions = vocabulary()
            .decode_top_k(&[0.1, 0.6, 0.05, 0.25], 2)
            .unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[0].label, "goldfish");
        assert_eq!(predictions[1].label, "tiger shark");
        assert!(predictions[0].confidence >= predictions[1].confidence);
    }

    #[test]
    fn test_k_larger_than_vocabulary_returns_all() {
        let predictions = vocabulary()
            .decode_top_k(&[0.1, 0.6, 0.05, 0.25], 10)
            .unwrap();
        assert_eq!(predictions.len(), 4);
    }

    #[test]
    fn test_score_count_mismatch_is_error() {
        let err = vocabulary().decode_top_k(&[0.5, 0.5], 5).unwrap_err();
        assert!(matches!(err, Error::LabelDecode(_)));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let err = ImageNetLabels::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::LabelDecode(_)));
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"["cat", "dog"]"#).unwrap();

        let labels = ImageNetLabels::from_file(&path).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_from_file_malformed_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ImageNetLabels::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::LabelDecode(_)));
    }
}
