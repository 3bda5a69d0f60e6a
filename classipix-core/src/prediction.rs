//! Classification result types.

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of predictions kept in a classification result.
pub const TOP_K: usize = 5;

/// A single predicted label with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Human-readable class label.
    pub label: String,
    /// Confidence score in [0, 1].
    pub confidence: f32,
}

impl Prediction {
    /// Creates a new prediction.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Ordered set of top predictions for one successful run.
///
/// Construction validates that every confidence lies in [0, 1] and that
/// the sequence is sorted by descending confidence. The result is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    predictions: Vec<Prediction>,
}

impl Classification {
    /// Validates and wraps an ordered prediction list.
    pub fn new(predictions: Vec<Prediction>) -> Result<Self> {
        for prediction in &predictions {
            if !(0.0..=1.0).contains(&prediction.confidence) {
                return Err(Error::InvalidConfidence(prediction.confidence));
            }
        }
        let ordered = predictions
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence);
        if !ordered {
            return Err(Error::UnorderedPredictions);
        }
        Ok(Self { predictions })
    }

    /// The predictions, best first.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Whether the result holds no predictions.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_descending_confidences() {
        let result = Classification::new(vec![
            Prediction::new("tabby", 0.8),
            Prediction::new("tiger cat", 0.15),
            Prediction::new("lynx", 0.05),
        ])
        .unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.predictions()[0].label, "tabby");
    }

    #[test]
    fn test_rejects_out_of_range_confidence() {
        let err = Classification::new(vec![Prediction::new("tabby", 1.2)]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfidence(_)));
    }

    #[test]
    fn test_rejects_nan_confidence() {
        let err = Classification::new(vec![Prediction::new("tabby", f32::NAN)]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfidence(_)));
    }

    #[test]
    fn test_rejects_unordered_predictions() {
        let err = Classification::new(vec![
            Prediction::new("lynx", 0.05),
            Prediction::new("tabby", 0.8),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::UnorderedPredictions));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let result = Classification::new(Vec::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_classification_serializes_ordered() {
        let result = Classification::new(vec![
            Prediction::new("tabby", 0.75),
            Prediction::new("lynx", 0.25),
        ])
        .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""label":"tabby""#));
        assert!(json.find("tabby").unwrap() < json.find("lynx").unwrap());
    }
}
