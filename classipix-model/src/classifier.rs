//! TorchScript classifier backend.

use std::path::Path;

use tch::{CModule, Device, Kind, Tensor};

use classipix_core::error::{Error, Result};
use classipix_core::pipeline::{Classifier, ImageBatch};

/// Pretrained classifier loaded from a serialized TorchScript module.
///
/// The module is placed on CUDA when available, CPU otherwise. Raw model
/// output is passed through softmax so the returned scores are
/// probabilities in [0, 1].
#[derive(Debug)]
pub struct TorchClassifier {
    module: CModule,
    device: Device,
}

impl TorchClassifier {
    /// Loads a TorchScript module from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(path, device)
            .map_err(|e| Error::Inference(format!("{}: {e}", path.display())))?;
        log::info!("loaded TorchScript model from {}", path.display());
        Ok(Self { module, device })
    }
}

impl Classifier for TorchClassifier {
    #[allow(clippy::cast_possible_wrap)]
    fn predict(&self, batch: &ImageBatch) -> Result<Vec<f32>> {
        let (n, c, h, w) = batch.dims();
        let flat: Vec<f32> = batch.data.iter().copied().collect();
        let input = Tensor::from_slice(&flat)
            .view([n as i64, c as i64, h as i64, w as i64])
            .to_device(self.device);

        let output = self
            .module
            .forward_ts(&[input])
            .map_err(|e| Error::Inference(e.to_string()))?;
        let probabilities = output.softmax(-1, Kind::Float).view([-1]);

        let count = usize::try_from(probabilities.size()[0])
            .map_err(|e| Error::Inference(e.to_string()))?;
        let mut scores = vec![0.0f32; count];
        probabilities.copy_data(&mut scores, count);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_module_is_inference_error() {
        let err = TorchClassifier::load(Path::new("nope/mobilenet.pt")).unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }
}
