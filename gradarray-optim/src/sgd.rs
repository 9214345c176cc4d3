// gradarray-optim/src/sgd.rs

use ndarray::ArrayD;
use gradarray_core::GradArrayError;

use crate::Optimizer;

/// Implements stochastic gradient descent (optionally with weight decay).
///
/// Updates parameters `p` according to the rule:
/// `p = p - lr * (grad(p) + weight_decay * p)`
#[derive(Debug, Clone, PartialEq)]
pub struct Sgd {
    lr: f64,
    weight_decay: f64,
}

impl Sgd {
    /// Creates a new SGD optimizer without weight decay.
    ///
    /// # Arguments
    /// * `lr` - The learning rate.
    pub fn new(lr: f64) -> Self {
        Sgd {
            lr,
            weight_decay: 0.0,
        }
    }

    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, param: &ArrayD<f64>, grad: &ArrayD<f64>) -> Result<ArrayD<f64>, GradArrayError> {
        if param.shape() != grad.shape() {
            return Err(GradArrayError::ShapeMismatch {
                expected: param.shape().to_vec(),
                actual: grad.shape().to_vec(),
                operation: "sgd step".to_string(),
            });
        }
        let mut direction = grad.clone();
        if self.weight_decay != 0.0 {
            direction.scaled_add(self.weight_decay, param);
        }
        log::trace!("sgd step: lr={}, weight_decay={}", self.lr, self.weight_decay);
        Ok(param - &(direction * self.lr))
    }
}
