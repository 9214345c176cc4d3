// gradarray-core/src/config.rs

/// How gradients reaching the same array through several paths are combined
/// during a single backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradPolicy {
    /// Visit the graph in topological order and sum every contribution an
    /// array receives before assigning its `grad`. Correct for arbitrary DAGs.
    #[default]
    Accumulate,
    /// Recursive depth-first propagation where each visit assigns `grad`.
    /// An array reached through several paths keeps the gradient of the
    /// path visited last. Only correct when the graph is a tree.
    Overwrite,
}

/// Settings attached to a [`Tape`](crate::Tape) at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapeConfig {
    pub grad_policy: GradPolicy,
}

impl TapeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration with `grad_policy` replaced.
    pub fn with_grad_policy(mut self, grad_policy: GradPolicy) -> Self {
        self.grad_policy = grad_policy;
        self
    }
}
