pub mod l2_norm;
pub mod sum;

pub use l2_norm::l2_norm_square;
pub use sum::sum_op as sum;
