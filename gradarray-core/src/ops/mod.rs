// gradarray-core/src/ops/mod.rs

pub mod arithmetic;
pub mod linalg;
pub mod reduction;
pub mod view;

// Free helpers exposed at the crate root
pub use reduction::{l2_norm_square, sum};
pub use view::expand;
