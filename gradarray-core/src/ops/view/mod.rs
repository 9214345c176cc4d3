// gradarray-core/src/ops/view/mod.rs

pub mod expand;
pub mod reshape;

pub use expand::expand_op as expand;
pub use reshape::reshape_op;
