use gradarray_core::ndarray::ArrayD;
use gradarray_core::{GradArray, GradPolicy, Tape, TapeConfig};

// Shared by several test crates; not every helper is used by each of them.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Every gradient policy, for scenarios that must behave the same under both.
#[allow(dead_code)]
pub const POLICIES: [GradPolicy; 2] = [GradPolicy::Accumulate, GradPolicy::Overwrite];

#[allow(dead_code)]
pub fn tape_with(policy: GradPolicy) -> Tape {
    Tape::with_config(TapeConfig::new().with_grad_policy(policy))
}

#[allow(dead_code)]
pub fn create_test_array(tape: &Tape, data: Vec<f64>, shape: &[usize]) -> GradArray {
    tape.from_vec(data, shape).expect("Test array creation failed")
}

#[allow(dead_code)]
pub fn assert_array_near(actual: &ArrayD<f64>, expected: &ArrayD<f64>, tolerance: f64) {
    assert_eq!(actual.shape(), expected.shape(), "Shape mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            approx::abs_diff_eq!(*a, *e, epsilon = tolerance),
            "Data mismatch at index {}: actual={}, expected={}",
            i,
            a,
            e
        );
    }
}
