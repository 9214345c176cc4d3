use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use ndarray::ArrayD;

use crate::autograd::NodeInput;
use crate::error::GradArrayError;
use crate::tape::{ArrayId, Tape, TapeInner};

/// Returns the arrays reachable from `root` in topological order (`root` first,
/// every array before the inputs of its producer).
///
/// Inputs of terminal nodes are not reachable. Iterative DFS so deep chains
/// do not grow the call stack.
pub(crate) fn topological_sort(tape: &TapeInner, root: ArrayId) -> Vec<ArrayId> {
    let mut visited: HashSet<ArrayId> = HashSet::new();
    let mut post_order: Vec<ArrayId> = Vec::new();
    let mut stack: Vec<(ArrayId, bool)> = vec![(root, false)];

    while let Some((id, children_done)) = stack.pop() {
        if children_done {
            post_order.push(id);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        stack.push((id, true));
        if let Some(node_id) = tape.array(id).producer() {
            for input in tape.node(node_id).propagating_inputs() {
                if !visited.contains(&input) {
                    stack.push((input, false));
                }
            }
        }
    }

    post_order.reverse();
    post_order
}

/// Backward pass summing contributions at fan-in points.
///
/// Each reachable array is assigned its total gradient once all of its
/// consumers have been processed.
pub(crate) fn backward_accumulate(
    tape: &Tape,
    root: ArrayId,
    seed: ArrayD<f64>,
) -> Result<(), GradArrayError> {
    let order = topological_sort(&tape.read(), root);
    log::debug!(
        "backward (accumulate) from {:?}: {} reachable arrays",
        root,
        order.len()
    );

    let mut pending: HashMap<ArrayId, ArrayD<f64>> = HashMap::new();
    pending.insert(root, seed);

    for id in order {
        let grad = match pending.remove(&id) {
            Some(grad) => grad,
            None => continue,
        };

        let producer = {
            let mut inner = tape.write();
            let entry = inner.array_mut(id);
            entry.grad = Some(grad.clone());
            entry.producer()
        };
        let node_id = match producer {
            Some(node_id) => node_id,
            None => continue,
        };

        let inner = tape.read();
        let node = inner.node(node_id);
        log::trace!("backward through {} for {:?}", node.op().name(), id);
        let upstream = node.op().backward(&grad, node.inputs(), &inner)?;
        if node.op().is_terminal() {
            continue;
        }
        for (input, input_grad) in node.inputs().iter().zip(upstream) {
            if let (NodeInput::Array(input_id), Some(input_grad)) = (input, input_grad) {
                accumulate(&mut pending, *input_id, input_grad)?;
            }
        }
    }

    Ok(())
}

fn accumulate(
    pending: &mut HashMap<ArrayId, ArrayD<f64>>,
    id: ArrayId,
    grad: ArrayD<f64>,
) -> Result<(), GradArrayError> {
    match pending.entry(id) {
        Entry::Occupied(mut slot) => {
            if slot.get().shape() != grad.shape() {
                return Err(GradArrayError::GradientShapeMismatch {
                    expected: slot.get().shape().to_vec(),
                    actual: grad.shape().to_vec(),
                });
            }
            *slot.get_mut() += &grad;
        }
        Entry::Vacant(slot) => {
            slot.insert(grad);
        }
    }
    Ok(())
}

/// Backward pass as a plain recursive walk.
///
/// Every visit overwrites `grad`, so an array reached through several paths
/// keeps the gradient of the last path walked.
pub(crate) fn backward_overwrite(
    tape: &Tape,
    root: ArrayId,
    seed: ArrayD<f64>,
) -> Result<(), GradArrayError> {
    log::debug!("backward (overwrite) from {:?}", root);
    let mut visits = 0usize;
    propagate_overwrite(tape, root, seed, &mut visits)?;
    log::debug!("backward (overwrite) done after {} visits", visits);
    Ok(())
}

fn propagate_overwrite(
    tape: &Tape,
    id: ArrayId,
    grad: ArrayD<f64>,
    visits: &mut usize,
) -> Result<(), GradArrayError> {
    *visits += 1;

    let producer = {
        let mut inner = tape.write();
        let entry = inner.array_mut(id);
        entry.grad = Some(grad.clone());
        entry.producer()
    };
    let node_id = match producer {
        Some(node_id) => node_id,
        None => return Ok(()),
    };

    // Collect everything needed before recursing: the recursion writes to the tape.
    let (upstream, inputs, terminal) = {
        let inner = tape.read();
        let node = inner.node(node_id);
        log::trace!("backward through {} for {:?}", node.op().name(), id);
        let upstream = node.op().backward(&grad, node.inputs(), &inner)?;
        (upstream, node.inputs().to_vec(), node.op().is_terminal())
    };
    if terminal {
        return Ok(());
    }

    for (input, input_grad) in inputs.into_iter().zip(upstream) {
        if let (NodeInput::Array(input_id), Some(input_grad)) = (input, input_grad) {
            propagate_overwrite(tape, input_id, input_grad, visits)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Tape;

    #[test]
    fn test_topological_sort_diamond() -> Result<(), GradArrayError> {
        let tape = Tape::new();
        let a = tape.from_vec(vec![1.0, 2.0], &[2])?;
        let b = (&a * 2.0)?;
        let c = (&a * 3.0)?;
        let d = (&b + &c)?;

        let order = topological_sort(&tape.read(), d.id());
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], d.id());
        assert_eq!(*order.last().unwrap(), a.id());
        Ok(())
    }

    #[test]
    fn test_topological_sort_stops_at_terminal() -> Result<(), GradArrayError> {
        let tape = Tape::new();
        let v = tape.from_vec(vec![1.0, 2.0], &[2])?;
        let e = crate::expand(&v, 3)?;
        let order = topological_sort(&tape.read(), e.id());
        assert_eq!(order, vec![e.id()]);
        Ok(())
    }

    #[test]
    fn test_overwrite_stops_at_terminal() -> Result<(), GradArrayError> {
        let tape = Tape::new();
        let v = tape.from_vec(vec![1.0, 2.0], &[2])?;
        let e = crate::expand(&v, 3)?;
        let s = crate::sum(&e, 0)?;

        backward_overwrite(&tape, s.id(), ndarray::arr1(&[1.0, -1.0]).into_dyn())?;
        assert_eq!(
            e.grad(),
            Some(ndarray::arr2(&[[1.0, -1.0], [1.0, -1.0], [1.0, -1.0]]).into_dyn())
        );
        assert!(v.grad().is_none());
        Ok(())
    }

    #[test]
    fn test_accumulate_rejects_mismatched_contributions() {
        let mut pending = HashMap::new();
        let id = ArrayId(0);
        accumulate(&mut pending, id, ArrayD::zeros(ndarray::IxDyn(&[2]))).unwrap();
        let result = accumulate(&mut pending, id, ArrayD::zeros(ndarray::IxDyn(&[3])));
        assert!(matches!(
            result,
            Err(GradArrayError::GradientShapeMismatch { .. })
        ));
    }
}
