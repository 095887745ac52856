use crate::array::NdArray;
use crate::error::NodeGradError;
use crate::node::Node;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Graph error during gradient check: {0}")]
    GraphError(NodeGradError),
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Input {input_index} requires grad but has no gradient after the backward pass")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Function did not propagate requires_grad correctly")]
    RequiresGradPropagationError,
}

impl From<NodeGradError> for GradCheckError {
    fn from(err: NodeGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is evaluated once on `inputs` and differentiated with `output_grad`
/// as the seed. Every element of every input that requires gradients is then
/// perturbed by `±epsilon` on fresh leaf copies, and the scalar
/// `sum(output * output_grad)` is compared between the two evaluations.
///
/// Existing gradients on `inputs` are cleared first.
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    output_grad: &NdArray,
    epsilon: f64,
    abs_tolerance: f64,
    rel_tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, NodeGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs)?;
    let any_requires_grad = inputs.iter().any(|n| n.requires_grad());
    if any_requires_grad != output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if !any_requires_grad {
        return Ok(());
    }
    output.backward(Some(output_grad.clone()))?;
    let analytical: Vec<Option<NdArray>> = inputs.iter().map(|n| n.grad()).collect();

    for (i, input) in inputs.iter().enumerate() {
        if !input.requires_grad() {
            continue;
        }
        let analytical_grad = analytical[i]
            .as_ref()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?;

        let original = input.data().clone();
        for elem_idx in 0..original.numel() {
            let loss_plus = perturbed_loss(&func, inputs, i, &original, elem_idx, epsilon, output_grad)?;
            let loss_minus = perturbed_loss(&func, inputs, i, &original, elem_idx, -epsilon, output_grad)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_value = analytical_grad.as_slice()[elem_idx] as f64;

            if !approx::relative_eq!(
                analytical_value,
                numerical_grad,
                epsilon = abs_tolerance,
                max_relative = rel_tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad: analytical_value,
                    numerical_grad,
                    difference: (analytical_value - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

/// Evaluates `func` with element `elem_idx` of input `input_index` shifted by
/// `delta`, and reduces the output against `output_grad` in f64.
fn perturbed_loss<F>(
    func: &F,
    inputs: &[Node],
    input_index: usize,
    original: &NdArray,
    elem_idx: usize,
    delta: f64,
    output_grad: &NdArray,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, NodeGradError>,
{
    let source = &inputs[input_index];
    let mut data = original.to_vec();
    data[elem_idx] = (data[elem_idx] as f64 + delta) as f32;
    let perturbed = Node::new(
        &source.graph(),
        NdArray::new(data, original.shape().to_vec())?,
        source.node_type(),
    );

    let mut shifted: Vec<Node> = inputs.to_vec();
    shifted[input_index] = perturbed;
    let output = func(&shifted)?;
    let out = output.data();
    if out.shape() != output_grad.shape() {
        return Err(GradCheckError::GraphError(NodeGradError::ShapeMismatch {
            expected: out.shape().to_vec(),
            actual: output_grad.shape().to_vec(),
            operation: "grad_check loss".to_string(),
        }));
    }
    let loss = out
        .as_slice()
        .iter()
        .zip(output_grad.as_slice())
        .map(|(&o, &g)| o as f64 * g as f64)
        .sum();
    Ok(loss)
}
