//! # Linear regression with plain gradient descent
//!
//! Fits `y = x @ w + b` to synthetic data generated from known weights:
//! 1.  Builds the forward graph from `Input` data and `Parameter` leaves.
//! 2.  Computes a mean squared error and calls `backward()`.
//! 3.  Replaces each parameter with `p - lr * grad`. Nodes are never mutated,
//!     so every step builds fresh leaves and a fresh graph.
//!
//! ## Running
//! `cargo run --example linear_regression`

use nodegrad_core::array::{randn, NdArray};
use nodegrad_core::autograd::{count_by_type, get_parameters};
use nodegrad_core::{Graph, Node, NodeGradError, NodeType};

const SAMPLES: usize = 64;
const FEATURES: usize = 3;
const LEARNING_RATE: f32 = 0.1;
const EPOCHS: usize = 200;

fn sgd_step(graph: &Graph, param: &Node) -> Result<Node, NodeGradError> {
    let updated = match param.grad() {
        Some(grad) => param.data().sub(&grad.mul_scalar(LEARNING_RATE))?,
        None => param.data().clone(),
    };
    Ok(graph.node(updated, NodeType::Parameter))
}

fn main() -> Result<(), NodeGradError> {
    let true_w = NdArray::new(vec![2.0, -3.0, 0.5], vec![FEATURES, 1])?;
    let true_b = 1.25f32;

    let x_data = randn(&[SAMPLES, FEATURES]);
    let y_data = x_data.matmul(&true_w)?.add_scalar(true_b);

    let graph = Graph::new();
    let x = graph.node(x_data, NodeType::Input);
    let y = graph.node(y_data, NodeType::Input);

    let mut w = graph.node(randn(&[FEATURES, 1]), NodeType::Parameter);
    let mut b = graph.parameter(vec![0.0], vec![1, 1])?;
    let ones_col = graph.input(vec![1.0; SAMPLES], vec![SAMPLES, 1])?;

    for epoch in 0..EPOCHS {
        let prediction = x.matmul(&w)?.add(&ones_col.matmul(&b)?)?;
        let loss = prediction.sub(&y)?.pow(2.0)?.mean(None)?;

        if epoch == 0 {
            let counts = count_by_type(&loss);
            println!(
                "Graph: {} parameter(s), {} input(s), {} intermediate node(s)",
                counts[&NodeType::Parameter],
                counts[&NodeType::Input],
                counts[&NodeType::Intermediate]
            );
            println!("Trainable leaves: {:?}", get_parameters(&loss));
        }

        loss.backward(None)?;
        w = sgd_step(&graph, &w)?;
        b = sgd_step(&graph, &b)?;

        if epoch % 50 == 0 || epoch == EPOCHS - 1 {
            println!("Epoch {:>3}: loss = {:.6}", epoch, loss.data().as_slice()[0]);
        }
    }

    println!("Learned w = {:?} (true {:?})", w.to_vec(), true_w.as_slice());
    println!("Learned b = {:?} (true {})", b.to_vec(), true_b);
    println!("Live nodes at exit: {}", graph.live_nodes());
    Ok(())
}
