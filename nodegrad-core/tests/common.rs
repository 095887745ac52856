use nodegrad_core::{Graph, Node};

// Shared helpers for the integration tests. Each test binary uses a subset.
#[allow(dead_code)]
pub fn param(graph: &Graph, data: Vec<f32>, shape: Vec<usize>) -> Node {
    graph
        .parameter(data, shape)
        .expect("Test parameter creation failed")
}

#[allow(dead_code)]
pub fn input(graph: &Graph, data: Vec<f32>, shape: Vec<usize>) -> Node {
    graph.input(data, shape).expect("Test input creation failed")
}

#[allow(dead_code)]
pub fn grad_vec(node: &Node) -> Vec<f32> {
    node.grad().expect("Node has no gradient").into_vec()
}
