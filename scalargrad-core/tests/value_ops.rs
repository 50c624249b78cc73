use approx::assert_abs_diff_eq;
use scalargrad_core::autograd::{check_grad, topological_sort, trace};
use scalargrad_core::{Op, ScalarGradError, Value};

// Include the common helper module
mod common;
use common::leaves;

#[test]
fn test_basic_arithmetic() {
    assert_eq!((Value::new(2.0) * Value::new(3.0)).data(), 6.0);
    assert_eq!((Value::new(6.0) / Value::new(3.0)).data(), 2.0);
    assert_eq!(Value::new(2.0).powf(3.0).data(), 8.0);
    assert_abs_diff_eq!(Value::new(1.0).tanh().data(), 0.7615941559557649, epsilon = 1e-9);
    assert_abs_diff_eq!(Value::new(2.0).exp().data(), 7.389056, epsilon = 1e-3);
}

#[test]
fn test_chain_rule_regression() {
    let x1 = Value::labeled("x1", 2.0);
    let x2 = Value::labeled("x2", 0.0);
    let w1 = Value::labeled("w1", -3.0);
    let w2 = Value::labeled("w2", 1.0);
    let b = Value::labeled("b", 6.8813735870195432);

    let x1w1 = (&x1 * &w1).with_label("x1*w1");
    let x2w2 = (&x2 * &w2).with_label("x2*w2");
    let x1w1x2w2 = (&x1w1 + &x2w2).with_label("x1*w1 + x2*w2");
    let n = (&x1w1x2w2 + &b).with_label("n");
    let o = n.tanh().with_label("o");

    o.backward();

    let tol = 1e-4;
    assert_abs_diff_eq!(x1.grad().unwrap(), -1.5, epsilon = tol);
    assert_abs_diff_eq!(w1.grad().unwrap(), 1.0, epsilon = tol);
    assert_abs_diff_eq!(x2.grad().unwrap(), 0.5, epsilon = tol);
    assert_eq!(w2.grad(), Some(0.0));
    assert_abs_diff_eq!(b.grad().unwrap(), 0.5, epsilon = tol);
    assert_abs_diff_eq!(n.grad().unwrap(), 0.5, epsilon = tol);
}

#[test]
fn test_accumulation_on_reuse() {
    let a = Value::new(2.0);
    let value = &a + &a;
    value.backward();
    assert_eq!(a.grad(), Some(2.0));
}

#[test]
fn test_forward_values_stable_across_backward() {
    let xs = leaves(&[0.4, -1.2, 2.5]);
    let out = (&xs[0] * &xs[1] + xs[2].exp()).tanh() - &xs[0] / &xs[2];
    let before: Vec<f64> = topological_sort(&out).iter().map(|v| v.data()).collect();

    for _ in 0..3 {
        out.backward();
    }
    let after: Vec<f64> = topological_sort(&out).iter().map(|v| v.data()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_topological_order_on_composite_graph() {
    let xs = leaves(&[1.0, 2.0, 3.0]);
    let shared = &xs[0] * &xs[1];
    let out = (&shared + &xs[2]) * (&shared - 1.0) + shared.exp();

    let order = topological_sort(&out);
    for (i, node) in order.iter().enumerate() {
        for pred in node.predecessors() {
            let p = order.iter().position(|v| *v == pred).expect("predecessor in order");
            assert!(p < i);
        }
    }
    assert_eq!(order.last(), Some(&out));
}

#[test]
fn test_trace_exposes_ops() {
    let a = Value::labeled("a", 0.5);
    let out = (&a * 2.0).tanh();
    let graph = trace(&out);

    let ops: Vec<Op> = graph.nodes.iter().map(|v| v.op()).collect();
    assert_eq!(ops.iter().filter(|op| **op == Op::Leaf).count(), 2);
    assert_eq!(ops.last(), Some(&Op::Tanh));
    assert_eq!(graph.edges.len(), 3);
    assert_eq!(format!("{}", Op::Pow { exponent: 2.0 }), "**");
}

#[test]
fn test_numerical_gradients_agree() {
    let f = |v: &[Value]| -> Result<Value, ScalarGradError> {
        let (x, y, z) = (&v[0], &v[1], &v[2]);
        Ok((x * y + z.pow(2.0)?).tanh() + (x - z).exp() / (y * y + 1.0))
    };
    check_grad(f, &[0.2, -0.4, 0.9], 1e-6, 1e-5).expect("analytical and numerical gradients agree");
}

#[test]
fn test_non_numeric_power_is_rejected() {
    let a = Value::new(2.0);
    let b = Value::new(3.0);
    assert!(matches!(a.pow(b), Err(ScalarGradError::InvalidArgument { .. })));
}
