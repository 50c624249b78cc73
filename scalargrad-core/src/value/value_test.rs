use super::*;
use crate::utils::testing::{check_grad_near, check_value_near};
use num_traits::ToPrimitive;
use std::collections::HashSet;

struct Unrepresentable;

impl ToPrimitive for Unrepresentable {
    fn to_i64(&self) -> Option<i64> {
        None
    }
    fn to_u64(&self) -> Option<u64> {
        None
    }
}

#[test]
fn test_new_leaf_defaults() {
    let v = Value::new(1.5);
    assert_eq!(v.data(), 1.5);
    assert!(v.grad().is_none());
    assert!(v.label().is_none());
    assert_eq!(v.op(), Op::Leaf);
    assert!(v.is_leaf());
    assert!(v.predecessors().is_empty());
}

#[test]
fn test_identity_not_value_equality() {
    let a = Value::new(2.0);
    let b = Value::new(2.0);
    let a_again = a.clone();

    assert_ne!(a, b);
    assert_eq!(a, a_again);

    let set: HashSet<Value> = [a.clone(), b, a_again].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_clone_shares_node() {
    let a = Value::new(1.0);
    let alias = a.clone();
    alias.acc_grad(3.0);
    assert_eq!(a.grad(), Some(3.0));
}

#[test]
fn test_operator_overloads_all_forms() {
    let a = Value::labeled("a", 2.0);
    let b = Value::labeled("b", 3.0);

    assert_eq!((&a + &b).data(), 5.0);
    assert_eq!((a.clone() * b.clone()).data(), 6.0);
    assert_eq!((&a - b.clone()).data(), -1.0);
    check_value_near(&(a.clone() / &b), 2.0 / 3.0, 1e-12);
    assert_eq!((-&a).data(), -2.0);
    assert_eq!((-a.clone()).data(), -2.0);
}

#[test]
fn test_scalar_promotion_labels() {
    let a = Value::labeled("a", 2.0);

    let right = &a + 2.0;
    assert_eq!(right.label().as_deref(), Some("a+scalar_2"));
    assert_eq!(right.data(), 4.0);

    let left = 2.0 + &a;
    assert_eq!(left.label().as_deref(), Some("scalar_2+a"));
    assert_eq!(left.data(), 4.0);

    let scaled = 0.5 * a.clone();
    assert_eq!(scaled.label().as_deref(), Some("scalar_0.5*a"));
    assert_eq!(scaled.data(), 1.0);

    let quotient = 6.0 / &Value::labeled("b", 3.0);
    check_value_near(&quotient, 2.0, 1e-12);
    assert_eq!(quotient.label().as_deref(), Some("scalar_6*b**-1"));
}

#[test]
fn test_scalar_leaf_receives_gradient() {
    let a = Value::new(3.0);
    let c = &a * 4.0;
    c.backward();
    check_grad_near(&a, 4.0, 1e-12);

    let four = c
        .operands()
        .into_iter()
        .find(|v| v.label().as_deref() == Some("scalar_4"));
    let four = four.expect("scalar operand missing");
    check_grad_near(&four, 3.0, 1e-12);
}

#[test]
fn test_pow_with_numeric_exponent() {
    let a = Value::labeled("a", 2.0);
    let c = a.pow(3.0).expect("numeric exponent");
    assert_eq!(c.data(), 8.0);
    assert_eq!(c.label().as_deref(), Some("a**3"));
    assert_eq!(a.powf(3.0).data(), 8.0);
}

#[test]
fn test_pow_with_integer_exponent() {
    let a = Value::labeled("a", 2.0);
    let c = a.pow(3).expect("integer exponent");
    assert_eq!(c.data(), 8.0);
    assert_eq!(c.op(), Op::Pow { exponent: 3.0 });
    assert_eq!(c.label().as_deref(), Some("a**3"));

    c.backward();
    check_grad_near(&a, 12.0, 1e-12);

    let inverse = a.pow(-1).expect("negative integer exponent");
    check_value_near(&inverse, 0.5, 1e-12);
}

#[test]
fn test_pow_with_value_exponent_fails() {
    let a = Value::new(2.0);
    let p = Value::new(3.0);
    match a.pow(&p) {
        Err(ScalarGradError::InvalidArgument { operation, .. }) => assert_eq!(operation, "pow"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_try_scalar() {
    let v = Value::try_scalar(3_i32).expect("integer converts");
    assert_eq!(v.data(), 3.0);
    assert_eq!(v.label().as_deref(), Some("scalar_3"));

    assert!(matches!(
        Value::try_scalar(Unrepresentable),
        Err(ScalarGradError::InvalidArgument { .. })
    ));
}

#[test]
fn test_exp_and_tanh_methods() {
    let a = Value::labeled("a", 1.0);
    check_value_near(&a.tanh(), 0.7615941559557649, 1e-9);
    check_value_near(&a.exp(), std::f64::consts::E, 1e-12);
    assert_eq!(a.exp().label().as_deref(), Some("exp(a)"));
}

#[test]
fn test_labels_can_be_set_later() {
    let a = Value::labeled("a", 1.0);
    let b = Value::labeled("b", 2.0);
    let c = (&a * &b).with_label("c");
    assert_eq!(c.label().as_deref(), Some("c"));

    let d = &c + &a;
    assert_eq!(d.label().as_deref(), Some("c+a"));
    d.set_label("d");
    assert_eq!(d.label().as_deref(), Some("d"));
}

#[test]
fn test_grad_helpers() {
    let a = Value::new(1.0).with_grad(2.5);
    assert_eq!(a.grad(), Some(2.5));

    a.acc_grad(0.5);
    assert_eq!(a.grad(), Some(3.0));

    a.zero_grad();
    assert_eq!(a.grad(), Some(0.0));

    a.clear_grad();
    assert_eq!(a.grad(), None);
}

#[test]
fn test_sum_of_values() {
    let xs = vec![
        Value::labeled("x", 1.0),
        Value::labeled("y", 2.0),
        Value::labeled("z", 3.0),
    ];
    let total: Value = xs.iter().sum();
    assert_eq!(total.data(), 6.0);
    assert_eq!(total.label().as_deref(), Some("x+y+z"));

    let empty: Value = Vec::<Value>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
    assert!(empty.is_leaf());
}

#[test]
fn test_predecessors_deduplicated() {
    let a = Value::new(2.0);
    let b = Value::new(5.0);
    let c = &a * &a;
    let d = &c + &b;

    assert_eq!(c.predecessors(), vec![a.clone()]);
    assert_eq!(c.operands().len(), 2);
    assert_eq!(d.predecessors(), vec![c, b]);
}

#[test]
fn test_debug_and_display() {
    let a = Value::labeled("a", 2.0);
    let debug = format!("{:?}", a);
    assert!(debug.contains("data=2"));
    assert!(debug.contains("label=Some(\"a\")"));
    assert!(debug.contains("op=Leaf"));

    assert_eq!(format!("{}", a), "Value(a=2)");
    assert_eq!(format!("{}", Value::new(1.5)), "Value(1.5)");
}
