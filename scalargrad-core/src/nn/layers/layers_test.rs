use super::*;
use crate::utils::testing::{check_grad_near, check_value_near};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(xs: &[f64]) -> Vec<Value> {
    xs.iter().map(|&x| Value::new(x)).collect()
}

#[test]
fn test_neuron_forward_known_parameters() {
    let neuron = Neuron::from_parameters(vec![0.5, -1.0], 0.1);
    let out = neuron.forward(&inputs(&[1.0, 0.9])).unwrap();
    check_value_near(&out, (-0.3_f64).tanh(), 1e-12);
}

#[test]
fn test_neuron_backward_reaches_parameters() {
    let neuron = Neuron::from_parameters(vec![0.5, -1.0], 0.1);
    let xs = inputs(&[1.0, 0.9]);
    let out = neuron.forward(&xs).unwrap();
    out.backward();

    let dtanh = 1.0 - out.data() * out.data();
    check_grad_near(&neuron.weights()[0], dtanh * 1.0, 1e-12);
    check_grad_near(&neuron.weights()[1], dtanh * 0.9, 1e-12);
    check_grad_near(neuron.bias(), dtanh, 1e-12);
    check_grad_near(&xs[1], dtanh * -1.0, 1e-12);
}

#[test]
fn test_neuron_width_mismatch() {
    let neuron = Neuron::from_parameters(vec![0.5, -1.0, 2.0], 0.0);
    let err = neuron.forward(&inputs(&[1.0, 2.0])).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::ShapeMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_neuron_without_inputs_uses_bias_only() {
    let neuron = Neuron::from_parameters(vec![], 0.7);
    let out = neuron.forward(&[]).unwrap();
    check_value_near(&out, 0.7_f64.tanh(), 1e-12);
}

#[test]
fn test_neuron_parameter_order_and_names() {
    let neuron = Neuron::from_parameters(vec![1.0, 2.0], 3.0);
    let data: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0]);

    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w0", "w1", "b"]);
}

#[test]
fn test_neuron_seeded_initialization_is_reproducible() {
    let a = Neuron::new(4, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = Neuron::new(4, &mut StdRng::seed_from_u64(3)).unwrap();
    let pa: Vec<f64> = a.parameters().iter().map(|p| p.data()).collect();
    let pb: Vec<f64> = b.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(pa, pb);
    assert!(pa.iter().all(|x| (-1.0..1.0).contains(x)));
}

#[test]
fn test_neuron_draws_weights_then_bias() {
    let init = Init::Uniform { low: -1.0, high: 1.0 };
    let mut rng = StdRng::seed_from_u64(99);
    let expected: Vec<f64> = (0..3).map(|_| init.sample(&mut rng).unwrap()).collect();

    let neuron = Neuron::new(2, &mut StdRng::seed_from_u64(99)).unwrap();
    let actual: Vec<f64> = neuron.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_layer_single_vs_many() {
    let mut rng = StdRng::seed_from_u64(1);
    let xs = inputs(&[0.5, -0.5]);

    let single = Layer::new(2, 1, &mut rng).unwrap();
    let out = single.forward(&xs).unwrap();
    assert!(out.as_single().is_some());
    assert_eq!(out.len(), 1);

    let wide = Layer::new(2, 3, &mut rng).unwrap();
    let out = wide.forward(&xs).unwrap();
    assert!(out.as_single().is_none());
    assert_eq!(out.len(), 3);
    assert_eq!(out.into_values().len(), 3);
}

#[test]
fn test_layer_outputs_follow_neuron_order() {
    let layer = Layer::from_neurons(vec![
        Neuron::from_parameters(vec![1.0], 0.0),
        Neuron::from_parameters(vec![-1.0], 0.0),
    ]);
    let out = layer.forward(&inputs(&[0.5])).unwrap().into_values();
    check_value_near(&out[0], 0.5_f64.tanh(), 1e-12);
    check_value_near(&out[1], (-0.5_f64).tanh(), 1e-12);
}

#[test]
fn test_layer_parameters_flattened_by_neuron() {
    let layer = Layer::from_neurons(vec![
        Neuron::from_parameters(vec![1.0, 2.0], 3.0),
        Neuron::from_parameters(vec![4.0, 5.0], 6.0),
    ]);
    let data: Vec<f64> = layer.parameters().iter().map(|p| p.data()).collect();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let names: Vec<String> = layer.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names[2], "neurons.0.b");
    assert_eq!(names[3], "neurons.1.w0");
    assert_eq!(layer.n_inputs(), 2);
    assert_eq!(layer.n_outputs(), 2);
}

#[test]
fn test_layer_propagates_width_error() {
    let layer = Layer::new(3, 2, &mut StdRng::seed_from_u64(0)).unwrap();
    assert!(matches!(
        layer.forward(&inputs(&[1.0])),
        Err(ScalarGradError::ShapeMismatch { expected: 3, actual: 1, .. })
    ));
}
