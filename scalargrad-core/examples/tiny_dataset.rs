use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::{ScalarGradError, Trainer, TrainingConfig};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let inputs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![1.0, -1.0, -1.0, 1.0];

    let config = TrainingConfig::new(vec![3, 4, 4, 1], inputs, targets)
        .with_epochs(20)
        .with_learning_rate(0.1)
        .with_verbose(true);

    // Fixed seed: every run prints the same losses and outputs.
    let mut rng = StdRng::seed_from_u64(12345);
    let mut trainer = Trainer::new(config, &mut rng)?;
    let outcome = trainer.run()?;

    log::info!(
        "trained {} parameters, final loss {:?}",
        scalargrad_core::nn::Module::num_parameters(trainer.mlp()),
        outcome.final_loss()
    );
    Ok(())
}
