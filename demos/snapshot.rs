use std::error::Error;

use axon::{Activations, Network};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut network = Network::new(4, 3, vec![6, 6], Activations::LogisticSigmoid)?;
    network.propagate(&[0.1, 0.7, 0.3, 0.9], 5);

    let bytes = network.dump()?;
    let restored = Network::load(&bytes)?;

    println!("snapshot size: {} bytes", bytes.len());
    println!("original output: {:?}", network.output());
    println!("restored output: {:?}", restored.output());

    Ok(())
}
