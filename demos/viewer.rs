use std::error::Error;

use axon::{Activations, Network, VisualOptions, Visualizer};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut network = Network::new(
        5,
        2,
        vec![3, 4, 5, 7, 8, 20, 4],
        Activations::HyperbolicTangent,
    )?;

    let options = VisualOptions {
        width: 1024,
        height: 768,
        show_values: true,
        ..VisualOptions::default()
    };

    let before = Visualizer::new(&network, options.clone())?.draw();
    before.save("network_before.png")?;

    network.propagate(&[2., 4., 7.], 10);

    let after = Visualizer::new(&network, options)?.draw();
    after.save("network_after.png")?;

    println!("output: {:?}", network.output());

    Ok(())
}
