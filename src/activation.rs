use serde::{Deserialize, Serialize};

/// The activation applied to a node's accumulated sum during propagation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activations {
    Identity,
    HyperbolicTangent,
    HeavisideStep,
    LogisticSigmoid,
    /// Applied per node as a plain logistic sigmoid. The per-layer
    /// normalization of a textbook softmax is not implemented; callers
    /// depend on the sigmoid behavior, so it stays.
    Softmax,
}

impl Activations {
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Activations::Identity => x,
            Activations::HyperbolicTangent => {
                (x.exp() - (-x).exp()) / (x.exp() + (-x).exp())
            }
            Activations::HeavisideStep => {
                if x >= 0. {
                    return 1.;
                }
                0.
            }
            Activations::LogisticSigmoid => 1. / (1. + (-x).exp()),
            Activations::Softmax => 1. / (1. + (-x).exp()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_through() {
        assert_eq!(Activations::Identity.apply(-3.7), -3.7);
        assert_eq!(Activations::Identity.apply(0.), 0.);
    }

    #[test]
    fn hyperbolic_tangent_matches_tanh() {
        for x in [-2., -0.5, 0., 0.5, 2.] {
            let got = Activations::HyperbolicTangent.apply(x);
            assert!((got - f64::tanh(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn heaviside_is_binary_and_one_at_zero() {
        assert_eq!(Activations::HeavisideStep.apply(0.), 1.);
        assert_eq!(Activations::HeavisideStep.apply(4.2), 1.);
        assert_eq!(Activations::HeavisideStep.apply(-0.001), 0.);
    }

    #[test]
    fn logistic_sigmoid_midpoint() {
        assert_eq!(Activations::LogisticSigmoid.apply(0.), 0.5);
        assert!(Activations::LogisticSigmoid.apply(10.) > 0.999);
        assert!(Activations::LogisticSigmoid.apply(-10.) < 0.001);
    }

    #[test]
    fn softmax_behaves_as_sigmoid() {
        for x in [-3., -1., 0., 1., 3.] {
            assert_eq!(
                Activations::Softmax.apply(x),
                Activations::LogisticSigmoid.apply(x)
            );
        }
    }
}
