use serde::{Deserialize, Serialize};

use super::edge::EdgeId;

/// Layer role. Gates summation, bias, and emission during propagation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Hidden,
    Output,
}

/// A single computational unit holding a scalar post-activation value.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Node {
    pub value: f64,
    /// Hidden nodes only.
    pub bias: Option<f64>,
    pub incoming: Vec<EdgeId>,
    pub outgoing: Vec<EdgeId>,
}

impl Node {
    pub fn new(role: Role) -> Node {
        let bias = match role {
            Role::Hidden => Some(0.),
            _ => None,
        };

        Node {
            value: 0.,
            bias,
            incoming: vec![],
            outgoing: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hidden_nodes_carry_bias() {
        assert_eq!(Node::new(Role::Input).bias, None);
        assert_eq!(Node::new(Role::Hidden).bias, Some(0.));
        assert_eq!(Node::new(Role::Output).bias, None);
    }
}
