//! Deployment form state
//!
//! [`FormState`] is an immutable record. Every step of a deployment attempt
//! produces a new record through one of the transition methods, so the whole
//! workflow can be observed without rendering anything.

use alloy::primitives::Address;

/// Where the current deployment attempt stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Connecting,
    FetchingArtifact,
    Deploying,
    Confirmed,
    Failed,
}

impl Phase {
    /// Whether an attempt is underway
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            Phase::Connecting | Phase::FetchingArtifact | Phase::Deploying
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Connecting => "connecting",
            Phase::FetchingArtifact => "fetching artifact",
            Phase::Deploying => "deploying",
            Phase::Confirmed => "confirmed",
            Phase::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Everything the deployment form displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub message: String,
    pub deploying: bool,
    /// Address of the last successful deployment
    pub contract_address: Option<Address>,
    pub phase: Phase,
}

impl FormState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Replace the message. The input is locked while deploying.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        if self.deploying {
            return self;
        }
        Self {
            message: message.into(),
            ..self
        }
    }

    pub fn connecting(self) -> Self {
        Self {
            phase: Phase::Connecting,
            ..self
        }
    }

    pub fn fetching_artifact(self) -> Self {
        Self {
            phase: Phase::FetchingArtifact,
            ..self
        }
    }

    pub fn deploying(self) -> Self {
        Self {
            phase: Phase::Deploying,
            deploying: true,
            ..self
        }
    }

    pub fn confirmed(self, address: Address) -> Self {
        Self {
            phase: Phase::Confirmed,
            contract_address: Some(address),
            ..self
        }
    }

    /// The attempt failed. A previous address stays on display.
    pub fn failed(self) -> Self {
        Self {
            phase: Phase::Failed,
            ..self
        }
    }

    /// Release the deploying flag, runs after every attempt
    pub fn settled(self) -> Self {
        Self {
            deploying: false,
            ..self
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.deploying
    }

    /// The form requires a non-empty message
    pub fn is_message_valid(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.deploying {
            "Deploying..."
        } else {
            "Deploy"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const ADDR: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

    #[test]
    fn test_initial_state() {
        let state = FormState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.deploying);
        assert!(state.contract_address.is_none());
        assert!(state.can_submit());
        assert!(!state.is_message_valid());
        assert_eq!(state.button_label(), "Deploy");
    }

    #[test]
    fn test_successful_attempt() {
        let state = FormState::new("hello").connecting().fetching_artifact();
        assert_eq!(state.phase, Phase::FetchingArtifact);
        assert!(!state.deploying);

        let state = state.deploying();
        assert!(state.deploying);
        assert!(!state.can_submit());
        assert_eq!(state.button_label(), "Deploying...");

        let state = state.confirmed(ADDR).settled();
        assert_eq!(state.phase, Phase::Confirmed);
        assert_eq!(state.contract_address, Some(ADDR));
        assert!(!state.deploying);
        assert_eq!(state.message, "hello");
    }

    #[test]
    fn test_failure_keeps_previous_address() {
        let state = FormState::new("hello")
            .connecting()
            .fetching_artifact()
            .deploying()
            .confirmed(ADDR)
            .settled();

        let state = state.connecting().fetching_artifact().deploying().failed().settled();
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.contract_address, Some(ADDR));
        assert!(!state.deploying);
    }

    #[test]
    fn test_message_locked_while_deploying() {
        let state = FormState::new("hello").deploying().with_message("changed");
        assert_eq!(state.message, "hello");

        let state = state.settled().with_message("changed");
        assert_eq!(state.message, "changed");
    }

    #[test]
    fn test_phase_in_flight() {
        assert!(!Phase::Idle.is_in_flight());
        assert!(Phase::Connecting.is_in_flight());
        assert!(Phase::FetchingArtifact.is_in_flight());
        assert!(Phase::Deploying.is_in_flight());
        assert!(!Phase::Confirmed.is_in_flight());
        assert!(!Phase::Failed.is_in_flight());
        assert_eq!(Phase::FetchingArtifact.to_string(), "fetching artifact");
    }
}
