//! Terminal rendering of the deployment form

use console::style;
use deployer_core::{FormState, Frontend, Phase};

pub struct TerminalFrontend;

impl TerminalFrontend {
    /// The heading and current form values
    pub fn print_form(&self, state: &FormState) {
        println!("{}", style("Deploy Smart Contract").bold());
        println!();
        println!("  Initial Message: {}", style(&state.message).cyan());
        println!("  [{}]", state.button_label());
        println!();
    }
}

/// One-line progress text for a phase, `None` for phases with nothing to say
fn progress_line(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Connecting => Some("Requesting account access..."),
        Phase::FetchingArtifact => Some("Fetching contract details..."),
        Phase::Deploying => Some("Deploying..."),
        Phase::Idle | Phase::Confirmed | Phase::Failed => None,
    }
}

impl Frontend for TerminalFrontend {
    fn render(&self, state: &FormState) {
        tracing::debug!(phase = %state.phase, deploying = state.deploying, "form state");

        if let Some(line) = progress_line(state.phase) {
            println!("{} {}", style("→").blue(), line);
            return;
        }

        if state.phase == Phase::Confirmed && !state.deploying {
            if let Some(address) = state.contract_address {
                println!(
                    "{} Contract deployed at: {}",
                    style("✓").green(),
                    style(address).yellow().bold()
                );
            }
        }
    }

    fn alert(&self, message: &str) {
        println!();
        println!("{} {}", style("!").yellow().bold(), message);
    }
}
