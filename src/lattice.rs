//! The two elementary transitions applied to an agent when it meets another.

use crate::agent::{Agent, HealthCategory};
use crate::error::MeetupError;
use crate::{error, trace};

/// Moves `agent` one category toward `Cure`. A `Cure` agent is returned unchanged.
#[must_use]
pub fn apply_cure(agent: &Agent) -> Agent {
    if agent.category() == HealthCategory::Cure {
        return agent.clone();
    }
    let cured = agent.with_category(agent.category().improved());
    trace!("cure: {} -> {}", agent, cured);
    cured
}

/// Moves `agent` one category toward `Dead`.
///
/// # Errors
///
/// Returns `MeetupError::ContractViolation` if `agent` is already `Dead`. Dead agents never take
/// part in a meeting, so this indicates a caller bug.
pub fn apply_worsening(agent: &Agent) -> Result<Agent, MeetupError> {
    match agent.category().worsened() {
        Some(category) => {
            let worsened = agent.with_category(category);
            trace!("worsening: {} -> {}", agent, worsened);
            Ok(worsened)
        }
        None => {
            error!("attempted to worsen dead agent {}", agent);
            Err(MeetupError::ContractViolation(format!(
                "cannot worsen agent {:?}: already {}",
                agent.name(),
                agent.category()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_cure, apply_worsening};
    use crate::agent::{Agent, HealthCategory};
    use crate::error::MeetupError;

    #[test]
    fn cure_is_a_fixed_point_at_cure() {
        let agent = Agent::new("Cure0", HealthCategory::Cure);
        assert_eq!(apply_cure(&agent), agent);
    }

    #[test]
    fn cure_moves_one_step() {
        let cases = [
            (HealthCategory::Healthy, HealthCategory::Cure),
            (HealthCategory::Sick, HealthCategory::Healthy),
            (HealthCategory::Dying, HealthCategory::Sick),
        ];
        for (before, after) in cases {
            let agent = Agent::new("Emma", before);
            let cured = apply_cure(&agent);
            assert_eq!(cured.name(), "Emma");
            assert_eq!(cured.category(), after);
        }
    }

    #[test]
    fn worsening_moves_one_step() {
        let dying = apply_worsening(&Agent::new("Darlene", HealthCategory::Dying)).unwrap();
        assert_eq!(dying, Agent::new("Darlene", HealthCategory::Dead));

        let sick = apply_worsening(&Agent::new("Vaccine", HealthCategory::Sick)).unwrap();
        assert_eq!(sick.category(), HealthCategory::Dying);

        let cure = apply_worsening(&Agent::new("Cure1", HealthCategory::Cure)).unwrap();
        assert_eq!(cure.category(), HealthCategory::Healthy);
    }

    #[test]
    fn worsening_dead_agent_is_a_contract_violation() {
        let alice = Agent::new("Alice", HealthCategory::Dead);
        match apply_worsening(&alice) {
            Err(MeetupError::ContractViolation(message)) => {
                assert!(message.contains("Alice"));
            }
            other => panic!("expected a contract violation, got {other:?}"),
        }
    }
}
