//! One round of pairwise meetings.
//!
//! A round splits the listing into eligible agents (`Cure`, `Sick`, `Dying`) and ineligible
//! agents (`Healthy`, `Dead`), keeping the input order within each group. Eligible agents meet in
//! consecutive pairs `(a[0], a[1]), (a[2], a[3]), ...`:
//!
//! * if either agent is `Cure`, both receive [`apply_cure`];
//! * otherwise both receive [`apply_worsening`].
//!
//! A trailing eligible agent without a partner is carried over unchanged. The resulting listing
//! holds the resolved pairs in pairing order, then the unpaired agent if there is one, then the
//! ineligible agents in their original order. The output order therefore generally differs from
//! the input order.

use crate::agent::{Agent, HealthCategory};
use crate::error::MeetupError;
use crate::lattice::{apply_cure, apply_worsening};
use crate::{debug, trace};

/// Which rule fired for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingOutcome {
    /// At least one of the two was `Cure`.
    Cured,
    Worsened,
}

/// The result of two eligible agents meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub first: Agent,
    pub second: Agent,
    pub outcome: MeetingOutcome,
}

/// The output listing of a round together with counts of what happened in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundSummary {
    pub agents: Vec<Agent>,
    pub cured_pairs: usize,
    pub worsened_pairs: usize,
    pub unpaired: usize,
    pub ineligible: usize,
}

/// Splits `agents` into `(eligible, ineligible)`, each in input order.
#[must_use]
pub fn partition(agents: &[Agent]) -> (Vec<&Agent>, Vec<&Agent>) {
    agents
        .iter()
        .partition(|agent| agent.category().is_eligible())
}

/// Resolves the meeting of `first` and `second`.
///
/// # Errors
///
/// Returns `MeetupError::ContractViolation` if the worsening rule fires for a `Dead` agent,
/// which cannot happen for agents selected by [`partition`].
pub fn resolve_pair(first: &Agent, second: &Agent) -> Result<Meeting, MeetupError> {
    let cure_present =
        first.category() == HealthCategory::Cure || second.category() == HealthCategory::Cure;
    let meeting = if cure_present {
        Meeting {
            first: apply_cure(first),
            second: apply_cure(second),
            outcome: MeetingOutcome::Cured,
        }
    } else {
        Meeting {
            first: apply_worsening(first)?,
            second: apply_worsening(second)?,
            outcome: MeetingOutcome::Worsened,
        }
    };
    trace!(
        "meeting of {} and {}: {:?} -> {}, {}",
        first,
        second,
        meeting.outcome,
        meeting.first,
        meeting.second
    );
    Ok(meeting)
}

/// Runs one round and returns the resulting listing along with per-round counts.
///
/// # Errors
///
/// Propagates a `MeetupError::ContractViolation` from [`resolve_pair`]. Well-formed input never
/// produces one.
pub fn meetup_round(agents: &[Agent]) -> Result<RoundSummary, MeetupError> {
    let (eligible, ineligible) = partition(agents);
    let mut summary = RoundSummary {
        agents: Vec::with_capacity(agents.len()),
        ineligible: ineligible.len(),
        ..RoundSummary::default()
    };

    let mut pairs = eligible.chunks_exact(2);
    for pair in pairs.by_ref() {
        let meeting = resolve_pair(pair[0], pair[1])?;
        match meeting.outcome {
            MeetingOutcome::Cured => summary.cured_pairs += 1,
            MeetingOutcome::Worsened => summary.worsened_pairs += 1,
        }
        summary.agents.push(meeting.first);
        summary.agents.push(meeting.second);
    }
    if let [unpaired] = pairs.remainder() {
        trace!("{} has no partner this round", unpaired);
        summary.unpaired = 1;
        summary.agents.push((*unpaired).clone());
    }
    summary.agents.extend(ineligible.into_iter().cloned());

    debug!(
        "meetup round over {} agents: {} cured pairs, {} worsened pairs, {} unpaired, {} ineligible",
        agents.len(),
        summary.cured_pairs,
        summary.worsened_pairs,
        summary.unpaired,
        summary.ineligible
    );
    Ok(summary)
}

/// Runs one round and returns the resulting listing.
///
/// # Errors
///
/// See [`meetup_round`].
pub fn meetup(agents: &[Agent]) -> Result<Vec<Agent>, MeetupError> {
    meetup_round(agents).map(|summary| summary.agents)
}
