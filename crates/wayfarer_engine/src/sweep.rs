//! The event sweep.
//!
//! After each command, every registered event is considered once, in
//! registration order. An event fires when all of its conditions hold (an
//! event with no conditions always fires). Effects apply immediately, so a
//! later event sees what an earlier one changed in the same sweep.
//!
//! Events registered during a sweep wait for the next one. Events removed
//! during a sweep are skipped.

use wayfarer_foundation::{NameKey, Result};
use wayfarer_parser::Operation;
use wayfarer_storage::Entity;

use crate::condition;
use crate::effect;
use crate::session::{GameSession, Ports, TurnState};

/// What one sweep did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Events considered, in order.
    pub evaluated: Vec<NameKey>,
    /// Events that fired, in order.
    pub fired: Vec<NameKey>,
}

impl SweepReport {
    /// Returns true if `event` fired.
    #[must_use]
    pub fn fired(&self, event: &str) -> bool {
        let key = NameKey::new(event);
        self.fired.contains(&key)
    }
}

/// Runs one sweep.
///
/// A sweep requested while one is already running does nothing.
///
/// # Errors
///
/// Returns an error if a collaborator fails while an effect runs.
pub fn sweep(
    session: &mut GameSession,
    operation: Option<&Operation>,
    ports: &mut Ports<'_>,
) -> Result<SweepReport> {
    if session.state() == TurnState::ConditionSweep {
        tracing::debug!("ignoring re-entrant sweep");
        return Ok(SweepReport::default());
    }
    session.set_state(TurnState::ConditionSweep);
    let result = run_events(session, operation, ports);
    session.set_state(TurnState::Idle);
    result
}

fn run_events(
    session: &mut GameSession,
    operation: Option<&Operation>,
    ports: &mut Ports<'_>,
) -> Result<SweepReport> {
    let events: Vec<NameKey> = session
        .registry()
        .events()
        .map(|(e, _)| e.key().clone())
        .collect();

    let mut report = SweepReport::default();
    for key in events {
        let Some(event) = session
            .registry()
            .get_key(&key)
            .and_then(Entity::as_event)
            .cloned()
        else {
            tracing::debug!(event = %key, "event removed earlier in the sweep");
            continue;
        };
        report.evaluated.push(key.clone());

        // Every condition is evaluated, even after one fails.
        let eligible = event
            .conditions
            .iter()
            .map(|c| condition::check_condition(session, c, operation))
            .fold(true, |all, ok| all && ok);
        if !eligible {
            continue;
        }

        tracing::debug!(event = %key, "event fired");
        report.fired.push(key);
        effect::apply_all(session, &event.effects, ports)?;
    }
    Ok(report)
}
