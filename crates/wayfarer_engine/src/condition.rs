//! Condition evaluation.
//!
//! Predicates are pure reads of session state. A condition's result is its
//! predicate's result XOR its `negated` flag.

use wayfarer_foundation::NameKey;
use wayfarer_parser::Operation;
use wayfarer_storage::{Entity, Predicate};

use crate::session::GameSession;

/// Evaluates a predicate against the session.
///
/// `operation` is the command that ran this turn, if any; predicates about
/// the command are false without one.
#[must_use]
pub fn evaluate(
    session: &GameSession,
    predicate: &Predicate,
    operation: Option<&Operation>,
) -> bool {
    let registry = session.registry();
    match predicate {
        Predicate::Always => true,
        Predicate::StatusSet { entity, key } => {
            registry.get_key(entity).is_some_and(|e| e.is_set(key))
        }
        Predicate::StatusAtLeast { entity, key, value } => registry
            .get_key(entity)
            .is_some_and(|e| e.status(key) >= *value),
        Predicate::PlayerAt(location) => session.player_location().as_ref() == Some(location),
        Predicate::PlayerHolds { item, quantity } => {
            holds(session, session.player(), item, *quantity)
        }
        Predicate::ContainerHolds {
            holder,
            item,
            quantity,
        } => holds(session, holder, item, *quantity),
        Predicate::EntityExists(name) => registry.get_key(name).is_some(),
        Predicate::CommandIs(command) => operation.is_some_and(|op| &op.command == command),
        Predicate::TurnsElapsed(turns) => session.turns() >= *turns,
    }
}

fn holds(session: &GameSession, holder: &NameKey, item: &NameKey, quantity: u32) -> bool {
    session
        .registry()
        .get_key(holder)
        .and_then(Entity::container)
        .is_some_and(|c| c.quantity_of(item) >= quantity.max(1))
}

/// Evaluates the condition entity named `name`.
///
/// A name that is not a registered condition evaluates false.
#[must_use]
pub fn check_condition(
    session: &GameSession,
    name: &NameKey,
    operation: Option<&Operation>,
) -> bool {
    let Some(condition) = session.registry().get_key(name).and_then(Entity::as_condition) else {
        tracing::warn!(condition = %name, "event refers to a missing condition");
        return false;
    };
    evaluate(session, &condition.predicate, operation) ^ condition.negated
}
