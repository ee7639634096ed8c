//! Variable store: the only writer of an entry's resolved values.

use std::collections::BTreeMap;

use tracing::trace;

use super::{Entry, VariableChange};

/// Applies a variable event to one entry's values.
///
/// Writes `update.value` under `update.name` only when the entry declares
/// that slot; otherwise the entry is left untouched. Events are routed at
/// entries that may not own every name in scope, so a mismatch is not an
/// error. Last write wins, and replaying an event yields the same state.
///
/// Returns whether the value was written.
pub fn set_value(entry: &mut Entry, update: &impl VariableChange) -> bool {
    if !entry.declares(update.name()) {
        trace!(
            entry = entry.id.as_deref().unwrap_or(entry.kind.as_str()),
            variable = update.name(),
            "slot not declared, skipping"
        );
        return false;
    }

    entry
        .values
        .get_or_insert_with(BTreeMap::new)
        .insert(update.name().to_string(), update.value().to_string());
    true
}
