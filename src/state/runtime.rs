use super::command::Command;
use crate::domain::Plan;
use crate::infra::snapshot;
use crate::infra::store::KeyValueStore;

/// Execute a command. Persistence is best effort: failures are logged and
/// the in-memory plan stays authoritative.
pub fn run(store: &dyn KeyValueStore, plan: &Plan, command: Command) {
    let result = match command {
        Command::PersistPaints => snapshot::save_paints(store, &plan.paints),
        Command::PersistRooms => snapshot::save_rooms(store, &plan.rooms),
    };
    if let Err(err) = result {
        log::warn!("{:?} failed: {:#}", command, err);
    }
}
