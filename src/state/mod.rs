//! Reducer-style session state.
//!
//! A [`Session`] owns the in-memory plan and the store it mirrors to.
//! Records are read once when the session opens; each dispatched action
//! is reduced against the plan and the affected record is written back.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, PaintAction, RoomAction, WallAction};
pub use command::Command;

use crate::application::{Summary, Totals, compute_totals, summarize};
use crate::domain::{Paint, Plan, Room};
use crate::infra::snapshot;
use crate::infra::store::KeyValueStore;

pub struct Session<S: KeyValueStore> {
    plan: Plan,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Load both records from `store`. Missing or corrupt data starts empty.
    pub fn open(store: S) -> Self {
        let plan = snapshot::load_plan(&store);
        Self { plan, store }
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.plan, action);
        for command in commands {
            runtime::run(&self.store, &self.plan, command);
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn paints(&self) -> &[Paint] {
        &self.plan.paints
    }

    pub fn rooms(&self) -> &[Room] {
        &self.plan.rooms
    }

    /// Recomputed from the current plan on every call.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.plan.paints, &self.plan.rooms)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.plan, &self.totals())
    }
}

#[cfg(test)]
mod tests;
