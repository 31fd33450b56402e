use super::action::{Action, PaintAction, RoomAction, WallAction};
use super::command::Command;
use crate::application::{catalog, layout};
use crate::domain::Plan;

/// Apply an action to the plan and report which records must be written.
pub fn reduce(plan: &mut Plan, action: Action) -> Vec<Command> {
    log::debug!("reduce {:?}", action);
    match action {
        Action::Paint(action) => {
            let paints = std::mem::take(&mut plan.paints);
            plan.paints = match action {
                PaintAction::Add => catalog::add_paint(paints),
                PaintAction::Update { id, field } => catalog::update_paint(paints, &id, field),
                PaintAction::Delete(id) => catalog::delete_paint(paints, &id),
            };
            vec![Command::PersistPaints]
        }
        Action::Room(action) => {
            let rooms = std::mem::take(&mut plan.rooms);
            plan.rooms = match action {
                RoomAction::Add => layout::add_room(rooms),
                RoomAction::Update { id, field } => layout::update_room(rooms, &id, field),
                RoomAction::Delete(id) => layout::delete_room(rooms, &id),
            };
            vec![Command::PersistRooms]
        }
        Action::Wall(action) => {
            let rooms = std::mem::take(&mut plan.rooms);
            plan.rooms = match action {
                WallAction::Add { room_id } => layout::add_wall(rooms, &room_id),
                WallAction::Update {
                    room_id,
                    wall_id,
                    field,
                } => layout::update_wall(rooms, &room_id, &wall_id, field),
                WallAction::Delete { room_id, wall_id } => {
                    layout::delete_wall(rooms, &room_id, &wall_id)
                }
            };
            vec![Command::PersistRooms]
        }
    }
}
