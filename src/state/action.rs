use crate::domain::{PaintField, PaintId, RoomField, RoomId, WallField, WallId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Paint(PaintAction),
    Room(RoomAction),
    Wall(WallAction),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintAction {
    Add,
    Update { id: PaintId, field: PaintField },
    Delete(PaintId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    Add,
    Update { id: RoomId, field: RoomField },
    Delete(RoomId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WallAction {
    Add {
        room_id: RoomId,
    },
    Update {
        room_id: RoomId,
        wall_id: WallId,
        field: WallField,
    },
    Delete {
        room_id: RoomId,
        wall_id: WallId,
    },
}
