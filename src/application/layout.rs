//! Room and wall operations. Walls only exist inside their room.

use crate::domain::{Room, RoomField, Wall, WallField};

pub fn add_room(mut rooms: Vec<Room>) -> Vec<Room> {
    rooms.push(Room::new());
    rooms
}

pub fn update_room(mut rooms: Vec<Room>, id: &str, field: RoomField) -> Vec<Room> {
    if let Some(room) = find_room_mut(&mut rooms, id) {
        room.apply(field);
    }
    rooms
}

/// Removes the room together with all of its walls.
pub fn delete_room(mut rooms: Vec<Room>, id: &str) -> Vec<Room> {
    rooms.retain(|r| r.id != id);
    rooms
}

pub fn add_wall(mut rooms: Vec<Room>, room_id: &str) -> Vec<Room> {
    if let Some(room) = find_room_mut(&mut rooms, room_id) {
        room.walls.push(Wall::new());
    }
    rooms
}

pub fn update_wall(
    mut rooms: Vec<Room>,
    room_id: &str,
    wall_id: &str,
    field: WallField,
) -> Vec<Room> {
    let wall = find_room_mut(&mut rooms, room_id)
        .and_then(|room| room.walls.iter_mut().find(|w| w.id == wall_id));
    if let Some(wall) = wall {
        wall.apply(field);
    }
    rooms
}

pub fn delete_wall(mut rooms: Vec<Room>, room_id: &str, wall_id: &str) -> Vec<Room> {
    if let Some(room) = find_room_mut(&mut rooms, room_id) {
        room.walls.retain(|w| w.id != wall_id);
    }
    rooms
}

fn find_room_mut<'a>(rooms: &'a mut [Room], id: &str) -> Option<&'a mut Room> {
    rooms.iter_mut().find(|r| r.id == id)
}
