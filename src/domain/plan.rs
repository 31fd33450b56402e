use super::paint::Paint;
use super::room::Room;
use serde::{Deserialize, Serialize};

/// The whole editable state: the paint catalog and the rooms to paint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub paints: Vec<Paint>,
    pub rooms: Vec<Room>,
}

impl Plan {
    pub fn new(paints: Vec<Paint>, rooms: Vec<Room>) -> Self {
        Self { paints, rooms }
    }

    pub fn find_paint(&self, id: &str) -> Option<&Paint> {
        self.paints.iter().find(|p| p.id == id)
    }

    pub fn find_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn wall_count(&self) -> usize {
        self.rooms.iter().map(|r| r.walls.len()).sum()
    }
}
