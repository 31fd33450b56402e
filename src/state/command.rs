/// Side effects requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PersistPaints,
    PersistRooms,
}
