use super::*;
use crate::domain::{PaintField, RoomField, WallField};
use crate::infra::snapshot::{PAINTS_KEY, ROOMS_KEY};
use crate::infra::store::MemoryStore;
use anyhow::Result;

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn save(&self, key: &str, _value: &str) -> Result<()> {
        anyhow::bail!("store is read-only, refusing {key}")
    }
}

fn only_room_id<S: KeyValueStore>(session: &Session<S>) -> String {
    session.rooms()[0].id.clone()
}

#[test]
fn test_dispatch_persists_touched_record() -> Result<()> {
    let store = MemoryStore::new();
    let mut session = Session::open(&store);

    session.dispatch(Action::Paint(PaintAction::Add));
    assert!(store.load(PAINTS_KEY)?.is_some());
    assert!(store.load(ROOMS_KEY)?.is_none());

    session.dispatch(Action::Room(RoomAction::Add));
    assert!(store.load(ROOMS_KEY)?.is_some());
    Ok(())
}

#[test]
fn test_reopen_restores_state() {
    let store = MemoryStore::new();
    let mut session = Session::open(&store);

    session.dispatch(Action::Paint(PaintAction::Add));
    let paint_id = session.paints()[0].id.clone();
    session.dispatch(Action::Paint(PaintAction::Update {
        id: paint_id.clone(),
        field: PaintField::Coverage(Some(10.0)),
    }));
    session.dispatch(Action::Paint(PaintAction::Update {
        id: paint_id.clone(),
        field: PaintField::Price(Some(5.0)),
    }));

    session.dispatch(Action::Room(RoomAction::Add));
    let room_id = only_room_id(&session);
    session.dispatch(Action::Room(RoomAction::Update {
        id: room_id.clone(),
        field: RoomField::Name("Bedroom".into()),
    }));
    session.dispatch(Action::Wall(WallAction::Add {
        room_id: room_id.clone(),
    }));
    let wall_id = session.rooms()[0].walls[0].id.clone();
    for field in [
        WallField::Length(Some(2.0)),
        WallField::Height(Some(3.0)),
        WallField::PaintId(paint_id.clone()),
    ] {
        session.dispatch(Action::Wall(WallAction::Update {
            room_id: room_id.clone(),
            wall_id: wall_id.clone(),
            field,
        }));
    }
    let expected = session.plan().clone();

    let reopened = Session::open(&store);
    assert_eq!(reopened.plan(), &expected);
    assert_eq!(reopened.rooms()[0].name, "Bedroom");
    assert_eq!(reopened.totals().grand_total_cost, 30.0);
}

#[test]
fn test_delete_actions() {
    let mut session = Session::open(MemoryStore::new());
    session.dispatch(Action::Room(RoomAction::Add));
    let room_id = only_room_id(&session);
    session.dispatch(Action::Wall(WallAction::Add {
        room_id: room_id.clone(),
    }));
    session.dispatch(Action::Wall(WallAction::Add {
        room_id: room_id.clone(),
    }));
    assert_eq!(session.plan().wall_count(), 2);

    let wall_id = session.rooms()[0].walls[0].id.clone();
    session.dispatch(Action::Wall(WallAction::Delete {
        room_id: room_id.clone(),
        wall_id,
    }));
    assert_eq!(session.plan().wall_count(), 1);

    session.dispatch(Action::Room(RoomAction::Delete(room_id)));
    assert!(session.rooms().is_empty());
    assert_eq!(session.plan().wall_count(), 0);

    session.dispatch(Action::Paint(PaintAction::Add));
    let paint_id = session.paints()[0].id.clone();
    session.dispatch(Action::Paint(PaintAction::Delete(paint_id)));
    assert!(session.paints().is_empty());
}

#[test]
fn test_failed_writes_keep_memory_state() {
    let mut session = Session::open(ReadOnlyStore);
    session.dispatch(Action::Paint(PaintAction::Add));
    session.dispatch(Action::Room(RoomAction::Add));
    assert_eq!(session.paints().len(), 1);
    assert_eq!(session.rooms().len(), 1);
}

#[test]
fn test_unknown_ids_still_persist() -> Result<()> {
    let store = MemoryStore::new();
    let mut session = Session::open(&store);
    session.dispatch(Action::Wall(WallAction::Add {
        room_id: "missing".into(),
    }));
    assert!(session.rooms().is_empty());
    assert_eq!(store.load(ROOMS_KEY)?.as_deref(), Some("[]"));
    Ok(())
}

#[test]
fn test_summary_tracks_current_state() {
    let mut session = Session::open(MemoryStore::new());
    assert!(session.summary().lines.is_empty());

    session.dispatch(Action::Paint(PaintAction::Add));
    let paint_id = session.paints()[0].id.clone();
    for field in [
        PaintField::Name("Ivory".into()),
        PaintField::Coverage(Some(4.0)),
        PaintField::Price(Some(2.0)),
    ] {
        session.dispatch(Action::Paint(PaintAction::Update {
            id: paint_id.clone(),
            field,
        }));
    }
    session.dispatch(Action::Room(RoomAction::Add));
    let room_id = only_room_id(&session);
    session.dispatch(Action::Wall(WallAction::Add {
        room_id: room_id.clone(),
    }));
    let wall_id = session.rooms()[0].walls[0].id.clone();
    for field in [
        WallField::Length(Some(4.0)),
        WallField::Height(Some(2.0)),
        WallField::PaintId(paint_id.clone()),
    ] {
        session.dispatch(Action::Wall(WallAction::Update {
            room_id: room_id.clone(),
            wall_id: wall_id.clone(),
            field,
        }));
    }

    let summary = session.summary();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].name, "Ivory");
    assert_eq!(summary.lines[0].liters, 2.0);
    assert_eq!(summary.grand_total_cost, 16.0);

    session.dispatch(Action::Paint(PaintAction::Delete(paint_id)));
    let summary = session.summary();
    assert!(summary.lines.is_empty());
    assert_eq!(summary.grand_total_cost, 0.0);
}
