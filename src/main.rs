//! PaintCalc CLI entry point.
//!
//! Edits the paint catalog and room layout, and prints the paint summary.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use paintcalc::domain::{PaintField, Plan, RoomField, Wall, WallField};
use paintcalc::infra::app_config::{StorageBackend, load_config};
use paintcalc::infra::open_store;
use paintcalc::infra::store::KeyValueStore;
use paintcalc::state::{Action, PaintAction, RoomAction, Session, WallAction};

#[derive(Parser, Debug)]
#[command(name = "paintcalc")]
#[command(version)]
#[command(about = "Paint volume and cost calculator", long_about = None)]
struct Args {
    /// Directory holding the saved paints and rooms
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Storage backend to use
    #[arg(long, value_enum, global = true)]
    backend: Option<StorageBackend>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage the paint catalog
    Paint {
        #[command(subcommand)]
        command: PaintCommand,
    },

    /// Manage rooms
    Room {
        #[command(subcommand)]
        command: RoomCommand,
    },

    /// Manage the walls of a room
    Wall {
        #[command(subcommand)]
        command: WallCommand,
    },

    /// Show paint required and cost per paint
    Summary,
}

#[derive(Subcommand, Debug)]
enum PaintCommand {
    /// Add a blank paint
    Add,
    /// Set a field (name, code, coverage, price); an empty value unsets numbers
    Set {
        id: String,
        field: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a paint
    Rm { id: String },
    /// List paints
    List,
}

#[derive(Subcommand, Debug)]
enum RoomCommand {
    /// Add a room
    Add,
    /// Set a field (name)
    Set {
        id: String,
        field: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a room and its walls
    Rm { id: String },
    /// List rooms with their walls
    List,
}

#[derive(Subcommand, Debug)]
enum WallCommand {
    /// Add a wall to a room
    Add { room_id: String },
    /// Set a field (name, length, height, paintId)
    Set {
        room_id: String,
        wall_id: String,
        field: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Remove a wall
    Rm { room_id: String, wall_id: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut config = load_config();
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(backend) = args.backend {
        config.backend = backend;
    }

    let mut session = Session::open(open_store(&config)?);

    match args.command {
        Commands::Paint { command } => run_paint(&mut session, command)?,
        Commands::Room { command } => run_room(&mut session, command)?,
        Commands::Wall { command } => run_wall(&mut session, command)?,
        Commands::Summary => print_summary(&session, &config.currency_symbol),
    }

    Ok(())
}

fn run_paint<S: KeyValueStore>(session: &mut Session<S>, command: PaintCommand) -> Result<()> {
    match command {
        PaintCommand::Add => {
            session.dispatch(Action::Paint(PaintAction::Add));
            if let Some(paint) = session.paints().last() {
                println!("{}", paint.id);
            }
        }
        PaintCommand::Set { id, field, value } => {
            if session.plan().find_paint(&id).is_none() {
                bail!("No paint with id {id}");
            }
            let field = PaintField::from_input(&field, &value)?;
            session.dispatch(Action::Paint(PaintAction::Update { id, field }));
        }
        PaintCommand::Rm { id } => {
            session.dispatch(Action::Paint(PaintAction::Delete(id)));
        }
        PaintCommand::List => {
            for paint in session.paints() {
                println!(
                    "{}  {} ({})  coverage: {} m²/L  price: {}/m²",
                    paint.id,
                    paint.name,
                    paint.code,
                    format_measure(paint.coverage),
                    format_measure(paint.price),
                );
            }
        }
    }
    Ok(())
}

fn run_room<S: KeyValueStore>(session: &mut Session<S>, command: RoomCommand) -> Result<()> {
    match command {
        RoomCommand::Add => {
            session.dispatch(Action::Room(RoomAction::Add));
            if let Some(room) = session.rooms().last() {
                println!("{}", room.id);
            }
        }
        RoomCommand::Set { id, field, value } => {
            if session.plan().find_room(&id).is_none() {
                bail!("No room with id {id}");
            }
            let field = RoomField::from_input(&field, &value)?;
            session.dispatch(Action::Room(RoomAction::Update { id, field }));
        }
        RoomCommand::Rm { id } => {
            session.dispatch(Action::Room(RoomAction::Delete(id)));
        }
        RoomCommand::List => {
            let plan = session.plan();
            for room in &plan.rooms {
                println!("{}  {}", room.id, room.name);
                for wall in &room.walls {
                    println!("  {}", describe_wall(plan, wall));
                }
            }
        }
    }
    Ok(())
}

fn run_wall<S: KeyValueStore>(session: &mut Session<S>, command: WallCommand) -> Result<()> {
    match command {
        WallCommand::Add { room_id } => {
            if session.plan().find_room(&room_id).is_none() {
                bail!("No room with id {room_id}");
            }
            session.dispatch(Action::Wall(WallAction::Add {
                room_id: room_id.clone(),
            }));
            let wall = session
                .plan()
                .find_room(&room_id)
                .and_then(|room| room.walls.last());
            if let Some(wall) = wall {
                println!("{}", wall.id);
            }
        }
        WallCommand::Set {
            room_id,
            wall_id,
            field,
            value,
        } => {
            let exists = session
                .plan()
                .find_room(&room_id)
                .is_some_and(|room| room.walls.iter().any(|w| w.id == wall_id));
            if !exists {
                bail!("No wall {wall_id} in room {room_id}");
            }
            let field = WallField::from_input(&field, &value)?;
            if let WallField::PaintId(paint_id) = &field {
                if !paint_id.is_empty() && session.plan().find_paint(paint_id).is_none() {
                    log::warn!("Paint {} is not in the catalog; wall will be skipped", paint_id);
                }
            }
            session.dispatch(Action::Wall(WallAction::Update {
                room_id,
                wall_id,
                field,
            }));
        }
        WallCommand::Rm { room_id, wall_id } => {
            session.dispatch(Action::Wall(WallAction::Delete { room_id, wall_id }));
        }
    }
    Ok(())
}

fn print_summary<S: KeyValueStore>(session: &Session<S>, currency: &str) {
    let totals = session.totals();
    let summary = paintcalc::application::summarize(session.plan(), &totals);
    println!("{}", summary.render(currency));

    for skipped in &totals.skipped {
        println!(
            "Skipped wall {} in room {}: {}",
            skipped.wall_id, skipped.room_id, skipped.reason
        );
    }
}

fn describe_wall(plan: &Plan, wall: &Wall) -> String {
    let paint = match wall.paint() {
        None => "-".to_string(),
        Some(id) => match plan.find_paint(id) {
            Some(paint) => format!("{} ({})", paint.name, paint.code),
            None => format!("{id} (missing)"),
        },
    };
    let area = wall
        .area()
        .map(|a| format!("{a:.2} m²"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {}  {} x {} m  area: {}  paint: {}",
        wall.id,
        wall.name,
        format_measure(wall.length),
        format_measure(wall.height),
        area,
        paint
    )
}

fn format_measure(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}
