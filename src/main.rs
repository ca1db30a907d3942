//! Tank Arena headless driver
//!
//! Loads an arena, feeds the player tank commands for a number of ticks, then
//! prints a summary and the event log.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tank_arena::consts::*;
use tank_arena::persistence::write_game;
use tank_arena::sim::{EventKind, Tank, Wall};
use tank_arena::{Command, EventLog, GamePhase, Settings, TankGame};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "tank-arena", version, about = "Run a tank arena without a window")]
struct Args {
    /// Settings file (JSON); defaults apply when missing
    #[arg(long, value_name = "PATH", default_value = "./data/settings.json")]
    settings: PathBuf,

    /// Arena to load instead of the configured initial file
    #[arg(long, value_name = "PATH")]
    load: Option<PathBuf>,

    /// Ticks to simulate (stops early on game over)
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Console letters fed one per tick, cycled (w s a d e q b)
    #[arg(long, conflicts_with = "demo")]
    script: Option<String>,

    /// Drive the player with seeded random commands
    #[arg(long)]
    demo: bool,

    /// Save the final arena (to the configured save path if no PATH given)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    save: Option<Option<PathBuf>>,

    /// Sleep the configured tick interval between ticks
    #[arg(long)]
    realtime: bool,
}

/// Where player commands come from
enum Pilot {
    Idle,
    Script(Vec<Command>),
    Demo(DemoPilot),
}

impl Pilot {
    fn next_command(&mut self, tick: u64) -> Option<Command> {
        match self {
            Pilot::Idle => None,
            Pilot::Script(commands) => {
                let i = (tick % commands.len() as u64) as usize;
                commands.get(i).copied()
            }
            Pilot::Demo(demo) => Some(demo.next_command(tick)),
        }
    }
}

/// Random commands, firing at most once per cool-down
struct DemoPilot {
    rng: Pcg32,
    cooldown: u64,
    last_fire: Option<u64>,
}

impl DemoPilot {
    const COMMANDS: [Command; 7] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Clockwise,
        Command::AntiClockwise,
        Command::Fire,
    ];

    fn new(seed: u64, cooldown: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            cooldown,
            last_fire: None,
        }
    }

    fn next_command(&mut self, tick: u64) -> Command {
        let ready = self
            .last_fire
            .is_none_or(|t| tick.saturating_sub(t) >= self.cooldown);
        // Fire is last, so leaving it out of the range skips it
        let choices = if ready { Self::COMMANDS.len() } else { Self::COMMANDS.len() - 1 };
        let command = Self::COMMANDS[self.rng.random_range(0..choices)];
        if command == Command::Fire {
            self.last_fire = Some(tick);
        }
        command
    }
}

/// Arena used when no initial file exists
fn built_in_arena() -> TankGame {
    let player = Tank::player(IVec2::new(290, ARENA_HEIGHT - WALL_HEIGHT * 3), 270);
    let enemies = vec![
        Tank::enemy(IVec2::new(100, 100), 45),
        Tank::enemy(IVec2::new(290, 130), 90),
        Tank::enemy(IVec2::new(480, 100), 135),
    ];
    let walls = [(3, 8), (4, 8), (10, 8), (11, 8), (7, 12)]
        .into_iter()
        .map(|(col, row)| Wall::new(IVec2::new(WALL_WIDTH * col, WALL_HEIGHT * row)))
        .collect();
    TankGame::new("built-in", player, enemies, walls)
}

fn parse_script(script: &str) -> Result<Vec<Command>> {
    let commands: Vec<Command> = script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Command::from_key(&c.to_string())
                .with_context(|| format!("unknown command letter '{}' in script", c))
        })
        .collect::<Result<_>>()?;
    anyhow::ensure!(!commands.is_empty(), "script has no commands");
    Ok(commands)
}

fn load_game(args: &Args, settings: &Settings, events: &mut EventLog) -> Result<TankGame> {
    if let Some(path) = &args.load {
        return TankGame::initialize_from_file(path, events)
            .with_context(|| format!("failed to load arena from {}", path.display()));
    }

    if settings.initial_path.exists() {
        TankGame::initialize_from_file(&settings.initial_path, events).with_context(|| {
            format!(
                "failed to load initial arena from {}",
                settings.initial_path.display()
            )
        })
    } else {
        log::info!(
            "No initial arena at {}, using the built-in one",
            settings.initial_path.display()
        );
        events.record(EventKind::GameInitialized {
            source: "built-in arena".to_string(),
        });
        Ok(built_in_arena())
    }
}

fn print_summary(game: &TankGame, events: &EventLog) {
    let outcome = match game.phase() {
        GamePhase::Playing => "still playing",
        GamePhase::Won => "won",
        GamePhase::Lost => "lost",
    };
    println!("Game '{}' after {} ticks: {}", game.name(), game.time_ticks(), outcome);

    match game.player() {
        Some(p) => println!(
            "  player at ({}, {}), gun {} deg, {} live bullet(s)",
            p.position.x,
            p.position.y,
            p.gun_angle(),
            p.bullets().len()
        ),
        None => println!("  player destroyed"),
    }
    println!("  {} enemy tank(s) remaining", game.enemies().len());
    println!("  {} ownerless bullet(s)", game.orphans().len());

    println!("\nEvent log:");
    for event in events.iter() {
        println!("  {}", event);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let settings = Settings::load(&args.settings);
    log::info!("Tank Arena starting...");

    let mut events = EventLog::new();
    let mut game = load_game(&args, &settings, &mut events)?;

    let mut pilot = if let Some(script) = &args.script {
        Pilot::Script(parse_script(script)?)
    } else if args.demo {
        log::info!("Demo pilot with seed {}", settings.demo_seed);
        Pilot::Demo(DemoPilot::new(settings.demo_seed, settings.fire_cooldown_ticks))
    } else {
        Pilot::Idle
    };

    let interval = Duration::from_millis(settings.tick_interval_ms);
    for tick in 0..args.ticks {
        if game.is_game_over() {
            break;
        }
        if let Some(command) = pilot.next_command(tick) {
            game.handle_player_input(command, &mut events);
        }
        game.update(&mut events);
        if args.realtime {
            std::thread::sleep(interval);
        }
    }

    print_summary(&game, &events);

    if let Some(path) = &args.save {
        let path = path.as_ref().unwrap_or(&settings.save_path);
        write_game(path, &game).with_context(|| format!("failed to save to {}", path.display()))?;
        println!("\nSaved to {}", path.display());
    }

    Ok(())
}
