mod session;
mod settings;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use mazewalk_assets::{FileImageLoader, TextureStore};
use mazewalk_common::ViewMode;
use mazewalk_input::{Action, Key, KeyMap};
use mazewalk_kernel::{GameState, GridMap};
use mazewalk_render::{GameInspector, SceneTextures};
use session::{Flow, Session};
use settings::Settings;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mazewalk", about = "Grid maze walker: map tools and headless sessions")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and default tuning
    Info,
    /// Print a maze as glyphs with its start and exits
    Map {
        /// Maze file; the built-in maze when omitted
        #[arg(short, long)]
        map: Option<PathBuf>,
    },
    /// Check that a maze has a start and a reachable exit
    Validate {
        #[arg(short, long)]
        map: Option<PathBuf>,
    },
    /// Play a scripted key sequence headlessly
    Run {
        #[arg(short, long)]
        map: Option<PathBuf>,
        /// YAML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma-separated key names (up, left, right, 1, 2, 3, esc)
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<Key>,
        /// Frames simulated after each key
        #[arg(short, long, default_value = "30")]
        frames: u32,
        /// Seconds per frame, capped at the configured max_frame_dt
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Initial view (first, third, overhead)
        #[arg(long, value_parser = parse_view)]
        view: Option<ViewMode>,
        /// Print the final frame's draw list (every cube with --verbose)
        #[arg(short, long)]
        render: bool,
    },
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    ViewMode::parse(s).ok_or_else(|| format!("unknown view mode: {s:?}"))
}

fn load_map(path: Option<&Path>) -> anyhow::Result<GridMap> {
    match path {
        Some(path) => GridMap::load(path)
            .with_context(|| format!("failed to load maze {}", path.display())),
        None => Ok(GridMap::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let settings = Settings::default();
            println!("mazewalk v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "game: block={} player={:.2} move_rate={} fade_rate={} max_dt={}",
                settings.game.block_length,
                settings.game.player_size(),
                settings.game.move_rate,
                settings.game.fade_rate,
                settings.game.max_frame_dt,
            );
            println!(
                "render: {}x{} fov={}",
                settings.render.width, settings.render.height, settings.render.camera.fov_degrees
            );
            let views: Vec<_> = ViewMode::ALL.iter().map(|v| v.label()).collect();
            println!("views: {}", views.join(", "));
        }
        Commands::Map { map } => {
            let map = load_map(map.as_deref())?;
            println!("Maze {}x{}", map.width(), map.height());
            print!("{map}");
            match map.start() {
                Some(start) => println!("start: {start}"),
                None => println!("start: none"),
            }
            let exits: Vec<_> = map.exits().iter().map(|c| c.to_string()).collect();
            println!("exits: {}", exits.join(" "));
        }
        Commands::Validate { map } => {
            let map = load_map(map.as_deref())?;
            let Some(start) = map.start() else {
                bail!("maze has no start cell");
            };
            let reachable = map.reachable_exits(start);
            println!(
                "start {start}: {} of {} exits reachable, {} cells reachable",
                reachable.len(),
                map.exits().len(),
                map.reachable_from(start).len()
            );
            if reachable.is_empty() {
                bail!("no exit is reachable from {start}");
            }
            println!("OK");
        }
        Commands::Run {
            map,
            config,
            keys,
            frames,
            dt,
            view,
            render,
        } => {
            let map = load_map(map.as_deref())?;
            let settings = match config {
                Some(path) => Settings::load(&path)
                    .with_context(|| format!("failed to load settings {}", path.display()))?,
                None => Settings::default(),
            };

            let state = GameState::new(map, settings.game)?;
            let mut store = TextureStore::new();
            let textures = SceneTextures {
                wall: store.load(&settings.wall_texture, &FileImageLoader),
                complete: store.load(&settings.complete_texture, &FileImageLoader),
            };
            let mut session = Session::new(state, KeyMap::default(), textures, settings.render);

            if let Some(mode) = view {
                session.apply(Action::SelectView(mode));
            }

            for key in keys {
                let flow = session.handle_key(key, true);
                session.handle_key(key, false);
                if flow == Flow::Quit {
                    tracing::info!("quit requested");
                    break;
                }
                session.run_frames(frames, dt);
                for event in session.state_mut().drain_events() {
                    println!("{key:?}: {event:?}");
                }
            }

            println!("{}", GameInspector::summary(session.state()));
            if render {
                print!("{}", session.render_text(cli.verbose));
            }
        }
    }

    Ok(())
}
