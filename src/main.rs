//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_blocks::term`. Timed effects run off a fixed tick.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_blocks::engine::{GameEngine, Question, QuizDeck, QuizService};
use tui_blocks::input::{map_event, should_quit};
use tui_blocks::term::{GameView, TerminalRenderer};
use tui_blocks::types::{GameConfig, Size, TICK_MS};

/// Drag polyominoes onto the grid; full rows and columns clear.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for piece generation (defaults to the clock).
    #[arg(short, long)]
    seed: Option<u32>,

    /// JSON file with game options; missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of quiz questions replacing the bundled deck.
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Play without quiz interruptions.
    #[arg(long)]
    no_quiz: bool,

    /// Write logs to this file (filter with RUST_LOG, default `info`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if args.no_quiz {
        config.quiz_interval = 0;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let deck = match &args.questions {
        Some(path) => QuizDeck::new(load_questions(path)?, seed),
        None => QuizDeck::with_default_questions(seed),
    };

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut engine = GameEngine::with_quiz(
        config,
        seed,
        Size::new(w as f32, h as f32),
        Size::new(2.0, 1.0),
        deck,
    )?;
    let mut view = GameView::new(w, h);
    tracing::info!(seed, width = w, height = h, "terminal ready");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &mut view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let quiz = engine.quiz();
    tracing::info!(
        score = engine.score().total(),
        placements = engine.placements(),
        "exiting"
    );
    println!(
        "score {}  placed {}  quiz {}/{}",
        engine.score().total(),
        engine.placements(),
        quiz.correct(),
        quiz.asked()
    );
    Ok(())
}

fn run<Q: QuizService>(
    term: &mut TerminalRenderer,
    engine: &mut GameEngine<Q>,
    view: &mut GameView,
) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render only when something changed.
        if engine.take_redraw() {
            engine.present(view);
            term.draw_swap(view.framebuffer_mut())?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let ev = event::read()?;
            match ev {
                Event::Key(key) if key.kind != KeyEventKind::Release && should_quit(key) => {
                    return Ok(());
                }
                Event::Resize(w, h) => {
                    view.resize(w, h);
                    term.invalidate();
                    engine.resize(Size::new(w as f32, h as f32));
                }
                _ => {}
            }
            if let Some(input) = map_event(&ev) {
                engine.handle(input);
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            engine.tick(elapsed.as_millis() as u32);
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read questions {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid questions {}", path.display()))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
