use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "deckplay", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export every navigation step with its fragment styles as JSON.
    Steps(StepsArgs),
    /// Sample one slide transition on virtual time, one JSON line per frame.
    Transition(TransitionArgs),
    /// Play the deck in real time with autoplay, logging each change.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct StepsArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TransitionArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Slide the change starts from.
    #[arg(long)]
    from: usize,

    /// Slide the change goes to.
    #[arg(long)]
    to: usize,

    /// Sampling rate in frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Autoplay interval in milliseconds.
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    /// Wrap to the first slide instead of stopping at the end.
    #[arg(long = "loop")]
    loop_playback: bool,

    /// Stop after this many navigation steps.
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Steps(args) => cmd_steps(args),
        Command::Transition(args) => cmd_transition(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn read_deck_json(path: &Path) -> anyhow::Result<deckplay::Deck> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read deck '{}'", path.display()))?;
    let deck = deckplay::Deck::from_json(&s)
        .with_context(|| format!("load deck '{}'", path.display()))?;
    Ok(deck)
}

fn cmd_steps(args: StepsArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    let steps = deckplay::export_steps(&deck);

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            serde_json::to_writer_pretty(BufWriter::new(f), &steps)
                .with_context(|| format!("write steps '{}'", out.display()))?;
            eprintln!("wrote {} steps to {}", steps.len(), out.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &steps).context("write steps")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_transition(args: TransitionArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0");
    }
    let deck = read_deck_json(&args.in_path)?;
    let frames = deckplay::sample_transition(&deck, args.from, args.to, 1000.0 / args.fps)?;

    let stdout = std::io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut w, frame).context("write frame")?;
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    if deck.slides().is_empty() {
        anyhow::bail!("deck '{}' has no slides", args.in_path.display());
    }
    let opts = deckplay::SessionOpts::default()
        .with_autoplay(args.interval_ms)
        .with_loop(args.loop_playback);
    let mut session =
        deckplay::PlaybackSession::new(deck, opts, deckplay::RealtimeScheduler::new())?;

    let mut steps = 0usize;
    loop {
        let Some(events) = session.pump(f64::INFINITY) else {
            break;
        };
        for event in events {
            match event {
                deckplay::SessionEvent::Navigated { to, .. } => {
                    steps += 1;
                    tracing::info!(slide = to.slide, fragment = to.fragment, "step");
                }
                deckplay::SessionEvent::Ended => {
                    tracing::info!(steps, "presentation ended");
                    return Ok(());
                }
                deckplay::SessionEvent::Transition(ev) => tracing::debug!(?ev, "transition"),
                _ => {}
            }
        }
        if args.max_steps.is_some_and(|max| steps >= max) {
            tracing::info!(steps, "step limit reached");
            break;
        }
    }
    Ok(())
}
