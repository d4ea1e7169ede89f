use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_hands::demo::{self, DemoConfig};
use poker_hands::tui::{app::AppState, controller};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about = "Deal and classify five-card poker hands.")]
struct Cli {
    /// Seed for reproducible shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Shuffle rounds after the first, unshuffled hand.
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    rounds: u8,
    /// Hands dealt per shuffle round.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    hands: u8,
    /// Open the interactive deal table instead of the scripted demo.
    #[clap(long, short)]
    interactive: bool,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_interactive(seed: Option<u64>) -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-hands deal table requires a real terminal (TTY). Version: {}",
            poker_hands::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(seed);

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.interactive {
        // No logger here: output would land on the alternate screen.
        run_interactive(cli.seed)?;
        return Ok(());
    }

    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = DemoConfig { rounds: cli.rounds as usize, hands_per_round: cli.hands as usize };
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    let mut out = io::stdout().lock();
    demo::run(&mut out, &mut rng, &config)?;
    Ok(())
}
