use blackjack_rs::session::{DEFAULT_BANKROLL, DEFAULT_BET, MAX_BANKROLL};
use blackjack_rs::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// Play blackjack against an automated dealer in the terminal.
#[derive(Parser, Debug)]
#[command(name = "blackjack-rs", version, about)]
struct Cli {
    /// Starting bankroll in dollars
    #[arg(
        long,
        default_value_t = DEFAULT_BANKROLL,
        value_parser = clap::value_parser!(u64).range(1..=MAX_BANKROLL)
    )]
    bankroll: u64,

    /// Default bet for each round (clamped to the bankroll)
    #[arg(long, default_value_t = DEFAULT_BET, value_parser = clap::value_parser!(u64).range(1..))]
    bet: u64,

    /// Seed every shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
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

fn main() -> io::Result<()> {
    // stderr shares the terminal with the TUI; run with RUST_LOG=info 2>blackjack.log
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if !io::stdout().is_terminal() {
        println!(
            "blackjack-rs needs a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            blackjack_rs::VERSION
        );
        return Ok(());
    }
    log::info!("starting session: bankroll {} bet {} seed {:?}", cli.bankroll, cli.bet, cli.seed);

    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(cli.bankroll, cli.bet, cli.seed);
    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    let stats = app.session.stats();
    println!(
        "Thanks for playing! Final bankroll: ${} ({:+} over {} rounds)",
        app.session.bankroll(),
        stats.net,
        stats.rounds
    );
    res
}
