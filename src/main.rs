use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_n::ai::Difficulty;
use connect_n::config::AppConfig;
use connect_n::game::{GameOutcome, GameState, Player, Rules};
use connect_n::ui::App;

/// Play Connect-N in the terminal.
#[derive(Parser)]
#[command(name = "connect-n", about = "Configurable Connect-N board game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override default number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override default number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override default win length
    #[arg(long)]
    win_length: Option<usize>,

    /// Override AI difficulty (easy|hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Play N AI-vs-AI games headless (hard as Circle, easy as Cross) and
    /// print the tally instead of starting the UI
    #[arg(long, value_name = "N")]
    selfplay: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    config.validate().context("invalid configuration")?;

    if let Some(games) = cli.selfplay {
        return selfplay(&config, games);
    }

    run_ui(config).context("terminal UI failed")
}

fn run_ui(config: AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

/// Headless AI-vs-AI matches: Hard plays Circle, Easy plays Cross.
fn selfplay(config: &AppConfig, games: usize) -> Result<()> {
    let rules = Rules::new(
        config.board.rows,
        config.board.cols,
        config.board.win_length,
    )?;

    let mut circle_wins = 0usize;
    let mut cross_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..games {
        let mut circle = Difficulty::Hard.agent();
        let mut cross = Difficulty::Easy.agent();
        let mut state = GameState::new(rules);

        while !state.is_terminal() {
            let col = match state.current_player() {
                Player::Circle => circle.select_column(&state),
                Player::Cross => cross.select_column(&state),
            }
            .context("agent returned no move on a non-terminal board")?;
            state.apply_move_mut(col)?;
        }

        match state.outcome() {
            Some(GameOutcome::Winner(Player::Circle)) => circle_wins += 1,
            Some(GameOutcome::Winner(Player::Cross)) => cross_wins += 1,
            Some(GameOutcome::Draw) => draws += 1,
            None => unreachable!("terminal state has an outcome"),
        }
    }

    println!(
        "{games} games on {}x{} (connect {}):",
        rules.rows(),
        rules.cols(),
        rules.win_length()
    );
    println!("  Hard (O):  {circle_wins}");
    println!("  Easy (X):  {cross_wins}");
    println!("  Draws:     {draws}");
    Ok(())
}
