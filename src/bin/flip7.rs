use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dialoguer::Input;

use flip_seven::core::config::DEFAULT_TARGET_SCORE;
use flip_seven::round::{EventSink, NullSink};
use flip_seven::session::{GameSession, JsonJournal};
use flip_seven::terminal::{ConsoleSink, TerminalPrompt};

/// Play Flip Seven in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Player names, in seat order. Prompted for when omitted.
    #[arg(short, long, num_args = 1..)]
    players: Vec<String>,

    /// Score that ends the game.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
    target: u32,

    /// Seed for reproducible shuffles.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the JSON game journal.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Do not write a game journal.
    #[arg(long)]
    no_log: bool,
}

fn ask_players() -> anyhow::Result<Vec<String>> {
    let count: usize = Input::new()
        .with_prompt("Number of players")
        .validate_with(|n: &usize| -> Result<(), &str> {
            match *n {
                1..=255 => Ok(()),
                _ => Err("between 1 and 255 players"),
            }
        })
        .interact_text()?;

    (1..=count)
        .map(|seat| {
            Input::<String>::new()
                .with_prompt(format!("Name of player {}", seat))
                .interact_text()
                .map_err(Into::into)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let names = if args.players.is_empty() {
        ask_players()?
    } else {
        args.players
    };

    let mut builder = GameSession::builder().players(names).target_score(args.target);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build().context("invalid game setup")?;
    log::info!("session seed {}", session.seed());

    let mut sink: Box<dyn EventSink> = if args.no_log {
        Box::new((ConsoleSink::new(), NullSink))
    } else {
        let journal = JsonJournal::in_dir(&args.log_dir);
        println!("Journal: {}", journal.path().display());
        Box::new((ConsoleSink::new(), journal))
    };

    let winner = session.play(&mut TerminalPrompt::new(), sink.as_mut())?;

    println!("\nFinal standings:");
    for (rank, standing) in session.standings().iter().enumerate() {
        println!("{}. {} - {}", rank + 1, standing.name, standing.total);
    }
    println!("\nWinner: {}", winner.name);
    Ok(())
}
