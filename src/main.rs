//! Console blackjack.

use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{debug, error};

use hole21::{
    ConsoleTable, Game, GameOptions, Presenter, Replay, RoundError, RoundSummary, SeededSource,
};

#[derive(Parser)]
#[command(name = "hole21", about = "Play blackjack against the house")]
struct Args {
    /// Seed for card draws (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of decks in the draw pile
    #[arg(long, default_value_t = 1)]
    decks: u8,

    /// Score at which the house stops drawing
    #[arg(long, default_value_t = 17)]
    stand_on: u32,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_dealer_stands_on(args.stand_on);
    debug!("seed {seed}, {options:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut table = ConsoleTable::new(stdin.lock(), stdout.lock());

    match run(&mut table, options, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RoundError::Io(err)) if err.kind() == ErrorKind::UnexpectedEof => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run<R, W>(
    table: &mut ConsoleTable<R, W>,
    options: GameOptions,
    seed: u64,
) -> Result<(), RoundError>
where
    R: io::BufRead,
    W: io::Write,
{
    for round in 0_u64.. {
        let source = SeededSource::new(seed.wrapping_add(round));
        play_round(&mut *table, options, source)?;

        match table.prompt_replay()? {
            Replay::Again => {}
            Replay::Quit | Replay::Invalid => break,
        }
    }

    Ok(())
}

fn play_round<P: Presenter>(
    presenter: P,
    options: GameOptions,
    source: SeededSource,
) -> Result<RoundSummary, RoundError> {
    let mut game = Game::new(presenter, options, source);
    game.start()?;
    game.play()?;
    game.end()
}
