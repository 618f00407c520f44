//! sumtap terminal front-end
//!
//! Plays rounds in the terminal, either interactively or with a CPU player.
//! Logs go to `logs/` so the board stays readable.

use clap::Parser;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sumtap::game::*;
use sumtap::gameroom::*;
use sumtap::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    Human,
    Fish,
    Solver,
}

#[derive(Debug, Parser)]
#[command(version, about = "Tap numbers that add up to the target before time runs out")]
struct Args {
    /// how many numbers to deal
    #[arg(short = 'n', long, default_value_t = DEFAULT_CANDIDATES)]
    count: usize,
    /// countdown length in seconds
    #[arg(short, long, default_value_t = DEFAULT_SECONDS)]
    seconds: Seconds,
    /// seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,
    /// who taps the numbers
    #[arg(short, long, value_enum, default_value_t = Seat::Human)]
    player: Seat,
    /// stop after this many rounds
    #[arg(short, long)]
    rounds: Option<usize>,
    /// print every event as a JSON line (CPU players only)
    #[arg(long)]
    json: bool,
}

impl Args {
    /// independent stream per consumer, reproducible under --seed
    fn rng(&self, stream: u64) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(stream)),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(
        !(args.json && args.player == Seat::Human),
        "--json needs a CPU player"
    );
    log()?;
    kys();
    let config = Config::new(args.count, args.seconds);
    let mut room = Room::new(config, TimerConfig::default(), args.rng(0))?;
    if let Some(rounds) = args.rounds {
        room = room.limit(rounds);
    }
    match args.player {
        Seat::Human => room.sit(Human),
        Seat::Fish => room.sit(Fish::new(args.rng(1))),
        Seat::Solver => room.sit(Solver::default()),
    }
    if args.json {
        room.sit(Echo);
    }
    let results = room.run().await?;
    let won = results.iter().filter(|s| **s == Status::Won).count();
    println!("won {} of {} rounds", won, results.len());
    Ok(())
}
