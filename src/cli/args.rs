use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Number of player threads (at least 2)", allow_negative_numbers = true)]
    pub players: Option<i64>,
    #[arg(short, long, help = "Number of games in the pool", allow_negative_numbers = true)]
    pub games: Option<i64>,
    #[arg(long, help = "Seed player generators for reproducible moves")]
    pub seed: Option<u64>,
    #[arg(long, help = "Play a single round without offering a replay")]
    pub once: bool,
    #[arg(long, help = "Print each round's report as JSON")]
    pub json: bool,
    #[arg(short, long, help = "Log joins, claims and barrier events", conflicts_with = "quiet")]
    pub verbose: bool,
    #[arg(short, long, help = "Only log warnings and errors")]
    pub quiet: bool,
    #[arg(long, help = "Also write a DEBUG log under logs/")]
    pub log_file: bool,
    #[arg(long, help = "Wait for Enter before exiting")]
    pub pause: bool,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => log::LevelFilter::Debug,
            (_, true) => log::LevelFilter::Warn,
            _ => log::LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts_and_flags() {
        let args = Args::try_parse_from(["randomizer", "-p", "4", "-g", "3", "--once", "--seed", "7"])
            .unwrap();
        assert_eq!((args.players, args.games), (Some(4), Some(3)));
        assert!(args.once);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.level(), log::LevelFilter::Info);
    }

    #[test]
    fn negative_counts_reach_validation() {
        let args = Args::try_parse_from(["randomizer", "--games", "-2"]).unwrap();
        assert_eq!(args.games, Some(-2));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["randomizer", "-v", "-q"]).is_err());
        let args = Args::try_parse_from(["randomizer", "-q"]).unwrap();
        assert_eq!(args.level(), log::LevelFilter::Warn);
    }
}
