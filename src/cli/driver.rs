use super::*;
use crate::round::Report;
use crate::round::Round;
use crate::round::Settings;
use dialoguer::Confirm;
use dialoguer::Input;

/// Console front end: settles the round size, runs rounds, prints each
/// report and offers a replay until declined.
pub struct Driver {
    args: Args,
}

impl Driver {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        log::info!("starting {}", settings);
        let mut round = Round::new(settings);
        loop {
            let report = round.play()?;
            self.print(&report)?;
            if self.args.once || !self.again()? {
                break;
            }
            round.reset()?;
        }
        Ok(())
    }

    fn settings(&self) -> anyhow::Result<Settings> {
        let players = match self.args.players {
            Some(n) => n,
            None => Self::ask("Enter the number of players")?,
        };
        Settings::check_players(players)?;
        let games = match self.args.games {
            Some(n) => n,
            None => Self::ask("Enter the number of games")?,
        };
        Ok(Settings::new(players, games)?.with_seed(self.args.seed))
    }

    fn ask(prompt: &str) -> anyhow::Result<i64> {
        Ok(Input::<i64>::new().with_prompt(prompt).interact_text()?)
    }

    fn again(&self) -> anyhow::Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Do you want to play again?")
            .default(false)
            .interact()?)
    }

    fn print(&self, report: &Report) -> anyhow::Result<()> {
        match self.args.json {
            true => println!("{}", serde_json::to_string_pretty(report)?),
            false => println!("{}", report),
        }
        Ok(())
    }
}
