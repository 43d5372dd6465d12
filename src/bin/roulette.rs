//! Roulette Simulator Binary
//!
//! Gathers sessions for one betting strategy and reports how long they
//! lasted and how high the stake peaked.
//!
//! Options: --config, --player, --min, --max, --rounds, --stake, --samples, --seed, --interactive

use anyhow::Context;
use casino::Chips;
use casino::casino::OutcomeFactory;
use casino::casino::Simulator;
use casino::config::Configuration;
use casino::roulette::PlayerClass;
use casino::roulette::RouletteSimulator;
use casino::summary::Summary;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;

#[derive(Parser)]
#[command(author, version, about = "Simulate roulette betting strategies", long_about = None)]
struct Args {
    #[arg(long, help = "JSON configuration file")]
    config: Option<std::path::PathBuf>,
    #[arg(long, help = "Betting strategy (Passenger57, Martingale)")]
    player: Option<PlayerClass>,
    #[arg(long, help = "Table minimum per bet")]
    min: Option<Chips>,
    #[arg(long, help = "Table maximum per bet and in total")]
    max: Option<Chips>,
    #[arg(long, help = "Rounds per session")]
    rounds: Option<usize>,
    #[arg(long, help = "Starting stake per session")]
    stake: Option<Chips>,
    #[arg(long, help = "Sessions to gather")]
    samples: Option<usize>,
    #[arg(long, help = "Seed for a reproducible run")]
    seed: Option<u64>,
    #[arg(short, long, help = "Prompt for player and table limits")]
    interactive: bool,
}

impl Args {
    fn configuration(&self) -> anyhow::Result<Configuration> {
        let mut config = match self.config {
            Some(ref path) => Configuration::load(path)?,
            None => Configuration::default(),
        };
        if let Some(player) = self.player {
            config.player_class = player;
        }
        if let Some(min) = self.min {
            config.game.table_limits.min = min;
        }
        if let Some(max) = self.max {
            config.game.table_limits.max = max;
        }
        if let Some(rounds) = self.rounds {
            config.session.init_duration = rounds;
        }
        if let Some(stake) = self.stake {
            config.session.init_stake = stake;
        }
        if let Some(samples) = self.samples {
            config.session.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.session.seed = Some(seed);
        }
        if self.interactive {
            prompt(&mut config)?;
        }
        config.validate()?;
        Ok(config)
    }
}

fn prompt(config: &mut Configuration) -> anyhow::Result<()> {
    if !Confirm::new()
        .with_prompt("Use custom configurations?")
        .default(false)
        .interact()?
    {
        return Ok(());
    }
    let classes = PlayerClass::ALL;
    let selection = Select::new()
        .with_prompt("Player")
        .items(&classes)
        .default(classes.iter().position(|c| *c == config.player_class).unwrap_or(0))
        .interact()?;
    config.player_class = classes[selection];
    let min = Input::<Chips>::new()
        .with_prompt("Min table limit")
        .default(config.game.table_limits.min)
        .validate_with(|i: &Chips| -> Result<(), &str> {
            match *i >= 1 {
                true => Ok(()),
                false => Err("Minimum must be at least 1"),
            }
        })
        .interact_text()?;
    let max = Input::<Chips>::new()
        .with_prompt("Max table limit")
        .default(config.game.table_limits.max.max(min))
        .validate_with(move |i: &Chips| -> Result<(), &str> {
            match *i >= min {
                true => Ok(()),
                false => Err("Maximum below minimum"),
            }
        })
        .interact_text()?;
    config.game.table_limits.min = min;
    config.game.table_limits.max = max;
    Ok(())
}

fn report(simulator: &RouletteSimulator) {
    println!();
    println!("{}", simulator.class().to_string().bold());
    println!("{}", "Durations".cyan());
    match Summary::from_counts(simulator.durations()) {
        Some(summary) => println!("{}", summary),
        None => println!("    no sessions"),
    }
    println!();
    println!("{}", "Maxima".cyan());
    match Summary::from_series(simulator.maxima()) {
        Some(summary) => println!("{}", summary),
        None => println!("    no sessions"),
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    casino::log()?;
    let config = Args::parse().configuration()?;
    log::info!("starting {} simulation", config.player_class);
    let ref mut factory = OutcomeFactory::new();
    let mut simulator = RouletteSimulator::new(&config, factory).context("build simulator")?;
    simulator.gather().context("gather sessions")?;
    report(&simulator);
    Ok(())
}
