use super::gambler::Gambler;
use super::gambler::PlayerClass;
use super::game::RouletteGame;
use super::table::RouletteTable;
use super::wheel::Wheel;
use crate::Chips;
use crate::Error;
use crate::casino::Game;
use crate::casino::OutcomeFactory;
use crate::casino::Player;
use crate::casino::Simulator;
use crate::config::Configuration;
use rand::Rng;

/// Plays many independent roulette sessions and records how long each one
/// lasted and how high the stake peaked.
#[derive(Debug, Clone)]
pub struct RouletteSimulator {
    game: RouletteGame,
    class: PlayerClass,
    player: Gambler,
    init_duration: usize,
    init_stake: Chips,
    samples: usize,
    seed: u64,
    durations: Vec<usize>,
    maxima: Vec<Chips>,
}

impl RouletteSimulator {
    pub fn new(config: &Configuration, factory: &mut OutcomeFactory) -> Result<Self, Error> {
        config.validate()?;
        let seed = config.session.seed.unwrap_or_else(|| rand::rng().random());
        let wheel = Wheel::seeded(factory, seed)?;
        let game = RouletteGame::new(&config.game, wheel)?;
        let class = config.player_class;
        let player = class.seat(game.table(), config.session.init_stake, config.session.init_duration)?;
        Ok(Self {
            game,
            class,
            player,
            init_duration: config.session.init_duration,
            init_stake: config.session.init_stake,
            samples: config.session.samples,
            seed,
            durations: Vec::with_capacity(config.session.samples),
            maxima: Vec::with_capacity(config.session.samples),
        })
    }
    pub fn class(&self) -> PlayerClass {
        self.class
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn samples(&self) -> usize {
        self.samples
    }
    pub fn player(&self) -> &Gambler {
        &self.player
    }

    /// replace the current player with a fresh one
    pub fn create_player(&mut self) -> Result<(), Error> {
        self.player = self.fresh(self.game.table())?;
        Ok(())
    }
    fn fresh(&self, table: &RouletteTable) -> Result<Gambler, Error> {
        self.class.seat(table, self.init_stake, self.init_duration)
    }

    /// deterministic per-sample seed, so sample i plays the same spins
    /// whether sessions run in order or in parallel. one splitmix64 step
    /// over a fixed-width counter, stable across platforms and toolchains.
    fn seed_for(&self, sample: usize) -> u64 {
        let mut z = (sample as u64)
            .wrapping_add(1)
            .wrapping_mul(0x9E3779B97F4A7C15)
            .wrapping_add(self.seed);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
    /// a session with no rounds still peaked at the stake it started with
    fn record(&mut self, stakes: &[Chips]) {
        let peak = stakes.iter().copied().max().unwrap_or(self.init_stake);
        log::debug!("session lasted {:>4} rounds, peaked at {:>6}", stakes.len(), peak);
        self.durations.push(stakes.len());
        self.maxima.push(peak);
    }

    #[cfg(not(feature = "parallel"))]
    fn sessions(&mut self) -> Result<Vec<Vec<Chips>>, Error> {
        (0..self.samples)
            .map(|i| {
                let seed = self.seed_for(i);
                self.game.reseed(seed);
                self.session()
            })
            .collect()
    }
    #[cfg(feature = "parallel")]
    fn sessions(&mut self) -> Result<Vec<Vec<Chips>>, Error> {
        use rayon::prelude::*;
        let this = &*self;
        (0..this.samples)
            .into_par_iter()
            .map(|i| {
                let mut game = this.game.clone();
                game.reseed(this.seed_for(i));
                let mut player = this.fresh(game.table())?;
                play(&mut game, &mut player)
            })
            .collect()
    }
}

/// cycle until the player stops, recording the stake after every spin
pub fn play(game: &mut RouletteGame, player: &mut Gambler) -> Result<Vec<Chips>, Error> {
    let mut stakes = Vec::new();
    while player.playing(game.table_mut()) {
        game.cycle(player)?;
        stakes.push(player.stake());
    }
    Ok(stakes)
}

impl Simulator for RouletteSimulator {
    fn session(&mut self) -> Result<Vec<Chips>, Error> {
        let stakes = play(&mut self.game, &mut self.player)?;
        self.create_player()?;
        Ok(stakes)
    }
    fn gather(&mut self) -> Result<(), Error> {
        log::info!("gathering {} {} sessions (seed {})", self.samples, self.class, self.seed);
        for ref stakes in self.sessions()? {
            self.record(stakes);
        }
        log::info!("gathered {} sessions", self.durations.len());
        Ok(())
    }
    fn durations(&self) -> &[usize] {
        &self.durations
    }
    fn maxima(&self) -> &[Chips] {
        &self.maxima
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn config(class: PlayerClass, rounds: usize, samples: usize) -> Configuration {
        let mut config = Configuration::default();
        config.player_class = class;
        config.game.table_limits = Limits::new(5, 500).unwrap();
        config.session.init_duration = rounds;
        config.session.samples = samples;
        config.session.seed = Some(0xCAFE);
        config
    }
    fn simulator(class: PlayerClass, rounds: usize, samples: usize) -> RouletteSimulator {
        RouletteSimulator::new(&config(class, rounds, samples), &mut OutcomeFactory::new()).unwrap()
    }

    #[test]
    fn zero_rounds_play_nothing() {
        let mut sim = simulator(PlayerClass::Martingale, 0, 3);
        assert!(sim.session().unwrap().is_empty());
        sim.gather().unwrap();
        assert!(sim.durations() == [0, 0, 0]);
        assert!(sim.maxima() == [100, 100, 100]);
    }

    #[test]
    fn last_round_bet_is_dropped() {
        let mut sim = simulator(PlayerClass::Passenger57, 1, 4);
        sim.gather().unwrap();
        assert!(sim.durations() == [1, 1, 1, 1]);
        assert!(sim.maxima() == [100, 100, 100, 100]);
    }

    #[test]
    fn gathers_one_entry_per_sample() {
        for class in PlayerClass::ALL {
            let mut sim = simulator(class, 250, 50);
            sim.gather().unwrap();
            assert!(sim.durations().len() == 50);
            assert!(sim.maxima().len() == 50);
            assert!(sim.durations().iter().all(|d| *d <= 250));
        }
    }

    #[test]
    fn session_replaces_player() {
        let mut sim = simulator(PlayerClass::Martingale, 20, 1);
        let stakes = sim.session().unwrap();
        assert!(!stakes.is_empty());
        assert!(stakes.len() <= 20);
        assert!(sim.player().stake() == 100);
        assert!(sim.player().rounds() == 20);
    }

    #[test]
    fn same_seed_same_statistics() {
        let mut a = simulator(PlayerClass::Martingale, 250, 20);
        let mut b = simulator(PlayerClass::Martingale, 250, 20);
        a.gather().unwrap();
        b.gather().unwrap();
        assert!(a.durations() == b.durations());
        assert!(a.maxima() == b.maxima());
    }

    #[test]
    fn gather_replays_each_sample_from_its_own_seed() {
        let mut sim = simulator(PlayerClass::Passenger57, 100, 8);
        let replays = (0..sim.samples())
            .map(|i| {
                let mut game = sim.game.clone();
                game.reseed(sim.seed_for(i));
                let mut player = sim.fresh(game.table()).unwrap();
                play(&mut game, &mut player).unwrap()
            })
            .collect::<Vec<_>>();
        sim.gather().unwrap();
        let durations = replays.iter().map(Vec::len).collect::<Vec<_>>();
        assert!(sim.durations() == durations.as_slice());
        for (peak, stakes) in sim.maxima().iter().zip(replays.iter()) {
            assert!(Some(peak) == stakes.iter().max());
        }
    }

    #[test]
    fn sample_seeds_are_fixed() {
        let mut config = config(PlayerClass::Martingale, 10, 3);
        config.session.seed = Some(0);
        let sim = RouletteSimulator::new(&config, &mut OutcomeFactory::new()).unwrap();
        assert!(sim.seed_for(0) == 0xE220A8397B1DCDAF);
        assert!(sim.seed_for(1) != sim.seed_for(0));
        assert!(sim.seed_for(2) != sim.seed_for(1));
    }

    #[test]
    fn peak_is_highest_recorded_stake() {
        let mut sim = simulator(PlayerClass::Passenger57, 50, 1);
        let stakes = sim.session().unwrap();
        sim.record(&stakes);
        assert!(sim.maxima()[0] == stakes.iter().copied().max().unwrap());
        assert!(sim.durations()[0] == stakes.len());
    }
}
