use super::wheel::Wheel;
use crate::DOUBLE_ZERO;
use crate::Error;
use crate::Number;
use crate::casino::Outcome;
use crate::casino::OutcomeFactory;
use crate::casino::Ratio;
use std::sync::Arc;

/// Red pockets. Black is every other number in 1..=36.
pub const RED: [Number; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Populates a wheel's bins with every standard roulette bet.
///
/// Each generator is independent and only ever adds outcomes, so the order
/// they run in does not affect the result.
pub struct BinBuilder<'a> {
    factory: &'a mut OutcomeFactory,
}

impl<'a> BinBuilder<'a> {
    pub fn new(factory: &'a mut OutcomeFactory) -> Self {
        Self { factory }
    }

    pub fn build_bins(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        self.generate_zero_bets(wheel)?;
        self.generate_straight_bets(wheel)?;
        self.generate_left_right_split_bets(wheel)?;
        self.generate_up_down_split_bets(wheel)?;
        self.generate_street_bets(wheel)?;
        self.generate_corner_bets(wheel)?;
        self.generate_line_bets(wheel)?;
        self.generate_dozen_bets(wheel)?;
        self.generate_column_bets(wheel)?;
        self.generate_even_money_bets(wheel)?;
        log::debug!("built wheel with {} outcomes", wheel.outcomes().len());
        Ok(())
    }

    fn make(&mut self, name: &str, odds: u32) -> Arc<Outcome> {
        self.factory.make(name, Ratio::from(odds))
    }
    fn attach(wheel: &mut Wheel, outcome: &Arc<Outcome>, numbers: impl IntoIterator<Item = Number>) -> Result<(), Error> {
        numbers
            .into_iter()
            .try_for_each(|n| wheel.add_outcome(n, outcome.clone()))
    }

    /// five-number basket
    fn generate_zero_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        let basket = self.make("00-0-1-2-3", 6);
        Self::attach(wheel, &basket, [DOUBLE_ZERO, 0, 1, 2, 3])
    }
    fn generate_straight_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for n in 0..=36 {
            let straight = self.make(&n.to_string(), 35);
            Self::attach(wheel, &straight, [n])?;
        }
        let straight = self.make("00", 35);
        Self::attach(wheel, &straight, [DOUBLE_ZERO])
    }
    /// horizontally adjacent pairs within a row
    fn generate_left_right_split_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for c in [1, 2] {
            for r in 0..12 {
                let n = 3 * r + c;
                let split = self.make(&format!("Split {}-{}", n, n + 1), 17);
                Self::attach(wheel, &split, [n, n + 1])?;
            }
        }
        Ok(())
    }
    /// vertically adjacent pairs across rows
    fn generate_up_down_split_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for n in 1..=33 {
            let split = self.make(&format!("Split {}-{}", n, n + 3), 17);
            Self::attach(wheel, &split, [n, n + 3])?;
        }
        Ok(())
    }
    fn generate_street_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for r in 0..12 {
            let n = 3 * r + 1;
            let street = self.make(&format!("Street {}-{}-{}", n, n + 1, n + 2), 11);
            Self::attach(wheel, &street, n..n + 3)?;
        }
        Ok(())
    }
    fn generate_corner_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for col in [1, 2] {
            for r in 0..11 {
                let n = 3 * r + col;
                let name = format!("Corner {}-{}-{}-{}", n, n + 1, n + 3, n + 4);
                let corner = self.make(&name, 8);
                Self::attach(wheel, &corner, [n, n + 1, n + 3, n + 4])?;
            }
        }
        Ok(())
    }
    /// two adjacent streets
    fn generate_line_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for r in 0..11 {
            let n = 3 * r + 1;
            let name = format!(
                "Line {}",
                (n..n + 6).map(|i| i.to_string()).collect::<Vec<_>>().join("-")
            );
            let line = self.make(&name, 5);
            Self::attach(wheel, &line, n..n + 6)?;
        }
        Ok(())
    }
    fn generate_dozen_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for d in 0..3 {
            let dozen = self.make(&format!("Dozen {}", d + 1), 2);
            Self::attach(wheel, &dozen, (0..12).map(|n| 12 * d + n + 1))?;
        }
        Ok(())
    }
    fn generate_column_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        for c in 0..3 {
            let column = self.make(&format!("Column {}", c + 1), 2);
            Self::attach(wheel, &column, (0..12).map(|r| 3 * r + c + 1))?;
        }
        Ok(())
    }
    /// red/black, even/odd, high/low. zeros get none of these.
    fn generate_even_money_bets(&mut self, wheel: &mut Wheel) -> Result<(), Error> {
        let red = self.make("Red", 1);
        let black = self.make("Black", 1);
        let even = self.make("Even", 1);
        let odd = self.make("Odd", 1);
        let high = self.make("High", 1);
        let low = self.make("Low", 1);
        for n in 1..=36 {
            wheel.add_outcome(n, if n < 19 { low.clone() } else { high.clone() })?;
            wheel.add_outcome(n, if n % 2 == 1 { odd.clone() } else { even.clone() })?;
            wheel.add_outcome(n, if RED.contains(&n) { red.clone() } else { black.clone() })?;
        }
        Ok(())
    }
}
