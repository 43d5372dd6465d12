use crate::Chips;
use crate::Error;

/// exact rational, always stored in lowest terms with a positive denominator.
/// used for payout odds (35:1) and for the payouts they produce.
/// odds built through [`Ratio::new`] are never negative; arithmetic with a
/// negative amount carries the sign on the numerator.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Ratio(Chips, Chips);

impl Ratio {
    pub fn new(numer: Chips, denom: Chips) -> Result<Self, Error> {
        if denom <= 0 {
            return Err(Error::object(format!("odds {}:{} have no positive denominator", numer, denom)));
        }
        if numer < 0 {
            return Err(Error::object(format!("odds {}:{} are negative", numer, denom)));
        }
        Ok(Self::reduced(numer, denom))
    }
    pub fn numer(&self) -> Chips {
        self.0
    }
    pub fn denom(&self) -> Chips {
        self.1
    }
    /// integer part, rounding toward negative infinity
    pub fn whole(&self) -> Chips {
        self.0.div_euclid(self.1)
    }

    /// callers guarantee b != 0
    fn reduced(a: Chips, b: Chips) -> Self {
        let (a, b) = match b < 0 {
            true => (a.saturating_neg(), b.saturating_neg()),
            false => (a, b),
        };
        match Self::gcd(a.unsigned_abs(), b.unsigned_abs()) {
            0 => Self(0, 1),
            g => Self(a / g as Chips, b / g as Chips),
        }
    }
    fn gcd(a: u64, b: u64) -> u64 {
        let (mut a, mut b) = (a, b);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }
}

/// n:1
impl From<u32> for Ratio {
    fn from(n: u32) -> Self {
        Self(Chips::from(n), 1)
    }
}

/// scaling by a wager. saturates rather than wrapping.
impl std::ops::Mul<Chips> for Ratio {
    type Output = Ratio;
    fn mul(self, amount: Chips) -> Self::Output {
        Self::reduced(self.0.saturating_mul(amount), self.1)
    }
}

impl std::ops::Add<Chips> for Ratio {
    type Output = Ratio;
    fn add(self, amount: Chips) -> Self::Output {
        Self::reduced(self.0.saturating_add(amount.saturating_mul(self.1)), self.1)
    }
}

impl std::ops::Add<Ratio> for Ratio {
    type Output = Ratio;
    fn add(self, other: Ratio) -> Self::Output {
        let numer = self.0.saturating_mul(other.1).saturating_add(other.0.saturating_mul(self.1));
        let denom = self.1.saturating_mul(other.1);
        Self::reduced(numer, denom)
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let lhs = i128::from(self.0) * i128::from(other.1);
        let rhs = i128::from(other.0) * i128::from(self.1);
        lhs.cmp(&rhs)
    }
}
impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.0, self.1)
    }
}
