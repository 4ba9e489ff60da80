// rule.rs - Wolfram rule numbers and single-cell evaluation

use std::fmt;
use std::str::FromStr;

use crate::Cell;
use crate::error::Error;

/// Next state of one cell.
///
/// The neighbourhood `(left, center, right)` reads as a 3-bit number and picks
/// that bit out of `rule`, e.g. `1,1,0` is code 6 so the answer is bit 6.
#[inline]
pub fn next_bit(left: Cell, center: Cell, right: Cell, rule: u8) -> Cell {
    debug_assert!(left <= 1 && center <= 1 && right <= 1);
    (rule >> (left * 4 + center * 2 + right)) & 1
}

/// An elementary automaton rule, 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(u8);

impl Rule {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn apply(self, left: Cell, center: Cell, right: Cell) -> Cell {
        next_bit(left, center, right, self.0)
    }

    /// Step up by `amount`; anything past 255 lands on 0 rather than wrapping.
    pub fn raised(self, amount: u8) -> Self {
        let next = u16::from(self.0) + u16::from(amount);
        if next > 255 { Self(0) } else { Self(next as u8) }
    }

    /// Step down by `amount`; anything below 0 lands on 255.
    pub fn lowered(self, amount: u8) -> Self {
        match self.0.checked_sub(amount) {
            Some(next) => Self(next),
            None => Self(255),
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self(crate::config::DEFAULT_RULE)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plain decimal digits only: no sign, no whitespace.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::NotANumber(s.to_owned()));
        }
        s.parse::<u8>()
            .map(Self)
            .map_err(|_| Error::OutOfRange(s.to_owned()))
    }
}
