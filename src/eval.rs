use crate::{Int, UInt};
use std::cmp::Ordering;
use std::fmt;

/// The outcome of evaluating a roll expression: the individual die values in
/// draw order, the flat bonus, and the total.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollResult {
    bonus: Int,
    rolls: Vec<UInt>,
}

impl RollResult {
    pub(crate) fn new(bonus: Int) -> Self {
        Self {
            bonus,
            rolls: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, value: UInt) {
        self.rolls.push(value);
    }

    /// Appends `other`'s dice after this result's and sums the bonuses.
    pub(crate) fn merge(mut self, other: RollResult) -> Self {
        self.rolls.extend(other.rolls);
        self.bonus += other.bonus;
        self
    }

    /// The individual die outcomes, in the order they were drawn.
    pub fn rolls(&self) -> &[UInt] {
        &self.rolls
    }

    pub fn bonus(&self) -> Int {
        self.bonus
    }

    pub fn total(&self) -> Int {
        self.rolls.iter().copied().map(Int::from).sum::<Int>() + self.bonus
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total())?;
        if !self.rolls.is_empty() {
            f.write_str(" (")?;
            let mut sep = "";
            for die in &self.rolls {
                write!(f, "{}{}", sep, die)?;
                sep = ", ";
            }
            f.write_str(")")?;
        }
        match self.bonus.cmp(&0) {
            Ordering::Greater => write!(f, " +{}", self.bonus),
            Ordering::Less => write!(f, " {}", self.bonus),
            Ordering::Equal => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(bonus: Int, rolls: &[UInt]) -> RollResult {
        let mut ret = RollResult::new(bonus);
        for &value in rolls {
            ret.record(value);
        }
        ret
    }

    #[test]
    fn total_is_sum_of_rolls_plus_bonus() {
        assert_eq!(result(3, &[2, 5, 1]).total(), 11);
        assert_eq!(result(-15, &[4, 4]).total(), -7);
        assert_eq!(result(4, &[]).total(), 4);
    }

    #[test]
    fn merge_concatenates_left_then_right() {
        let merged = result(5, &[9, 2]).merge(result(2, &[6]));
        assert_eq!(merged.rolls(), &[9, 2, 6]);
        assert_eq!(merged.bonus(), 7);
        assert_eq!(merged.total(), 24);
    }

    #[test]
    fn display_breaks_down_the_result() {
        assert_eq!(result(2, &[3, 4, 5]).to_string(), "14 (3, 4, 5) +2");
        assert_eq!(result(-5, &[3, 8]).to_string(), "6 (3, 8) -5");
        assert_eq!(result(0, &[1]).to_string(), "1 (1)");
        assert_eq!(result(0, &[]).to_string(), "0");
    }
}
