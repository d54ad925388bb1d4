use crate::eval::RollResult;
use crate::parse::ParseError;
use crate::{Int, NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    RngCore,
};
use std::cmp::Ordering;
use std::fmt;

/// The evaluate capability shared by every roll expression variant.
#[enum_dispatch::enum_dispatch]
pub trait Roll {
    /// Evaluates the expression, drawing every die from `rng`.
    ///
    /// Each call performs fresh draws; evaluating the same expression twice
    /// yields two independent results.
    fn eval(&self, rng: &mut dyn RngCore) -> RollResult;
}

/// A parsed roll expression.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Roll)]
pub enum RollExpr {
    Simple(SimpleRoll),
    Composite(CompositeRoll),
}

impl fmt::Display for RollExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(x) => fmt::Display::fmt(x, f),
            Self::Composite(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl std::str::FromStr for RollExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rolls = crate::parse(s)?.into_vec();
        if rolls.len() == 1 {
            Ok(rolls.remove(0))
        } else {
            // Multipliers and `;` produce several roots.
            Err(ParseError::new(s))
        }
    }
}

/// Roll `num` dice with `sides` sides each, then add `bonus`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SimpleRoll {
    pub num: UInt,
    pub sides: NonZeroUInt,
    pub bonus: Int,
}

impl SimpleRoll {
    pub const fn new(num: UInt, sides: NonZeroUInt, bonus: Int) -> Self {
        Self { num, sides, bonus }
    }
}

impl Roll for SimpleRoll {
    fn eval(&self, rng: &mut dyn RngCore) -> RollResult {
        let mut result = RollResult::new(self.bonus);
        let die = Uniform::new_inclusive(1, self.sides.get());
        for _ in 0..self.num {
            result.record(die.sample(rng));
        }
        result
    }
}

impl fmt::Display for SimpleRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)?;
        match self.bonus.cmp(&0) {
            Ordering::Greater => write!(f, "+{}", self.bonus),
            Ordering::Less => write!(f, "{}", self.bonus),
            Ordering::Equal => Ok(()),
        }
    }
}

/// The sum of two independently evaluated rolls, produced by the `&`
/// operator. The sides evaluate in order, so the combined breakdown lists
/// the left side's dice before the right side's.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CompositeRoll {
    pub left: Box<RollExpr>,
    pub right: Box<RollExpr>,
}

impl CompositeRoll {
    pub fn new(left: impl Into<RollExpr>, right: impl Into<RollExpr>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl Roll for CompositeRoll {
    fn eval(&self, rng: &mut dyn RngCore) -> RollResult {
        let left = self.left.eval(rng);
        let right = self.right.eval(rng);
        left.merge(right)
    }
}

impl fmt::Display for CompositeRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn simple(num: UInt, sides: UInt, bonus: Int) -> SimpleRoll {
        SimpleRoll::new(num, NonZeroUInt::new(sides).unwrap(), bonus)
    }

    #[test]
    fn display_simple() {
        assert_eq!(simple(1, 6, 0).to_string(), "1d6");
        assert_eq!(simple(4, 6, 3).to_string(), "4d6+3");
        assert_eq!(simple(3, 8, -5).to_string(), "3d8-5");
    }

    #[test]
    fn display_composite() {
        let expr = CompositeRoll::new(simple(12, 10, 5), simple(4, 6, 2));
        assert_eq!(expr.to_string(), "12d10+5 & 4d6+2");
    }

    #[test]
    fn from_str_requires_exactly_one_root() {
        assert_eq!("3d6+2".parse::<RollExpr>().unwrap(), simple(3, 6, 2).into());
        assert!("d6 ; d8".parse::<RollExpr>().is_err());
        assert!("2x3d6".parse::<RollExpr>().is_err());
        assert!("hi".parse::<RollExpr>().is_err());
    }

    #[test]
    fn simple_roll_bookkeeping() {
        let expr = simple(4, 6, 3);
        let mut rng = StdRng::seed_from_u64(0xD1CE);
        for _ in 0..10_000 {
            let result = expr.eval(&mut rng);
            assert_eq!(result.rolls().len(), 4);
            assert!(result.rolls().iter().all(|&die| (1..=6).contains(&die)));
            let sum: Int = result.rolls().iter().copied().map(Int::from).sum();
            assert_eq!(result.total(), sum + 3);
        }
    }

    #[test]
    fn zero_dice_total_is_the_bonus() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = simple(0, 6, 4).eval(&mut rng);
        assert!(result.rolls().is_empty());
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn composite_sums_sides_and_concatenates_breakdowns() {
        let left = simple(2, 10, 5);
        let right = simple(3, 6, 2);
        let expr = CompositeRoll::new(left, right);

        let mut rng = StdRng::seed_from_u64(7);
        let combined = expr.eval(&mut rng);

        // Draws happen left to right, so replaying the seed through the two
        // sides separately must reproduce the combined result exactly.
        let mut rng = StdRng::seed_from_u64(7);
        let l = left.eval(&mut rng);
        let r = right.eval(&mut rng);

        assert_eq!(combined.total(), l.total() + r.total());
        assert_eq!(combined.bonus(), 7);
        assert_eq!(combined.rolls().to_vec(), [l.rolls(), r.rolls()].concat());
    }

    #[test]
    fn repeated_evaluations_are_independent() {
        let rolls = crate::parse("4x3d8-5").unwrap();
        assert_eq!(rolls.len(), 4);

        let mut rng = rand::thread_rng();
        let mut sequences: Vec<Vec<UInt>> = Vec::new();
        for roll in &rolls {
            sequences.push(roll.eval(&mut rng).rolls().to_vec());
        }
        assert!(
            sequences.iter().any(|seq| seq != &sequences[0]),
            "every replica produced {:?}",
            sequences[0]
        );
    }
}
