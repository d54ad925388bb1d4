//! Parse and evaluate tabletop dice notation.
//!
//! An input is one or more rolls separated by `;`. Each roll is a dice
//! expression like `3d6+2`, optionally prefixed with a repeat multiplier
//! (`4x3d8-5`) or chained into a single summed roll with `&`
//! (`12d10+5 & 4d6+2`).
//!
//! ```
//! use dice_notation::{parse, Roll};
//!
//! let rolls = parse("4x3d8-5").unwrap();
//! assert_eq!(rolls.len(), 4);
//!
//! let first = rolls.first();
//! assert_eq!(first.to_string(), "3d8-5");
//!
//! let result = first.eval(&mut rand::thread_rng());
//! assert_eq!(result.rolls().len(), 3);
//! assert!(result.rolls().iter().all(|&die| (1..=8).contains(&die)));
//! assert_eq!(result.bonus(), -5);
//! ```

mod cursor;
mod eval;
mod expr;
mod parse;

pub use eval::RollResult;
pub use expr::{CompositeRoll, Roll, RollExpr, SimpleRoll};
pub use parse::{parse, ParseError};

/// The type used for dice counts and the faces of a die.
pub type UInt = u32;
/// The type used for bonuses and roll totals.
pub type Int = i64;
/// The number of sides of a die; zero-sided dice are rejected at parse time.
pub type NonZeroUInt = std::num::NonZeroU32;

pub(crate) type DefaultRng = rand::rngs::ThreadRng;

/// Parses `input` and evaluates every resulting roll with the thread-local
/// RNG.
///
/// ```
/// let results = dice_notation::roll("2d6+1 ; d20").unwrap();
/// assert_eq!(results.len(), 2);
/// assert!(dice_notation::roll("not dice").is_err());
/// ```
pub fn roll(input: &str) -> Result<vec1::Vec1<RollResult>, ParseError> {
    let rolls = parse(input)?;
    let mut rng: DefaultRng = rand::thread_rng();
    Ok(rolls.mapped(|roll| roll.eval(&mut rng)))
}
