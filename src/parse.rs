use crate::cursor::Cursor;
use crate::expr::{CompositeRoll, RollExpr, SimpleRoll};
use crate::NonZeroUInt;
use vec1::Vec1;

/// The input was not valid dice notation.
///
/// The grammar does not track which sub-rule failed, so this carries nothing
/// but the rejected input.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("cannot parse {input:?} as dice notation")]
pub struct ParseError {
    input: String,
}

impl ParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses dice notation into its roll expression roots.
///
/// The grammar, case-insensitive and whitespace-tolerant:
///
/// ```text
/// sequence   := compound (';' compound)*
/// compound   := [ multiplier 'x' ] diceExpr
/// diceExpr   := diceBase ( '&' diceExpr )*
/// diceBase   := [ unsignedInt ] 'd' unsignedInt [ signedInt ]
/// multiplier := unsignedInt
/// ```
///
/// A multiplier replicates its expression, so `4x3d8-5` yields four roots.
/// Any unrecognized trailing text fails the whole parse; there are no
/// partial results.
pub fn parse(input: &str) -> Result<Vec1<RollExpr>, ParseError> {
    let lowered = input.to_lowercase();
    let mut cursor = Cursor::new(&lowered);
    parse_sequence(&mut cursor)
        .filter(|_| cursor.is_exhausted())
        .and_then(|rolls| Vec1::try_from_vec(rolls).ok())
        .ok_or_else(|| ParseError::new(input))
}

fn parse_sequence(cursor: &mut Cursor) -> Option<Vec<RollExpr>> {
    let mut rolls = parse_compound(cursor)?;
    while cursor.try_consume(";") {
        rolls.extend(parse_compound(cursor)?);
    }
    Some(rolls)
}

fn parse_compound(cursor: &mut Cursor) -> Option<Vec<RollExpr>> {
    // A leading integer is only a repeat count when `x` follows; otherwise it
    // must be handed back so `diceBase` can read it as the dice count.
    let checkpoint = cursor.checkpoint();
    let repeat = match cursor.read_unsigned() {
        Some(count) => {
            if cursor.try_consume("x") {
                count
            } else {
                cursor.restore(checkpoint);
                1
            }
        }
        None => 1,
    };
    if repeat == 0 {
        return None;
    }
    let expr = parse_dice_expr(cursor)?;
    Some(vec![expr; repeat as usize])
}

fn parse_dice_expr(cursor: &mut Cursor) -> Option<RollExpr> {
    let mut expr = parse_dice_base(cursor)?;
    while cursor.try_consume("&") {
        // The recursive parse consumes the rest of the chain, so `&` nests
        // to the right. A dangling `&` fails the whole expression.
        let rest = parse_dice_expr(cursor)?;
        expr = CompositeRoll::new(expr, rest).into();
    }
    Some(expr)
}

fn parse_dice_base(cursor: &mut Cursor) -> Option<RollExpr> {
    let num = cursor.read_unsigned().unwrap_or(1);
    if !cursor.try_consume("d") {
        return None;
    }
    let sides = NonZeroUInt::new(cursor.read_unsigned()?)?;
    let bonus = cursor.read_signed().unwrap_or(0);
    Some(SimpleRoll::new(num, sides, bonus).into())
}
