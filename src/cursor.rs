use crate::{Int, UInt};

/// Scanning window over the unconsumed remainder of the input.
///
/// Leading whitespace is never significant and is skipped before every token
/// test. The cursor is `Copy`, so a checkpoint is an independent snapshot:
/// restoring one cannot be affected by anything consumed in the meantime.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Whether any non-whitespace input remains unconsumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.rest.is_empty()
    }

    /// Greedily consumes a maximal run of decimal digits. Returns `None` and
    /// leaves the cursor unchanged if no digits are present (or the run does
    /// not fit in a [`UInt`]).
    pub fn read_unsigned(&mut self) -> Option<UInt> {
        self.skip_whitespace();
        let digits = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if digits == 0 {
            return None;
        }
        let (run, rest) = self.rest.split_at(digits);
        let value = run.parse().ok()?;
        self.rest = rest;
        Some(value)
    }

    /// Reads an integer with an optional single `+` or `-` prefix. A consumed
    /// sign is never left dangling: if no digits follow, the cursor is
    /// restored and `None` is returned.
    pub fn read_signed(&mut self) -> Option<Int> {
        let checkpoint = self.checkpoint();
        let negative = if self.try_consume("-") {
            true
        } else {
            self.try_consume("+");
            false
        };
        match self.read_unsigned() {
            Some(value) if negative => Some(-Int::from(value)),
            Some(value) => Some(Int::from(value)),
            None => {
                self.restore(checkpoint);
                None
            }
        }
    }

    /// Consumes `token` if the remaining input starts with it.
    pub fn try_consume(&mut self, token: &str) -> bool {
        self.skip_whitespace();
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    pub fn checkpoint(&self) -> Self {
        *self
    }

    pub fn restore(&mut self, checkpoint: Self) {
        *self = checkpoint;
    }
}
