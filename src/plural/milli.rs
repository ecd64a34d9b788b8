use std::fmt;

/// A fixed-point number stored as thousandths.
///
/// `Display` prints the shortest exact decimal: `1500` is `1.5`, `2000` is `2`,
/// `1` is `0.001`. No binary floating point is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Milli(i64);

impl Milli {
    pub const ZERO: Milli = Milli(0);

    pub const fn from_thousandths(thousandths: i64) -> Self {
        Milli(thousandths)
    }

    /// The integer value, if there is no fractional part.
    pub const fn as_whole(self) -> Option<i64> {
        if self.0 % 1000 == 0 {
            Some(self.0 / 1000)
        } else {
            None
        }
    }
}

impl fmt::Display for Milli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let whole = magnitude / 1000;
        let mut frac = magnitude % 1000;
        if frac == 0 {
            return write!(f, "{}", whole);
        }

        let mut digits = 3;
        while frac % 10 == 0 {
            frac /= 10;
            digits -= 1;
        }
        write!(f, "{}.{:0width$}", whole, frac, width = digits)
    }
}
