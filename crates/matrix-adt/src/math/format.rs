use std::fmt;

use crate::math::rounding::round2;
use crate::math::Matrix;

/// Shortest representation of `v`, always carrying a fractional part
/// (`1.0`, `-2.5`, `12.34`).
fn float_repr(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Grid of values, one row per line, every column followed by two spaces.
///
/// Magnitudes are zero-padded after the sign to the width of the wider of
/// `max_val` and `min_val`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = float_repr(round2(self.max_val()))
            .len()
            .max(float_repr(round2(self.min_val())).len());

        for i in 0..self.rows() {
            for &num in self.row_slice(i) {
                let negative = num < 0.0;
                let magnitude = float_repr(round2(num.abs()));
                let pad = width.saturating_sub(magnitude.len() + negative as usize);
                if negative {
                    write!(f, "-")?;
                }
                write!(f, "{}{}  ", "0".repeat(pad), magnitude)?;
            }
            if i + 1 != self.rows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_keeps_a_fraction() {
        assert_eq!(float_repr(1.0), "1.0");
        assert_eq!(float_repr(-2.5), "-2.5");
        assert_eq!(float_repr(12.34), "12.34");
    }
}
