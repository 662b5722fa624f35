//! Multivariate polynomials in normal form.
//!
//! A [`Poly`] is a flat sum of monomials: variable products mapped to exact rational
//! coefficients. The representation *is* the simplification: adding and multiplying
//! polynomials folds like monomials together as it goes, so there is no separate rewrite pass;
//! once an expression has been folded into a `Poly`, it is fully expanded, combined and
//! reduced.
//!
//! Rendering is deterministic: monomials come out in descending pure-lexicographic order
//! (the exponent of the alphabetically first variable decides, ties move rightwards), which
//! puts `x**2` before `x*y` before `y**2`, and constants last.

use rug::{ops::Pow, Integer, Rational};
use std::cmp::Ordering;
use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::MAX_EXPONENT;

/// A product of variables raised to positive integer exponents, such as `x**2*y`.
///
/// The empty product is the constant monomial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VarProduct(BTreeMap<char, u64>);

impl VarProduct {
    /// The product of the two variable products; exponents of shared variables add.
    fn merge(&self, other: &Self) -> Self {
        let mut merged = self.0.clone();
        for (&symbol, &exponent) in &other.0 {
            let slot = merged.entry(symbol).or_insert(0);
            *slot = slot.saturating_add(exponent);
        }
        Self(merged)
    }

    /// Returns true if this is the empty product.
    fn is_constant(&self) -> bool {
        self.0.is_empty()
    }
}

/// Pure lexicographic monomial order: the exponent of the alphabetically first variable
/// decides, and ties move to the next variable. A variable that is absent has exponent zero,
/// so `x` sorts above `y**2` and every proper monomial sorts above the constant.
impl Ord for VarProduct {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.0.iter().peekable();
        let mut rhs = other.0.iter().peekable();

        loop {
            match (lhs.peek(), rhs.peek()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((left, left_exp)), Some((right, right_exp))) => {
                    if left != right {
                        // the side holding the earlier variable has a positive exponent where
                        // the other has zero
                        return right.cmp(left);
                    }
                    if left_exp != right_exp {
                        return left_exp.cmp(right_exp);
                    }
                    lhs.next();
                    rhs.next();
                },
            }
        }
    }
}

impl PartialOrd for VarProduct {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VarProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (at, (symbol, exponent)) in self.0.iter().enumerate() {
            if at > 0 {
                write!(f, "*")?;
            }
            if *exponent == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}**{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

/// A multivariate polynomial: a sum of monomials with exact rational coefficients.
///
/// Zero coefficients are never stored, so the zero polynomial has no terms and two polynomials
/// are mathematically equal exactly when they are `==`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly {
    terms: BTreeMap<VarProduct, Rational>,
}

impl Poly {
    /// The constant polynomial with the given value.
    pub fn constant(value: Rational) -> Self {
        let mut terms = BTreeMap::new();
        if value != 0 {
            terms.insert(VarProduct::default(), value);
        }
        Self { terms }
    }

    /// The polynomial consisting of a single variable.
    pub fn symbol(symbol: char) -> Self {
        let mut vars = BTreeMap::new();
        vars.insert(symbol, 1);
        let mut terms = BTreeMap::new();
        terms.insert(VarProduct(vars), Rational::from(1));
        Self { terms }
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Raises the polynomial to a non-negative integer power by repeated squaring.
    pub fn pow(self, exponent: u32) -> Self {
        let mut result = Poly::constant(Rational::from(1));
        let mut base = self;
        let mut exponent = exponent;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exponent >>= 1;
        }

        result
    }

    /// Adds one monomial into the polynomial, dropping the term if it cancels to zero.
    fn accumulate(&mut self, vars: VarProduct, coefficient: Rational) {
        match self.terms.entry(vars) {
            Entry::Vacant(slot) => {
                if coefficient != 0 {
                    slot.insert(coefficient);
                }
            },
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += coefficient;
                if *slot.get() == 0 {
                    slot.remove();
                }
            },
        }
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(mut self, rhs: Poly) -> Poly {
        for (vars, coefficient) in rhs.terms {
            self.accumulate(vars, coefficient);
        }
        self
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        self + (-rhs)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            terms: self
                .terms
                .into_iter()
                .map(|(vars, coefficient)| (vars, -coefficient))
                .collect(),
        }
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        let mut result = Poly::default();
        for (left_vars, left_coeff) in &self.terms {
            for (right_vars, right_coeff) in &rhs.terms {
                result.accumulate(
                    left_vars.merge(right_vars),
                    Rational::from(left_coeff * right_coeff),
                );
            }
        }
        result
    }
}

/// Renders the polynomial in engine syntax, monomials in descending lexicographic order, the
/// sign absorbed into the ` + ` / ` - ` separators, and unit coefficients left implicit.
impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (at, (vars, coefficient)) in self.terms.iter().rev().enumerate() {
            let negative = *coefficient < 0;
            if at == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = Rational::from(coefficient.abs_ref());
            if vars.is_constant() {
                write!(f, "{}", coefficient_string(&magnitude))?;
            } else if magnitude == 1 {
                write!(f, "{}", vars)?;
            } else {
                write!(f, "{}*{}", coefficient_string(&magnitude), vars)?;
            }
        }

        Ok(())
    }
}

/// Converts a number literal (as matched by the tokenizer) into an exact rational.
///
/// Returns [`None`] if the scientific-notation exponent falls outside the supported range; the
/// digits themselves may be arbitrarily many.
pub fn rational_from_str(s: &str) -> Option<Rational> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], s[at + 1..].parse::<i64>().ok()?),
        None => (s, 0),
    };
    if exponent.unsigned_abs() > MAX_EXPONENT as u64 {
        return None;
    }

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(at) => (&mantissa[..at], &mantissa[at + 1..]),
        None => (mantissa, ""),
    };

    // the lexer guarantees at least one digit on one side of the dot
    let digits = format!("{}{}", int_part, frac_part);
    let value = Rational::from(Integer::from_str_radix(&digits, 10).ok()?);

    let shift = exponent - frac_part.len() as i64;
    if shift.unsigned_abs() > MAX_EXPONENT as u64 {
        return None;
    }
    let scale = Integer::from(10).pow(shift.unsigned_abs() as u32);
    Some(if shift >= 0 { value * scale } else { value / scale })
}

/// Renders a coefficient: integers bare, terminating decimals as decimals, anything else as an
/// exact fraction.
///
/// Every coefficient that can enter the pipeline is a decimal, and sums and products of
/// decimals stay decimal, so the fraction arm is for standalone library use only.
pub fn coefficient_string(value: &Rational) -> String {
    let (num, den) = (value.numer(), value.denom());
    if *den == 1 {
        return num.to_string();
    }

    let mut rest = den.clone();
    let mut twos = 0u32;
    let mut fives = 0u32;
    while rest.is_divisible_u(2) {
        rest.div_exact_u_mut(2);
        twos += 1;
    }
    while rest.is_divisible_u(5) {
        rest.div_exact_u_mut(5);
        fives += 1;
    }
    if rest != 1 {
        return format!("{}/{}", num, den);
    }

    let places = twos.max(fives);
    let scaled = Integer::from(num * Integer::from(10).pow(places)) / den;
    let negative = scaled < 0;

    let mut digits = Integer::from(scaled.abs_ref()).to_string();
    let places = places as usize;
    while digits.len() <= places {
        digits.insert(0, '0');
    }
    digits.insert(digits.len() - places, '.');
    if negative {
        digits.insert(0, '-');
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rational(s: &str) -> Rational {
        rational_from_str(s).unwrap()
    }

    #[test]
    fn rational_from_str_formats() {
        assert_eq!(rational("66"), Rational::from(66));
        assert_eq!(rational("66.66"), Rational::from((6666, 100)));
        assert_eq!(rational("1."), Rational::from(1));
        assert_eq!(rational(".5"), Rational::from((1, 2)));
        assert_eq!(rational("66e10"), Rational::from(660_000_000_000i64));
        assert_eq!(rational("2e-3"), Rational::from((2, 1000)));
        assert_eq!(rational("1.5e2"), Rational::from(150));
    }

    #[test]
    fn rational_from_str_rejects_wild_exponents() {
        assert_eq!(rational_from_str("1e99999999999999999999"), None);
        assert_eq!(rational_from_str("1e999999"), None);
    }

    #[test]
    fn coefficient_strings() {
        assert_eq!(coefficient_string(&rational("2")), "2");
        assert_eq!(coefficient_string(&Rational::from((9, 2))), "4.5");
        assert_eq!(coefficient_string(&Rational::from((3, 10))), "0.3");
        assert_eq!(coefficient_string(&Rational::from((1, 8))), "0.125");
        assert_eq!(coefficient_string(&Rational::from((-9, 2))), "-4.5");
        assert_eq!(coefficient_string(&Rational::from((1, 3))), "1/3");
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        let sum = rational("3.5") + Rational::from(1);
        assert_eq!(coefficient_string(&sum), "4.5");
    }

    #[test]
    fn monomial_order_is_descending_lex() {
        let x2 = Poly::symbol('x').pow(2);
        let xy = Poly::symbol('x') * Poly::symbol('y');
        let y2 = Poly::symbol('y').pow(2);
        let sum = y2 + xy + x2;
        assert_eq!(sum.to_string(), "x**2 + x*y + y**2");
    }

    #[test]
    fn earlier_variables_dominate_regardless_of_degree() {
        let x = Poly::constant(Rational::from(2)) * Poly::symbol('x');
        let y2 = Poly::symbol('y').pow(2);
        assert_eq!((x - y2).to_string(), "2*x - y**2");
    }

    #[test]
    fn constants_sort_last() {
        let x = Poly::symbol('x');
        let one = Poly::constant(Rational::from(1));
        assert_eq!((x - one).to_string(), "x - 1");
    }

    #[test]
    fn like_terms_cancel_to_zero() {
        let x = Poly::symbol('x');
        assert!((x.clone() - x).is_zero());
    }

    #[test]
    fn zero_renders_as_zero() {
        assert_eq!(Poly::default().to_string(), "0");
        assert_eq!(Poly::constant(Rational::from(0)).to_string(), "0");
    }

    #[test]
    fn unit_coefficients_are_implicit() {
        let x = Poly::symbol('x');
        let y = Poly::symbol('y');
        assert_eq!((x.clone() * y.clone()).to_string(), "x*y");
        assert_eq!((-(x * y)).to_string(), "-x*y");
    }

    #[test]
    fn leading_negative_term() {
        let x = Poly::symbol('x');
        let one = Poly::constant(Rational::from(1));
        assert_eq!((-(x + one)).to_string(), "-x - 1");
    }

    #[test]
    fn binomial_square_expands() {
        let x = Poly::symbol('x');
        let one = Poly::constant(Rational::from(1));
        let square = (x + one).pow(2);
        assert_eq!(square.to_string(), "x**2 + 2*x + 1");
    }

    #[test]
    fn pow_zero_is_one() {
        assert_eq!(Poly::symbol('x').pow(0).to_string(), "1");
    }

    #[test]
    fn exponents_add_when_multiplying() {
        let x = Poly::symbol('x');
        assert_eq!((x.clone() * x.clone() * x).to_string(), "x**3");
    }
}
