use crate::errors::FractionError;
use crate::matrix::matrix::FieldElement;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always stored in lowest terms with a positive
/// denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }
}

impl FieldElement for Fraction {}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self, FractionError> {
        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| FractionError::Invalid(s.to_string()))
        };

        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (parse(num)?, parse(den)?),
            None => (parse(s)?, BigInt::one()),
        };
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::new(num, den))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction {
            num: value,
            den: BigInt::one(),
        }
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        if rhs.is_zero() {
            panic!("Division by zero");
        }
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1i64)
    }

    fn is_one(&self) -> bool {
        self.num == self.den
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0i64)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
