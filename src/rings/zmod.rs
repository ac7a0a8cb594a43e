use crate::matrix::matrix::FieldElement;
use num_traits::{One, Zero};
use std::fmt;
use std::ops;

/// Element of the prime field GF(P).
///
/// `P` must be prime for division to be meaningful, inverses are computed as
/// `x^(P-2)`. Products go through `u128` so any `u64` modulus works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zmod<const P: u64> {
    pub value: u64,
}

impl<const P: u64> Zmod<P> {
    pub fn new(value: u64) -> Self {
        Self { value: value % P }
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut ret = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                ret = ret * base;
            }
            base = base * base;
            exp >>= 1;
        }
        ret
    }

    /// Multiplicative inverse. Panics on zero.
    pub fn inverse(self) -> Self {
        if self.value == 0 {
            panic!("Division by zero");
        }
        self.pow(P - 2)
    }
}

impl<const P: u64> From<u64> for Zmod<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for Zmod<P> {
    fn from(value: i64) -> Self {
        Self {
            value: (value as i128).rem_euclid(P as i128) as u64,
        }
    }
}

impl<const P: u64> ops::Add for Zmod<P> {
    type Output = Zmod<P>;

    fn add(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 + rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Sub for Zmod<P> {
    type Output = Zmod<P>;

    fn sub(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 + P as u128 - rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Neg for Zmod<P> {
    type Output = Zmod<P>;

    fn neg(self) -> Zmod<P> {
        Zmod::zero() - self
    }
}

impl<const P: u64> ops::Mul for Zmod<P> {
    type Output = Zmod<P>;

    fn mul(self, rhs: Zmod<P>) -> Zmod<P> {
        Zmod {
            value: ((self.value as u128 * rhs.value as u128) % P as u128) as u64,
        }
    }
}

impl<const P: u64> ops::Div for Zmod<P> {
    type Output = Zmod<P>;

    fn div(self, rhs: Zmod<P>) -> Zmod<P> {
        self * rhs.inverse()
    }
}

impl<const P: u64> FieldElement for Zmod<P> {}

impl<const P: u64> Zero for Zmod<P> {
    fn zero() -> Self {
        Zmod { value: 0 }
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl<const P: u64> One for Zmod<P> {
    fn one() -> Self {
        Zmod::new(1)
    }
}

impl<const P: u64> fmt::Display for Zmod<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    type F7 = Zmod<7>;
    type Mersenne61 = Zmod<2305843009213693951>;

    #[test]
    fn test_zmod_small() {
        let a = F7::from(12u64);
        assert_eq!(a.value, 5);
        assert_eq!(F7::from(-5i64).value, 2);
        assert_eq!((a + F7::from(4u64)).value, 2);
        assert_eq!((F7::from(2u64) - a).value, 4);
        assert_eq!((a * F7::from(3u64)).value, 1);
        assert_eq!((-a).value, 2);
        assert_eq!((F7::one() / a).value, 3);
        assert_eq!(format!("{}", a), "5");
    }

    #[test]
    fn test_zmod_inverses() {
        for x in 1..13u64 {
            let x = Zmod::<13>::from(x);
            assert_eq!(x * x.inverse(), Zmod::one());
        }
    }

    #[test]
    fn test_zmod_large() {
        let a = Mersenne61::from(1234567890123456789u64);
        let b = Mersenne61::from(2000000000000000000u64);
        assert_eq!((a * b).value, 646744336487279443);
        assert_eq!((a + b).value, 928724880909762838);
        assert_eq!((a - b).value, 1540410899337150740);
        assert_eq!(a.inverse().value, 2179019607881955056);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_zmod_division_by_zero() {
        let _ = F7::one() / F7::zero();
    }
}
