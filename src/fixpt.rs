use derive_more::{Add, AddAssign};

/// Angle in degrees.
///
/// Unsigned fixed point with 4 fractional bits (1/16 degree).
/// One LSB equals one code of the 10 bit delay angle ADC
/// (64 degrees per 1024 codes).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Add, AddAssign)]
pub struct Deg(u16);

macro_rules! deg {
    ($numerator:literal / $denominator:literal) => {
        $crate::fixpt::Deg::from_fraction($numerator, $denominator)
    };
    ($int:literal) => {
        $crate::fixpt::Deg::from_int($int)
    };
}
pub(crate) use deg;

impl Deg {
    pub const SHIFT: usize = 4;
    pub const MAX: Self = Self(u16::MAX);

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_int(int: u16) -> Self {
        Self(int << Self::SHIFT)
    }

    pub const fn from_fraction(numerator: u16, denominator: u16) -> Self {
        let q = ((numerator as u32) << Self::SHIFT) / denominator as u32;
        if q > u16::MAX as u32 {
            Self::MAX
        } else {
            Self(q as u16)
        }
    }

    /// Construct from the raw fixed point representation.
    pub const fn from_q(q: u16) -> Self {
        Self(q)
    }

    pub const fn to_q(self) -> u16 {
        self.0
    }

    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deg_conv() {
        assert_eq!(deg!(0).to_q(), 0);
        assert_eq!(deg!(2).to_q(), 32);
        assert_eq!(deg!(30).to_q(), 480);
        assert_eq!(deg!(1 / 16).to_q(), 1);
        assert_eq!(deg!(255 / 4).to_q(), 1020);
        assert!(Deg::from_q(1023) < deg!(64));
        assert!(Deg::from_q(1023) > deg!(63));
        assert_eq!(Deg::from_fraction(u16::MAX, 1), Deg::MAX);
    }

    #[test]
    fn test_deg_arith() {
        let mut a = deg!(28);
        a += deg!(2);
        assert_eq!(a, deg!(30));
        assert_eq!(deg!(1) + deg!(1 / 2), Deg::from_q(24));
        assert_eq!(Deg::MAX.saturating_add(deg!(2)), Deg::MAX);
        assert!(deg!(29) < deg!(30));
        assert!(Deg::from_q(479) < deg!(30));
    }
}

// vim: ts=4 sw=4 expandtab
