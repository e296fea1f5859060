use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };
    pub const ONE: Self = Self { units: 1 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Number of bytes needed to bring this offset up to a multiple of `align`.
    ///
    /// `align` may be any non-zero value, not only a power of two. The result
    /// is always in `0..align`.
    pub fn padding_to(&self, align: ByteUnits) -> ByteUnits {
        assert_ne!(align.units, 0);

        match self.units % align.units {
            0 => Self::ZERO,
            misalignment => Self::of(align.units - misalignment),
        }
    }

    pub fn align_to(&self, align: ByteUnits) -> ByteUnits {
        *self + self.padding_to(align)
    }

    pub fn is_aligned_to(&self, align: ByteUnits) -> bool {
        self.padding_to(align).is_zero()
    }

    /// Every byte offset in `self..self + length`, in increasing order.
    pub fn span(self, length: ByteUnits) -> impl Iterator<Item = ByteUnits> {
        (self.units..self.units + length.units).map(Self::of)
    }
}

impl Display for ByteUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.units == 1 {
            write!(f, "1 byte")
        } else {
            write!(f, "{} bytes", self.units)
        }
    }
}

macro_rules! impl_units_from {
    ($units:ty, $ty:ty) => {
        impl From<$ty> for $units {
            fn from(value: $ty) -> Self {
                Self {
                    units: value.into(),
                }
            }
        }
    };
}

impl_units_from!(ByteUnits, u8);
impl_units_from!(ByteUnits, u16);
impl_units_from!(ByteUnits, u32);
impl_units_from!(ByteUnits, u64);

impl Add<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn add(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units + rhs.units,
        }
    }
}

impl AddAssign<ByteUnits> for ByteUnits {
    fn add_assign(&mut self, rhs: ByteUnits) {
        self.units += rhs.units
    }
}

impl Sub<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn sub(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units - rhs.units,
        }
    }
}

impl SubAssign<ByteUnits> for ByteUnits {
    fn sub_assign(&mut self, rhs: ByteUnits) {
        self.units -= rhs.units
    }
}

impl Sum for ByteUnits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a ByteUnits> for ByteUnits {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_to_power_of_two() {
        assert_eq!(ByteUnits::of(0).padding_to(ByteUnits::of(4)), ByteUnits::ZERO);
        assert_eq!(ByteUnits::of(1).padding_to(ByteUnits::of(4)), ByteUnits::of(3));
        assert_eq!(ByteUnits::of(5).padding_to(ByteUnits::of(4)), ByteUnits::of(3));
        assert_eq!(ByteUnits::of(8).padding_to(ByteUnits::of(4)), ByteUnits::ZERO);
    }

    #[test]
    fn padding_to_odd_alignment() {
        assert_eq!(ByteUnits::of(7).padding_to(ByteUnits::of(3)), ByteUnits::of(2));
        assert_eq!(ByteUnits::of(7).align_to(ByteUnits::of(3)), ByteUnits::of(9));
        assert!(ByteUnits::of(12).is_aligned_to(ByteUnits::of(6)));
    }

    #[test]
    fn span_is_contiguous() {
        let span: Vec<_> = ByteUnits::of(5).span(ByteUnits::of(3)).collect();
        assert_eq!(span, [5, 6, 7].map(ByteUnits::of));
        assert_eq!(ByteUnits::of(5).span(ByteUnits::ZERO).count(), 0);
    }

    #[test]
    fn sums() {
        let total: ByteUnits = [1, 2, 3].map(ByteUnits::of).iter().sum();
        assert_eq!(total, ByteUnits::of(6));
        assert_eq!(ByteUnits::of(1).to_string(), "1 byte");
        assert_eq!(ByteUnits::of(3).to_string(), "3 bytes");
    }
}
