use crate::error::ParseError;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// A trait for any integer type that can be used as a bitfield to store the cells of a board.
/// Bit `i` of the field is the cell at linear index `i` (see [`crate::Dimensions::index`]).
///
/// The fixed-width integers implement this through the [`crate::impl_bitfield!`] macro, and
/// [`BigUint`] implements it for boards of any size. Shifts never panic: shifting a fixed-width
/// field by its width or more yields zero, the same as shifting every bit off the end.
pub trait BitField:
    Sized
    + Clone
    + Default
    + Eq
    + Hash
    + Debug
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + BitXor<Output = Self>
    + BitXorAssign
{
    /// The number of bits the type can hold, or `None` if it grows as needed.
    const CAPACITY: Option<usize>;

    /// A field with only bit `i` set. Zero if `i` is beyond the capacity.
    fn bit_mask(i: usize) -> Self;

    /// A field with the lowest `n` bits set, ie, `2^n - 1`.
    fn low_mask(n: usize) -> Self;

    /// Whether bit `i` is set. Bits beyond the capacity are never set.
    fn bit(&self, i: usize) -> bool;

    /// Set bit `i`. Does nothing if `i` is beyond the capacity.
    fn set_bit(&mut self, i: usize);

    fn shifted_left(&self, n: usize) -> Self;

    fn shifted_right(&self, n: usize) -> Self;

    /// Returns the number of ones in the binary representation of `self`.
    fn count_ones(&self) -> u64;

    /// The number of bits needed to hold `self`, ie, one past the highest set bit. Zero for zero.
    fn bit_len(&self) -> u64;

    /// Lowercase hexadecimal, most significant digit first, without a `0x` prefix. Zero is `"0"`.
    fn to_hex(&self) -> String;

    /// Parse a field from hexadecimal digits (either case). Signs, prefixes and separators are
    /// rejected.
    fn from_hex(s: &str) -> Result<Self, ParseError>;

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `self & !other`, without needing a width for `!`.
    fn and_not(self, other: Self) -> Self {
        let common = self.clone() & other;
        self ^ common
    }

    /// Whether a board of `cells` cells fits in this type.
    fn fits(cells: usize) -> bool {
        Self::CAPACITY.map_or(true, |capacity| cells <= capacity)
    }
}

#[doc(hidden)]
pub fn check_hex(s: &str) -> Result<(), ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        Err(ParseError::BadHex(s.to_string()))
    } else {
        Ok(())
    }
}

/// Implement the [`BitField`] trait for the given primitive unsigned integer type.
#[macro_export]
macro_rules! impl_bitfield {
    ($t:ty) => {
        impl $crate::BitField for $t {
            const CAPACITY: Option<usize> = Some(<$t>::BITS as usize);

            fn bit_mask(i: usize) -> Self {
                <Self as $crate::BitField>::shifted_left(&1, i)
            }

            fn low_mask(n: usize) -> Self {
                if n >= <$t>::BITS as usize {
                    <$t>::MAX
                } else {
                    (1 << n) - 1
                }
            }

            fn bit(&self, i: usize) -> bool {
                <Self as $crate::BitField>::shifted_right(self, i) & 1 == 1
            }

            fn set_bit(&mut self, i: usize) {
                *self |= <Self as $crate::BitField>::bit_mask(i)
            }

            fn shifted_left(&self, n: usize) -> Self {
                u32::try_from(n)
                    .ok()
                    .and_then(|n| self.checked_shl(n))
                    .unwrap_or(0)
            }

            fn shifted_right(&self, n: usize) -> Self {
                u32::try_from(n)
                    .ok()
                    .and_then(|n| self.checked_shr(n))
                    .unwrap_or(0)
            }

            fn count_ones(&self) -> u64 {
                <$t>::count_ones(*self) as u64
            }

            fn bit_len(&self) -> u64 {
                (<$t>::BITS - self.leading_zeros()) as u64
            }

            fn to_hex(&self) -> String {
                format!("{self:x}")
            }

            fn from_hex(s: &str) -> Result<Self, $crate::ParseError> {
                $crate::bitfield::check_hex(s)?;
                <$t>::from_str_radix(s, 16).map_err(|_| $crate::ParseError::BadHex(s.to_string()))
            }
        }
    };
}

impl_bitfield!(u64);
impl_bitfield!(u128);

impl BitField for BigUint {
    const CAPACITY: Option<usize> = None;

    fn bit_mask(i: usize) -> Self {
        BigUint::one() << i
    }

    fn low_mask(n: usize) -> Self {
        (BigUint::one() << n) - BigUint::one()
    }

    fn bit(&self, i: usize) -> bool {
        BigUint::bit(self, i as u64)
    }

    fn set_bit(&mut self, i: usize) {
        BigUint::set_bit(self, i as u64, true)
    }

    fn shifted_left(&self, n: usize) -> Self {
        self << n
    }

    fn shifted_right(&self, n: usize) -> Self {
        self >> n
    }

    fn count_ones(&self) -> u64 {
        BigUint::count_ones(self)
    }

    fn bit_len(&self) -> u64 {
        self.bits()
    }

    fn to_hex(&self) -> String {
        self.to_str_radix(16)
    }

    fn from_hex(s: &str) -> Result<Self, ParseError> {
        check_hex(s)?;
        BigUint::parse_bytes(s.as_bytes(), 16).ok_or_else(|| ParseError::BadHex(s.to_string()))
    }

    fn is_empty(&self) -> bool {
        self.is_zero()
    }
}
