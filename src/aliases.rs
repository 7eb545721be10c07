//! Concrete [`Game`] types for common board sizes. The naming convention is:
//!
//! * `Small*`: boards of up to 64 cells, eg, 8x8.
//! * `Medium*`: boards of up to 128 cells, eg, 11x11.
//! * `Large*`: boards of any size.
//!
//! The fail-soft functions in [`crate::representation`] always use the `Large*` types.

use crate::game::Game;
use num_bigint::BigUint;

pub type SmallBitfield = u64;
pub type MediumBitfield = u128;
pub type LargeBitfield = BigUint;

pub type SmallGame = Game<SmallBitfield>;
pub type MediumGame = Game<MediumBitfield>;
pub type LargeGame = Game<LargeBitfield>;
