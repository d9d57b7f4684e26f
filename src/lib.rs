//! optionset — bitmask-backed option sets with zero boilerplate
//!
//! Declare a struct with a nested enum naming your flags, and the
//! [`option_set!`] macro turns it into a complete option set: raw-value
//! storage, constructors, one bit constant per flag, and an [`OptionSet`]
//! conformance with full set algebra.
//!
//! - One macro: `option_set! { ... }` wrapping a struct declaration.
//!   - The directive `#[option_set(<raw type>)]` on the struct picks the
//!     integer type backing the bitmask (`u8`, `u16`, ..., `i128`).
//!   - Optional `options_name = "<Name>"` names the nested flag enum
//!     (default `"Options"`).
//! - Flags get their bit from their position: the first case is `1 << 0`,
//!   the next `1 << 1`, and so on. An explicit raw value (`Fragile = 4`)
//!   moves its case to that bit, and implicit numbering continues after it.
//! - The struct's own attributes and visibility carry over: derives apply to
//!   the generated storage struct, and `pub` declarations get `pub` members.
//!   Constant names are the flag names rendered in constant case
//!   (`NextDay` → `NEXT_DAY`).
//! - Conformance is idempotent: if the declaration already lists `OptionSet`
//!   in its clause (`struct Flags: OptionSet { ... }`), the impl is yours to
//!   write and the macro only emits the members.
//!
//! Raw values
//! - `from_raw_value` stores any bit pattern verbatim; it never fails and
//!   never masks. `new()` is the empty set (raw value zero).
//!
//! Compile-time checks
//! - The directive must be attached to a struct.
//! - `options_name` must be a plain string literal.
//! - The named flag enum must exist in the struct body.
//! - The directive must carry a raw type.
//!
//! Example: declare the flags, get the set for free
//! ```
//! use optionset::{OptionSet, option_set};
//!
//! option_set! {
//!   #[option_set(u8)]
//!   #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//!   pub struct ShippingOptions {
//!     enum Options {
//!       NextDay,
//!       SecondDay,
//!       Priority,
//!       Standard,
//!     }
//!   }
//! }
//!
//! let mut order = ShippingOptions::new();
//! order.insert(ShippingOptions::PRIORITY);
//! assert!(order.contains(ShippingOptions::PRIORITY));
//! assert_eq!(ShippingOptions::SECOND_DAY.raw_value(), 0b10);
//! assert_eq!(ShippingOptions::STANDARD.raw_value(), 0b1000);
//! ```

#![no_std]

use core::ops::{BitAnd, BitOr, BitXor, Not};

pub use optionset_impl::option_set;

/// Raw-value contract for option-set storage: a fixed-width integer with
/// bitwise algebra and a zero.
pub trait Bits:
  Copy + Eq + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self> + Not<Output = Self>
{
  /// The empty bit pattern.
  const ZERO: Self;
}

macro_rules! impl_bits {
  ($($int:ty),* $(,)?) => {
    $(
      impl Bits for $int {
        const ZERO: Self = 0;
      }
    )*
  };
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A set of named flags stored as bits in an integer raw value.
///
/// Implementations are normally generated by [`option_set!`]. The required
/// methods expose the raw storage; everything else is set algebra over it.
pub trait OptionSet: Sized {
  /// Integer type backing the bitmask.
  type RawValue: Bits;

  /// Builds a set from a raw bit pattern, stored verbatim; any pattern is
  /// accepted.
  fn from_raw_value(raw_value: Self::RawValue) -> Self;

  /// The raw bit pattern of this set.
  fn raw_value(&self) -> Self::RawValue;

  /// The empty set.
  fn empty() -> Self {
    Self::from_raw_value(Bits::ZERO)
  }

  fn is_empty(&self) -> bool {
    self.raw_value() == Bits::ZERO
  }

  /// Whether every flag in `other` is also in `self`.
  fn contains(&self, other: Self) -> bool {
    self.raw_value() & other.raw_value() == other.raw_value()
  }

  fn union(self, other: Self) -> Self {
    Self::from_raw_value(self.raw_value() | other.raw_value())
  }

  fn intersection(self, other: Self) -> Self {
    Self::from_raw_value(self.raw_value() & other.raw_value())
  }

  /// Flags in exactly one of the two sets.
  fn symmetric_difference(self, other: Self) -> Self {
    Self::from_raw_value(self.raw_value() ^ other.raw_value())
  }

  /// Adds the flags of `other` to `self`.
  fn insert(&mut self, other: Self) {
    *self = Self::from_raw_value(self.raw_value() | other.raw_value());
  }

  /// Removes the flags of `other` from `self`.
  fn remove(&mut self, other: Self) {
    *self = Self::from_raw_value(self.raw_value() & !other.raw_value());
  }

  fn toggle(&mut self, other: Self) {
    *self = Self::from_raw_value(self.raw_value() ^ other.raw_value());
  }
}
