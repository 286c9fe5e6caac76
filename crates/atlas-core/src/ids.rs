//! Strongly typed, zero-cost identifier wrappers.
//!
//! `CityId` and `RoadId` are arena indices: the map stores cities and roads
//! in `Vec`s and everything else refers to them by index.  Identifier
//! equality replaces pointer equality everywhere.  The inner integer is
//! `pub` to allow direct indexing via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! `RouteId` is different: route numbers are part of the external command
//! language and must lie in `1..=999`, so the type has a validated
//! constructor instead of a raw public field.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a city in the map's city arena.
    pub struct CityId(u32);
}

typed_id! {
    /// Index of a road in the map's road arena.  Slots are tombstoned on
    /// removal and never reused, so a `RoadId` stays unique for the lifetime
    /// of the map.
    pub struct RoadId(u32);
}

// ── RouteId ───────────────────────────────────────────────────────────────────

/// A national route number in `1..=999`.
///
/// The range restriction is part of the command language, so invalid numbers
/// are unrepresentable: construction goes through [`RouteId::new`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteId(u16);

impl RouteId {
    /// Smallest valid route number.
    pub const MIN: u16 = 1;
    /// Largest valid route number.  The route catalog holds exactly
    /// `MAX` slots.
    pub const MAX: u16 = 999;

    /// Validated constructor: `None` unless `n ∈ 1..=999`.
    pub fn new(n: u32) -> Option<RouteId> {
        if (Self::MIN as u32..=Self::MAX as u32).contains(&n) {
            Some(RouteId(n as u16))
        } else {
            None
        }
    }

    /// The route number itself.
    #[inline(always)]
    pub fn get(self) -> u16 {
        self.0
    }

    /// Slot index into the fixed route catalog (`1..=999`; slot 0 is unused).
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RouteId {
    /// Plain decimal form — this is the form route descriptions start with.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
