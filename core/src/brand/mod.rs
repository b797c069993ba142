//! Zero-cost branded values.
//!
//! A [`Brand<T, Tag>`] is a `T` that has passed whatever check `Tag` stands
//! for. It has the same layout as `T` and dereferences to it, so it can go
//! wherever a `&T` is accepted. The reverse does not hold: the only way to
//! obtain a brand is through the constructor for its tag (a validator, or a
//! unit constructor), because [`Brand::new`] is private to this crate.
//!
//! ```
//! use tenet_core::validate::{validate_integer, ValidInteger};
//!
//! fn takes_number(n: f64) -> f64 { n + 1.0 }
//!
//! let valid: ValidInteger = validate_integer(41.0).unwrap();
//! assert_eq!(takes_number(*valid), 42.0);
//! ```
//!
//! A raw value is rejected where a brand is expected:
//!
//! ```compile_fail
//! use tenet_core::validate::ValidInteger;
//!
//! let forged: ValidInteger = 5.0;
//! ```


use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

/// A `T` carrying the compile-time-only marker `Tag`.
#[repr(transparent)]
pub struct Brand<T, Tag> {
    value: T,
    // `fn() -> Tag` keeps the brand `Send`/`Sync` independent of `Tag`.
    tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> Brand<T, Tag> {
    pub(crate) const fn new(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Drop the brand and keep the plain value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, Tag> Deref for Brand<T, Tag> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, Tag> AsRef<T> for Brand<T, Tag> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, Tag> Borrow<T> for Brand<T, Tag> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<Tag> AsRef<str> for Brand<crate::String, Tag> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Manual impls below avoid the `Tag: Trait` bounds `derive` would add.

impl<T: Clone, Tag> Clone for Brand<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for Brand<T, Tag> {}

impl<T: PartialEq, Tag> PartialEq for Brand<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for Brand<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for Brand<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, Tag> Ord for Brand<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, Tag> Hash for Brand<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for Brand<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for Brand<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Compare with an unbranded value.
impl<T: PartialEq, Tag> PartialEq<T> for Brand<T, Tag> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}
