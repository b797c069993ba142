//! Copy a chosen subset of keys out of a keyed source.
//!
//! Keys are checked statically through the source's [`Keyed::Key`] type,
//! never at runtime: a well-typed key that the source happens not to hold
//! still shows up in the picked subset, mapped to `None`.
//!
//! ```
//! use tenet_core::{keyed_record, pick::pick};
//!
//! keyed_record! {
//!     #[derive(Debug)]
//!     pub struct Pet<Key = PetKey, Value = &'static str> {
//!         genus => Genus,
//!         species => Species,
//!         name => Name,
//!     }
//! }
//!
//! let whiskers = Pet { genus: "Felis", species: "Catus", name: "Whiskers" };
//! let animal = pick(&whiskers, &[PetKey::Genus, PetKey::Species]);
//!
//! assert_eq!(animal.len(), 2);
//! assert_eq!(animal.get(&PetKey::Genus), Some(&"Felis"));
//! assert!(!animal.contains_key(&PetKey::Name));
//! ```

mod keyed;
mod picked;


pub use keyed::Keyed;
pub use picked::Picked;

use alloc::collections::BTreeMap;

/// Pick `keys` out of `source` into a new, borrowed mapping.
///
/// Duplicate keys collapse into one entry. `source` is never mutated.
pub fn pick<'a, S>(source: &'a S, keys: &[S::Key]) -> Picked<'a, S::Key, S::Value>
where
    S: Keyed + ?Sized,
{
    let mut entries = BTreeMap::new();
    for key in keys {
        entries.insert(key.clone(), source.lookup(key));
    }
    Picked::from_entries(entries)
}

/// Declare a struct whose fields share one value type, together with an
/// enum naming each field. The enum is the struct's [`Keyed::Key`].
#[macro_export]
macro_rules! keyed_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<Key = $key:ident, Value = $value:ty> {
            $($field:ident => $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(pub $field: $value,)+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $key {
            $($variant,)+
        }

        impl $key {
            /// Every key, in declaration order.
            pub const ALL: &'static [$key] = &[$($key::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $($key::$variant => stringify!($field),)+
                }
            }
        }

        impl $crate::pick::Keyed for $name {
            type Key = $key;
            type Value = $value;

            fn lookup(&self, key: &$key) -> Option<&$value> {
                match key {
                    $($key::$variant => Some(&self.$field),)+
                }
            }
        }
    };
}
