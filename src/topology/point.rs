//! `NodeId` / `ElementId`: strong, zero-cost handles into the mesh stores
//!
//! Nodes and elements live in contiguous arena-style vectors. Internally every
//! entity is addressed by its 0-based position in its store; the 1-based ids
//! used by mesh files and diagnostics exist only at the I/O edge, through
//! [`NodeId::from_external`] and [`NodeId::external`] (and the same pair on
//! [`ElementId`]).
//!
//! Both types are `repr(transparent)` wrappers around `usize`, so slices of
//! ids have the same layout as slices of indices.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a 0-based store index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Converts a 1-based external id; `0` is not a valid external id.
            #[inline]
            pub fn from_external(raw: u64) -> Option<Self> {
                let raw = usize::try_from(raw).ok()?;
                raw.checked_sub(1).map($name)
            }

            /// Returns the 0-based store index.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }

            /// Returns the 1-based id used in files and diagnostics.
            #[inline]
            pub const fn external(self) -> u64 {
                self.0 as u64 + 1
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints the 1-based external id.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.external())
            }
        }
    };
}

arena_id!(
    /// Handle of a node in the mesh node store.
    NodeId
);

arena_id!(
    /// Handle of a brick in the mesh element store.
    ElementId
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(NodeId, usize);
    assert_eq_size!(ElementId, usize);
    assert_eq_size!([NodeId; 4], [usize; 4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_ids_are_one_based() {
        let n = NodeId::new(0);
        assert_eq!(n.external(), 1);
        assert_eq!(NodeId::from_external(1), Some(n));
        assert_eq!(ElementId::from_external(12).map(ElementId::index), Some(11));
    }

    #[test]
    fn zero_external_id_is_rejected() {
        assert_eq!(NodeId::from_external(0), None);
        assert_eq!(ElementId::from_external(0), None);
    }

    #[test]
    fn display_and_debug() {
        let e = ElementId::new(4);
        assert_eq!(format!("{e}"), "5");
        assert_eq!(format!("{e:?}"), "ElementId(4)");
    }

    #[test]
    fn ordering_follows_index() {
        let mut ids = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        ids.sort_unstable();
        assert_eq!(ids, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }
}
