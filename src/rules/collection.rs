//! Emptiness rules for arrays and collections.

use crate::core::{name_label, AssuranceContext, ValuedContext};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;

/// Flavor named in emptiness messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    /// Fixed-size arrays and slices
    Array,
    /// Growable collections
    Collection,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array => f.write_str("array"),
            Self::Collection => f.write_str("collection"),
        }
    }
}

/// Values whose emptiness can be checked.
///
/// Implement this for custom containers to use them with
/// [`empty`](ValuedContext::empty) and [`not_empty`](ValuedContext::not_empty).
pub trait Countable {
    const KIND: CollectionKind;

    fn count(&self) -> usize;
}

impl<T> Countable for [T] {
    const KIND: CollectionKind = CollectionKind::Array;

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Countable for [T; N] {
    const KIND: CollectionKind = CollectionKind::Array;

    fn count(&self) -> usize {
        N
    }
}

impl<C: Countable + ?Sized> Countable for &C {
    const KIND: CollectionKind = C::KIND;

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<C: Countable + ?Sized> Countable for Box<C> {
    const KIND: CollectionKind = C::KIND;

    fn count(&self) -> usize {
        (**self).count()
    }
}

macro_rules! countable_collection {
    ($($collection:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Countable for $collection<$($param),+> {
                const KIND: CollectionKind = CollectionKind::Collection;

                fn count(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

countable_collection!(
    Vec<T>,
    VecDeque<T>,
    LinkedList<T>,
    BinaryHeap<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

/// Message for a failed `empty`.
pub fn not_empty_message(kind: CollectionKind, name: Option<&str>) -> String {
    format!("The {kind}{}is not empty.", name_label(name))
}

/// Message for a failed `not_empty`.
pub fn empty_message(kind: CollectionKind, name: Option<&str>) -> String {
    format!("The {kind}{}is empty.", name_label(name))
}

impl<E, V: Countable> ValuedContext<E, V> {
    /// Fail when the value holds any element.
    pub fn empty(self) -> Result<Self, E> {
        self.assure_named(|value| value.count() != 0, |name| {
            not_empty_message(V::KIND, name)
        })
    }

    /// Fail when the value holds no element.
    ///
    /// ```rust
    /// use assurance::Assure;
    ///
    /// let error = Assure::argument().not_empty(Vec::<u8>::new(), "payload").unwrap_err();
    /// assert_eq!(error.message(), "The collection 'payload' is empty.");
    ///
    /// let error = Assure::argument().not_empty([0u8; 0], "header").unwrap_err();
    /// assert_eq!(error.message(), "The array 'header' is empty.");
    /// ```
    pub fn not_empty(self) -> Result<Self, E> {
        self.assure_named(|value| value.count() == 0, |name| {
            empty_message(V::KIND, name)
        })
    }
}

impl<E> AssuranceContext<E> {
    pub fn empty<V: Countable>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).empty()
    }

    pub fn not_empty<V: Countable>(
        self,
        value: V,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<ValuedContext<E, V>, E> {
        self.with_named_value(value, name).not_empty()
    }
}
