use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::errors::EmptyMaybeAccess;


/// An owned value of type `T` which may or may not be present.
///
/// A `Maybe<T>` is always in exactly one of two states: empty, or holding exactly one owned
/// `T`. The held value can only be read through the extraction methods ([`Self::try_get`] and
/// friends), which fail with [`EmptyMaybeAccess`] instead of producing a sentinel or default
/// when the container is empty; callers are expected to check [`Self::is_present`] first, or
/// to treat the failure as fatal to that code path.
///
/// Dropping a `Maybe` drops the held value, if any. Cloning produces an independent copy of
/// the held value, never a shared one. Ownership of the held value can be transferred without
/// copying it via [`Self::take`], which leaves the source empty.
///
/// Two `Maybe`s can be compared with `==` even when their element types differ, and even when
/// their element types have no equality operator at all; see [`CrossEq`](crate::CrossEq).
///
/// # Example
/// ```
/// use anchored_maybe::Maybe;
///
/// let mut held = Maybe::present(10_u32);
/// let empty: Maybe<u32> = Maybe::empty();
///
/// assert!(held.is_present());
/// assert_eq!(held.try_get(), Ok(&10));
/// assert!(empty.try_get().is_err());
///
/// held.clear();
/// assert!(held.is_empty());
/// ```
pub struct Maybe<T> {
    /// Invariant: the slot is the sole owner of the held value. No reference to the slot's
    /// contents outlives a borrow of the `Maybe` itself.
    pub(crate) slot: Option<T>,
}

impl<T> Maybe<T> {
    /// Create an empty `Maybe`, holding no value.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// Create a `Maybe` holding the given, already-constructed value.
    #[inline]
    #[must_use]
    pub const fn present(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Create a `Maybe` whose value is built by the provided function, directly inside
    /// the container.
    ///
    /// This is the construct-in-place counterpart of [`Self::present`]: the callback stands
    /// in for an arbitrary constructor-argument list for `T`.
    #[inline]
    #[must_use]
    pub fn present_with<F>(init_value: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self { slot: Some(init_value()) }
    }

    /// Check whether this `Maybe` currently holds a value.
    ///
    /// Always O(1) and side-effect-free, in any state, including immediately after
    /// [`Self::take`].
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }

    /// Check whether this `Maybe` currently holds no value.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Get a reference to the held value, if there is one.
    #[inline]
    pub fn try_get(&self) -> Result<&T, EmptyMaybeAccess> {
        self.slot.as_ref().ok_or(EmptyMaybeAccess)
    }

    /// Get a mutable reference to the held value, if there is one.
    ///
    /// Mutation through the reference directly affects the held value.
    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, EmptyMaybeAccess> {
        self.slot.as_mut().ok_or(EmptyMaybeAccess)
    }

    /// Get a reference to the held value.
    ///
    /// # Panics
    /// Panics if this `Maybe` is empty. Use [`Self::try_get`] for callers that have not
    /// already checked presence.
    #[inline]
    #[must_use]
    pub fn get(&self) -> &T {
        #[expect(
            clippy::expect_used,
            reason = "the panicking variant exists for callers that already checked presence. \
                      Also, this is documented.",
        )]
        self.try_get().expect("`get` was called on an empty `Maybe`")
    }

    /// Get a mutable reference to the held value.
    ///
    /// # Panics
    /// Panics if this `Maybe` is empty. Use [`Self::try_get_mut`] for callers that have not
    /// already checked presence.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        #[expect(
            clippy::expect_used,
            reason = "the panicking variant exists for callers that already checked presence. \
                      Also, this is documented.",
        )]
        self.try_get_mut().expect("`get_mut` was called on an empty `Maybe`")
    }

    /// Consume this `Maybe` and return the held value, if there is one.
    #[inline]
    pub fn into_inner(self) -> Result<T, EmptyMaybeAccess> {
        self.slot.ok_or(EmptyMaybeAccess)
    }

    /// Consume this `Maybe` and convert it into the equivalent [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.slot
    }

    /// Put the given value into this `Maybe`, which afterwards holds that value.
    ///
    /// Any previously held value is dropped first. The new value is moved in whole; `T`'s
    /// clone machinery is not involved, unlike [`Clone::clone_from`].
    #[inline]
    pub fn set(&mut self, value: T) {
        self.slot = Some(value);
    }

    /// Empty this `Maybe`, dropping the held value if there is one.
    ///
    /// Does nothing to an already-empty container.
    #[inline]
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Transfer ownership of the held value out of this `Maybe`, without copying it.
    ///
    /// Afterwards, `self` is empty. Taking from an empty container yields an empty one and
    /// leaves `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self { slot: self.slot.take() }
    }
}

impl<T> Default for Maybe<T> {
    /// Create an empty `Maybe`.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Maybe<T> {
    /// Equivalent to [`Maybe::present`].
    #[inline]
    fn from(value: T) -> Self {
        Self::present(value)
    }
}

impl<T: Clone> Clone for Maybe<T> {
    /// Clone the held value, if any, into a new `Maybe` with independent ownership.
    #[inline]
    fn clone(&self) -> Self {
        Self { slot: self.slot.clone() }
    }

    /// Clone the held value of `source`, if any, into `self`, releasing whatever `self`
    /// previously held.
    ///
    /// When both sides hold a value, this delegates to `T::clone_from` on the existing
    /// value instead of dropping and rebuilding it.
    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.slot.clone_from(&source.slot);
    }
}

impl<T: Debug> Debug for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(value) = &self.slot {
            f.debug_tuple("Present").field(value).finish()
        } else {
            f.write_str("Empty")
        }
    }
}
