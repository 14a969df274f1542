use crate::maybe::Maybe;


/// A value comparison that is defined for *every* pair of types.
///
/// `cross_eq` delegates to `==` whenever `Self: PartialEq<Rhs>` holds, and otherwise
/// evaluates to `false`. Which of the two happens is selected at compile time, per
/// monomorphization; an incomparable pair of types is not a compile error, and the
/// fallback never inspects the values at runtime.
///
/// This is the comparison [`Maybe`]'s `PartialEq` impl applies to the held values, which is
/// what lets two `Maybe`s be compared without any bound on their element types.
pub trait CrossEq<Rhs: ?Sized = Self> {
    /// Compare `self` against `other` if the two types share an equality operator,
    /// and return `false` if they do not.
    #[must_use]
    fn cross_eq(&self, other: &Rhs) -> bool;
}

impl<T: ?Sized, Rhs: ?Sized> CrossEq<Rhs> for T {
    /// Fallback for type pairs with no equality operator between them.
    #[inline]
    default fn cross_eq(&self, _other: &Rhs) -> bool {
        false
    }
}

impl<T, Rhs> CrossEq<Rhs> for T
where
    T:   PartialEq<Rhs> + ?Sized,
    Rhs: ?Sized,
{
    #[inline]
    fn cross_eq(&self, other: &Rhs) -> bool {
        self == other
    }
}


/// Compile-time probe for whether two type parameters resolved to the same type.
pub(crate) trait SameTypeAs<U: ?Sized> {
    #[must_use]
    fn same_type() -> bool;
}

impl<T: ?Sized, U: ?Sized> SameTypeAs<U> for T {
    #[inline]
    default fn same_type() -> bool {
        false
    }
}

impl<T: ?Sized> SameTypeAs<T> for T {
    #[inline]
    fn same_type() -> bool {
        true
    }
}


impl<T, U> PartialEq<Maybe<U>> for Maybe<T> {
    /// Compare two `Maybe`s, of possibly different element types.
    ///
    /// If both hold a value, the held values are compared with [`CrossEq`]: actual value
    /// comparison when `T: PartialEq<U>`, and `false` when the element types share no
    /// equality operator. If exactly one holds a value, the containers are unequal. If both
    /// are empty, the containers are equal only when `T` and `U` are the same type; an empty
    /// `Maybe<u32>` is not equal to an empty `Maybe<u64>`, even though their empty states
    /// look alike.
    fn eq(&self, other: &Maybe<U>) -> bool {
        match (&self.slot, &other.slot) {
            (Some(ours), Some(theirs)) => ours.cross_eq(theirs),
            (None, None)               => <T as SameTypeAs<U>>::same_type(),
            _                          => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}


#[cfg(test)]
mod tests {
    use super::*;


    /// Has no `PartialEq` impl at all, not even with itself.
    #[derive(Debug)]
    struct Apples;

    /// Also has no `PartialEq` impl, and no relation to `Apples`.
    #[derive(Debug)]
    struct Oranges;


    #[test]
    fn cross_eq_delegates_when_comparable() {
        assert!(1_u32.cross_eq(&1_u32));
        assert!(!1_u32.cross_eq(&2_u32));
        // `String: PartialEq<&str>` exists, so this is a value comparison.
        assert!(String::from("a").cross_eq(&"a"));
        assert!(!String::from("a").cross_eq(&"b"));
    }

    #[test]
    fn cross_eq_falls_back_when_not() {
        // Numeric types are convertible but not comparable across widths.
        assert!(!1_u32.cross_eq(&1_u64));
        // No equality on either side.
        assert!(!Apples.cross_eq(&Apples));
        assert!(!Apples.cross_eq(&Oranges));
    }

    #[test]
    fn same_type_probe() {
        assert!(<u32 as SameTypeAs<u32>>::same_type());
        assert!(!<u32 as SameTypeAs<u64>>::same_type());
        assert!(!<u32 as SameTypeAs<str>>::same_type());
    }

    #[test]
    fn both_present_same_type() {
        assert_eq!(Maybe::present(10_i32), Maybe::present(10_i32));
        assert_ne!(Maybe::present(10_i32), Maybe::present(11_i32));
    }

    #[test]
    fn both_present_comparable_types() {
        assert_eq!(Maybe::present(String::from("ten")), Maybe::present("ten"));
        assert_ne!(Maybe::present(String::from("ten")), Maybe::present("eleven"));
    }

    #[test]
    fn both_present_incomparable_types() {
        // These compile, and resolve to the fallback.
        assert_ne!(Maybe::present(Apples), Maybe::present(Apples));
        assert_ne!(Maybe::present(Apples), Maybe::present(Oranges));
        assert_ne!(Maybe::present(1_u32), Maybe::present(1_u64));
    }

    #[test]
    fn one_side_empty() {
        assert_ne!(Maybe::present(10_i32), Maybe::<i32>::empty());
        assert_ne!(Maybe::<i32>::empty(), Maybe::present(10_i32));
        // Unequal even if the empty side has a comparable element type.
        assert_ne!(Maybe::present(String::from("ten")), Maybe::<&str>::empty());
    }

    #[test]
    fn both_empty() {
        assert_eq!(Maybe::<i32>::empty(), Maybe::<i32>::empty());
        assert_eq!(Maybe::<Apples>::empty(), Maybe::<Apples>::empty());

        // Empty containers of distinct element types are unequal, even when one type is
        // convertible into the other.
        assert_ne!(Maybe::<i32>::empty(), Maybe::<i64>::empty());
        assert_ne!(Maybe::<String>::empty(), Maybe::<&str>::empty());
        assert_ne!(Maybe::<Apples>::empty(), Maybe::<Oranges>::empty());
    }
}
