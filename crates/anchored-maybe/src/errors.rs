use thiserror::Error;


/// The error returned when a value is extracted out of an empty [`Maybe`].
///
/// This error always signals a bug in the caller: either presence should have been checked
/// with [`Maybe::is_present`] first, or the failure should be treated as fatal to that code
/// path. There is nothing to retry and nothing to recover.
///
/// [`Maybe`]: crate::Maybe
/// [`Maybe::is_present`]: crate::Maybe::is_present
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("attempt to turn an empty `Maybe` into a value")]
pub struct EmptyMaybeAccess;
