#![feature(specialization)]
#![allow(
    incomplete_features,
    reason = "`specialization` is confined to `CrossEq` and the same-type probe, where every \
              specializing impl strictly narrows a blanket impl over the same types",
)]
#![cfg_attr(test, allow(
    unused_crate_dependencies,
    reason = "`oorandom` is only used by the integration tests",
))]

mod equality;
mod errors;
mod maybe;


pub use self::{
    equality::CrossEq,
    errors::EmptyMaybeAccess,
    maybe::Maybe,
};
