//! Crate prelude.

// The actual prelude.
pub use crate::{
    linear_set,
    set::{DuplicateError, LinearSet},
    SetTrait,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use derive_more::{Display, IntoIterator};
pub(crate) use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
};
