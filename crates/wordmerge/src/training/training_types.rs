//! # Training Types
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};

/// A type that can be used as a word or pair count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}
