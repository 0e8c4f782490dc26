use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::Float;
use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Scalar types that can be stored in the math containers
pub trait FloatValueType:
    Float
    + FromPrimitive
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Send
    + Sync
{
}

// Impl for all matching types
impl<T> FloatValueType for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + Send
        + Sync
{
}
