use std::fmt::{Debug, Display};
use std::ops::Mul;

use num_traits::Zero;

/// Capability set required of a matrix element type.
///
/// `Zero` supplies the additive identity and addition; `Mul` supplies
/// multiplication. `Copy` lets kernels keep elements in local accumulators,
/// and `Display` is needed only for rendering. All primitive integer and
/// float types qualify.
pub trait Element:
    Copy + Zero + Mul<Output = Self> + PartialEq + Debug + Display + Send + Sync + 'static
{
}

impl<T> Element for T where
    T: Copy + Zero + Mul<Output = T> + PartialEq + Debug + Display + Send + Sync + 'static
{
}
