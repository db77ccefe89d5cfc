use num::Float;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Gathers `Float`, `FromStr`, `Display`, and `Debug` in one trait.
/// Every type that is used as value of an expression needs to implement this, which
/// in practice means `f64` or `f32`.
pub trait DataType: Float + FromStr + Display + Debug {}
impl<T: Float + FromStr + Display + Debug> DataType for T {}
