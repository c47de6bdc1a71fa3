use core::fmt;
use num_traits::Float;

use super::LogValue;

/// `LogValue(<as_is>)`. Not meant to be parsed back.
impl<T: Float + fmt::Display> fmt::Display for LogValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogValue(")?;
        fmt::Display::fmt(&self.as_is(), f)?;
        write!(f, ")")
    }
}
