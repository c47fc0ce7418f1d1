// Collector result tagged with whether the value was observed or substituted.

/// A collector's output. Both variants carry a complete value, so the snapshot shape never
/// changes; the tag only records which path produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T> {
    Measured(T),
    Fallback(T),
}

impl<T> Reading<T> {
    pub fn value(&self) -> &T {
        match self {
            Reading::Measured(v) | Reading::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Reading::Measured(v) | Reading::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Reading::Fallback(_))
    }
}
