/// A value coming with the warnings raised while it was produced.
///
/// Readers use this type to keep on parsing when an input is suspicious but not invalid.
/// Warnings are handed over to a callback when the value is consumed.
#[derive(Debug)]
pub(crate) struct Warned<T> {
    value: T,
    warnings: Vec<String>,
}

impl<T> Warned<T> {
    /// Wraps a value without any warning.
    pub(crate) fn new(value: T) -> Self {
        Warned {
            value,
            warnings: vec![],
        }
    }

    /// Adds a warning to this value.
    pub(crate) fn warn<S>(mut self, warning: S) -> Self
    where
        S: Into<String>,
    {
        self.warnings.push(warning.into());
        self
    }

    /// Transforms the value, keeping the warnings.
    pub(crate) fn map<U, F>(self, f: F) -> Warned<U>
    where
        F: FnOnce(T) -> U,
    {
        Warned {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Pairs two values, concatenating their warnings.
    pub(crate) fn zip<U>(mut self, other: Warned<U>) -> Warned<(T, U)> {
        self.warnings.extend(other.warnings);
        Warned {
            value: (self.value, other.value),
            warnings: self.warnings,
        }
    }

    /// Returns the value, giving each warning to the callback in the order they were raised.
    pub(crate) fn consume_warnings<F>(self, mut f: F) -> T
    where
        F: FnMut(String),
    {
        self.warnings.into_iter().for_each(&mut f);
        self.value
    }
}
