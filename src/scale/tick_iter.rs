use super::{Tick, linear};
use num_traits::Float;

/// Iterator over ticks produced by a scale.
pub struct TickIter<D> {
    inner: Box<dyn Iterator<Item = Tick<D>> + 'static>,
}

impl<D: 'static> TickIter<D> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Tick<D>> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Creates a `TickIter` from a fixed list of ticks.
    ///
    /// ```
    /// use hsmath::scale::{Tick, TickIter};
    ///
    /// let iter = TickIter::from_vec(vec![
    ///     Tick { value: -1.0, level: 0 },
    ///     Tick { value: 0.0, level: 0 },
    ///     Tick { value: 1.0, level: 0 },
    /// ]);
    /// assert_eq!(iter.count(), 3);
    /// ```
    pub fn from_vec(vec: Vec<Tick<D>>) -> Self {
        Self::new(vec.into_iter())
    }

    /// Creates a `TickIter` that produces no ticks.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<D: Float + 'static> TickIter<D> {
    pub(crate) fn from_linear(iter: linear::LinearTickIter<D>) -> Self {
        Self::new(iter)
    }
}

impl<D> Iterator for TickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
