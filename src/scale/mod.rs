//! Scales map data values (domain) to a normalized `[0, 1]` range.
//!
//! Plots sample functions in domain units; a [`Scale`] per axis turns those
//! values into fractions of the drawing area, and the [`crate::Transform`]
//! turns fractions into pixels. Scales also supply the tick marks drawn
//! along each axis.

mod linear;
mod tick_iter;
pub(crate) mod util;

pub use linear::{Linear, LinearTickIter};
pub use tick_iter::TickIter;

/// A tick mark on an axis.
///
/// `level` 0 is a major (labelled) tick, `level` 1 a minor one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick<D> {
    pub value: D,
    pub level: u8,
}

/// Mapping between a domain interval and the normalized range `[0, 1]`.
///
/// Mapping methods return `Option` because the domain and normalized types
/// may differ and a cast between them can fail.
pub trait Scale {
    type Domain;
    type Normalized;

    /// Returns the `(min, max)` domain as set, without sorting.
    fn domain(&self) -> (&Self::Domain, &Self::Domain);

    fn set_domain(&mut self, min: Self::Domain, max: Self::Domain);

    /// Maps a domain value to its normalized position. No clamping.
    fn normalize_opt(&self, value: &Self::Domain) -> Option<Self::Normalized>;

    /// Maps a normalized position back to the domain.
    fn denormalize_opt(&self, t: Self::Normalized) -> Option<Self::Domain>;

    fn tick_iter(&self) -> TickIter<Self::Domain>;

    /// Widens the domain so it covers `[other_min, other_max]`.
    fn extend_domain(&mut self, other_min: &Self::Domain, other_max: &Self::Domain);

    /// Collects all ticks for the current domain.
    fn ticks(&self) -> Vec<Tick<Self::Domain>> {
        self.tick_iter().collect()
    }

    /// Collects only the major (level 0) ticks.
    fn major_ticks(&self) -> Vec<Self::Domain> {
        self.tick_iter()
            .filter(|tick| tick.level == 0)
            .map(|tick| tick.value)
            .collect()
    }
}
