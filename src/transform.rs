//! Coordinate transformations from plot space to screen space.
//!
//! - **Plot space**: sampled function values, y increasing upward
//! - **Screen space**: SVG user units, origin top-left, y increasing downward
//!
//! A [`Transform`] pairs a screen rectangle with one [`Scale`] per axis and
//! performs the y-axis inversion between the two spaces.
//!
//! ```rust
//! use hsmath::{PlotPoint, ScreenRect, Transform, scale::Linear};
//!
//! let screen = ScreenRect { x: 0.0, y: 0.0, width: 800.0, height: 600.0 };
//! let x_scale = Linear::<f64, f32>::new(-10.0, 10.0);
//! let y_scale = Linear::<f64, f32>::new(-5.0, 5.0);
//! let transform = Transform::new(&screen, &x_scale, &y_scale);
//!
//! let origin = transform.chart_to_screen_opt(&PlotPoint::new(0.0, 0.0)).unwrap();
//! assert_eq!((origin.x, origin.y), (400.0, 300.0));
//!
//! // y = 5 is the top edge of the screen
//! assert_eq!(transform.y_to_screen_opt(&5.0), Some(0.0));
//! ```

use num_traits::Float;

use crate::scale::{Scale, util::sorted_pair};

/// A rectangle in screen coordinates; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect<S = f32> {
    pub x: S,
    pub y: S,
    pub width: S,
    pub height: S,
}

impl<S: Float> ScreenRect<S> {
    /// Shrinks the rectangle by `margin` on every side.
    ///
    /// The size never goes negative; an oversized margin collapses the
    /// rectangle onto its centre.
    pub fn inset(&self, margin: S) -> Self {
        let two = S::one() + S::one();
        let dx = margin.min(self.width / two).max(S::zero());
        let dy = margin.min(self.height / two).max(S::zero());
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - dx * two,
            height: self.height - dy * two,
        }
    }

    pub fn right(&self) -> S {
        self.x + self.width
    }

    pub fn bottom(&self) -> S {
        self.y + self.height
    }
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint<S = f32> {
    pub x: S,
    pub y: S,
}

impl<S> ScreenPoint<S> {
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

/// A point in plot coordinates: one sample `(x, f(x))`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotPoint<D = f64> {
    pub x: D,
    pub y: D,
}

impl<D> PlotPoint<D> {
    pub const fn new(x: D, y: D) -> Self {
        Self { x, y }
    }
}

impl<D: Float> PlotPoint<D> {
    /// Returns true if both coordinates are finite and can be drawn.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle in plot coordinates; `(x, y)` is the bottom-left corner.
///
/// Widths and heights are non-negative when built with [`PlotRect::from_points`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlotRect<D = f64> {
    pub x: D,
    pub y: D,
    pub width: D,
    pub height: D,
}

impl<D: Float> PlotRect<D> {
    /// Creates a `PlotRect` spanning two opposite corners, in either order.
    ///
    /// ```
    /// use hsmath::{PlotPoint, PlotRect};
    ///
    /// let rect = PlotRect::from_points(PlotPoint::new(2.0, 5.0), PlotPoint::new(-2.0, 1.0));
    /// assert_eq!(rect.x, -2.0);
    /// assert_eq!(rect.y, 1.0);
    /// assert_eq!(rect.width, 4.0);
    /// assert_eq!(rect.height, 4.0);
    /// ```
    pub fn from_points(p1: PlotPoint<D>, p2: PlotPoint<D>) -> Self {
        let (x_min, x_max) = sorted_pair(p1.x, p2.x);
        let (y_min, y_max) = sorted_pair(p1.y, p2.y);

        Self {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    pub fn max_x(&self) -> D {
        self.x + self.width
    }

    pub fn max_y(&self) -> D {
        self.y + self.height
    }

    /// Returns true if `point` lies inside the rectangle, bounds inclusive.
    pub fn contains(&self, point: &PlotPoint<D>) -> bool {
        let (min_x, max_x) = sorted_pair(self.x, self.max_x());
        let (min_y, max_y) = sorted_pair(self.y, self.max_y());
        point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
    }
}

/// Maps plot coordinates onto a screen rectangle.
///
/// # Type Parameters
///
/// - `D`: Domain type (sample values, typically `f64`)
/// - `N`: Normalized type used by the scales (typically `f32`)
/// - `S`: Screen type (typically `f32`)
///
/// Every mapping returns `None` when a numeric cast between `D`, `N` and `S`
/// is not representable.
#[derive(Clone, Copy)]
pub struct Transform<'a, D = f64, N = f32, S = f32> {
    screen_rect: &'a ScreenRect<S>,
    x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
}

impl<'a, D, N, S> Transform<'a, D, N, S> {
    pub const fn new(
        screen_rect: &'a ScreenRect<S>,
        x_scale: &'a dyn Scale<Domain = D, Normalized = N>,
        y_scale: &'a dyn Scale<Domain = D, Normalized = N>,
    ) -> Self {
        Self {
            screen_rect,
            x_scale,
            y_scale,
        }
    }

    /// Returns the screen rectangle passed to [`Transform::new`].
    pub const fn screen_bounds(&self) -> &ScreenRect<S> {
        self.screen_rect
    }
}

impl<'a, D, N, S> Transform<'a, D, N, S>
where
    N: Float,
    S: Float,
    D: Float,
{
    /// The visible plot area, taken from the two scale domains.
    pub fn plot_bounds(&self) -> PlotRect<D> {
        let (&x_min, &x_max) = self.x_scale.domain();
        let (&y_min, &y_max) = self.y_scale.domain();
        PlotRect::from_points(PlotPoint::new(x_min, y_min), PlotPoint::new(x_max, y_max))
    }

    pub fn chart_to_screen_opt(&self, plot_point: &PlotPoint<D>) -> Option<ScreenPoint<S>> {
        let sx = self.x_to_screen_opt(&plot_point.x)?;
        let sy = self.y_to_screen_opt(&plot_point.y)?;

        Some(ScreenPoint::new(sx, sy))
    }

    pub fn x_to_screen_opt(&self, plot_x: &D) -> Option<S> {
        let norm_x: N = self.x_scale.normalize_opt(plot_x)?;
        let screen_x: S = S::from(norm_x)?;
        Some(self.screen_rect.x + screen_x * self.screen_rect.width)
    }

    /// Includes the y-axis inversion.
    pub fn y_to_screen_opt(&self, plot_y: &D) -> Option<S> {
        let norm_y: N = self.y_scale.normalize_opt(plot_y)?;
        let inverted = S::one() - S::from(norm_y)?;

        Some(self.screen_rect.y + inverted * self.screen_rect.height)
    }
}
