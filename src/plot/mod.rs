//! Sampling real functions over an interval and plotting them.
//!
//! A [`Figure`] samples each function on the same evenly spaced abscissae
//! (see [`linspace`]) and renders all of them into one SVG document. Axis
//! lines cross at the data origin and there is no surrounding frame.
//!
//! # Examples
//!
//! ```rust
//! use hsmath::plot::Figure;
//!
//! let figure = Figure::new(-3.0, 3.0, 61)
//!     .unwrap()
//!     .with_function("x^2", |x| x * x)
//!     .with_function("2x + 1", |x| 2.0 * x + 1.0);
//!
//! assert_eq!(figure.series().len(), 2);
//! assert_eq!(figure.y_domain(), (-5.0, 9.0));
//!
//! let svg = figure.render_svg().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod style;
mod svg;

use std::path::Path;

pub use style::{DEFAULT_PALETTE, PlotStyle};

use crate::error::{Error, Result};
use crate::transform::PlotPoint;

/// `num` evenly spaced values from `min` to `max`, both inclusive.
///
/// `num == 0` yields an empty vector and `num == 1` yields `[min]`. The last
/// value is exactly `max`.
///
/// ```rust
/// use hsmath::plot::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// assert!(linspace(2.0, 3.0, 0).is_empty());
/// ```
pub fn linspace(min: f64, max: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = num - 1;
            // Interpolate rather than step: `max - min` overflows for wide bounds.
            (0..num)
                .map(|i| match i {
                    0 => min,
                    i if i == last => max,
                    i => {
                        let t = i as f64 / last as f64;
                        min * (1.0 - t) + max * t
                    }
                })
                .collect()
        }
    }
}

/// The samples of one function.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<PlotPoint<f64>>,
}

impl Series {
    /// Runs of consecutive finite points.
    ///
    /// NaN or infinite samples (a pole, a logarithm of a negative number)
    /// split the curve instead of being drawn.
    pub fn segments(&self) -> impl Iterator<Item = &[PlotPoint<f64>]> {
        self.points
            .split(|p| !p.is_finite())
            .filter(|run| !run.is_empty())
    }

    /// `(min, max)` of the finite y values, or `None` if there are none.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p.y, p.y)),
                Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
            })
    }
}

/// Evaluates `f` at `num` evenly spaced points of `[min, max]`.
pub fn sample<F>(label: impl Into<String>, f: F, min: f64, max: f64, num: usize) -> Series
where
    F: Fn(f64) -> f64,
{
    let points = linspace(min, max, num)
        .into_iter()
        .map(|x| PlotPoint::new(x, f(x)))
        .collect();
    Series {
        label: label.into(),
        points,
    }
}

/// One or more functions sampled over a common interval.
#[derive(Debug, Clone)]
pub struct Figure {
    min_x: f64,
    max_x: f64,
    num_points: usize,
    series: Vec<Series>,
    style: PlotStyle,
}

impl Figure {
    /// Creates an empty figure over `[min_x, max_x]` sampled at `num_points`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if a bound is not finite or `num_points`
    /// is zero.
    pub fn new(min_x: f64, max_x: f64, num_points: usize) -> Result<Self> {
        if !min_x.is_finite() {
            return Err(Error::invalid_argument("min_x", "must be finite"));
        }
        if !max_x.is_finite() {
            return Err(Error::invalid_argument("max_x", "must be finite"));
        }
        if num_points == 0 {
            return Err(Error::invalid_argument(
                "num_points",
                "at least one sample is required",
            ));
        }
        Ok(Self {
            min_x,
            max_x,
            num_points,
            series: Vec::new(),
            style: PlotStyle::default(),
        })
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Samples `f` and adds it as a new series.
    pub fn with_function<F>(mut self, label: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        self.add_function(label, f);
        self
    }

    /// Samples `f` and adds it as a new series.
    pub fn add_function<F>(&mut self, label: impl Into<String>, f: F)
    where
        F: Fn(f64) -> f64,
    {
        let series = sample(label, f, self.min_x, self.max_x, self.num_points);
        if series.y_extent().is_none() {
            log::warn!("series '{}' has no finite samples", series.label);
        }
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn x_domain(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    /// Extent of all finite samples, padded by 1 when it is empty or flat.
    pub fn y_domain(&self) -> (f64, f64) {
        let extent = self
            .series
            .iter()
            .filter_map(Series::y_extent)
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)));

        match extent {
            None => (-1.0, 1.0),
            Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
            Some(range) => range,
        }
    }

    /// Renders the figure as a standalone SVG document.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyFigure`] if no function was added.
    pub fn render_svg(&self) -> Result<String> {
        if self.series.is_empty() {
            return Err(Error::EmptyFigure);
        }
        log::debug!(
            "rendering {} series over x={:?} y={:?}",
            self.series.len(),
            self.x_domain(),
            self.y_domain()
        );
        svg::render(self)
    }

    /// Renders the figure and writes it to `path`.
    pub fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let document = self.render_svg()?;
        std::fs::write(path.as_ref(), document)?;
        log::debug!("wrote figure to {}", path.as_ref().display());
        Ok(())
    }
}

/// Plots a single function over `[min_x, max_x]`.
pub fn plot_function<F>(f: F, min_x: f64, max_x: f64, num_points: usize) -> Result<Figure>
where
    F: Fn(f64) -> f64,
{
    Ok(Figure::new(min_x, max_x, num_points)?.with_function("f", f))
}

/// Plots several functions on shared axes; series are labelled `f0`, `f1`, ...
pub fn plot_functions(
    functions: &[&dyn Fn(f64) -> f64],
    min_x: f64,
    max_x: f64,
    num_points: usize,
) -> Result<Figure> {
    let mut figure = Figure::new(min_x, max_x, num_points)?;
    for (i, f) in functions.iter().enumerate() {
        figure.add_function(format!("f{i}"), *f);
    }
    Ok(figure)
}
