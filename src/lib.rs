//! High-school maths exercises
//!
//! `hsmath` collects a handful of classic exercises as a small, strongly typed
//! library:
//!
//! - [`solve_quadratic`] - real roots of `a·x² + b·x + c = 0`
//! - [`fibonacci`] - the Fibonacci sequence and the sum of its odd squares
//! - [`logarithm`] - logarithms to any base and numerical identity checks
//! - [`plot`] - sampling real functions and plotting them to SVG
//!
//! The numeric routines are generic over [`num_traits::Float`], so they work
//! with `f32`, `f64` or any third-party float type.
//!
//! # Quadratic Equations
//!
//! ```rust
//! use hsmath::{Error, solve_quadratic};
//!
//! // Two distinct roots, smaller first
//! assert_eq!(solve_quadratic(1.0, 0.0, -4.0)?, vec![-2.0, 2.0]);
//!
//! // A double root is reported twice
//! assert_eq!(solve_quadratic(2.0, 4.0, 2.0)?, vec![-1.0, -1.0]);
//!
//! // Negative discriminant: no real roots, not an error
//! assert!(solve_quadratic(1.0, 0.0, 1.0)?.is_empty());
//!
//! // Linear equation 2x - 6 = 0
//! assert_eq!(solve_quadratic(0.0, 2.0, -6.0)?, vec![3.0]);
//!
//! // Nothing to solve
//! assert!(matches!(
//!     solve_quadratic(0.0, 0.0, 1.0),
//!     Err(Error::DegenerateEquation)
//! ));
//! # Ok::<(), hsmath::Error>(())
//! ```
//!
//! # Plotting
//!
//! Plots are built from [`scale::Linear`] axes and a [`Transform`] mapping
//! plot coordinates to the SVG canvas:
//!
//! ```rust
//! use hsmath::plot::{Figure, PlotStyle};
//!
//! let svg = Figure::new(-6.0, 6.0, 200)?
//!     .with_style(PlotStyle::default().with_size(400.0, 300.0))
//!     .with_function("sin", f64::sin)
//!     .with_function("cos", f64::cos)
//!     .render_svg()?;
//! assert!(svg.contains("<polyline"));
//! # Ok::<(), hsmath::Error>(())
//! ```
//!

pub mod error;
pub mod fibonacci;
pub mod logarithm;
pub mod plot;
pub mod quadratic;
pub mod scale;
pub mod transform;

pub use error::{Error, Result};
pub use num_traits::Float;
pub use quadratic::solve_quadratic;
pub use scale::{Scale, Tick, TickIter};
pub use transform::{PlotPoint, PlotRect, ScreenPoint, ScreenRect, Transform};
