/// Default line colours, in the order series are drawn.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const FALLBACK_COLOR: &str = "#000000";

/// Presentation settings of a [`crate::plot::Figure`].
///
/// ```rust
/// use hsmath::plot::PlotStyle;
///
/// let style = PlotStyle::default()
///     .with_size(320.0, 240.0)
///     .with_ticks(false);
/// assert_eq!(style.width, 320.0);
/// assert!(!style.show_ticks);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Canvas width in SVG user units.
    pub width: f32,
    /// Canvas height in SVG user units.
    pub height: f32,
    /// Empty border around the plotting area.
    pub margin: f32,
    pub stroke_width: f32,
    /// Line colours, cycled when there are more series than colours.
    pub palette: Vec<String>,
    pub show_ticks: bool,
    /// Length of a major tick mark.
    pub tick_length: f32,
    /// Decimal places in tick labels.
    pub label_precision: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin: 32.0,
            stroke_width: 1.5,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            show_ticks: true,
            tick_length: 4.0,
            label_precision: 1,
        }
    }
}

impl PlotStyle {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ticks(mut self, show_ticks: bool) -> Self {
        self.show_ticks = show_ticks;
        self
    }

    pub fn with_label_precision(mut self, label_precision: usize) -> Self {
        self.label_precision = label_precision;
        self
    }

    /// Colour of the `index`-th series.
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_COLOR;
        }
        &self.palette[index % self.palette.len()]
    }
}
