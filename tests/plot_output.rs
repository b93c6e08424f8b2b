use hsmath::{
    Error,
    plot::{Figure, PlotStyle, plot_function, plot_functions},
};

#[test]
fn test_save_svg_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parabola.svg");

    let figure = plot_function(|x| x * x - 2.0, -3.0, 3.0, 100).unwrap();
    figure.save_svg(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.trim_end().ends_with("</svg>"));
    assert_eq!(written, figure.render_svg().unwrap());
}

#[test]
fn test_save_svg_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("plot.svg");

    let figure = plot_function(f64::exp, 0.0, 1.0, 10).unwrap();
    let err = figure.save_svg(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_multiple_functions_use_palette_colors() {
    let line = |x: f64| 0.5 * x;
    let figure = plot_functions(&[&f64::sin, &line], -4.0, 4.0, 50)
        .unwrap()
        .with_style(PlotStyle::default().with_palette(["crimson", "teal"]));
    let svg = figure.render_svg().unwrap();

    assert_eq!(svg.matches(r#"<g class="series""#).count(), 2);
    assert!(svg.contains(r#"stroke="crimson""#));
    assert!(svg.contains(r#"stroke="teal""#));
    assert!(svg.contains("<title>f0</title>"));
    assert!(svg.contains("<title>f1</title>"));
}

#[test]
fn test_labels_are_escaped() {
    let figure = Figure::new(0.0, 1.0, 5)
        .unwrap()
        .with_function("x < 1 & y", |x| x);
    let svg = figure.render_svg().unwrap();
    assert!(svg.contains("<title>x &lt; 1 &amp; y</title>"));
}

#[test]
fn test_canvas_size_from_style() {
    let figure = Figure::new(0.0, 1.0, 5)
        .unwrap()
        .with_style(PlotStyle::default().with_size(320.0, 200.0))
        .with_function("id", |x| x);
    let svg = figure.render_svg().unwrap();
    assert!(svg.contains(r#"width="320" height="200" viewBox="0 0 320 200""#));
}

#[test]
fn test_ticks_can_be_disabled() {
    let figure = Figure::new(-5.0, 5.0, 11)
        .unwrap()
        .with_style(PlotStyle::default().with_ticks(false))
        .with_function("abs", f64::abs);
    let svg = figure.render_svg().unwrap();
    assert!(!svg.contains("<text"));
    // Only the two axis lines remain in the axes group
    assert_eq!(svg.matches("<line").count(), 2);
}

#[test]
fn test_function_with_no_finite_samples_still_renders_axes() {
    let figure = Figure::new(-2.0, -1.0, 10)
        .unwrap()
        .with_function("ln", f64::ln);
    assert_eq!(figure.y_domain(), (-1.0, 1.0));

    let svg = figure.render_svg().unwrap();
    assert!(!svg.contains("<polyline"));
    assert!(svg.contains(r#"<g class="axes""#));
}
