//! SVG output for [`Figure`].
//!
//! The bottom and left axis lines are placed at data zero (pinned to the
//! nearest edge when zero is out of view); the top and right ones are not
//! drawn.

use std::fmt::Write;

use super::{Figure, PlotStyle, Series};
use crate::error::{Error, Result};
use crate::scale::{Linear, Scale, util::clamp_to};
use crate::transform::{ScreenPoint, ScreenRect, Transform};

const AXIS_COLOR: &str = "#000000";
const LABEL_FONT_SIZE: f32 = 10.0;
// Tick labels outside [1e-4, 1e6) switch to exponent notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;
const SCIENTIFIC_FROM: f64 = 1e6;

pub(super) fn render(figure: &Figure) -> Result<String> {
    let style = figure.style();
    let canvas = ScreenRect {
        x: 0.0f32,
        y: 0.0f32,
        width: style.width,
        height: style.height,
    };
    let area = canvas.inset(style.margin);

    let (min_x, max_x) = figure.x_domain();
    let (min_y, max_y) = figure.y_domain();
    let x_scale = Linear::<f64, f32>::new(min_x, max_x);
    let y_scale = Linear::<f64, f32>::new(min_y, max_y);
    let transform = Transform::new(&area, &x_scale, &y_scale);

    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_coord(canvas.width),
        h = fmt_coord(canvas.height),
    )?;

    write_axes(&mut out, &transform, &x_scale, &y_scale, style)?;
    for (index, series) in figure.series().iter().enumerate() {
        write_series(&mut out, &transform, series, style.color(index), style)?;
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

fn write_axes(
    out: &mut String,
    transform: &Transform<'_, f64, f32, f32>,
    x_scale: &Linear<f64, f32>,
    y_scale: &Linear<f64, f32>,
    style: &PlotStyle,
) -> Result<()> {
    let area = transform.screen_bounds();
    let bounds = transform.plot_bounds();

    let axis_y = clamp_to(0.0, bounds.y, bounds.max_y());
    let axis_x = clamp_to(0.0, bounds.x, bounds.max_x());
    let screen_axis_y = transform
        .y_to_screen_opt(&axis_y)
        .ok_or(Error::Conversion { what: "x axis" })?;
    let screen_axis_x = transform
        .x_to_screen_opt(&axis_x)
        .ok_or(Error::Conversion { what: "y axis" })?;

    writeln!(out, r#"<g class="axes" stroke="{AXIS_COLOR}" stroke-width="1">"#)?;
    write_line(
        out,
        ScreenPoint::new(area.x, screen_axis_y),
        ScreenPoint::new(area.right(), screen_axis_y),
    )?;
    write_line(
        out,
        ScreenPoint::new(screen_axis_x, area.y),
        ScreenPoint::new(screen_axis_x, area.bottom()),
    )?;

    if style.show_ticks {
        let half = style.tick_length / 2.0;
        for value in x_scale.major_ticks() {
            let sx = transform
                .x_to_screen_opt(&value)
                .ok_or(Error::Conversion { what: "x tick" })?;
            write_line(
                out,
                ScreenPoint::new(sx, screen_axis_y - half),
                ScreenPoint::new(sx, screen_axis_y + half),
            )?;
            write_label(
                out,
                ScreenPoint::new(sx, screen_axis_y + half + LABEL_FONT_SIZE),
                "middle",
                value,
                style,
            )?;
        }
        for value in y_scale.major_ticks() {
            let sy = transform
                .y_to_screen_opt(&value)
                .ok_or(Error::Conversion { what: "y tick" })?;
            write_line(
                out,
                ScreenPoint::new(screen_axis_x - half, sy),
                ScreenPoint::new(screen_axis_x + half, sy),
            )?;
            write_label(
                out,
                ScreenPoint::new(screen_axis_x - half - 2.0, sy + LABEL_FONT_SIZE / 3.0),
                "end",
                value,
                style,
            )?;
        }
    }

    writeln!(out, "</g>")?;
    Ok(())
}

fn write_series(
    out: &mut String,
    transform: &Transform<'_, f64, f32, f32>,
    series: &Series,
    color: &str,
    style: &PlotStyle,
) -> Result<()> {
    writeln!(
        out,
        r#"<g class="series" fill="none" stroke="{}" stroke-width="{}">"#,
        escape(color),
        fmt_coord(style.stroke_width),
    )?;
    writeln!(out, "<title>{}</title>", escape(&series.label))?;

    for segment in series.segments() {
        let mut points = Vec::with_capacity(segment.len());
        for point in segment {
            let p = transform
                .chart_to_screen_opt(point)
                .ok_or(Error::Conversion { what: "sample point" })?;
            points.push(p);
        }

        if let [single] = points.as_slice() {
            writeln!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                fmt_coord(single.x),
                fmt_coord(single.y),
                fmt_coord(style.stroke_width),
                escape(color),
            )?;
            continue;
        }

        let coords = points
            .iter()
            .map(|p| format!("{},{}", fmt_coord(p.x), fmt_coord(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, r#"<polyline points="{coords}"/>"#)?;
    }

    writeln!(out, "</g>")?;
    Ok(())
}

fn write_line(out: &mut String, from: ScreenPoint<f32>, to: ScreenPoint<f32>) -> Result<()> {
    writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        fmt_coord(from.x),
        fmt_coord(from.y),
        fmt_coord(to.x),
        fmt_coord(to.y),
    )?;
    Ok(())
}

fn write_label(
    out: &mut String,
    at: ScreenPoint<f32>,
    anchor: &str,
    value: f64,
    style: &PlotStyle,
) -> Result<()> {
    writeln!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" stroke="none" fill="{AXIS_COLOR}">{}</text>"#,
        fmt_coord(at.x),
        fmt_coord(at.y),
        fmt_coord(LABEL_FONT_SIZE),
        fmt_label(value, style.label_precision),
    )?;
    Ok(())
}

/// Fixed notation for moderate magnitudes, exponent notation otherwise.
fn fmt_label(value: f64, precision: usize) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}

/// Two decimals, trailing zeros trimmed.
fn fmt_coord(value: f32) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_label_switches_to_exponent() {
        assert_eq!(fmt_label(0.0, 1), "0.0");
        assert_eq!(fmt_label(-2.5, 2), "-2.50");
        assert_eq!(fmt_label(250000.0, 1), "250000.0");
        assert_eq!(fmt_label(2.0e6, 1), "2.0e6");
        assert_eq!(fmt_label(-5.0e-5, 1), "-5.0e-5");
    }

    #[test]
    fn huge_y_domain_renders_finite_coordinates() {
        let figure = Figure::new(0.0, 200.0, 50)
            .unwrap()
            .with_function("exp", f64::exp);
        let svg = render(&figure).unwrap();

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        for label in svg.split("<text").skip(1) {
            let start = label.find('>').unwrap() + 1;
            let end = label.find("</text>").unwrap();
            assert!(end - start <= 12, "label too long: {}", &label[start..end]);
        }
        assert!(svg.contains("e86</text>"));
    }

    #[test]
    fn fmt_coord_trims_zeros() {
        assert_eq!(fmt_coord(12.0), "12");
        assert_eq!(fmt_coord(12.5), "12.5");
        assert_eq!(fmt_coord(0.126), "0.13");
        assert_eq!(fmt_coord(-0.001), "0");
        assert_eq!(fmt_coord(100.0), "100");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(escape("x < 1 & y > \"2\""), "x &lt; 1 &amp; y &gt; &quot;2&quot;");
    }

    #[test]
    fn axes_cross_at_origin() {
        let figure = Figure::new(-1.0, 1.0, 3)
            .unwrap()
            .with_style(
                PlotStyle::default()
                    .with_size(200.0, 100.0)
                    .with_margin(0.0)
                    .with_ticks(false),
            )
            .with_function("id", |x| x);
        let svg = render(&figure).unwrap();

        assert!(svg.contains(r#"<line x1="0" y1="50" x2="200" y2="50"/>"#));
        assert!(svg.contains(r#"<line x1="100" y1="0" x2="100" y2="100"/>"#));
        assert!(svg.contains(r#"<polyline points="0,100 100,50 200,0"/>"#));
    }

    #[test]
    fn axes_pinned_to_edge_when_zero_out_of_view() {
        let figure = Figure::new(1.0, 3.0, 3)
            .unwrap()
            .with_style(
                PlotStyle::default()
                    .with_size(200.0, 100.0)
                    .with_margin(0.0)
                    .with_ticks(false),
            )
            .with_function("shifted", |x| x + 10.0);
        let svg = render(&figure).unwrap();

        // y in [11, 13]: x axis sits on the bottom edge; x in [1, 3]: y axis on the left edge
        assert!(svg.contains(r#"<line x1="0" y1="100" x2="200" y2="100"/>"#));
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="0" y2="100"/>"#));
    }

    #[test]
    fn non_finite_samples_break_the_line() {
        let figure = Figure::new(-2.0, 2.0, 5)
            .unwrap()
            .with_function("recip", |x| 1.0 / x);
        let svg = render(&figure).unwrap();
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn isolated_sample_drawn_as_dot() {
        let figure = Figure::new(-1.0, 1.0, 3)
            .unwrap()
            .with_function("sqrt", f64::sqrt);
        let svg = render(&figure).unwrap();
        // Only x = 0 and x = 1 are finite, forming one segment
        assert_eq!(svg.matches("<polyline").count(), 1);

        let figure = Figure::new(0.0, 0.0, 1)
            .unwrap()
            .with_function("point", |_| 1.0);
        let svg = render(&figure).unwrap();
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn tick_labels_use_precision() {
        let figure = Figure::new(-10.0, 10.0, 21)
            .unwrap()
            .with_style(PlotStyle::default().with_label_precision(2))
            .with_function("id", |x| x);
        let svg = render(&figure).unwrap();
        assert!(svg.contains(">10.00</text>"));
        assert!(svg.contains(">-10.00</text>"));
    }
}
