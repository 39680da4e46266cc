//! Rendering unfoldings as SVG documents.

use std::fmt::Write;

use clap::ValueEnum;
use polyfold::{SquareType, Unfolding};

/// How one kind of square is drawn.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub fill: &'static str,
    pub stroke: &'static str,
}

/// The built-in style tables.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum Palette {
    #[default]
    Color,
    Monochrome,
}

impl Style {
    /// The style of a square of the given kind in `palette`.
    pub fn for_square(kind: SquareType, palette: Palette) -> Self {
        let fill = match (palette, kind) {
            (Palette::Color, SquareType::TopBase) => "#f4a259",
            (Palette::Color, SquareType::BottomBase) => "#5b8e7d",
            (Palette::Color, SquareType::Circumference) => "#8cb369",
            (Palette::Color, SquareType::Hole) => "#bc4b51",
            (Palette::Monochrome, SquareType::TopBase) => "#ffffff",
            (Palette::Monochrome, SquareType::BottomBase) => "#d9d9d9",
            (Palette::Monochrome, SquareType::Circumference) => "#a6a6a6",
            (Palette::Monochrome, SquareType::Hole) => "#595959",
        };

        Style {
            fill,
            stroke: "#000000",
        }
    }
}

/// Draw every square of `unfolding` as a `scale`×`scale` rectangle.
///
/// Unfolding coordinates grow upwards, SVG coordinates downwards, so rows
/// are flipped.
pub fn render(unfolding: &Unfolding, scale: u32, palette: Palette) -> String {
    let scale = scale.max(1) as i64;
    let mut out = String::new();

    let (min, max) = match unfolding.bounds() {
        Some(b) => b,
        None => {
            out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"/>"#);
            out.push('\n');
            return out;
        }
    };

    let width = (max.x - min.x + 1) * scale;
    let height = (max.y - min.y + 1) * scale;

    // Writing into a `String` cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for kind in SquareType::ALL {
        let style = Style::for_square(kind, palette);
        let _ = writeln!(out, r#"  <g fill="{}" stroke="{}">"#, style.fill, style.stroke);

        for square in unfolding.squares().filter(|s| s.kind == kind) {
            let x = (square.pos.x - min.x) * scale;
            let y = (max.y - square.pos.y) * scale;
            let _ = writeln!(
                out,
                r#"    <rect x="{x}" y="{y}" width="{scale}" height="{scale}"/>"#
            );
        }

        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyfold::{PlanePolycube, Polycube, Position3};

    #[test]
    fn one_rect_per_square() {
        let cube = Polycube::from_positions([Position3::new(0, 0, 0)]);
        let unfolding = PlanePolycube::project(&cube).unwrap().unfold().unwrap();

        let svg = render(&unfolding, 10, Palette::Color);

        assert_eq!(svg.matches("<rect").count(), unfolding.len());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_unfolding() {
        let svg = render(&Unfolding::default(), 10, Palette::Monochrome);
        assert!(!svg.contains("<rect"));
    }
}
