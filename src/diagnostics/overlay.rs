//! Debug-overlay draw commands and an optional rasterizer.
//!
//! The pipeline never draws into its working images; when diagnostics are
//! enabled it emits structured commands which a consumer can rasterize
//! over the scaled depth image (or render any other way). Omitting the
//! rasterizer does not change the algorithm.
use crate::contours::Bound;
use crate::image::GrayImageU8;
use serde::Serialize;

/// One overlay drawing request, in pixel coordinates.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Cross {
        x: f32,
        y: f32,
        size: f32,
        intensity: u8,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        intensity: u8,
    },
    Circle {
        x: f32,
        y: f32,
        radius: i32,
        intensity: u8,
    },
    Rect {
        bound: Bound,
        intensity: u8,
    },
    Outline {
        points: Vec<(i32, i32)>,
        intensity: u8,
    },
    /// Textual annotation (state, depth). Carried for structured consumers
    /// only; the grayscale rasterizer has no glyphs and skips it.
    Label {
        x: f32,
        y: f32,
        text: String,
    },
}

/// Rasterize commands over a copy of `base`. All drawing is clipped at the
/// image borders.
pub fn render_overlay(base: &GrayImageU8, commands: &[DrawCommand]) -> GrayImageU8 {
    let mut out = base.clone();
    for command in commands {
        match command {
            DrawCommand::Cross {
                x,
                y,
                size,
                intensity,
            } => {
                let s = *size;
                draw_line(&mut out, x - s, *y, x + s, *y, *intensity);
                draw_line(&mut out, *x, y - s, *x, y + s, *intensity);
            }
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                intensity,
            } => draw_line(&mut out, *x1, *y1, *x2, *y2, *intensity),
            DrawCommand::Circle {
                x,
                y,
                radius,
                intensity,
            } => draw_circle(&mut out, *x as i32, *y as i32, *radius, *intensity),
            DrawCommand::Rect { bound, intensity } => draw_rect(&mut out, bound, *intensity),
            DrawCommand::Outline { points, intensity } => {
                for &(px, py) in points {
                    out.set_clipped(px, py, *intensity);
                }
            }
            DrawCommand::Label { .. } => {}
        }
    }
    out
}

/// Bresenham line with border clipping.
fn draw_line(image: &mut GrayImageU8, x1: f32, y1: f32, x2: f32, y2: f32, intensity: u8) {
    let (mut x, mut y) = (x1.round() as i32, y1.round() as i32);
    let (ex, ey) = (x2.round() as i32, y2.round() as i32);
    let dx = (ex - x).abs();
    let dy = -(ey - y).abs();
    let sx = if x < ex { 1 } else { -1 };
    let sy = if y < ey { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        image.set_clipped(x, y, intensity);
        if x == ex && y == ey {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline.
fn draw_circle(image: &mut GrayImageU8, cx: i32, cy: i32, radius: i32, intensity: u8) {
    if radius <= 0 {
        image.set_clipped(cx, cy, intensity);
        return;
    }
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            image.set_clipped(px, py, intensity);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn draw_rect(image: &mut GrayImageU8, bound: &Bound, intensity: u8) {
    let (x0, y0) = (bound.x, bound.y);
    let (x1, y1) = (bound.x + bound.w - 1, bound.y + bound.h - 1);
    for x in x0..=x1 {
        image.set_clipped(x, y0, intensity);
        image.set_clipped(x, y1, intensity);
    }
    for y in y0..=y1 {
        image.set_clipped(x0, y, intensity);
        image.set_clipped(x1, y, intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_at_the_border_do_not_panic() {
        let base = GrayImageU8::new(20, 20);
        let commands = vec![
            DrawCommand::Cross {
                x: 0.0,
                y: 0.0,
                size: 6.0,
                intensity: 255,
            },
            DrawCommand::Line {
                x1: -10.0,
                y1: -10.0,
                x2: 30.0,
                y2: 30.0,
                intensity: 200,
            },
            DrawCommand::Circle {
                x: 19.0,
                y: 19.0,
                radius: 6,
                intensity: 255,
            },
            DrawCommand::Rect {
                bound: Bound {
                    x: 15,
                    y: 15,
                    w: 10,
                    h: 10,
                },
                intensity: 100,
            },
        ];
        let out = render_overlay(&base, &commands);
        assert_eq!(out.width(), 20);
    }

    #[test]
    fn cross_marks_the_anchor() {
        let base = GrayImageU8::new(20, 20);
        let out = render_overlay(
            &base,
            &[DrawCommand::Cross {
                x: 10.0,
                y: 10.0,
                size: 3.0,
                intensity: 255,
            }],
        );
        assert_eq!(out.get(10, 10), 255);
        assert_eq!(out.get(7, 10), 255);
        assert_eq!(out.get(10, 13), 255);
        assert_eq!(out.get(0, 0), 0);
    }

    #[test]
    fn labels_are_carried_but_not_rasterized() {
        let base = GrayImageU8::new(8, 8);
        let out = render_overlay(
            &base,
            &[DrawCommand::Label {
                x: 2.0,
                y: 2.0,
                text: "Open".into(),
            }],
        );
        assert!(out.as_view().data.iter().all(|&p| p == 0));
    }
}
