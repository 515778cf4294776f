#![forbid(unsafe_code)]

//! Line, rectangle, and fill drawing.
//!
//! Shapes are never clipped. If any corner or endpoint is outside of the image
//! the whole call is skipped, the buffer is left byte-for-byte the same, and
//! the call returns `false`.
//!
//! Cost is proportional to the pixels touched, so a full [fill](Bmp565::fill)
//! is `O(width * height)`. Keep that in mind when redrawing on a timer.

use crate::{Bmp565, Rgb565};

impl<B: AsRef<[u8]> + AsMut<[u8]>> Bmp565<B> {
  /// Draws a one pixel wide line from `(x0,y0)` to `(x1,y1)`, both endpoints
  /// included.
  ///
  /// This is the integer Bresenham algorithm, so the line is 8-connected and
  /// looks the same in every octant.
  pub fn draw_line(
    &mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: impl Into<Rgb565>,
  ) -> bool {
    let mut canvas = self.canvas_mut();
    if !(canvas.contains_i32(x0, y0) && canvas.contains_i32(x1, y1)) {
      log::trace!("draw_line({x0}, {y0}, {x1}, {y1}) is out of bounds");
      return false;
    }
    let color = color.into();
    // i64 so that `2 * err` can't overflow on huge images.
    let (mut x, mut y) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));
    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    loop {
      // every point stays inside the box spanned by the two endpoints.
      canvas.row(y as u32)[x as usize] = color;
      if x == x1 && y == y1 {
        break;
      }
      let e2 = 2 * err;
      if e2 > -dy {
        err -= dy;
        x += sx;
      }
      if e2 < dx {
        err += dx;
        y += sy;
      }
    }
    true
  }

  /// Fills the rectangle with corners `(x0,y0)` and `(x1,y1)`, all edges
  /// included.
  ///
  /// The corners can be given in any order.
  pub fn draw_rect(
    &mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: impl Into<Rgb565>,
  ) -> bool {
    let mut canvas = self.canvas_mut();
    if !(canvas.contains_i32(x0, y0) && canvas.contains_i32(x1, y1)) {
      log::trace!("draw_rect({x0}, {y0}, {x1}, {y1}) is out of bounds");
      return false;
    }
    let color = color.into();
    let (x_low, x_high) = (x0.min(x1) as usize, x0.max(x1) as usize);
    let (y_low, y_high) = (y0.min(y1) as u32, y0.max(y1) as u32);
    for y in y_low..=y_high {
      canvas.row(y)[x_low..=x_high].fill(color);
    }
    true
  }

  /// Sets every pixel of the image to the color.
  ///
  /// Row padding is left alone.
  pub fn fill(&mut self, color: impl Into<Rgb565>) {
    let color = color.into();
    let mut canvas = self.canvas_mut();
    for y in 0..canvas.height {
      canvas.row(y).fill(color);
    }
  }
}
