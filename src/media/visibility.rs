// SPDX-License-Identifier: MPL-2.0
//! Slot geometry and viewport intersection.
//!
//! Pages lay out their lazy images in fixed-size slots, so each slot's
//! rectangle in content coordinates is known without asking the renderer.
//! The scrollable reports its viewport on every scroll and resize; a slot is
//! near-visible when it touches that viewport grown by the root margin.

use iced::{Rectangle, Size};

/// Grows `viewport` by `margin` on every side.
#[must_use]
pub fn inflate(viewport: Rectangle, margin: f32) -> Rectangle {
    let margin = margin.max(0.0);
    Rectangle {
        x: viewport.x - margin,
        y: viewport.y - margin,
        width: viewport.width + 2.0 * margin,
        height: viewport.height + 2.0 * margin,
    }
}

/// Edge-inclusive overlap test: a slot whose edge touches the inflated
/// viewport counts as intersecting.
#[must_use]
pub fn intersects(a: &Rectangle, b: &Rectangle) -> bool {
    a.x <= b.x + b.width && b.x <= a.x + a.width && a.y <= b.y + b.height && b.y <= a.y + a.height
}

/// Whether `slot` is within `margin` of `viewport`.
#[must_use]
pub fn is_near_visible(slot: &Rectangle, viewport: Rectangle, margin: f32) -> bool {
    intersects(slot, &inflate(viewport, margin))
}

/// Viewport rectangle in content coordinates from a scroll offset and the
/// visible size.
#[must_use]
pub fn content_viewport(offset_x: f32, offset_y: f32, bounds: Size) -> Rectangle {
    Rectangle {
        x: offset_x,
        y: offset_y,
        width: bounds.width,
        height: bounds.height,
    }
}

/// Number of grid columns that fit `available` width.
#[must_use]
pub fn grid_columns(available: f32, cell: f32, gap: f32) -> usize {
    if cell <= 0.0 || available < cell {
        return 1;
    }
    (((available + gap) / (cell + gap)).floor() as usize).max(1)
}

/// Vertical flow layout mirroring a page column.
///
/// Callers push blocks in the same order and with the same sizes as the
/// view builds its widgets; grids and lists return their slot rectangles.
#[derive(Debug, Clone)]
pub struct FlowLayout {
    x: f32,
    cursor_y: f32,
    width: f32,
    spacing: f32,
    first: bool,
}

impl FlowLayout {
    /// Starts a column at `(x, y)` that is `width` wide and separates
    /// children by `spacing`.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, spacing: f32) -> Self {
        Self {
            x,
            cursor_y: y,
            width,
            spacing,
            first: true,
        }
    }

    fn begin(&mut self) -> f32 {
        if self.first {
            self.first = false;
        } else {
            self.cursor_y += self.spacing;
        }
        self.cursor_y
    }

    /// A full-width block with a known height (headers, text rows).
    pub fn block(&mut self, height: f32) -> Rectangle {
        let y = self.begin();
        self.cursor_y += height;
        Rectangle {
            x: self.x,
            y,
            width: self.width,
            height,
        }
    }

    /// A wrapping grid of `count` square-ish cells.
    pub fn grid(&mut self, count: usize, cell: Size, gap: f32) -> Vec<Rectangle> {
        if count == 0 {
            return Vec::new();
        }
        let y = self.begin();
        let columns = grid_columns(self.width, cell.width, gap);
        let rows = count.div_ceil(columns);

        let slots = (0..count)
            .map(|index| {
                let column = index % columns;
                let row = index / columns;
                Rectangle {
                    x: self.x + column as f32 * (cell.width + gap),
                    y: y + row as f32 * (cell.height + gap),
                    width: cell.width,
                    height: cell.height,
                }
            })
            .collect();

        self.cursor_y = y + rows as f32 * cell.height + rows.saturating_sub(1) as f32 * gap;
        slots
    }

    /// A list of `count` rows, each `row_height` tall, returning the
    /// thumbnail rectangle at the start of each row.
    pub fn list(&mut self, count: usize, row_height: f32, thumb: Size, gap: f32) -> Vec<Rectangle> {
        if count == 0 {
            return Vec::new();
        }
        let y = self.begin();
        let slots = (0..count)
            .map(|index| Rectangle {
                x: self.x,
                y: y + index as f32 * (row_height + gap),
                width: thumb.width,
                height: thumb.height,
            })
            .collect();
        self.cursor_y = y + count as f32 * row_height + (count - 1) as f32 * gap;
        slots
    }

    /// Total content height consumed so far.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.cursor_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(y: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn slot_below_margin_is_not_visible() {
        let slot = Rectangle {
            x: 10.0,
            y: 701.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(!is_near_visible(&slot, viewport(0.0), 100.0));
        assert!(is_near_visible(&slot, viewport(1.0), 100.0));
    }

    #[test]
    fn slot_touching_margin_edge_counts() {
        let slot = Rectangle {
            x: 10.0,
            y: 700.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(is_near_visible(&slot, viewport(0.0), 100.0));
    }

    #[test]
    fn slot_above_viewport_within_margin_counts() {
        let slot = Rectangle {
            x: 10.0,
            y: 250.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(is_near_visible(&slot, viewport(420.0), 100.0));
        assert!(!is_near_visible(&slot, viewport(460.0), 100.0));
    }

    #[test]
    fn columns_fit_available_width() {
        assert_eq!(grid_columns(1000.0, 220.0, 12.0), 4);
        assert_eq!(grid_columns(100.0, 220.0, 12.0), 1);
        assert_eq!(grid_columns(452.0, 220.0, 12.0), 2);
    }

    #[test]
    fn grid_wraps_rows_and_advances_cursor() {
        let mut flow = FlowLayout::new(0.0, 0.0, 452.0, 16.0);
        let header = flow.block(48.0);
        let slots = flow.grid(3, Size::new(220.0, 220.0), 12.0);

        assert_eq!(header.y, 0.0);
        assert_eq!(slots[0].y, 64.0);
        assert_eq!(slots[1].x, 232.0);
        assert_eq!(slots[2].y, 64.0 + 232.0);
        assert_eq!(slots[2].x, 0.0);
        assert_eq!(flow.bottom(), 64.0 + 220.0 * 2.0 + 12.0);
    }

    #[test]
    fn empty_grid_consumes_nothing() {
        let mut flow = FlowLayout::new(0.0, 0.0, 400.0, 16.0);
        flow.block(10.0);
        assert!(flow.grid(0, Size::new(100.0, 100.0), 8.0).is_empty());
        assert_eq!(flow.bottom(), 10.0);
    }

    #[test]
    fn list_rows_stack_vertically() {
        let mut flow = FlowLayout::new(20.0, 0.0, 600.0, 0.0);
        let slots = flow.list(3, 132.0, Size::new(176.0, 110.0), 8.0);
        assert_eq!(slots[2].y, 2.0 * 140.0);
        assert_eq!(slots[2].x, 20.0);
        assert_eq!(flow.bottom(), 3.0 * 132.0 + 16.0);
    }
}
