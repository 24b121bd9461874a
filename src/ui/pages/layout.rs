// SPDX-License-Identifier: MPL-2.0
//! Deterministic page geometry.
//!
//! Lazy slots are tested against the page viewport before they are drawn,
//! so pages lay out their image-bearing blocks with fixed sizes and compute
//! the same rectangles here. All rectangles are in the scrolled content's
//! coordinates.

use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{column, container, Column};
use iced::{Element, Length, Padding, Point, Rectangle};

/// Padding around the page column.
pub const PAGE_PADDING: f32 = spacing::LG;

/// Vertical gap between top-level page blocks.
pub const BLOCK_GAP: f32 = spacing::LG;

/// Gap between a section heading and its grid.
pub const HEADING_GAP: f32 = spacing::SM;

/// Horizontal placement of the centred page column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Width of the scrollable viewport.
    pub viewport_width: f32,
}

impl PageGeometry {
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        Self { viewport_width }
    }

    /// Usable width inside the page padding.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        (self.viewport_width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * PAGE_PADDING).max(0.0)
    }

    /// Top-left corner of the first block.
    #[must_use]
    pub fn origin(&self) -> Point {
        let spare = (self.viewport_width - sizing::CONTENT_MAX_WIDTH).max(0.0);
        Point::new(spare / 2.0 + PAGE_PADDING, PAGE_PADDING)
    }
}

/// Grid of equal square cells that wraps to the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    pub width: f32,
    pub cell: f32,
    pub gap: f32,
}

impl FlowLayout {
    #[must_use]
    pub fn new(width: f32, cell: f32, gap: f32) -> Self {
        Self { width, cell, gap }
    }

    /// Cells per row, never less than one.
    #[must_use]
    pub fn columns(&self) -> usize {
        let per_row = ((self.width + self.gap) / (self.cell + self.gap)).floor();
        if per_row.is_finite() && per_row >= 1.0 {
            per_row as usize
        } else {
            1
        }
    }

    #[must_use]
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns())
    }

    /// Total height of `count` cells.
    #[must_use]
    pub fn height(&self, count: usize) -> f32 {
        stacked_height(self.rows(count), self.cell, self.gap)
    }

    /// Rectangle of cell `index` for a grid whose top-left is `origin`.
    #[must_use]
    pub fn cell_rect(&self, origin: Point, index: usize) -> Rectangle {
        let columns = self.columns();
        let (row, col) = (index / columns, index % columns);
        Rectangle {
            x: origin.x + col as f32 * (self.cell + self.gap),
            y: origin.y + row as f32 * (self.cell + self.gap),
            width: self.cell,
            height: self.cell,
        }
    }
}

/// Height of `count` blocks of `size` separated by `gap`.
#[must_use]
pub fn stacked_height(count: usize, size: f32, gap: f32) -> f32 {
    if count == 0 {
        0.0
    } else {
        count as f32 * size + (count - 1) as f32 * gap
    }
}

/// Wraps page blocks in the centred, padded page column.
pub fn page_column<'a, M: 'a>(blocks: Vec<Element<'a, M>>) -> Element<'a, M> {
    let column: Column<'a, M> = column(blocks).spacing(BLOCK_GAP).width(Length::Fill);
    container(
        container(column)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(Padding::new(PAGE_PADDING)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_width_including_gaps() {
        // 3 * 100 + 2 * 10 = 320
        assert_eq!(FlowLayout::new(320.0, 100.0, 10.0).columns(), 3);
        assert_eq!(FlowLayout::new(319.0, 100.0, 10.0).columns(), 2);
        assert_eq!(FlowLayout::new(10.0, 100.0, 10.0).columns(), 1);
    }

    #[test]
    fn cells_wrap_to_next_row() {
        let flow = FlowLayout::new(320.0, 100.0, 10.0);
        let rect = flow.cell_rect(Point::new(5.0, 50.0), 4);
        assert_eq!(rect, Rectangle::new(Point::new(115.0, 160.0), iced::Size::new(100.0, 100.0)));
        assert_eq!(flow.rows(7), 3);
        assert_eq!(flow.height(7), 320.0);
        assert_eq!(flow.height(0), 0.0);
    }

    #[test]
    fn geometry_centres_wide_viewports() {
        let narrow = PageGeometry::new(800.0);
        assert_eq!(narrow.origin(), Point::new(PAGE_PADDING, PAGE_PADDING));
        assert_eq!(narrow.content_width(), 800.0 - 2.0 * PAGE_PADDING);

        let wide = PageGeometry::new(sizing::CONTENT_MAX_WIDTH + 200.0);
        assert_eq!(wide.origin().x, 100.0 + PAGE_PADDING);
        assert_eq!(
            wide.content_width(),
            sizing::CONTENT_MAX_WIDTH - 2.0 * PAGE_PADDING
        );
    }
}
