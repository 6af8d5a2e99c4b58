//! Grid display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use pc_core::{Cell, Grid, Point};

use crate::theme::Theme;

/// Widget for rendering a carved grid, top row first
pub struct GridWidget<'a> {
    grid: &'a Grid,
    theme: &'a Theme,
    start: Option<Point>,
    end: Option<Point>,
    title: &'a str,
    failed: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, theme: &'a Theme) -> Self {
        Self {
            grid,
            theme,
            start: None,
            end: None,
            title: "pathcarve",
            failed: false,
        }
    }

    /// Mark the path's endpoints with `S` and `E`
    pub fn endpoints(mut self, start: Point, end: Point) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Draw the border in the danger color
    pub fn failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }

    fn cell_display(&self, p: Point) -> (char, Style) {
        if Some(p) == self.start {
            return ('S', Style::default().fg(self.theme.cell_start).bold());
        }
        if Some(p) == self.end {
            return ('E', Style::default().fg(self.theme.cell_end).bold());
        }

        let cell = self.grid.get(p).unwrap_or_default();
        let style = Style::default().fg(self.theme.cell_color(cell));
        match cell {
            Cell::Joint => (cell.symbol(), style.bold()),
            _ => (cell.symbol(), style),
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.failed {
            self.theme.border_danger
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(self.title);

        let inner = block.inner(area);
        block.render(area, buf);

        let height = self.grid.height();
        let rows = height.min(inner.height as usize);
        let cols = self.grid.width().min(inner.width as usize);

        for row in 0..rows {
            let y = (height - 1 - row) as i32;
            for x in 0..cols {
                let (ch, style) = self.cell_display(Point::new(x as i32, y));
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + row as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
