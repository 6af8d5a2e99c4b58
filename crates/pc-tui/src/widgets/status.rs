//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use pc_core::{CarveError, Carving};

use crate::sink::summary;
use crate::theme::Theme;

/// Result of the last generation plus key help
pub struct StatusWidget<'a> {
    outcome: &'a Result<Carving, CarveError>,
    seed: u64,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(outcome: &'a Result<Carving, CarveError>, seed: u64, theme: &'a Theme) -> Self {
        Self {
            outcome,
            seed,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line1, color) = match self.outcome {
            Ok(carving) => (
                format!("seed {}  {}", self.seed, summary(carving)),
                self.theme.good,
            ),
            Err(e) => (format!("seed {}  {}", self.seed, e), self.theme.bad),
        };
        let line2 = "r/space: next seed   q/Esc: quit";

        buf.set_string(area.x, area.y, &line1, Style::default().fg(color));
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                line2,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
