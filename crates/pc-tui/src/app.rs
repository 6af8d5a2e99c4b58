//! Interactive viewer state

use crossterm::event::Event;
use log::{debug, info};
use ratatui::prelude::*;

use pc_core::{CarveConfig, CarveError, CarveRng, Carving, PathCarver};

use crate::input::{ViewerCommand, key_to_command};
use crate::theme::Theme;
use crate::widgets::{GridWidget, StatusWidget};

/// Shows one carving at a time and re-carves with successive seeds.
pub struct Viewer {
    carver: PathCarver<CarveRng>,
    seed: u64,
    outcome: Result<Carving, CarveError>,
    theme: Theme,
    should_quit: bool,
}

impl Viewer {
    /// Carve the first grid with `seed`
    pub fn new(config: CarveConfig, seed: u64, theme: Theme) -> pc_core::Result<Self> {
        let mut carver = PathCarver::new(config, CarveRng::new(seed))?;
        let outcome = carver.generate();
        Ok(Self {
            carver,
            seed,
            outcome,
            theme,
            should_quit: false,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn outcome(&self) -> &Result<Carving, CarveError> {
        &self.outcome
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Reseed with the next seed and carve again
    pub fn regenerate(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        *self.carver.rng_mut() = CarveRng::new(self.seed);
        self.outcome = self.carver.generate();
        debug!("seed {}: {}", self.seed, if self.outcome.is_ok() { "carved" } else { "failed" });
    }

    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        match key_to_command(key) {
            Some(ViewerCommand::Regenerate) => self.regenerate(),
            Some(ViewerCommand::Quit) => {
                info!("viewer closed at seed {}", self.seed);
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: grid on top, two status lines below
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(frame.area());

        let title = format!(" pathcarve  seed {} ", self.seed);
        let grid_widget = match &self.outcome {
            Ok(carving) => GridWidget::new(&carving.grid, &self.theme)
                .endpoints(carving.start, carving.end),
            Err(_) => GridWidget::new(self.carver.grid(), &self.theme).failed(true),
        };
        frame.render_widget(grid_widget.title(&title), chunks[0]);

        let status = StatusWidget::new(&self.outcome, self.seed, &self.theme);
        frame.render_widget(status, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn config() -> CarveConfig {
        CarveConfig::new(8, 6, 200).with_step_budget(20_000)
    }

    #[test]
    fn test_regenerate_advances_seed() {
        let mut viewer = Viewer::new(config(), 10, Theme::dark()).unwrap();
        viewer.handle_event(key(KeyCode::Char('r')));
        assert_eq!(viewer.seed(), 11);

        let expected = PathCarver::new(config(), CarveRng::new(11))
            .unwrap()
            .generate();
        assert_eq!(viewer.outcome(), &expected);
    }

    #[test]
    fn test_quit_keys() {
        let mut viewer = Viewer::new(config(), 1, Theme::dark()).unwrap();
        viewer.handle_event(key(KeyCode::Char('x')));
        assert!(!viewer.should_quit());
        viewer.handle_event(key(KeyCode::Esc));
        assert!(viewer.should_quit());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Viewer::new(CarveConfig::new(2, 2, 10), 1, Theme::dark());
        assert!(matches!(result, Err(CarveError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_render_shows_seed_and_keys() {
        let viewer = Viewer::new(config(), 3, Theme::dark()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| viewer.render(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let text: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("seed 3"));
        assert!(text.contains("q/Esc: quit"));
    }
}
