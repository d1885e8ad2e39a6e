use std::io::{BufRead, Write};

use dare_eye_core::DareError;
use dare_eye_core::capability::{NavOutcome, Navigator, ShareSink, go, route};
use dare_eye_core::score::Scores;
use dare_eye_core::screen::home::HomeScreen;
use dare_eye_core::screen::results::{
    ActionOutcome, DismissKind, ResultsAction, ResultsScreen, ResultsState, ScreenContext,
};
use dare_eye_core::wish::{RandomSource, WishCatalog};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::nav::StackNavigator;
use crate::scores_file::parse_score_line;

const APP_TITLE: &str = "BULL’S DARE EYE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-driven host for the home and results screens.
pub struct Shell<W: Write> {
    out: W,
    nav: StackNavigator,
    share: Box<dyn ShareSink>,
    rng: Box<dyn RandomSource>,
    home: HomeScreen,
    catalog: WishCatalog,
    share_header: String,
    results: Option<ResultsScreen>,
    setup: Scores,
}

impl<W: Write> Shell<W> {
    pub fn new(
        config: &AppConfig,
        share: Box<dyn ShareSink>,
        rng: Box<dyn RandomSource>,
        out: W,
    ) -> Result<Self, AppError> {
        Ok(Self {
            out,
            nav: StackNavigator::new(&config.routes),
            share,
            rng,
            home: HomeScreen::new(config.navigation_policy()),
            catalog: config.wish_catalog()?,
            share_header: config.share.header.clone(),
            results: None,
            setup: Scores::new(),
        })
    }

    pub fn navigator(&self) -> &StackNavigator {
        &self.nav
    }

    pub fn results(&self) -> Option<&ResultsScreen> {
        self.results.as_ref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Show the results screen for `scores`.
    pub fn open_results(&mut self, scores: &Scores) -> Result<NavOutcome, AppError> {
        let screen =
            ResultsScreen::new(scores, self.catalog.clone()).with_share_header(&self.share_header);
        let policy = self.home.policy();
        let outcome = go(&mut self.nav, route::GAME_RESULTS, policy)?;
        if outcome == NavOutcome::Navigated {
            self.results = Some(screen);
        }
        Ok(outcome)
    }

    /// Run until `q` on the home screen or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        tracing::info!("session started");
        self.render()?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(line.trim())? == Flow::Quit {
                break;
            }
            self.render()?;
        }
        tracing::info!("session ended");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow, AppError> {
        let current = self.nav.current().to_string();
        match current.as_str() {
            route::HOME => self.handle_home(line),
            route::GAME_SETUP => self.handle_setup(line),
            route::GAME_RESULTS => self.handle_results(line),
            _ => {
                self.nav.return_to_start();
                Ok(Flow::Continue)
            },
        }
    }

    fn handle_home(&mut self, line: &str) -> Result<Flow, AppError> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok(Flow::Quit);
        }
        let pressed = match line.parse::<usize>() {
            Ok(n) if n > 0 => self.home.press(n - 1, &mut self.nav),
            Ok(_) => Err(DareError::NoSuchMenuItem(line.to_string())),
            Err(_) => self.home.press_label(line, &mut self.nav),
        };
        match pressed {
            Ok(_) => {
                if self.nav.current() == route::GAME_SETUP {
                    self.setup = Scores::new();
                }
            },
            Err(e) => writeln!(self.out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_setup(&mut self, line: &str) -> Result<Flow, AppError> {
        if line.is_empty() {
            let scores = std::mem::take(&mut self.setup);
            // Results replace the setup screen.
            self.nav.return_to_start();
            match self.open_results(&scores) {
                Ok(_) => {},
                Err(AppError::Core(e)) => writeln!(self.out, "error: {e}")?,
                Err(e) => return Err(e),
            }
            return Ok(Flow::Continue);
        }
        match parse_score_line(line) {
            Ok((name, _)) if self.setup.get(&name).is_some() => {
                writeln!(self.out, "error: {}", DareError::DuplicatePlayer(name))?;
            },
            Ok((name, points)) => {
                self.setup.insert(name, points)?;
            },
            Err(e) => writeln!(self.out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn handle_results(&mut self, line: &str) -> Result<Flow, AppError> {
        let Some(screen) = self.results.as_mut() else {
            self.nav.return_to_start();
            return Ok(Flow::Continue);
        };
        let wish_open = matches!(screen.state(), ResultsState::WishShown(_));
        let action = match (wish_open, line.to_ascii_lowercase().as_str()) {
            (true, "ok") => ResultsAction::Dismiss(DismissKind::ExitToMenu),
            (true, "close") => ResultsAction::Dismiss(DismissKind::Close),
            (true, _) => {
                writeln!(self.out, "Close the wish first: ok or close")?;
                return Ok(Flow::Continue);
            },
            (false, "w") => ResultsAction::RequestWish,
            (false, "s") => ResultsAction::Share,
            (false, "e") => ResultsAction::EndGame,
            (false, _) => return Ok(Flow::Continue),
        };

        let mut ctx = ScreenContext {
            nav: &mut self.nav,
            share: self.share.as_mut(),
            rng: self.rng.as_mut(),
        };
        match screen.handle(action, &mut ctx) {
            ActionOutcome::NoWinner => writeln!(self.out, "Nobody scored, the box stays shut.")?,
            ActionOutcome::ReturnedToStart => self.results = None,
            ActionOutcome::WishShown
            | ActionOutcome::Dismissed
            | ActionOutcome::Shared { .. } => {},
        }
        Ok(Flow::Continue)
    }

    fn render(&mut self) -> Result<(), AppError> {
        let current = self.nav.current().to_string();
        match current.as_str() {
            route::HOME => self.render_home()?,
            route::GAME_SETUP => self.render_setup()?,
            route::GAME_RESULTS => self.render_results()?,
            other => {
                writeln!(self.out, "\n{other}")?;
                writeln!(self.out, "(press enter to return)")?;
            },
        }
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }

    fn render_home(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "\n{APP_TITLE}")?;
        for (i, item) in self.home.items().iter().enumerate() {
            writeln!(self.out, "  {}) {}", i + 1, item.label)?;
        }
        writeln!(self.out, "  q) quit")
    }

    fn render_setup(&mut self) -> std::io::Result<()> {
        if self.setup.is_empty() {
            writeln!(self.out, "\nGAME SETUP")?;
            writeln!(self.out, "Enter each player as name=points. Empty line when done.")?;
        }
        Ok(())
    }

    fn render_results(&mut self) -> std::io::Result<()> {
        let Some(screen) = self.results.as_ref() else {
            return Ok(());
        };
        let view = screen.view();
        if let Some(wish) = view.wish {
            writeln!(self.out, "\n~ A wish from the box ~")?;
            writeln!(self.out, "{wish}")?;
            return writeln!(self.out, "[ok] Ok, exit to menu   [close] back to results");
        }
        writeln!(self.out, "\n{}", view.title)?;
        writeln!(self.out, "{}", view.banner)?;
        writeln!(self.out, "Results:")?;
        if let Some(winner) = &view.winner {
            writeln!(self.out, "* {}  {}", winner.name, winner.points)?;
            writeln!(self.out, "  {}", winner.subtitle)?;
        }
        for entry in view.others {
            writeln!(self.out, "  {}  {}", entry.name, entry.points)?;
        }
        writeln!(self.out, "[w] Get a wish from the box   [s] Share   [e] End the game")
    }
}
