use crate::capability::{Navigator, ShareSink};
use crate::error::ShareFailure;
use crate::results_text::{SHARE_HEADER, share_message};
use crate::score::{Ranking, ScoreEntry, Scores, rank};
use crate::wish::{RandomSource, WishCatalog, WishSelection};

pub const TITLE: &str = "FINAL! GAME OVER";
pub const BANNER: &str = "Everyone was great,\nstay as you are!";
pub const WINNER_SUBTITLE: &str = "Make a wish for whoever you want";

/// Whether the wish dialog is up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsState {
    #[default]
    Idle,
    WishShown(WishSelection),
}

/// How the wish dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissKind {
    /// "Ok, exit to menu".
    ExitToMenu,
    /// Back gesture; stays on the results screen.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    RequestWish,
    Dismiss(DismissKind),
    Share,
    EndGame,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    WishShown,
    /// Nobody played, so nobody gets a wish.
    NoWinner,
    Dismissed,
    Shared {
        delivered: bool,
    },
    ReturnedToStart,
}

/// Collaborators the results screen needs to react to input.
pub struct ScreenContext<'a> {
    pub nav: &'a mut dyn Navigator,
    pub share: &'a mut dyn ShareSink,
    pub rng: &'a mut dyn RandomSource,
}

/// The highlighted first-place row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerRow<'a> {
    pub name: &'a str,
    pub points: i64,
    pub subtitle: &'static str,
}

/// Everything needed to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView<'a> {
    pub title: &'static str,
    pub banner: &'static str,
    pub winner: Option<WinnerRow<'a>>,
    pub others: &'a [ScoreEntry],
    pub wish: Option<&'a str>,
}

/// End-of-game standings plus the wish box.
#[derive(Debug, Clone)]
pub struct ResultsScreen {
    ranking: Ranking,
    catalog: WishCatalog,
    state: ResultsState,
    share_header: String,
}

impl ResultsScreen {
    pub fn new(scores: &Scores, catalog: WishCatalog) -> Self {
        Self {
            ranking: rank(scores),
            catalog,
            state: ResultsState::Idle,
            share_header: SHARE_HEADER.to_string(),
        }
    }

    pub fn with_share_header(mut self, header: impl Into<String>) -> Self {
        self.share_header = header.into();
        self
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    /// Draw a fresh wish and show it. Does nothing without a winner.
    pub fn request_wish(&mut self, rng: &mut dyn RandomSource) -> Option<&WishSelection> {
        if self.ranking.winner().is_none() {
            tracing::debug!("wish requested with no winner");
            return None;
        }
        self.state = ResultsState::WishShown(self.catalog.pick(rng));
        match &self.state {
            ResultsState::WishShown(selection) => Some(selection),
            ResultsState::Idle => None,
        }
    }

    /// Close the wish dialog. Always ends in `Idle`.
    pub fn dismiss(&mut self, kind: DismissKind, nav: &mut dyn Navigator) {
        self.state = ResultsState::Idle;
        if kind == DismissKind::ExitToMenu {
            nav.return_to_start();
        }
    }

    pub fn end_game(&mut self, nav: &mut dyn Navigator) {
        self.state = ResultsState::Idle;
        nav.return_to_start();
    }

    /// Share the standings. The caller decides whether a failure matters.
    pub fn share(&self, sink: &mut dyn ShareSink) -> Result<(), ShareFailure> {
        sink.share(&share_message(&self.ranking, &self.share_header))
    }

    pub fn handle(&mut self, action: ResultsAction, ctx: &mut ScreenContext<'_>) -> ActionOutcome {
        match action {
            ResultsAction::RequestWish => match self.request_wish(ctx.rng) {
                Some(_) => ActionOutcome::WishShown,
                None => ActionOutcome::NoWinner,
            },
            ResultsAction::Dismiss(kind) => {
                self.dismiss(kind, ctx.nav);
                match kind {
                    DismissKind::ExitToMenu => ActionOutcome::ReturnedToStart,
                    DismissKind::Close => ActionOutcome::Dismissed,
                }
            },
            ResultsAction::Share => {
                let delivered = match self.share(ctx.share) {
                    Ok(()) => true,
                    Err(e) => {
                        // Not shown to the player.
                        tracing::debug!(error = %e, "share failed, ignoring");
                        false
                    },
                };
                ActionOutcome::Shared { delivered }
            },
            ResultsAction::EndGame => {
                self.end_game(ctx.nav);
                ActionOutcome::ReturnedToStart
            },
        }
    }

    pub fn view(&self) -> ResultsView<'_> {
        ResultsView {
            title: TITLE,
            banner: BANNER,
            winner: self.ranking.winner().map(|w| WinnerRow {
                name: &w.name,
                points: w.points,
                subtitle: WINNER_SUBTITLE,
            }),
            others: self.ranking.runners_up(),
            wish: match &self.state {
                ResultsState::WishShown(selection) => Some(selection.text.as_str()),
                ResultsState::Idle => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::route;
    use crate::test_helpers::{
        FailingShare, RecordingNavigator, RecordingShare, SequenceRandom, scores,
    };
    use crate::wish::DEFAULT_WISHES;

    fn screen() -> ResultsScreen {
        ResultsScreen::new(
            &scores(&[("Cy", 2), ("Ann", 5), ("Bo", 5)]),
            WishCatalog::default(),
        )
    }

    #[test]
    fn view_highlights_winner() {
        let screen = screen();
        let view = screen.view();
        assert_eq!(view.title, "FINAL! GAME OVER");
        let winner = view.winner.unwrap();
        assert_eq!(winner.name, "Ann");
        assert_eq!(winner.points, 5);
        assert_eq!(winner.subtitle, WINNER_SUBTITLE);
        let others: Vec<_> = view.others.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(others, vec!["Bo", "Cy"]);
        assert!(view.wish.is_none());
    }

    #[test]
    fn request_wish_shows_drawn_wish() {
        let mut screen = screen();
        let mut rng = SequenceRandom::new(vec![4]);
        let selection = screen.request_wish(&mut rng).unwrap().clone();
        assert_eq!(selection.text, DEFAULT_WISHES[4]);
        assert_eq!(screen.state(), &ResultsState::WishShown(selection));
        assert_eq!(screen.view().wish, Some(DEFAULT_WISHES[4]));
    }

    #[test]
    fn no_winner_means_no_wish() {
        let mut screen = ResultsScreen::new(&Scores::new(), WishCatalog::default());
        let mut rng = SequenceRandom::new(vec![0]);
        assert!(screen.request_wish(&mut rng).is_none());
        assert_eq!(screen.state(), &ResultsState::Idle);
        let view = screen.view();
        assert!(view.winner.is_none());
        assert!(view.others.is_empty());
    }

    #[test]
    fn dismiss_always_returns_to_idle() {
        let mut screen = screen();
        let mut rng = SequenceRandom::new(vec![1, 2, 3]);
        let mut nav = RecordingNavigator::with_routes(&[route::GAME_RESULTS]);
        for _ in 0..3 {
            screen.request_wish(&mut rng);
        }
        screen.dismiss(DismissKind::Close, &mut nav);
        assert_eq!(screen.state(), &ResultsState::Idle);
        assert_eq!(nav.returns_to_start, 0);

        screen.request_wish(&mut rng);
        screen.dismiss(DismissKind::ExitToMenu, &mut nav);
        assert_eq!(screen.state(), &ResultsState::Idle);
        assert_eq!(nav.returns_to_start, 1);
    }

    #[test]
    fn handle_drives_state_machine() {
        let mut screen = screen();
        let mut nav = RecordingNavigator::with_routes(&[]);
        let mut share = RecordingShare::default();
        let mut rng = SequenceRandom::new(vec![0]);
        let mut ctx = ScreenContext {
            nav: &mut nav,
            share: &mut share,
            rng: &mut rng,
        };

        assert_eq!(screen.handle(ResultsAction::RequestWish, &mut ctx), ActionOutcome::WishShown);
        assert_eq!(
            screen.handle(ResultsAction::Dismiss(DismissKind::Close), &mut ctx),
            ActionOutcome::Dismissed
        );
        assert_eq!(
            screen.handle(ResultsAction::Share, &mut ctx),
            ActionOutcome::Shared { delivered: true }
        );
        assert_eq!(screen.handle(ResultsAction::EndGame, &mut ctx), ActionOutcome::ReturnedToStart);
        assert_eq!(nav.returns_to_start, 1);
        assert_eq!(
            share.payloads,
            vec![
                "Bull’s Dare Eye — Results:\n1. Ann — 5\n2. Bo — 5\n3. Cy — 2\nWinner: Ann"
                    .to_string()
            ]
        );
    }

    #[test]
    fn share_failure_is_swallowed() {
        let mut screen = screen().with_share_header("Tonight:");
        let mut nav = RecordingNavigator::with_routes(&[]);
        let mut share = FailingShare;
        let mut rng = SequenceRandom::new(vec![0]);
        let mut ctx = ScreenContext {
            nav: &mut nav,
            share: &mut share,
            rng: &mut rng,
        };
        assert_eq!(
            screen.handle(ResultsAction::Share, &mut ctx),
            ActionOutcome::Shared { delivered: false }
        );
        assert_eq!(screen.state(), &ResultsState::Idle);
    }
}
