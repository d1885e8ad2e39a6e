pub mod capability;
pub mod error;
pub mod results_text;
pub mod score;
pub mod screen;
pub mod wish;

pub use error::{DareError, ShareFailure};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::capability::{Navigator, ShareSink};
    use crate::error::ShareFailure;
    use crate::score::Scores;
    use crate::wish::RandomSource;

    /// Build `Scores` from literal pairs. Panics on bad input.
    pub fn scores(pairs: &[(&str, i64)]) -> Scores {
        Scores::try_from_pairs(pairs.iter().map(|(n, p)| (*n, *p)))
            .expect("test scores must be valid")
    }

    /// Replays a fixed list of values, wrapping around, reduced into the bound.
    pub struct SequenceRandom {
        values: Vec<usize>,
        next: usize,
    }

    impl SequenceRandom {
        pub fn new(values: Vec<usize>) -> Self {
            assert!(!values.is_empty(), "SequenceRandom needs at least one value");
            Self { values, next: 0 }
        }
    }

    impl RandomSource for SequenceRandom {
        fn next_int(&mut self, bound: usize) -> usize {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value % bound
        }
    }

    /// Navigator that records every call.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub routes: Vec<String>,
        pub visited: Vec<String>,
        pub returns_to_start: usize,
    }

    impl RecordingNavigator {
        pub fn with_routes(routes: &[&str]) -> Self {
            Self {
                routes: routes.iter().map(|r| r.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn is_registered(&self, screen: &str) -> bool {
            self.routes.iter().any(|r| r == screen)
        }

        fn navigate_to(&mut self, screen: &str) {
            self.visited.push(screen.to_string());
        }

        fn return_to_start(&mut self) {
            self.returns_to_start += 1;
        }
    }

    /// Share target that keeps every payload.
    #[derive(Debug, Default)]
    pub struct RecordingShare {
        pub payloads: Vec<String>,
    }

    impl ShareSink for RecordingShare {
        fn share(&mut self, payload: &str) -> Result<(), ShareFailure> {
            self.payloads.push(payload.to_string());
            Ok(())
        }
    }

    /// Share target the user always cancels.
    #[derive(Debug, Default)]
    pub struct FailingShare;

    impl ShareSink for FailingShare {
        fn share(&mut self, _payload: &str) -> Result<(), ShareFailure> {
            Err(ShareFailure::Cancelled)
        }
    }
}
