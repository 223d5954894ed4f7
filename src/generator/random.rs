use rand::Rng;

/// Draws used by the punch generator.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn chance(&mut self) -> f64;

    /// Uniform integer in `[low, high]`.
    fn pick(&mut self, low: u32, high: u32) -> u32;
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn chance(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    fn pick(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays fixed draws; panics when the script runs dry.
    #[derive(Default)]
    pub struct Scripted {
        chances: VecDeque<f64>,
        picks: VecDeque<u32>,
    }

    impl Scripted {
        pub fn new(chances: &[f64], picks: &[u32]) -> Self {
            Self {
                chances: chances.iter().copied().collect(),
                picks: picks.iter().copied().collect(),
            }
        }

        pub fn exhausted(&self) -> bool {
            self.chances.is_empty() && self.picks.is_empty()
        }
    }

    impl RandomSource for Scripted {
        fn chance(&mut self) -> f64 {
            self.chances.pop_front().expect("chance script exhausted")
        }

        fn pick(&mut self, low: u32, high: u32) -> u32 {
            let v = self.picks.pop_front().expect("pick script exhausted");
            assert!((low..=high).contains(&v), "{v} not in [{low}, {high}]");
            v
        }
    }
}
