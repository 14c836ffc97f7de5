use crate::error::ProfileError;
use crate::trajectory::{Sample, TrajectoryProfile};

/// Steps through a built profile in discrete ticks at a fixed rate.
///
/// Tick `n` samples global time `n / freq`. Iteration ends at the first
/// tick past the end of the trajectory.
pub struct ProfileExecutor<'a> {
    profile: &'a TrajectoryProfile,

    /// Update frequency in Hz
    freq: f64,

    /// Next tick to sample
    tick: u64,
}

impl<'a> ProfileExecutor<'a> {
    /// Creates an executor sampling `profile` at `freq` Hz from time 0.
    ///
    /// # Errors
    /// `InvalidFrequency` unless `freq` is finite and positive.
    pub fn new(profile: &'a TrajectoryProfile, freq: f64) -> Result<Self, ProfileError> {
        Self::check_freq(freq)?;
        Ok(Self {
            profile,
            freq,
            tick: 0,
        })
    }

    /// Changes the rate, keeping the current global time. An invalid rate
    /// leaves the executor unchanged.
    pub fn set_freq(&mut self, freq: f64) -> Result<(), ProfileError> {
        Self::check_freq(freq)?;
        let now = self.time();
        self.freq = freq;
        self.tick = (now * freq).ceil() as u64;
        Ok(())
    }

    fn check_freq(freq: f64) -> Result<(), ProfileError> {
        if freq.is_finite() && freq > 0.0 {
            Ok(())
        } else {
            Err(ProfileError::InvalidFrequency(freq))
        }
    }

    /// Global time of the next tick.
    pub fn time(&self) -> f64 {
        self.tick as f64 / self.freq
    }

    /// Number of ticks needed to cover the whole trajectory, including
    /// tick 0.
    pub fn len_hint(&self) -> usize {
        (self.profile.duration() * self.freq).floor() as usize + 1
    }

    /// True once the next tick lies past the end of the trajectory.
    pub fn is_done(&self) -> bool {
        self.time() > self.profile.duration()
    }
}

impl Iterator for ProfileExecutor<'_> {
    type Item = (f64, Sample);

    /// Yields `(global time, sample)` for the next tick.
    fn next(&mut self) -> Option<Self::Item> {
        let tg = self.time();
        let sample = self.profile.sample(tg)?;
        self.tick += 1;
        Some((tg, sample))
    }
}
