use crate::dynamics::state::Sample;

/// Replays a finished trajectory at a chosen pace.
///
/// The cursor is driven by elapsed wall-clock seconds handed in by the
/// caller, so rendering cadence and integration step never interact.
#[derive(Debug, Clone)]
pub struct Playback {
    samples_per_second: f64,
    position: f64, // fractional sample index
    len: usize,
}

impl Playback {
    pub fn new(len: usize, samples_per_second: f64) -> Self {
        Self {
            samples_per_second: samples_per_second.max(0.0),
            position: 0.0,
            len,
        }
    }

    pub fn set_rate(&mut self, samples_per_second: f64) {
        self.samples_per_second = samples_per_second.max(0.0);
    }

    pub fn restart(&mut self) {
        self.position = 0.0;
    }

    /// Move forward by `seconds` of wall-clock time.
    pub fn advance(&mut self, seconds: f64) {
        if self.len == 0 {
            return;
        }
        let last = (self.len - 1) as f64;
        self.position = (self.position + seconds * self.samples_per_second).min(last);
    }

    /// Index of the sample currently shown, `None` for an empty trajectory.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then(|| self.position as usize)
    }

    pub fn is_finished(&self) -> bool {
        self.len == 0 || self.position as usize + 1 >= self.len
    }

    /// Samples revealed so far, current one included.
    pub fn visible<'a>(&self, trajectory: &'a [Sample]) -> &'a [Sample] {
        match self.index() {
            Some(i) => &trajectory[..(i + 1).min(trajectory.len())],
            None => &[],
        }
    }

    pub fn current<'a>(&self, trajectory: &'a [Sample]) -> Option<&'a Sample> {
        self.index().and_then(|i| trajectory.get(i))
    }
}
