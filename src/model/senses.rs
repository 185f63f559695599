use crate::model::ratings::Signal;

/// The five sensory scores, each in [0, 1], at full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensesScores {
    pub hear: f64,
    pub see: f64,
    pub smell: f64,
    pub touch: f64,
    pub taste: f64,
}

impl SensesScores {
    pub fn get(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Hear => self.hear,
            Signal::See => self.see,
            Signal::Smell => self.smell,
            Signal::Touch => self.touch,
            Signal::Taste => self.taste,
        }
    }

    pub fn set(&mut self, signal: Signal, value: f64) {
        match signal {
            Signal::Hear => self.hear = value,
            Signal::See => self.see = value,
            Signal::Smell => self.smell = value,
            Signal::Touch => self.touch = value,
            Signal::Taste => self.taste = value,
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.hear, self.see, self.smell, self.touch, self.taste]
    }

    /// Unweighted, unrounded mean of the five scores.
    pub fn composite(&self) -> f64 {
        let mut sum = 0f64;
        for v in self.as_array() {
            sum += v;
        }
        sum / 5.0
    }
}

/// Sample accounting for one signal: what came in, what each filter removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalAudit {
    pub signal: Signal,
    pub n_input: usize,
    pub n_out_of_domain: usize,
    pub n_outliers: usize,
    pub n_kept: usize,
}

impl SignalAudit {
    pub fn new(signal: Signal, n_input: usize) -> Self {
        Self {
            signal,
            n_input,
            n_out_of_domain: 0,
            n_outliers: 0,
            n_kept: n_input,
        }
    }
}

/// NaN passes through so the caller's finiteness check still sees it.
pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
