/// Closed interval a signal's samples must fall into before any statistics run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Closed { min: f64, max: f64 },
    Unbounded,
}

impl Domain {
    pub const UNIT: Domain = Domain::Closed { min: 0.0, max: 1.0 };
    pub const LIKERT: Domain = Domain::Closed { min: 1.0, max: 5.0 };

    pub fn contains(&self, v: f64) -> bool {
        match *self {
            Domain::Closed { min, max } => v >= min && v <= max,
            Domain::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Hear,
    See,
    Smell,
    Touch,
    Taste,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Hear,
        Signal::See,
        Signal::Smell,
        Signal::Touch,
        Signal::Taste,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Signal::Hear => "hear",
            Signal::See => "see",
            Signal::Smell => "smell",
            Signal::Touch => "touch",
            Signal::Taste => "taste",
        }
    }

    /// Bundle key carrying the raw samples for this signal.
    pub fn field(self) -> &'static str {
        match self {
            Signal::Hear => COHERENCE_RATINGS,
            Signal::See => STRUCTURAL_FEEDBACK,
            Signal::Smell => NOVELTY_INDICATORS,
            Signal::Touch => APPLICATION_SUCCESSES,
            Signal::Taste => LIKABILITY_SCORES,
        }
    }

    /// `None` for Touch, whose samples are booleans.
    pub fn domain(self) -> Option<Domain> {
        match self {
            Signal::Hear | Signal::See => Some(Domain::UNIT),
            Signal::Smell => Some(Domain::Unbounded),
            Signal::Touch => None,
            Signal::Taste => Some(Domain::LIKERT),
        }
    }
}

pub const COHERENCE_RATINGS: &str = "coherence_ratings";
pub const STRUCTURAL_FEEDBACK: &str = "structural_feedback";
pub const NOVELTY_INDICATORS: &str = "novelty_indicators";
pub const APPLICATION_SUCCESSES: &str = "application_successes";
pub const LIKABILITY_SCORES: &str = "likability_scores";
pub const CUSTOM_METRIC: &str = "custom_metric";

pub const REQUIRED_KEYS: [&str; 5] = [
    COHERENCE_RATINGS,
    STRUCTURAL_FEEDBACK,
    NOVELTY_INDICATORS,
    APPLICATION_SUCCESSES,
    LIKABILITY_SCORES,
];

/// One set of user ratings for a single AI response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingsBundle {
    pub coherence_ratings: Vec<f64>,
    pub structural_feedback: Vec<f64>,
    pub novelty_indicators: Vec<f64>,
    pub application_successes: Vec<bool>,
    pub likability_scores: Vec<f64>,
    /// Carried through parsing; not part of the composite.
    pub custom_metric: Option<Vec<f64>>,
}

impl RatingsBundle {
    /// Raw samples of a numeric signal. Touch has none.
    pub fn numeric(&self, signal: Signal) -> Option<&[f64]> {
        match signal {
            Signal::Hear => Some(&self.coherence_ratings),
            Signal::See => Some(&self.structural_feedback),
            Signal::Smell => Some(&self.novelty_indicators),
            Signal::Touch => None,
            Signal::Taste => Some(&self.likability_scores),
        }
    }

    pub fn total_samples(&self) -> usize {
        self.coherence_ratings.len()
            + self.structural_feedback.len()
            + self.novelty_indicators.len()
            + self.application_successes.len()
            + self.likability_scores.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/ratings.rs"]
mod tests;
