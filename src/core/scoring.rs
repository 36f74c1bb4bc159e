use rand::Rng;
use std::ops::Range;

/// Bounded intervals the simulated sub-scores are drawn from
///
/// These stand in for lookups against skill, availability and rating data
/// that the marketplace backend owns.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScoreRanges {
    pub skill_match: Range<f64>,
    pub distance: Range<f64>,
    pub availability: Range<f64>,
    pub rating: Range<f64>,
}

impl Default for SubScoreRanges {
    fn default() -> Self {
        Self {
            skill_match: 0.60..1.00,
            distance: 0.70..1.00,
            availability: 0.80..1.00,
            rating: 0.90..1.00,
        }
    }
}

/// The four components of a match score, each in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skill_match: f64,
    pub distance: f64,
    pub availability: f64,
    pub rating: f64,
}

impl SubScores {
    /// Composite score: the unweighted mean of the four components
    #[inline]
    pub fn composite(&self) -> f64 {
        (self.skill_match + self.distance + self.availability + self.rating) / 4.0
    }
}

/// Draw one set of sub-scores, each independently and uniformly from its range
pub fn draw_sub_scores<R: Rng + ?Sized>(rng: &mut R, ranges: &SubScoreRanges) -> SubScores {
    SubScores {
        skill_match: sample_range(rng, &ranges.skill_match),
        distance: sample_range(rng, &ranges.distance),
        availability: sample_range(rng, &ranges.availability),
        rating: sample_range(rng, &ranges.rating),
    }
}

/// Uniform draw from a half-open range; an empty range yields its start
#[inline]
pub(crate) fn sample_range<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}
