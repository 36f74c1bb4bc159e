use crate::core::{
    distance::{calculate_bounding_box, calculate_distance},
    error::EngineResult,
    pricing::{compose_price, PricingPolicy},
    scoring::{draw_sub_scores, sample_range, SubScoreRanges},
};
use crate::models::{Location, MatchResult, MatchingCriteria, Pricing};
use rand::Rng;

/// Default bounds on the number of candidates a search produces
pub const DEFAULT_MIN_RESULTS: usize = 3;
pub const DEFAULT_MAX_RESULTS: usize = 7;

/// Match scoring and dynamic pricing engine
///
/// # Pipeline
/// 1. Criteria validation
/// 2. Candidate count selection (`min_results..=max_results`, capped by `limit`)
/// 3. Sub-score draws and composite scoring
/// 4. Pricing (flat surcharge, or distance × per-km rate when an origin is known)
/// 5. Ranking by descending score
///
/// The engine holds configuration only; every call reads its own input and
/// returns fresh results.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: PricingPolicy,
    ranges: SubScoreRanges,
    min_results: usize,
    max_results: usize,
}

impl Matcher {
    pub fn new(policy: PricingPolicy, min_results: usize, max_results: usize) -> Self {
        let max_results = max_results.max(1);
        Self {
            policy,
            ranges: SubScoreRanges::default(),
            min_results: min_results.clamp(1, max_results),
            max_results,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(PricingPolicy::default(), DEFAULT_MIN_RESULTS, DEFAULT_MAX_RESULTS)
    }

    pub fn with_ranges(mut self, ranges: SubScoreRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn result_bounds(&self) -> (usize, usize) {
        (self.min_results, self.max_results)
    }

    /// Find ranked candidates for the given criteria using the thread-local RNG
    pub fn find_matches(&self, criteria: &MatchingCriteria) -> EngineResult<Vec<MatchResult>> {
        self.find_matches_with_rng(criteria, &mut rand::thread_rng())
    }

    /// Find ranked candidates, drawing all simulated values from `rng`
    ///
    /// # Returns
    /// Candidates sorted best-to-worst by composite score. Ties keep their
    /// generation order.
    pub fn find_matches_with_rng<R: Rng + ?Sized>(
        &self,
        criteria: &MatchingCriteria,
        rng: &mut R,
    ) -> EngineResult<Vec<MatchResult>> {
        criteria.validate()?;

        let mut count = rng.gen_range(self.min_results..=self.max_results);
        if let Some(limit) = criteria.limit {
            count = count.min(limit);
        }

        let base_rate = self.policy.base_rate(criteria.job_type);

        let mut results: Vec<MatchResult> = (0..count)
            .map(|_| {
                let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid().to_string();
                let sub_scores = draw_sub_scores(rng, &self.ranges);

                let (pricing, distance_km) = match &criteria.origin {
                    Some(origin) => {
                        let (pricing, distance_km) =
                            self.price_from_origin(rng, origin, criteria.max_distance_km, base_rate);
                        (pricing, Some(distance_km))
                    }
                    None => (self.price_flat(rng, base_rate), None),
                };

                MatchResult {
                    id,
                    score: sub_scores.composite(),
                    skill_match: sub_scores.skill_match,
                    distance_score: sub_scores.distance,
                    availability_score: sub_scores.availability,
                    rating_score: sub_scores.rating,
                    distance_km,
                    pricing,
                }
            })
            .collect();

        // Stable sort so equal scores keep generation order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Generated {} candidates for job type {} (max distance {} km)",
            results.len(),
            criteria.job_type,
            criteria.max_distance_km
        );

        Ok(results)
    }

    fn price_flat<R: Rng + ?Sized>(&self, rng: &mut R, base_rate: f64) -> Pricing {
        let distance_fee = sample_range(rng, &self.policy.distance_fee_range);
        let complexity = sample_range(rng, &self.policy.complexity_range);
        compose_price(base_rate, distance_fee, complexity)
    }

    fn price_from_origin<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        origin: &Location,
        max_distance_km: f64,
        base_rate: f64,
    ) -> (Pricing, f64) {
        let bbox = calculate_bounding_box(origin, max_distance_km);
        let candidate = Location::new(
            rng.gen_range(bbox.min_lat..=bbox.max_lat),
            rng.gen_range(bbox.min_lon..=bbox.max_lon),
        );
        let distance_km = calculate_distance(origin, &candidate);
        let complexity = sample_range(rng, &self.policy.complexity_range);

        let pricing = compose_price(base_rate, distance_km * self.policy.per_km_rate, complexity);
        (pricing, distance_km)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Build validated criteria from raw request fields
pub fn parse_criteria(
    job_type: &str,
    max_distance_km: f64,
    origin: Option<Location>,
    limit: Option<usize>,
) -> EngineResult<MatchingCriteria> {
    let job_type = job_type.parse()?;
    let criteria = MatchingCriteria {
        job_type,
        max_distance_km,
        origin,
        limit,
    };
    criteria.validate()?;
    Ok(criteria)
}
