// Unit tests for Agri-Match

use agri_match::core::{
    calculate_bounding_box, calculate_distance, calculate_price, draw_sub_scores,
    is_within_bounding_box, EngineError, PaymentPolicy, PricingPolicy, Session, SubScoreRanges,
};
use agri_match::models::{ContractRole, ContractState, JobType, Location, PaymentMethod, PaymentState};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_distance_zero() {
    let point = Location::new(12.3714, -1.5197);
    assert_eq!(calculate_distance(&point, &point), 0.0);
}

#[test]
fn test_distance_symmetric() {
    let ouaga = Location::new(12.3714, -1.5197);
    let koudougou = Location::new(12.2526, -2.3627);

    assert_eq!(
        calculate_distance(&ouaga, &koudougou),
        calculate_distance(&koudougou, &ouaga)
    );
}

#[test]
fn test_distance_equator_to_pole() {
    let distance = calculate_distance(&Location::new(0.0, 0.0), &Location::new(0.0, 90.0));
    let expected = 10_007.5;

    assert!(
        (distance - expected).abs() / expected < 0.01,
        "Expected ~{}km, got {}",
        expected,
        distance
    );
}

#[test]
fn test_distance_ouaga_to_koudougou() {
    // Ouagadougou to Koudougou is roughly 90-100 km
    let ouaga = Location::new(12.3714, -1.5197);
    let koudougou = Location::new(12.2526, -2.3627);

    let distance = calculate_distance(&ouaga, &koudougou);
    assert!(distance > 80.0 && distance < 105.0, "got {}", distance);
}

#[test]
fn test_bounding_box_contains_center() {
    let center = Location::new(11.1771, -4.2979);
    let bbox = calculate_bounding_box(&center, 25.0);

    assert!(is_within_bounding_box(&center, &bbox));
    assert!(!is_within_bounding_box(&Location::new(12.3714, -1.5197), &bbox));
}

#[test]
fn test_location_validation() {
    assert!(Location::new(12.0, -1.5).validate().is_ok());
    assert!(Location::new(91.0, 0.0).validate().is_err());
    assert!(Location::new(0.0, -181.0).validate().is_err());
    assert!(Location::new(f64::NAN, 0.0).validate().is_err());
}

#[test]
fn test_job_type_parsing() {
    assert_eq!("technician".parse::<JobType>().unwrap(), JobType::Technician);
    assert_eq!(" Worker ".parse::<JobType>().unwrap(), JobType::Worker);
    assert!(matches!("farmer".parse::<JobType>(), Err(EngineError::Validation(_))));
}

#[test]
fn test_price_composition() {
    let pricing = calculate_price(25_000.0, 7.5, 1.3, 100.0).unwrap();

    assert_eq!(pricing.distance_fee, 750.0);
    assert_eq!(
        pricing.final_price,
        pricing.base_rate * pricing.complexity_multiplier + pricing.distance_fee
    );
}

#[test]
fn test_price_zero_distance() {
    let pricing = PricingPolicy::default().quote(JobType::Worker, 0.0, 1.0).unwrap();
    assert_eq!(pricing.final_price, 15_000.0);
}

#[test]
fn test_sub_scores_within_bounds() {
    let mut rng = StdRng::seed_from_u64(17);
    let ranges = SubScoreRanges::default();

    for _ in 0..500 {
        let scores = draw_sub_scores(&mut rng, &ranges);
        assert!(scores.skill_match >= 0.6 && scores.skill_match < 1.0);
        assert!(scores.distance >= 0.7 && scores.distance < 1.0);
        assert!(scores.availability >= 0.8 && scores.availability < 1.0);
        assert!(scores.rating >= 0.9 && scores.rating < 1.0);
        assert!(scores.composite() >= 0.75 && scores.composite() < 1.0);
    }
}

#[test]
fn test_verify_payment_wrong_length_keeps_pending() {
    let mut session = Session::new();
    session
        .initiate_payment(&PaymentPolicy::default(), 25_000, PaymentMethod::OrangeMoney, "+22670123456")
        .unwrap();

    for code in ["12345", "1234567", ""] {
        let result = session.verify_payment(code);
        assert!(matches!(result, Err(EngineError::Validation(_))));
        assert_eq!(session.payment.as_ref().unwrap().status, PaymentState::Pending);
    }

    let payment = session.verify_payment("987654").unwrap();
    assert_eq!(payment.status, PaymentState::Completed);
}

#[test]
fn test_contract_needs_both_parties() {
    let mut worker_only = Session::new();
    worker_only.accept_contract(ContractRole::Worker).unwrap();
    assert_eq!(worker_only.contract.status, ContractState::Pending);
    assert!(worker_only.contract.start_date.is_none());

    let mut employer_only = Session::new();
    employer_only.accept_contract(ContractRole::Employer).unwrap();
    assert_eq!(employer_only.contract.status, ContractState::Pending);

    let mut both = Session::new();
    both.accept_contract(ContractRole::Worker).unwrap();
    both.accept_contract(ContractRole::Employer).unwrap();
    assert_eq!(both.contract.status, ContractState::Accepted);
    assert!(both.contract.start_date.is_some());
}

#[test]
fn test_reject_records_signature() {
    let mut session = Session::new();
    session.reject_contract(ContractRole::Worker);

    assert_eq!(session.contract.status, ContractState::Rejected);
    assert!(session.contract.worker_signed_at.is_some());
    assert!(session.contract.employer_signed_at.is_none());
}
