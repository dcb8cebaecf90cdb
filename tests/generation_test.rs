mod common;

use roamly_api::models::itinerary::{
    BudgetTier, ItineraryRequest, TravelPace, TravelerType,
};
use roamly_api::services::gemini_service::GenerationError;
use roamly_api::services::prompt_service;

fn sample_request() -> ItineraryRequest {
    ItineraryRequest {
        destination: "Kyoto, Japan".to_string(),
        duration: "2 days".to_string(),
        travelers: 2,
        interests: vec!["temples".to_string(), "food".to_string()],
        budget: BudgetTier::MidRange,
        pace: TravelPace::Balanced,
        traveler_type: TravelerType::Couple,
        food_preferences: None,
        transport_modes: vec![],
        accessibility_needs: false,
    }
}

#[actix_rt::test]
async fn test_generate_plan_decodes_valid_response() {
    let mut server = mockito::Server::new_async().await;
    let plan_json = common::sample_plan_json(&[1, 2], 3).to_string();
    // Leading and trailing whitespace must be trimmed before parsing.
    let body = common::text_envelope(&format!("\n  {}  \n", plan_json));

    let mock = server
        .mock("POST", common::TEXT_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let service = common::gemini_service(&server.url());
    let plan = service
        .generate_plan(&sample_request())
        .await
        .expect("valid response should decode into a plan");

    assert_eq!(plan.destination, "Kyoto, Japan");
    assert_eq!(plan.daily_plan.len(), 2);
    assert_eq!(plan.daily_plan[0].day, 1);
    assert_eq!(plan.daily_plan[1].day, 2);
    assert_eq!(plan.activity_count(), 6);
    assert!(plan
        .daily_plan
        .iter()
        .all(|day| (3..=5).contains(&day.activities.len())));
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_generate_plan_rejects_day_gap() {
    let mut server = mockito::Server::new_async().await;
    let plan_json = common::sample_plan_json(&[1, 3], 3).to_string();

    let _mock = server
        .mock("POST", common::TEXT_PATH)
        .with_status(200)
        .with_body(common::text_envelope(&plan_json))
        .create_async()
        .await;

    let service = common::gemini_service(&server.url());
    let err = service
        .generate_plan(&sample_request())
        .await
        .expect_err("non-contiguous days must be rejected");

    assert!(matches!(err, GenerationError::InvalidPlan(_)));
}

#[actix_rt::test]
async fn test_generate_plan_rejects_missing_required_field() {
    let mut server = mockito::Server::new_async().await;
    let mut plan_json = common::sample_plan_json(&[1], 3);
    plan_json
        .as_object_mut()
        .unwrap()
        .remove("heroImagePrompt");

    let _mock = server
        .mock("POST", common::TEXT_PATH)
        .with_status(200)
        .with_body(common::text_envelope(&plan_json.to_string()))
        .create_async()
        .await;

    let service = common::gemini_service(&server.url());
    let err = service
        .generate_plan(&sample_request())
        .await
        .expect_err("missing required field is a contract violation");

    assert!(matches!(err, GenerationError::ParseError(_)));
}

#[actix_rt::test]
async fn test_generate_plan_surfaces_api_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", common::TEXT_PATH)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let service = common::gemini_service(&server.url());
    let err = service
        .generate_plan(&sample_request())
        .await
        .expect_err("a failed call must not produce a plan");

    assert!(matches!(err, GenerationError::ApiError(_)));
}

#[actix_rt::test]
async fn test_generate_plan_rejects_empty_candidates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", common::TEXT_PATH)
        .with_status(200)
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let service = common::gemini_service(&server.url());
    let err = service
        .generate_plan(&sample_request())
        .await
        .expect_err("an empty candidate list is a generation failure");

    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[test]
fn test_prompt_builder_is_deterministic() {
    let request = sample_request();
    let first = prompt_service::build_itinerary_prompt(&request);
    let second = prompt_service::build_itinerary_prompt(&request);
    assert_eq!(first, second);
}

#[test]
fn test_prompt_builder_interpolates_every_field() {
    let request = ItineraryRequest {
        destination: "Lisbon, Portugal".to_string(),
        duration: "4 days".to_string(),
        travelers: 3,
        interests: vec!["surfing".to_string(), "pastries".to_string()],
        budget: BudgetTier::BudgetFriendly,
        pace: TravelPace::FastPaced,
        traveler_type: TravelerType::Friends,
        food_preferences: Some("vegetarian".to_string()),
        transport_modes: vec!["tram".to_string(), "walking".to_string()],
        accessibility_needs: true,
    };

    let prompt = prompt_service::build_itinerary_prompt(&request);
    assert!(prompt.contains("Lisbon, Portugal"));
    assert!(prompt.contains("4 days"));
    assert!(prompt.contains("3 (Friends)"));
    assert!(prompt.contains("surfing, pastries"));
    assert!(prompt.contains("Budget-Friendly"));
    assert!(prompt.contains("Fast-paced"));
    assert!(prompt.contains("vegetarian"));
    assert!(prompt.contains("tram, walking"));
    assert!(prompt.contains("step-free"));
}

#[test]
fn test_prompt_builder_applies_sentinels() {
    let request = sample_request();
    let prompt = prompt_service::build_itinerary_prompt(&request);
    assert!(prompt.contains("none specified"));
    assert!(prompt.contains("no special requirements"));
}
