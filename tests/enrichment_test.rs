mod common;

use mockito::Matcher;

use roamly_api::models::itinerary::ItineraryPlan;
use roamly_api::services::enrichment_service::{attach_media, enrich_itinerary};
use roamly_api::services::video_service::VideoStore;

fn sample_plan(day_numbers: &[u32], activities_per_day: usize) -> ItineraryPlan {
    serde_json::from_value(common::sample_plan_json(day_numbers, activities_per_day))
        .expect("fixture should decode")
}

#[test]
fn test_merge_preserves_order_across_failures() {
    let plan = sample_plan(&[1], 3);

    let merged = attach_media(
        plan,
        vec![
            Some("data:image/jpeg;base64,first".to_string()),
            None,
            Some("data:image/jpeg;base64,third".to_string()),
        ],
        Some("data:image/jpeg;base64,hero".to_string()),
        None,
    );

    let activities = &merged.plan.daily_plan[0].activities;
    assert_eq!(
        activities[0].image_url.as_deref(),
        Some("data:image/jpeg;base64,first")
    );
    assert_eq!(activities[1].image_url, None);
    assert_eq!(
        activities[2].image_url.as_deref(),
        Some("data:image/jpeg;base64,third")
    );
    assert_eq!(
        merged.hero_image_url.as_deref(),
        Some("data:image/jpeg;base64,hero")
    );
    assert_eq!(merged.video_url, None);
}

#[test]
fn test_merge_walks_days_in_issue_order() {
    let plan = sample_plan(&[1, 2], 2);

    let merged = attach_media(
        plan,
        vec![
            Some("a".to_string()),
            Some("b".to_string()),
            Some("c".to_string()),
            Some("d".to_string()),
        ],
        None,
        Some("/api/videos/some-id".to_string()),
    );

    // Flat results are day-major: day 1 consumes slots 0-1, day 2 slots 2-3.
    assert_eq!(
        merged.plan.daily_plan[0].activities[0].image_url.as_deref(),
        Some("a")
    );
    assert_eq!(
        merged.plan.daily_plan[0].activities[1].image_url.as_deref(),
        Some("b")
    );
    assert_eq!(
        merged.plan.daily_plan[1].activities[0].image_url.as_deref(),
        Some("c")
    );
    assert_eq!(
        merged.plan.daily_plan[1].activities[1].image_url.as_deref(),
        Some("d")
    );
    assert_eq!(merged.video_url.as_deref(), Some("/api/videos/some-id"));
}

#[test]
fn test_merge_tolerates_short_result_list() {
    let plan = sample_plan(&[1], 3);

    let merged = attach_media(plan, vec![Some("only".to_string())], None, None);

    let activities = &merged.plan.daily_plan[0].activities;
    assert_eq!(activities.len(), 3);
    assert_eq!(activities[0].image_url.as_deref(), Some("only"));
    assert_eq!(activities[1].image_url, None);
    assert_eq!(activities[2].image_url, None);
}

#[actix_rt::test]
async fn test_single_failed_image_does_not_poison_siblings() {
    let mut server = mockito::Server::new_async().await;

    // Activity 2's image call fails; 1 and 3 and the hero succeed. The
    // requests are told apart by the prompt text in their bodies.
    let _ok_first = server
        .mock("POST", common::IMAGE_PATH)
        .match_body(Matcher::Regex("photo spot 1 day 1".to_string()))
        .with_status(200)
        .with_body(common::image_payload())
        .create_async()
        .await;
    let _fail_second = server
        .mock("POST", common::IMAGE_PATH)
        .match_body(Matcher::Regex("photo spot 2 day 1".to_string()))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;
    let _ok_third = server
        .mock("POST", common::IMAGE_PATH)
        .match_body(Matcher::Regex("photo spot 3 day 1".to_string()))
        .with_status(200)
        .with_body(common::image_payload())
        .create_async()
        .await;
    let _ok_hero = server
        .mock("POST", common::IMAGE_PATH)
        .match_body(Matcher::Regex("kyoto skyline at dusk".to_string()))
        .with_status(200)
        .with_body(common::image_payload())
        .create_async()
        .await;
    // The video job dies at submission; that must not touch the images.
    let _fail_video = server
        .mock("POST", common::VIDEO_SUBMIT_PATH)
        .with_status(500)
        .with_body("no capacity")
        .create_async()
        .await;

    let images = common::image_service(&server.url());
    let videos = common::video_service(&server.url());
    let store = VideoStore::new();
    let plan = sample_plan(&[1], 3);

    let merged = enrich_itinerary(&images, &videos, &store, plan).await;

    let activities = &merged.plan.daily_plan[0].activities;
    assert!(activities[0]
        .image_url
        .as_deref()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
    assert_eq!(activities[1].image_url, None);
    assert!(activities[2].image_url.is_some());
    assert!(merged.hero_image_url.is_some());
    assert_eq!(merged.video_url, None);
    assert!(store.is_empty());
}
