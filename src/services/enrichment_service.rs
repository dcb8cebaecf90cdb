use chrono::Utc;
use futures::future::join_all;

use crate::models::itinerary::{ItineraryData, ItineraryPlan};
use crate::services::image_service::ImageService;
use crate::services::video_service::{VideoService, VideoStore};

const ITINERARY_ASPECT: &str = "16:9";
const ITINERARY_MIME: &str = "image/jpeg";

/// Fan out one image task per activity plus one hero-image task and the
/// video job, await them jointly, and merge the settled results into the
/// final document. Each task maps its own failure to `None` at the task
/// boundary, so one bad image never takes a sibling down with it.
pub async fn enrich_itinerary(
    images: &ImageService,
    videos: &VideoService,
    store: &VideoStore,
    plan: ItineraryPlan,
) -> ItineraryData {
    // One task per activity, in day-major, activity-minor order. The merge
    // below consumes results by position, so issue order is load-bearing:
    // join_all settles in issue order, never completion order.
    let activity_futures: Vec<_> = plan
        .daily_plan
        .iter()
        .flat_map(|day| day.activities.iter())
        .map(|activity| {
            let prompt = activity.image_prompt.clone();
            let description = activity.description.clone();
            async move {
                match images
                    .generate_image(&prompt, ITINERARY_ASPECT, ITINERARY_MIME)
                    .await
                {
                    Ok(uri) => Some(uri),
                    Err(e) => {
                        eprintln!("Failed to generate image for '{}': {}", description, e);
                        None
                    }
                }
            }
        })
        .collect();

    let hero_future = async {
        match images
            .generate_image(&plan.hero_image_prompt, ITINERARY_ASPECT, ITINERARY_MIME)
            .await
        {
            Ok(uri) => Some(uri),
            Err(e) => {
                eprintln!(
                    "Failed to generate hero image for '{}': {}",
                    plan.destination, e
                );
                None
            }
        }
    };

    let video_future = videos.generate_for_destination(&plan.destination, |label| {
        println!("Creating cinematic preview: {}", label);
    });

    let (activity_images, hero_image_url, video_bytes) =
        futures::join!(join_all(activity_futures), hero_future, video_future);

    let video_url = video_bytes.map(|bytes| format!("/api/videos/{}", store.insert(bytes)));

    attach_media(plan, activity_images, hero_image_url, video_url)
}

/// Positional merge: walk the plan in the exact order the image requests
/// were issued, consuming the flat result list one slot per activity. An
/// exhausted or `None` slot leaves that activity without an image; it never
/// shifts a later photo onto the wrong activity.
pub fn attach_media(
    mut plan: ItineraryPlan,
    activity_images: Vec<Option<String>>,
    hero_image_url: Option<String>,
    video_url: Option<String>,
) -> ItineraryData {
    let mut results = activity_images.into_iter();
    for day in plan.daily_plan.iter_mut() {
        for activity in day.activities.iter_mut() {
            activity.image_url = results.next().flatten();
        }
    }

    ItineraryData {
        plan,
        hero_image_url,
        video_url,
        generated_at: Utc::now(),
    }
}
