use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetTier {
    #[serde(rename = "Budget-Friendly")]
    BudgetFriendly,
    #[default]
    #[serde(rename = "Mid-Range")]
    MidRange,
    Luxury,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::BudgetFriendly => write!(f, "Budget-Friendly"),
            BudgetTier::MidRange => write!(f, "Mid-Range"),
            BudgetTier::Luxury => write!(f, "Luxury"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelPace {
    Relaxed,
    #[default]
    Balanced,
    #[serde(rename = "Fast-paced")]
    FastPaced,
}

impl fmt::Display for TravelPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelPace::Relaxed => write!(f, "Relaxed"),
            TravelPace::Balanced => write!(f, "Balanced"),
            TravelPace::FastPaced => write!(f, "Fast-paced"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelerType {
    #[default]
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

impl fmt::Display for TravelerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelerType::Solo => write!(f, "Solo"),
            TravelerType::Couple => write!(f, "Couple"),
            TravelerType::Family => write!(f, "Family"),
            TravelerType::Friends => write!(f, "Friends"),
            TravelerType::Business => write!(f, "Business"),
        }
    }
}

/// Trip parameters as submitted by the client. Only `destination` is
/// mandatory; everything else falls back to a sensible default.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub destination: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub pace: TravelPace,
    #[serde(default)]
    pub traveler_type: TravelerType,
    #[serde(default)]
    pub food_preferences: Option<String>,
    #[serde(default)]
    pub transport_modes: Vec<String>,
    #[serde(default)]
    pub accessibility_needs: bool,
}

fn default_duration() -> String {
    "3 days".to_string()
}

fn default_travelers() -> u32 {
    1
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MusicSuggestion {
    pub theme: String,
    pub search_query: String,
}

/// A single scheduled activity. The cost/hours/map/travel fields belong to
/// the richer contract and may be omitted by the model; `image_url` stays
/// empty until enrichment attaches a generated image.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub image_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

/// The model's structured answer, decoded straight from the text-generation
/// response before any media work happens.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub title: String,
    pub destination: String,
    pub duration: String,
    pub summary: String,
    pub hero_image_prompt: String,
    pub daily_plan: Vec<DailyPlan>,
    pub safety_tips: Vec<String>,
    pub cultural_etiquette: Vec<String>,
    pub emergency_contacts: Vec<String>,
    pub weather_notes: String,
    pub music_suggestion: MusicSuggestion,
}

impl ItineraryPlan {
    /// Shape checks beyond what serde's required-field decoding enforces.
    /// A plan that fails here is treated as a generation failure; it is
    /// never returned partially populated.
    pub fn validate(&self) -> Result<(), String> {
        if self.daily_plan.is_empty() {
            return Err("plan contains no days".to_string());
        }

        for (index, day) in self.daily_plan.iter().enumerate() {
            let expected = index as u32 + 1;
            if day.day != expected {
                return Err(format!(
                    "day numbers must be contiguous from 1: expected day {}, got day {}",
                    expected, day.day
                ));
            }
            if day.activities.is_empty() {
                return Err(format!("day {} has no activities", day.day));
            }
            for activity in &day.activities {
                if activity.image_prompt.trim().is_empty() {
                    return Err(format!(
                        "activity '{}' on day {} is missing an image prompt",
                        activity.description, day.day
                    ));
                }
            }
        }

        Ok(())
    }

    /// Total number of activities across all days, in day-major order.
    pub fn activity_count(&self) -> usize {
        self.daily_plan.iter().map(|day| day.activities.len()).sum()
    }
}

/// The final composite document: the plan plus every independently-resolved
/// media reference, assembled in one merge step.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryData {
    #[serde(flatten)]
    pub plan: ItineraryPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub generated_at: DateTime<Utc>,
}
