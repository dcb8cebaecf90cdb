use crate::models::itinerary::ItineraryRequest;

const NO_FOOD_PREFERENCES: &str = "none specified";
const NO_ACCESSIBILITY: &str = "no special requirements";

/// Render a request into the instruction text sent to the text model.
/// Pure: identical input yields byte-identical output, so the only
/// non-determinism in the pipeline stays on the model side.
pub fn build_itinerary_prompt(request: &ItineraryRequest) -> String {
    let interests = if request.interests.is_empty() {
        "general sightseeing".to_string()
    } else {
        request.interests.join(", ")
    };

    let transport = if request.transport_modes.is_empty() {
        "no preference".to_string()
    } else {
        request.transport_modes.join(", ")
    };

    let food = match &request.food_preferences {
        Some(prefs) if !prefs.trim().is_empty() => prefs.trim().to_string(),
        _ => NO_FOOD_PREFERENCES.to_string(),
    };

    let accessibility = if request.accessibility_needs {
        "wheelchair accessible venues and step-free routes required".to_string()
    } else {
        NO_ACCESSIBILITY.to_string()
    };

    format!(
        "You are an expert travel planner. Your task is to create a personalized, detailed, \
and exciting travel itinerary based on the user's preferences.\n\
The response must be structured according to the provided JSON schema.\n\
\n\
User Preferences:\n\
- Destination: {destination}\n\
- Trip Duration: {duration}\n\
- Travelers: {travelers} ({traveler_type})\n\
- Interests: {interests}\n\
- Budget: {budget}\n\
- Pace: {pace}\n\
- Food Preferences: {food}\n\
- Preferred Transport: {transport}\n\
- Accessibility: {accessibility}\n\
\n\
Instructions:\n\
1. Create a catchy title for the trip.\n\
2. Write a brief, engaging summary of the planned trip.\n\
3. Develop a day-by-day itinerary. For each day:\n\
   - Provide a creative title that reflects the day's theme.\n\
   - List 3-5 activities, appropriate for the destination, interests, and pace.\n\
   - For each activity, specify a suggested time, a clear description, and a \
descriptive prompt for generating a photorealistic image.\n\
   - Ensure the plan is logical, geographically sensible, and aligns with the \
specified budget.\n\
4. Write a prompt for one sweeping hero image that captures the destination.\n\
5. Provide safety tips, cultural etiquette notes, emergency contacts, and weather \
notes for the destination.\n\
6. Suggest a music theme that matches the mood of the trip.\n\
7. The overall tone should be enthusiastic and inspiring.",
        destination = request.destination,
        duration = request.duration,
        travelers = request.travelers,
        traveler_type = request.traveler_type,
        interests = interests,
        budget = request.budget,
        pace = request.pace,
        food = food,
        transport = transport,
        accessibility = accessibility,
    )
}

/// Instruction text for the smaller place-suggestion contract.
pub fn build_suggestion_prompt(query: &str) -> String {
    format!(
        "You are a travel inspiration assistant. Suggest up to 5 travel destinations \
matching \"{}\". For each one, provide the destination name and a descriptive prompt \
for a photorealistic thumbnail photo of it.\n\
The response must be structured according to the provided JSON schema.",
        query
    )
}

/// System instruction for the destination-guide chat.
pub fn chat_system_instruction(destination: Option<&str>) -> String {
    match destination {
        Some(destination) => format!(
            "You are an expert travel guide for {}. Be friendly and provide concise, \
helpful answers to user questions about this location.",
            destination
        ),
        None => "You are a helpful, friendly, and knowledgeable general-purpose AI \
assistant. You can answer questions on any topic."
            .to_string(),
    }
}
