use serde_json::{json, Value};

/// Structured-output schema for the itinerary contract. Passed alongside the
/// prompt so the text model emits schema-constrained JSON instead of free
/// text; a response missing any `required` field is a generation failure.
///
/// Per-activity cost, opening hours, map link and travel info are properties
/// but deliberately not required -- the decoder accepts their absence.
pub fn itinerary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A catchy and descriptive title for the entire trip. Example: 'An Adventurous Week in the Swiss Alps'."
            },
            "destination": {
                "type": "STRING",
                "description": "The primary destination city or region."
            },
            "duration": {
                "type": "STRING",
                "description": "The total duration of the trip as specified by the user."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief, engaging 2-3 sentence summary of the trip plan."
            },
            "heroImagePrompt": {
                "type": "STRING",
                "description": "A descriptive prompt for a single sweeping destination-level photo shown above the daily plan."
            },
            "dailyPlan": {
                "type": "ARRAY",
                "description": "An array of objects, where each object represents a single day's plan.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {
                            "type": "INTEGER",
                            "description": "The day number, starting from 1."
                        },
                        "title": {
                            "type": "STRING",
                            "description": "A creative title for the day's activities. Example: 'Historic Wonders and Culinary Delights'."
                        },
                        "activities": {
                            "type": "ARRAY",
                            "description": "An array of 3-5 activities for the day.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": {
                                        "type": "STRING",
                                        "description": "Suggested time for the activity (e.g., '9:00 AM', 'Afternoon', 'Evening')."
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "A concise description of the activity."
                                    },
                                    "details": {
                                        "type": "STRING",
                                        "description": "Optional: a few more details about the activity, like location, tips, or booking info."
                                    },
                                    "imagePrompt": {
                                        "type": "STRING",
                                        "description": "A descriptive prompt for a photorealistic image representing this activity."
                                    },
                                    "estimatedCost": {
                                        "type": "STRING",
                                        "description": "Optional: estimated cost per person, e.g. '$25' or 'Free'."
                                    },
                                    "openingHours": {
                                        "type": "STRING",
                                        "description": "Optional: opening hours of the venue, if applicable."
                                    },
                                    "mapLink": {
                                        "type": "STRING",
                                        "description": "Optional: a maps search link for the venue."
                                    },
                                    "travelInfo": {
                                        "type": "STRING",
                                        "description": "Optional: how to get here from the previous activity."
                                    }
                                },
                                "required": ["time", "description", "imagePrompt"]
                            }
                        }
                    },
                    "required": ["day", "title", "activities"]
                }
            },
            "safetyTips": {
                "type": "ARRAY",
                "description": "3-5 short safety tips specific to the destination.",
                "items": { "type": "STRING" }
            },
            "culturalEtiquette": {
                "type": "ARRAY",
                "description": "3-5 short notes on local customs and etiquette.",
                "items": { "type": "STRING" }
            },
            "emergencyContacts": {
                "type": "ARRAY",
                "description": "Local emergency numbers and useful contacts, e.g. 'Police: 110'.",
                "items": { "type": "STRING" }
            },
            "weatherNotes": {
                "type": "STRING",
                "description": "A short note on the weather travelers should expect and how to pack for it."
            },
            "musicSuggestion": {
                "type": "OBJECT",
                "description": "A music theme that matches the mood of the destination.",
                "properties": {
                    "theme": {
                        "type": "STRING",
                        "description": "A short description of the theme, e.g. 'Parisian cafe jazz'."
                    },
                    "searchQuery": {
                        "type": "STRING",
                        "description": "A search query the client can use to find a matching playlist."
                    }
                },
                "required": ["theme", "searchQuery"]
            }
        },
        "required": [
            "title", "destination", "duration", "summary", "heroImagePrompt",
            "dailyPlan", "safetyTips", "culturalEtiquette", "emergencyContacts",
            "weatherNotes", "musicSuggestion"
        ]
    })
}

/// The smaller contract behind place suggestions: a short list of candidate
/// destinations, each with a prompt for its thumbnail.
pub fn suggestion_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "suggestions": {
                "type": "ARRAY",
                "description": "Up to 5 destination suggestions matching the query.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "Destination name, e.g. 'Kyoto, Japan'."
                        },
                        "imagePrompt": {
                            "type": "STRING",
                            "description": "A descriptive prompt for a thumbnail photo of this destination."
                        }
                    },
                    "required": ["name", "imagePrompt"]
                }
            }
        },
        "required": ["suggestions"]
    })
}
