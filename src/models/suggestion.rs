use serde::{Deserialize, Serialize};

/// A destination candidate with its generated thumbnail. Ephemeral: held
/// only for the lifetime of a dropdown or gallery on the client.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSuggestion {
    pub name: String,
    pub image_url: String,
}
