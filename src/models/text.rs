pub const SUGGESTION_FALLBACK: &str = "Connect with Miral directly for personalized suggestions!";
pub const SUGGESTION_EMPTY: &str = "Could not generate a suggestion at this time.";

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub mood: String,
}

impl SuggestionRequest {
    pub fn new(mood: impl Into<String>) -> Self {
        Self { mood: mood.into() }
    }

    pub fn instruction(&self) -> String {
        format!(
            "Suggest a unique and trendy nail art design description for a client who wants something related to: \"{}\". Keep it concise, under 50 words, and focused on visual details.",
            self.mood
        )
    }
}
