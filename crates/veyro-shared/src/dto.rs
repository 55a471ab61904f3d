//! Data Transfer Objects - the brand intake form as the UI submits it.

use serde::{Deserialize, Serialize};

/// Raw brand-information form. All fields arrive as entered; resolution
/// (e.g. the "Other" industry escape hatch) happens via the accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandFormData {
    pub brand_name: String,
    pub industry: String,
    /// Free-text industry, used only when `industry` is "Other".
    pub custom_industry: String,
    pub target_audience: String,
    pub goals: String,
    pub experience: String,
    pub additional_context: String,
    pub api_key: String,
}

impl BrandFormData {
    /// The industry to feed the generator: the picked category, or the
    /// free-text one when "Other" was selected.
    pub fn resolved_industry(&self) -> &str {
        if self.industry == "Other" {
            &self.custom_industry
        } else {
            &self.industry
        }
    }
}
