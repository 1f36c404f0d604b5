use serde::{Serialize, Deserialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, skip_serializing_none, DefaultOnError};

/// How the caller wants the page produced.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Ai,
    Template,
}

/// Body of `POST /api/generate`.
///
/// Optional fields that arrive with the wrong type are dropped rather than
/// failing the whole body; only a missing prompt is a client error.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub industry: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub tone: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub layout: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub mode: Option<GenerationMode>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub template_id: Option<String>,
    /// Older clients send the template id under this name.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub template_type: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: Some(prompt.into()), ..Default::default() }
    }

    /// The prompt with surrounding whitespace removed, or `None` when blank.
    pub fn trimmed_prompt(&self) -> Option<&str> {
        self.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    /// `templateId`, falling back to the legacy `templateType` when blank.
    pub fn requested_template(&self) -> &Option<String> {
        match explicit(&self.template_id) {
            Some(_) => &self.template_id,
            None => &self.template_type,
        }
    }
}

/// Hints inferred from the prompt, with explicit request fields layered on top.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext {
    pub prompt: String,
    pub project_name: Option<String>,
    pub template_id: Option<String>,
    pub industry: Option<String>,
    pub business_type: Option<String>,
    pub target_audience: Option<String>,
    pub tone: Option<String>,
    pub layout: Option<String>,
    pub color_scheme: Option<String>,
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

fn explicit(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl GenerationContext {
    /// Explicit, non-blank request fields win over inferred ones.
    pub fn apply_overrides(&mut self, req: &GenerationRequest) {
        let overrides = [
            (&mut self.project_name, &req.project_name),
            (&mut self.template_id, req.requested_template()),
            (&mut self.industry, &req.industry),
            (&mut self.business_type, &req.business_type),
            (&mut self.target_audience, &req.target_audience),
            (&mut self.tone, &req.tone),
            (&mut self.layout, &req.layout),
            (&mut self.color_scheme, &req.color_scheme),
            (&mut self.complexity, &req.complexity),
        ];
        for (slot, value) in overrides {
            if let Some(v) = explicit(value) {
                *slot = Some(v);
            }
        }
        if let Some(features) = &req.features {
            let features: Vec<String> = features
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect();
            if !features.is_empty() {
                self.features = features;
            }
        }
    }

    pub fn industry_or_default(&self) -> &str {
        self.industry.as_deref().unwrap_or("business")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// 1 to 5 stars.
    pub rating: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SocialProof {
    pub stats: Vec<Stat>,
    pub achievements: Vec<String>,
}

/// Canned copy used to ground the compiled prompt or fill the fallback page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub call_to_actions: Vec<String>,
    pub about_content: String,
    pub contact_info: ContactInfo,
    pub social_proof: SocialProof,
}

/// Terminal artifact returned by the pipeline.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationResult {
    pub code: String,
    pub provider: String,
    pub metadata: Map<String, Value>,
    pub message: Option<String>,
    pub warning: Option<String>,
}

/// Body of `POST /api/templates/:id/render`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RenderTemplateRequest {
    #[serde(default)]
    pub project_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TemplateQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}
