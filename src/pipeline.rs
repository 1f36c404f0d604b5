use chrono::Utc;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analyzer::analyze;
use crate::catalog::{self, StarterTemplate};
use crate::config::Config;
use crate::content::{synthesize, ContentContext};
use crate::error::ConfigError;
use crate::gateway::{Gateway, GatewayOutcome};
use crate::models::{GeneratedContent, GenerationContext, GenerationMode, GenerationRequest, GenerationResult};
use crate::prompt::compile;
use crate::render::{render_demo, TemplateError};

pub const DEMO_PROVIDER: &str = "Advanced Demo";
pub const TEMPLATE_PROVIDER: &str = "Template System";
pub const DEMO_MESSAGE: &str =
    "Using Advanced Demo mode with AI analysis - add API keys for real AI generation!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Prompt is required")]
    MissingPrompt,
    #[error("rendering failed: {0}")]
    Render(#[from] TemplateError),
}

/// Request in, page out: analysis, copy, provider fallback and local rendering.
pub struct Pipeline {
    gateway: Gateway,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_gateway(Gateway::from_config(config)?))
    }

    pub fn with_gateway(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn active_providers(&self) -> Vec<&'static str> {
        self.gateway.active_providers()
    }

    pub async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, PipelineError> {
        let prompt = req.trimmed_prompt().ok_or(PipelineError::MissingPrompt)?;
        let generation_id = Uuid::new_v4();
        info!("🎯 Generation {} started ({} chars)", generation_id, prompt.len());

        let mut ctx = analyze(prompt);
        ctx.apply_overrides(req);
        let content = synthesize(&ContentContext::from_generation(&ctx));

        let mut metadata = context_metadata(&ctx);
        metadata.insert("generationId".into(), json!(generation_id.to_string()));
        metadata.insert("generatedAt".into(), json!(Utc::now().to_rfc3339()));

        if req.mode.unwrap_or_default() == GenerationMode::Template {
            if let Some(template) = ctx.template_id.as_deref().and_then(catalog::find) {
                let rendered = template_result(template, &ctx, metadata.clone());
                return template_or_demo(rendered, &ctx, &content, metadata);
            }
            warn!(
                "⚠️ Unknown template {:?}, falling back to demo rendering",
                ctx.template_id.as_deref().unwrap_or("")
            );
            return demo_result(&ctx, &content, metadata, Vec::new());
        }

        let compiled = compile(&ctx, &content);
        match self.gateway.generate(&compiled).await {
            GatewayOutcome::Succeeded { provider, text } => {
                metadata.insert("promptLength".into(), json!(compiled.len()));
                Ok(GenerationResult {
                    code: text,
                    message: Some(format!("Generated with {provider} using advanced prompt engineering")),
                    provider,
                    metadata,
                    warning: None,
                })
            }
            GatewayOutcome::Exhausted { attempts } => {
                let failed: Vec<String> = attempts.iter().map(|a| a.provider.clone()).collect();
                metadata.insert("attempts".into(), json!(attempts));
                demo_result(&ctx, &content, metadata, failed)
            }
        }
    }
}

fn context_metadata(ctx: &GenerationContext) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert("industry".into(), json!(ctx.industry_or_default()));
    metadata.insert("businessType".into(), json!(ctx.business_type.as_deref().unwrap_or("company")));
    metadata.insert("targetAudience".into(), json!(ctx.target_audience.as_deref().unwrap_or("general")));
    metadata.insert("tone".into(), json!(ctx.tone.as_deref().unwrap_or("professional")));
    metadata.insert("layout".into(), json!(ctx.layout));
    metadata.insert("complexity".into(), json!(ctx.complexity));
    metadata.insert("analysisUsed".into(), json!(true));
    metadata
}

fn template_result(
    template: &StarterTemplate,
    ctx: &GenerationContext,
    mut metadata: Map<String, Value>,
) -> Result<GenerationResult, TemplateError> {
    info!("📄 Rendering starter template {}", template.id);
    let code = catalog::render(template, ctx.project_name.as_deref())?;
    metadata.insert("templateUsed".into(), json!(template.id));
    Ok(GenerationResult {
        code,
        provider: TEMPLATE_PROVIDER.to_string(),
        metadata,
        message: Some(format!("Generated from the {} template", template.name)),
        warning: None,
    })
}

/// A starter template that fails to render degrades to the demo page.
fn template_or_demo(
    rendered: Result<GenerationResult, TemplateError>,
    ctx: &GenerationContext,
    content: &GeneratedContent,
    metadata: Map<String, Value>,
) -> Result<GenerationResult, PipelineError> {
    rendered.or_else(|e| {
        warn!("⚠️ Starter template failed to render ({}), falling back to demo rendering", e);
        demo_result(ctx, content, metadata, Vec::new())
    })
}

fn demo_result(
    ctx: &GenerationContext,
    content: &GeneratedContent,
    mut metadata: Map<String, Value>,
    failed: Vec<String>,
) -> Result<GenerationResult, PipelineError> {
    let page = render_demo(ctx, content)?;
    // Resolved context values win over the raw ones carried by the page.
    for (key, value) in page.metadata {
        metadata.entry(key).or_insert(value);
    }
    let warning = (!failed.is_empty()).then(|| {
        format!("All configured AI providers failed ({}); showing a locally rendered site", failed.join(", "))
    });
    info!("🎨 Rendered demo site ({} chars)", page.code.len());
    Ok(GenerationResult {
        code: page.code,
        provider: DEMO_PROVIDER.to_string(),
        metadata,
        message: Some(DEMO_MESSAGE.to_string()),
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ConfiguredAdapter;
    use crate::providers::{GROQ, OPENAI};
    use pretty_assertions::assert_eq;
    use reqwest::Client;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn offline() -> Pipeline {
        Pipeline::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected() {
        let err = offline().generate(&GenerationRequest::new("  \t ")).await.unwrap_err();
        assert_eq!(err, PipelineError::MissingPrompt);
        assert_eq!(err.to_string(), "Prompt is required");
    }

    #[tokio::test]
    async fn without_providers_renders_demo() {
        let mut req = GenerationRequest::new("Create a restaurant website for Bella Vista");
        req.project_name = Some("Bella Vista".into());
        let result = offline().generate(&req).await.unwrap();

        assert_eq!(result.provider, DEMO_PROVIDER);
        assert_eq!(result.message.as_deref(), Some(DEMO_MESSAGE));
        assert_eq!(result.warning, None);
        assert_eq!(result.metadata["industry"], "restaurant");
        assert_eq!(result.metadata["isAdvancedDemo"], true);
        assert_eq!(result.metadata["analysisUsed"], true);
        assert_eq!(result.metadata["attempts"], json!([]));
        assert!(result.metadata["generationId"].as_str().is_some_and(|id| Uuid::parse_str(id).is_ok()));
        assert!(result.code.contains("<h3 class=\"footer-title\">Bella Vista</h3>"));
    }

    #[tokio::test]
    async fn explicit_fields_override_analysis() {
        let mut req = GenerationRequest::new("Create a restaurant website");
        req.industry = Some("technology".into());
        req.tone = Some("playful".into());
        let result = offline().generate(&req).await.unwrap();
        assert_eq!(result.metadata["industry"], "technology");
        assert_eq!(result.metadata["tone"], "playful");
        assert_eq!(result.metadata["colorScheme"], "tech");
    }

    #[tokio::test]
    async fn template_mode_uses_catalog_and_falls_back_on_unknown_ids() {
        let mut req = GenerationRequest::new("my shop");
        req.mode = Some(GenerationMode::Template);
        req.template_id = Some("ecommerce-store".into());
        let result = offline().generate(&req).await.unwrap();
        assert_eq!(result.provider, TEMPLATE_PROVIDER);
        assert_eq!(result.metadata["templateUsed"], "ecommerce-store");
        assert!(result.code.contains("StyleHub"));

        req.template_id = Some("no-such-template".into());
        let result = offline().generate(&req).await.unwrap();
        assert_eq!(result.provider, DEMO_PROVIDER);
    }

    #[test]
    fn template_render_failure_degrades_to_demo() {
        let mut ctx = analyze("Create a modern restaurant website with dark theme");
        ctx.project_name = Some("Bella Vista".into());
        let content = synthesize(&ContentContext::from_generation(&ctx));
        let failed = Err(TemplateError::MissingVariable("site_name".into()));

        let result = template_or_demo(failed, &ctx, &content, context_metadata(&ctx)).unwrap();
        assert_eq!(result.provider, DEMO_PROVIDER);
        assert_eq!(result.metadata["industry"], "restaurant");
        assert!(result.metadata.get("templateUsed").is_none());
        assert!(result.code.contains("Bella Vista"));
    }

    #[tokio::test]
    async fn provider_output_is_returned_with_credit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_string_contains("Bella Vista"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "Here you go:\n<!DOCTYPE html><html><body>ok</body></html>" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = Gateway::new(
            Client::new(),
            vec![ConfiguredAdapter::new(OPENAI, Some("sk".into())).with_base_url(server.uri())],
        );
        let mut req = GenerationRequest::new("Create a restaurant website");
        req.project_name = Some("Bella Vista".into());
        let result = Pipeline::with_gateway(gateway).generate(&req).await.unwrap();

        assert_eq!(result.provider, "OpenAI");
        assert_eq!(result.code, "<!DOCTYPE html><html><body>ok</body></html>");
        assert_eq!(
            result.message.as_deref(),
            Some("Generated with OpenAI using advanced prompt engineering")
        );
    }

    #[tokio::test]
    async fn exhausted_providers_produce_a_warning() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let gateway = Gateway::new(
            Client::new(),
            vec![ConfiguredAdapter::new(GROQ, Some("gsk".into())).with_base_url(server.uri())],
        );
        let result = Pipeline::with_gateway(gateway)
            .generate(&GenerationRequest::new("a portfolio for a photographer"))
            .await
            .unwrap();

        assert_eq!(result.provider, DEMO_PROVIDER);
        assert!(result.warning.as_deref().is_some_and(|w| w.contains("Groq")));
        assert_eq!(result.metadata["attempts"][0]["provider"], "Groq");
        assert!(!result.code.is_empty());
    }
}
