//! Keyword-based prompt analysis.
//!
//! Each category owns an ordered list of case-insensitive patterns. The first
//! pattern that matches decides the label; later patterns are never consulted,
//! so the order of every table is part of its behaviour.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::models::GenerationContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Industry,
    BusinessType,
    Audience,
    Tone,
    Layout,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Industry,
        Category::BusinessType,
        Category::Audience,
        Category::Tone,
        Category::Layout,
    ];
}

#[derive(Debug)]
pub struct Rule {
    pub label: &'static str,
    pub pattern: Regex,
}

const INDUSTRY: &[(&str, &str)] = &[
    ("restaurant|food|cafe|dining|culinary|chef|menu|kitchen", "restaurant"),
    ("tech|software|app|saas|startup|digital|ai|machine learning", "technology"),
    ("health|medical|doctor|clinic|hospital|wellness|fitness", "healthcare"),
    ("education|school|course|learning|university|training", "education"),
    ("finance|bank|investment|crypto|trading|fintech", "finance"),
    ("real estate|property|housing|mortgage|realtor", "realestate"),
    ("fashion|clothing|style|boutique|designer|apparel", "fashion"),
    ("fitness|gym|workout|health|sports|training", "fitness"),
    ("travel|tourism|hotel|vacation|booking|adventure", "travel"),
    ("consulting|business|corporate|professional|services", "business"),
    ("creative|design|art|photography|portfolio|agency", "creative"),
    ("ecommerce|shop|store|retail|marketplace|selling", "ecommerce"),
    ("nonprofit|charity|foundation|community|social", "nonprofit"),
];

const BUSINESS_TYPE: &[(&str, &str)] = &[
    ("startup|new business|entrepreneur", "startup"),
    ("enterprise|corporation|large company", "enterprise"),
    ("small business|local|family", "small"),
    ("freelance|personal|individual", "personal"),
];

const AUDIENCE: &[(&str, &str)] = &[
    ("young|teen|student|millennial|gen z", "young"),
    ("professional|business|corporate|executive", "professional"),
    ("family|parent|children|kids", "family"),
    ("luxury|premium|high-end|exclusive", "luxury"),
    ("senior|elderly|mature", "senior"),
];

const TONE: &[(&str, &str)] = &[
    ("fun|playful|casual|friendly", "friendly"),
    ("professional|formal|serious|corporate", "professional"),
    ("creative|artistic|innovative|unique", "creative"),
    ("trustworthy|reliable|secure|safe", "trustworthy"),
    ("modern|cutting-edge|advanced|futuristic", "modern"),
];

const LAYOUT: &[(&str, &str)] = &[
    ("single page|one page|landing", "single-page"),
    ("multi page|multiple pages|navigation", "multi-page"),
    ("dashboard|admin|panel", "dashboard"),
    ("portfolio|showcase|gallery", "portfolio"),
];

fn compile(table: &[(&'static str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .filter_map(|&(pattern, label)| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|pattern| Rule { label, pattern })
        })
        .collect()
}

static INDUSTRY_RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile(INDUSTRY));
static BUSINESS_TYPE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile(BUSINESS_TYPE));
static AUDIENCE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile(AUDIENCE));
static TONE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile(TONE));
static LAYOUT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| compile(LAYOUT));

/// The ordered rule table for a category.
pub fn rules(category: Category) -> &'static [Rule] {
    match category {
        Category::Industry => &INDUSTRY_RULES,
        Category::BusinessType => &BUSINESS_TYPE_RULES,
        Category::Audience => &AUDIENCE_RULES,
        Category::Tone => &TONE_RULES,
        Category::Layout => &LAYOUT_RULES,
    }
}

/// First label whose pattern matches `prompt`.
pub fn classify(category: Category, prompt: &str) -> Option<&'static str> {
    rules(category)
        .iter()
        .find(|rule| rule.pattern.is_match(prompt))
        .map(|rule| rule.label)
}

pub fn analyze(prompt: &str) -> GenerationContext {
    let label = |category| classify(category, prompt).map(str::to_string);
    let ctx = GenerationContext {
        prompt: prompt.to_string(),
        industry: label(Category::Industry),
        business_type: label(Category::BusinessType),
        target_audience: label(Category::Audience),
        tone: label(Category::Tone),
        layout: label(Category::Layout),
        ..Default::default()
    };
    debug!(
        industry = ?ctx.industry,
        business_type = ?ctx.business_type,
        audience = ?ctx.target_audience,
        tone = ?ctx.tone,
        layout = ?ctx.layout,
        "prompt analyzed"
    );
    ctx
}
