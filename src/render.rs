//! Deterministic HTML rendering used when no provider produced a page.
//!
//! Pages are built from static skeletons with `{{ variable }}` placeholders.
//! Every value coming from a request or from synthesized copy is escaped before
//! it reaches a skeleton; pre-rendered fragments (navigation, card grids) are
//! assembled here from escaped parts.

use std::collections::HashMap;

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::models::{GeneratedContent, GenerationContext};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("missing required variable: {0}")]
    MissingVariable(String),
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Variables available to a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `value` after HTML-escaping it.
    pub fn with_text(self, key: impl Into<String>, value: &str) -> Self {
        self.with_var(key, html_escape(value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A skeleton with `{{ name }}` placeholders; `{{ name? }}` renders empty when unset.
#[derive(Debug, Clone)]
pub struct Template {
    name: &'static str,
    content: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, content: &'static str) -> Self {
        Self { name, content }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Substituted values are not rescanned, so a value containing `{{` is inert.
    pub fn render(&self, context: &TemplateContext) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.content.len() * 2);
        let mut rest = self.content;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax(format!("unclosed {{{{ in {}", self.name)))?;

            let var_name = after[..end].trim();
            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped, true),
                None => (var_name, false),
            };

            match context.get(var_name) {
                Some(v) => out.push_str(v),
                None if optional => {}
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anchor id for a nav label: lowercase, whitespace runs become `-`.
pub fn anchor(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub light: &'static str,
}

const fn palette_of(
    name: &'static str,
    [primary, secondary, accent, background, text, light]: [&'static str; 6],
) -> Palette {
    Palette { name, primary, secondary, accent, background, text, light }
}

pub static PALETTES: [Palette; 7] = [
    palette_of("warm", ["#F97316", "#EA580C", "#FB923C", "#FFF7ED", "#1C1917", "#FFEDD5"]),
    palette_of("tech", ["#3B82F6", "#1E40AF", "#60A5FA", "#F8FAFC", "#0F172A", "#E0F2FE"]),
    palette_of("medical", ["#10B981", "#047857", "#34D399", "#F0FDF4", "#064E3B", "#DCFCE7"]),
    palette_of("artistic", ["#8B5CF6", "#7C3AED", "#A78BFA", "#FAF5FF", "#581C87", "#F3E8FF"]),
    palette_of("professional", ["#1F2937", "#374151", "#6B7280", "#F9FAFB", "#111827", "#F3F4F6"]),
    palette_of("retail", ["#EC4899", "#BE185D", "#F472B6", "#FDF2F8", "#831843", "#FCE7F3"]),
    palette_of("modern", ["#6366F1", "#4F46E5", "#818CF8", "#FAFAFA", "#18181B", "#F4F4F5"]),
];

/// Looks up a palette by name; unknown names get `modern`.
pub fn palette(name: &str) -> &'static Palette {
    PALETTES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .unwrap_or(&PALETTES[6])
}

/// Palette name and navigation sections for an industry.
pub fn palette_for_industry(industry: Option<&str>) -> (&'static Palette, &'static [&'static str]) {
    let (scheme, nav): (&str, &'static [&'static str]) = match industry {
        Some("restaurant") => ("warm", &["Menu", "About", "Reservations", "Reviews", "Location"]),
        Some("technology") => ("tech", &["Products", "Features", "Pricing", "Documentation", "Support"]),
        Some("healthcare") => ("medical", &["Services", "Doctors", "Appointments", "Insurance", "Contact"]),
        Some("creative") => ("artistic", &["Portfolio", "About", "Services", "Process", "Contact"]),
        Some("business") => ("professional", &["Services", "About Us", "Team", "Testimonials", "Contact"]),
        Some("ecommerce") => ("retail", &["Products", "Categories", "Cart", "Account", "Support"]),
        _ => ("modern", &["Home", "About", "Services", "Contact"]),
    };
    (palette(scheme), nav)
}

struct SectionCopy {
    title: &'static str,
    subtitle: &'static str,
    keywords: &'static str,
}

fn section_copy(industry: &str) -> SectionCopy {
    match industry {
        "restaurant" => SectionCopy {
            title: "Our Culinary Experience",
            subtitle: "Discover exceptional flavors and unforgettable dining moments crafted with passion and expertise.",
            keywords: "restaurant, dining, food, cuisine, chef, menu, reservations",
        },
        "technology" => SectionCopy {
            title: "Innovative Solutions",
            subtitle: "Cutting-edge technology solutions designed to transform your business and drive growth.",
            keywords: "technology, software, innovation, digital, solutions, development",
        },
        "healthcare" => SectionCopy {
            title: "Comprehensive Care",
            subtitle: "Professional healthcare services focused on your wellbeing and peace of mind.",
            keywords: "healthcare, medical, doctor, clinic, treatment, wellness",
        },
        "creative" => SectionCopy {
            title: "Creative Excellence",
            subtitle: "Bringing your vision to life through innovative design and creative solutions.",
            keywords: "creative, design, portfolio, art, innovation, visual",
        },
        _ => SectionCopy {
            title: "Professional Services",
            subtitle: "Expert business solutions tailored to help you achieve your goals and grow your success.",
            keywords: "business, professional, services, consulting, growth, success",
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display title: project name, else "<Industry> Website".
pub fn site_title(ctx: &GenerationContext) -> String {
    match (&ctx.project_name, &ctx.industry) {
        (Some(name), _) => name.clone(),
        (None, Some(industry)) => format!("{} Website", capitalize(industry)),
        (None, None) => "Professional Website".to_string(),
    }
}

fn palette_vars(context: TemplateContext, palette: &Palette) -> TemplateContext {
    context
        .with_var("primary", palette.primary)
        .with_var("secondary", palette.secondary)
        .with_var("accent", palette.accent)
        .with_var("background", palette.background)
        .with_var("text", palette.text)
        .with_var("light", palette.light)
}

fn nav_links(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|label| {
            format!(
                "<li><a href=\"#{}\" class=\"nav-link\">{}</a></li>",
                html_escape(&anchor(label)),
                html_escape(label)
            )
        })
        .collect()
}

/// The fallback page and the facts about it reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPage {
    pub code: String,
    pub metadata: Map<String, Value>,
}

const SHOWCASE: Template = Template::new("showcase", include_str!("../templates/showcase.html"));

/// Renders the rich single-page site from synthesized copy.
pub fn render_demo(ctx: &GenerationContext, content: &GeneratedContent) -> Result<DemoPage, TemplateError> {
    let (palette, nav) = palette_for_industry(ctx.industry.as_deref());
    let title = site_title(ctx);
    let copy = section_copy(ctx.industry_or_default());
    let logo = title.split(' ').next().unwrap_or_default();

    let headline = content.headlines.first().map(String::as_str).unwrap_or(title.as_str());
    let description = content.descriptions.first().map(String::as_str).unwrap_or(copy.subtitle);
    let primary_cta = content.call_to_actions.first().map(String::as_str).unwrap_or("Get Started");
    let secondary_cta = content.call_to_actions.get(1).map(String::as_str).unwrap_or("Learn More");
    let first_anchor = nav.first().map(|n| anchor(n)).unwrap_or_else(|| "about".to_string());

    let features: String = content
        .features
        .iter()
        .map(|f| {
            format!(
                "\n                <div class=\"feature-card fade-in\">\n                    <div class=\"feature-icon\">{}</div>\n                    <h3 class=\"feature-title\">{}</h3>\n                    <p class=\"feature-description\">{}</p>\n                </div>",
                html_escape(&f.icon),
                html_escape(&f.title),
                html_escape(&f.description)
            )
        })
        .collect();

    let testimonials: String = content
        .testimonials
        .iter()
        .take(2)
        .map(|t| {
            let byline = if t.company.is_empty() {
                html_escape(&t.role)
            } else {
                format!("{}, {}", html_escape(&t.role), html_escape(&t.company))
            };
            format!(
                "\n                <div class=\"testimonial-card fade-in\">\n                    <div class=\"testimonial-stars\">{}</div>\n                    <p class=\"testimonial-text\">&quot;{}&quot;</p>\n                    <div class=\"testimonial-author\"><strong>{}</strong> <span>{}</span></div>\n                </div>",
                "★".repeat(usize::from(t.rating.min(5))),
                html_escape(&t.content),
                html_escape(&t.name),
                byline
            )
        })
        .collect();

    let stats: String = content
        .social_proof
        .stats
        .iter()
        .map(|s| {
            format!(
                "\n                <div class=\"stat-item fade-in\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>",
                html_escape(&s.number),
                html_escape(&s.label)
            )
        })
        .collect();

    let context = palette_vars(TemplateContext::new(), palette)
        .with_text("title", &title)
        .with_text("logo", logo)
        .with_text("description", description)
        .with_text("keywords", copy.keywords)
        .with_text("headline", headline)
        .with_text("primary_cta", primary_cta)
        .with_text("secondary_cta", secondary_cta)
        .with_text("first_anchor", &first_anchor)
        .with_text("section_title", copy.title)
        .with_text("section_subtitle", copy.subtitle)
        .with_text("about", &content.about_content)
        .with_text("email", &content.contact_info.email)
        .with_text("phone", &content.contact_info.phone)
        .with_text("address", &content.contact_info.address)
        .with_var("nav", nav_links(nav))
        .with_var("features", features)
        .with_var("testimonials", testimonials)
        .with_var("stats", stats);

    let code = SHOWCASE.render(&context)?;

    let mut metadata = Map::new();
    metadata.insert("websiteType".into(), json!(ctx.industry.as_deref().unwrap_or("general")));
    for (key, value) in [
        ("industry", &ctx.industry),
        ("businessType", &ctx.business_type),
        ("targetAudience", &ctx.target_audience),
        ("tone", &ctx.tone),
        ("layout", &ctx.layout),
        ("complexity", &ctx.complexity),
    ] {
        metadata.insert(key.into(), json!(value));
    }
    metadata.insert("colorScheme".into(), json!(palette.name));
    metadata.insert("features".into(), json!(nav));
    metadata.insert("isAdvancedDemo".into(), json!(true));
    metadata.insert("contextAnalysis".into(), json!(true));
    metadata.insert(
        "intelligentContent".into(),
        json!({
            "headlines": content.headlines.len(),
            "features": content.features.len(),
            "testimonials": content.testimonials.len(),
            "socialProof": content.social_proof.stats.len(),
        }),
    );

    Ok(DemoPage { code, metadata })
}

/// Page skeleton families, one per catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Portfolio,
    Business,
    Restaurant,
    Blog,
    Ecommerce,
    Landing,
    Generic,
}

impl SiteKind {
    pub fn from_category(category: &str) -> Self {
        match category {
            "portfolio" => SiteKind::Portfolio,
            "business" => SiteKind::Business,
            "restaurant" => SiteKind::Restaurant,
            "blog" => SiteKind::Blog,
            "ecommerce" => SiteKind::Ecommerce,
            "landing" => SiteKind::Landing,
            _ => SiteKind::Generic,
        }
    }

    fn nav(self) -> &'static [&'static str] {
        match self {
            SiteKind::Portfolio => &["About", "Projects", "Contact"],
            SiteKind::Business => &["Services", "About", "Contact"],
            SiteKind::Restaurant => &["Menu", "Reservations", "Contact"],
            SiteKind::Blog => &["Articles", "About", "Subscribe"],
            SiteKind::Ecommerce => &["Shop", "Cart", "Account"],
            SiteKind::Landing => &["Features", "Pricing", "Sign Up"],
            SiteKind::Generic => &["Home", "About", "Contact"],
        }
    }

    /// Heading over the item grid and the hero button label.
    fn labels(self) -> (&'static str, &'static str) {
        match self {
            SiteKind::Portfolio => ("Featured Projects", "View My Work"),
            SiteKind::Business => ("Our Services", "Get a Quote"),
            SiteKind::Restaurant => ("Our Menu", "Reserve a Table"),
            SiteKind::Blog => ("Latest Articles", "Start Reading"),
            SiteKind::Ecommerce => ("Featured Products", "Shop Now"),
            SiteKind::Landing => ("Everything You Need", "Start Free Trial"),
            SiteKind::Generic => ("About Us", "Learn More"),
        }
    }

    fn class(self) -> &'static str {
        match self {
            SiteKind::Portfolio => "portfolio",
            SiteKind::Business => "business",
            SiteKind::Restaurant => "restaurant",
            SiteKind::Blog => "blog",
            SiteKind::Ecommerce => "ecommerce",
            SiteKind::Landing => "landing",
            SiteKind::Generic => "generic",
        }
    }
}

/// One card in a skeleton's grid: a menu item, a product, a blog post...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    /// Price, date or tech stack shown beside the title.
    pub detail: Option<String>,
    pub body: String,
}

impl Item {
    pub fn new(title: impl Into<String>, detail: Option<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), detail, body: body.into() }
    }
}

#[derive(Debug, Clone)]
pub struct PageData {
    pub site_name: String,
    pub headline: String,
    pub tagline: String,
    pub items: Vec<Item>,
    pub palette: &'static Palette,
}

const SITE: Template = Template::new("site", include_str!("../templates/site.html"));

fn item_cards(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| {
            let detail = item
                .detail
                .as_deref()
                .map(|d| format!("<span class=\"item-detail\">{}</span>", html_escape(d)))
                .unwrap_or_default();
            format!(
                "\n            <article class=\"item-card\"><div class=\"item-head\"><h3>{}</h3>{}</div><p>{}</p></article>",
                html_escape(&item.title),
                detail,
                html_escape(&item.body)
            )
        })
        .collect()
}

pub fn render_site(kind: SiteKind, data: &PageData) -> Result<String, TemplateError> {
    let nav = kind.nav();
    let (items_title, cta) = kind.labels();
    let context = palette_vars(TemplateContext::new(), data.palette)
        .with_text("kind", kind.class())
        .with_text("site_name", &data.site_name)
        .with_text("headline", &data.headline)
        .with_text("tagline", &data.tagline)
        .with_text("items_title", items_title)
        .with_text("items_anchor", &anchor(nav.get(1).copied().unwrap_or("about")))
        .with_text("cta", cta)
        .with_var("nav", nav_links(nav))
        .with_var("items", item_cards(&data.items));
    SITE.render(&context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{synthesize, ContentContext};
    use pretty_assertions::assert_eq;

    #[test]
    fn interpolates_and_honours_optional_markers() {
        let t = Template::new("t", "<h1>{{ title }}</h1>{{ extra? }}<p>{{body}}</p>");
        let ctx = TemplateContext::new().with_var("title", "Hi").with_var("body", "x");
        assert_eq!(t.render(&ctx).unwrap(), "<h1>Hi</h1><p>x</p>");
    }

    #[test]
    fn missing_and_unclosed_variables_are_errors() {
        let t = Template::new("t", "{{ title }}");
        assert_eq!(
            t.render(&TemplateContext::new()),
            Err(TemplateError::MissingVariable("title".into()))
        );
        let t = Template::new("t", "{{ title");
        assert!(matches!(t.render(&TemplateContext::new()), Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let t = Template::new("t", "{{ a }}");
        let ctx = TemplateContext::new().with_var("a", "{{ b }}");
        assert_eq!(t.render(&ctx).unwrap(), "{{ b }}");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(anchor("About  Us"), "about-us");
    }

    #[test]
    fn industry_picks_palette_and_nav() {
        let (p, nav) = palette_for_industry(Some("restaurant"));
        assert_eq!(p.name, "warm");
        assert_eq!(p.primary, "#F97316");
        assert_eq!(nav[0], "Menu");
        assert_eq!(palette_for_industry(Some("unknown")).0.name, "modern");
        assert_eq!(palette_for_industry(None).1.len(), 4);
        assert_eq!(palette("TECH").secondary, "#1E40AF");
        assert_eq!(palette("nope").name, "modern");
    }

    #[test]
    fn titles_fall_back_to_industry() {
        let mut ctx = GenerationContext { industry: Some("technology".into()), ..Default::default() };
        assert_eq!(site_title(&ctx), "Technology Website");
        ctx.project_name = Some("Nimbus".into());
        assert_eq!(site_title(&ctx), "Nimbus");
        assert_eq!(site_title(&GenerationContext::default()), "Professional Website");
    }

    fn restaurant_ctx() -> GenerationContext {
        GenerationContext {
            prompt: "a restaurant".into(),
            project_name: Some("Bella Vista".into()),
            industry: Some("restaurant".into()),
            ..Default::default()
        }
    }

    #[test]
    fn demo_page_is_a_complete_document() {
        let ctx = restaurant_ctx();
        let content = synthesize(&ContentContext::from_generation(&ctx));
        let page = render_demo(&ctx, &content).unwrap();

        assert!(page.code.starts_with("<!DOCTYPE html>"));
        assert!(page.code.trim_end().ends_with("</html>"));
        assert!(page.code.contains("<h3 class=\"footer-title\">Bella Vista</h3>"));
        assert!(page.code.contains("--primary: #F97316"));
        assert!(page.code.contains("href=\"#menu\""));
        assert!(page.code.contains("Our Culinary Experience"));
        assert!(!page.code.contains("{{"));

        assert_eq!(page.metadata["websiteType"], "restaurant");
        assert_eq!(page.metadata["colorScheme"], "warm");
        assert_eq!(page.metadata["isAdvancedDemo"], true);
        assert_eq!(page.metadata["features"][2], "Reservations");
    }

    #[test]
    fn demo_is_deterministic_and_escapes_input() {
        let mut ctx = restaurant_ctx();
        ctx.project_name = Some("<script>alert(1)</script>".into());
        let content = synthesize(&ContentContext::from_generation(&ctx));
        let a = render_demo(&ctx, &content).unwrap();
        let b = render_demo(&ctx, &content).unwrap();
        assert_eq!(a, b);
        assert!(!a.code.contains("<script>alert(1)"));
        assert!(a.code.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn skeletons_render_each_kind() {
        let data = PageData {
            site_name: "StyleHub".into(),
            headline: "Welcome to StyleHub".into(),
            tagline: "Curated goods & more".into(),
            items: vec![Item::new("Smart Watch", Some("$299".into()), "Tracks everything")],
            palette: palette("retail"),
        };
        for category in ["portfolio", "business", "restaurant", "blog", "ecommerce", "landing", "other"] {
            let html = render_site(SiteKind::from_category(category), &data).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{category}");
            assert!(html.contains("StyleHub"));
            assert!(html.contains("Curated goods &amp; more"));
            assert!(html.contains("<span class=\"item-detail\">$299</span>"));
            assert_eq!(render_site(SiteKind::from_category(category), &data).unwrap(), html);
        }
        let generic = render_site(SiteKind::Generic, &data).unwrap();
        assert!(generic.contains("About Us"));
    }
}
