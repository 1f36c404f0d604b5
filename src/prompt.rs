use crate::content::industry_sample_data;
use crate::models::{GeneratedContent, GenerationContext};

pub struct IndustryStyle {
    pub colors: &'static str,
    pub imagery: &'static str,
    pub features: &'static str,
    pub typography: &'static str,
}

const BUSINESS_STYLE: IndustryStyle = IndustryStyle {
    colors: "professional blues, corporate grays, success greens",
    imagery: "business professionals, office environments, success metrics",
    features: "service offerings, team profiles, case studies, contact information",
    typography: "professional, trustworthy fonts with clear hierarchy",
};

/// Design hints keyed by industry; unknown or unset industries get the business entry.
pub fn industry_style(industry: Option<&str>) -> &'static IndustryStyle {
    const RESTAURANT: IndustryStyle = IndustryStyle {
        colors: "warm oranges, rich browns, appetizing reds",
        imagery: "food photography, kitchen scenes, dining ambiance",
        features: "menu showcase, reservation system, chef profiles, customer reviews",
        typography: "elegant serif fonts for headings, clean sans-serif for body",
    };
    const TECHNOLOGY: IndustryStyle = IndustryStyle {
        colors: "modern blues, tech grays, electric accents",
        imagery: "abstract tech patterns, device mockups, innovation graphics",
        features: "product demos, feature highlights, pricing tiers, developer docs",
        typography: "modern sans-serif fonts, monospace for code",
    };
    const HEALTHCARE: IndustryStyle = IndustryStyle {
        colors: "calming blues, medical whites, trust greens",
        imagery: "medical professionals, healthcare facilities, wellness imagery",
        features: "appointment booking, service descriptions, doctor profiles, testimonials",
        typography: "professional, readable fonts with high accessibility",
    };
    const CREATIVE: IndustryStyle = IndustryStyle {
        colors: "vibrant palettes, artistic gradients, bold contrasts",
        imagery: "portfolio pieces, creative process, artistic elements",
        features: "project galleries, creative process, client testimonials, contact forms",
        typography: "creative display fonts for headings, elegant body text",
    };
    match industry {
        Some("restaurant") => &RESTAURANT,
        Some("technology") => &TECHNOLOGY,
        Some("healthcare") => &HEALTHCARE,
        Some("creative") => &CREATIVE,
        _ => &BUSINESS_STYLE,
    }
}

pub fn audience_style(audience: Option<&str>) -> Option<&'static str> {
    match audience? {
        "young" => Some("vibrant colors, modern animations, social media integration, mobile-first design"),
        "professional" => Some("sophisticated layouts, business-focused content, desktop optimization, formal tone"),
        "family" => Some("friendly colors, accessible design, family-oriented content, safety emphasis"),
        "luxury" => Some("premium materials, elegant typography, high-end imagery, exclusive feel"),
        _ => None,
    }
}

pub fn tone_style(tone: Option<&str>) -> Option<&'static str> {
    match tone? {
        "friendly" => Some("warm colors, casual language, approachable design, community feel"),
        "professional" => Some("clean layouts, formal language, business imagery, trust indicators"),
        "creative" => Some("bold designs, artistic elements, unique layouts, innovative features"),
        "trustworthy" => Some("security badges, testimonials, professional credentials, clear policies"),
        "modern" => Some("cutting-edge design, latest trends, innovative interactions, tech-forward"),
        _ => None,
    }
}

const OUTPUT_MANDATE: &str = "You are an expert web designer and front-end developer. Create a complete, visually rich, production-ready single-file website.

OUTPUT FORMAT (MANDATORY): Return ONLY the HTML document with embedded CSS and JavaScript. No explanations, no markdown, no code fences. Start with <!DOCTYPE html> and end with </html>.";

const MANDATORY_TECHNIQUES: &str = "MANDATORY TECHNIQUES:
- Hero section with an animated gradient mesh background, floating particles, parallax scrolling and 3D perspective transforms
- Sections: Hero, Features, About, Services, Testimonials, Contact, Call to Action
- Glassmorphism cards (backdrop-filter: blur(20px) saturate(180%)), 3D tilt on hover, pulsing glow effects
- Smooth animations: fade-ins, slide-ups, staggered reveals triggered by IntersectionObserver
- Typography from Google Fonts (Inter, Poppins, Playfair Display) with a clear hierarchy and gradient text accents
- Mobile-first responsive layout using CSS Grid, Flexbox and custom properties
- Accessible markup: semantic sections, ARIA labels, keyboard navigation, visible focus states
- Realistic, industry-specific copy; never use Lorem Ipsum

REQUIRED CSS BUILDING BLOCKS (include these):
.hero {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%);
  background-size: 400% 400%;
  animation: gradient 15s ease infinite;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  overflow: hidden;
}
.glass-card {
  background: rgba(255, 255, 255, 0.1);
  backdrop-filter: blur(20px) saturate(180%);
  border-radius: 20px;
  border: 1px solid rgba(255, 255, 255, 0.2);
  padding: 30px;
  transform: perspective(1000px) rotateX(10deg);
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  box-shadow: 0 20px 40px rgba(0,0,0,0.1), 0 0 20px rgba(102, 126, 234, 0.3);
  animation: float 3s ease-in-out infinite;
}
.premium-button {
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  border: none;
  border-radius: 50px;
  padding: 15px 30px;
  color: white;
  font-weight: 600;
  cursor: pointer;
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  box-shadow: 0 10px 20px rgba(0,0,0,0.1);
}
.premium-button:hover { transform: translateY(-5px) scale(1.05); box-shadow: 0 20px 40px rgba(0,0,0,0.2); }
@keyframes float { 0%, 100% { transform: perspective(1000px) rotateX(10deg) translateY(0px); } 50% { transform: perspective(1000px) rotateX(10deg) translateY(-20px); } }
@keyframes glow { from { box-shadow: 0 0 20px rgba(102, 126, 234, 0.3); } to { box-shadow: 0 0 30px rgba(102, 126, 234, 0.6); } }
@keyframes gradient { 0% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } 100% { background-position: 0% 50%; } }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.05); } }

REQUIRED JAVASCRIPT:
- Smooth scrolling for in-page navigation links
- IntersectionObserver adding a `visible` class to `.fade-in` elements
- Navigation bar that becomes blurred and shadowed after scrolling";

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

fn push_opt(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(v) = value {
        push_line(out, format!("- {label}: {v}"));
    }
}

/// Assembles the instruction string sent to a text-generation provider.
pub fn compile(ctx: &GenerationContext, content: &GeneratedContent) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let project = ctx.project_name.as_deref();
    let style = industry_style(ctx.industry.as_deref());

    push_line(&mut out, OUTPUT_MANDATE);
    push_line(&mut out, "");
    push_line(&mut out, "PROJECT REQUIREMENTS:");
    push_line(&mut out, format!("USER REQUEST: \"{}\"", ctx.prompt));
    if let Some(name) = project {
        push_line(&mut out, format!("PROJECT NAME (use this exact name everywhere): \"{name}\""));
        push_line(&mut out, format!("The <title>, navigation logo, main headline and footer MUST name \"{name}\"."));
        push_line(&mut out, format!("Do NOT use generic names such as \"Your Business\"; use \"{name}\" only."));
    }

    push_line(&mut out, "");
    push_line(&mut out, "BUSINESS CONTEXT:");
    push_opt(&mut out, "Industry", ctx.industry.as_deref());
    push_opt(&mut out, "Business Type", ctx.business_type.as_deref());
    push_opt(&mut out, "Target Audience", ctx.target_audience.as_deref());
    push_opt(&mut out, "Tone", ctx.tone.as_deref());
    push_opt(&mut out, "Layout Style", ctx.layout.as_deref());
    push_opt(&mut out, "Complexity Level", ctx.complexity.as_deref());
    push_opt(&mut out, "Color Scheme", ctx.color_scheme.as_deref());
    if !ctx.features.is_empty() {
        push_line(&mut out, format!("- Requested Features: {}", ctx.features.join(", ")));
    }

    push_line(&mut out, "");
    push_line(&mut out, "DESIGN SPECIFICATIONS:");
    push_line(&mut out, format!("- Color Palette: {}", style.colors));
    push_line(&mut out, format!("- Typography: {}", style.typography));
    push_line(&mut out, format!("- Imagery: {}", style.imagery));
    push_line(&mut out, format!("- Key Features: {}", style.features));
    push_opt(&mut out, "Audience Style", audience_style(ctx.target_audience.as_deref()));
    push_opt(&mut out, "Tone Style", tone_style(ctx.tone.as_deref()));

    push_line(&mut out, "");
    push_line(&mut out, MANDATORY_TECHNIQUES);

    push_line(&mut out, "");
    push_line(
        &mut out,
        format!("CONTENT TO USE (customize for {}):", project.unwrap_or("the project")),
    );
    push_line(
        &mut out,
        format!("- Headlines: {}", content.headlines.iter().take(3).cloned().collect::<Vec<_>>().join(", ")),
    );
    if let Some(description) = content.descriptions.first() {
        push_line(&mut out, format!("- Main Description: {description}"));
    }
    let features: Vec<String> = content
        .features
        .iter()
        .take(4)
        .map(|f| format!("{} - {}", f.title, f.description))
        .collect();
    push_line(&mut out, format!("- Key Features: {}", features.join("; ")));
    push_line(
        &mut out,
        format!("- Call-to-Actions: {}", content.call_to_actions.iter().take(3).cloned().collect::<Vec<_>>().join(", ")),
    );
    push_line(&mut out, format!("- About Content: {}", content.about_content));
    push_line(
        &mut out,
        format!("- Contact: {}, {}", content.contact_info.email, content.contact_info.phone),
    );
    let stats: Vec<String> = content
        .social_proof
        .stats
        .iter()
        .map(|s| format!("{} {}", s.number, s.label))
        .collect();
    push_line(&mut out, format!("- Social Proof: {}", stats.join(", ")));
    if let Some(t) = content.testimonials.first() {
        push_line(&mut out, format!("- Testimonial: \"{}\" - {}, {}", t.content, t.name, t.role));
    }
    if let Some(data) = industry_sample_data(ctx.industry_or_default()) {
        let data = data.to_string();
        let sample: String = data.chars().take(200).collect();
        push_line(&mut out, format!("- Industry Data: {sample}..."));
    }

    push_line(&mut out, "");
    push_line(
        &mut out,
        format!(
            "Return the complete HTML document now. The <title> must be \"{}\". Begin with <!DOCTYPE html> and finish with </html>.",
            project.unwrap_or("Professional Website")
        ),
    );
    out
}
