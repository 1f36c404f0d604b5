//! Starter templates offered alongside prompt-driven generation.

use serde::Serialize;

use crate::render::{palette, render_site, Item, PageData, SiteKind, TemplateError};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A sample card shown by a starter template until the user replaces it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SampleItem {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    pub site_name: &'static str,
    pub tagline: &'static str,
    pub items: &'static [SampleItem],
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StarterTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub industry: &'static str,
    pub features: &'static [&'static str],
    pub color_scheme: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    pub sample: SampleData,
}

const fn item(title: &'static str, detail: Option<&'static str>, body: &'static str) -> SampleItem {
    SampleItem { title, detail, body }
}

pub static TEMPLATES: [StarterTemplate; 6] = [
    StarterTemplate {
        id: "modern-portfolio",
        name: "Modern Portfolio",
        description: "A sleek, modern portfolio website perfect for designers, developers, and creatives",
        category: "portfolio",
        industry: "creative",
        features: &["Hero Section", "Project Gallery", "Skills Showcase", "Contact Form", "Responsive Design"],
        color_scheme: "blue",
        difficulty: Difficulty::Beginner,
        tags: &["creative", "modern", "responsive", "portfolio"],
        sample: SampleData {
            site_name: "Alex Johnson",
            tagline: "Full Stack Developer. Passionate developer with 5+ years of experience creating amazing web experiences.",
            items: &[
                item("E-commerce Platform", Some("React, Node.js"), "A storefront handling thousands of daily orders."),
                item("Mobile App", Some("React Native"), "Cross-platform companion app with offline sync."),
                item("Dashboard UI", Some("Vue.js, D3.js"), "Real-time analytics with interactive charts."),
            ],
        },
    },
    StarterTemplate {
        id: "corporate-business",
        name: "Corporate Business",
        description: "Professional business website with modern design and corporate feel",
        category: "business",
        industry: "corporate",
        features: &["Services Section", "Team Profiles", "Testimonials", "Contact Info", "About Us"],
        color_scheme: "green",
        difficulty: Difficulty::Intermediate,
        tags: &["corporate", "professional", "business", "services"],
        sample: SampleData {
            site_name: "TechCorp Solutions",
            tagline: "Innovative Technology Solutions for Modern Business",
            items: &[
                item("Web Development", None, "Custom web applications"),
                item("Mobile Apps", None, "iOS and Android development"),
                item("Cloud Solutions", None, "Scalable cloud infrastructure"),
            ],
        },
    },
    StarterTemplate {
        id: "restaurant-deluxe",
        name: "Restaurant Deluxe",
        description: "Elegant restaurant website with menu showcase and reservation system",
        category: "restaurant",
        industry: "hospitality",
        features: &["Menu Display", "Reservation Form", "Gallery", "Location Map", "Reviews"],
        color_scheme: "orange",
        difficulty: Difficulty::Intermediate,
        tags: &["restaurant", "food", "elegant", "reservations"],
        sample: SampleData {
            site_name: "Bella Vista",
            tagline: "Italian Fine Dining",
            items: &[
                item("Margherita Pizza", Some("$18"), "Fresh mozzarella, basil, tomato sauce"),
                item("Pasta Carbonara", Some("$22"), "Creamy pasta with pancetta and parmesan"),
                item("Tiramisu", Some("$12"), "Classic Italian dessert with coffee and mascarpone"),
            ],
        },
    },
    StarterTemplate {
        id: "tech-blog",
        name: "Tech Blog",
        description: "Modern blog layout perfect for tech writers and content creators",
        category: "blog",
        industry: "media",
        features: &["Article Layout", "Categories", "Search", "Author Bio", "Comments"],
        color_scheme: "indigo",
        difficulty: Difficulty::Beginner,
        tags: &["blog", "tech", "content", "writing"],
        sample: SampleData {
            site_name: "TechInsights",
            tagline: "Latest trends in technology and development",
            items: &[
                item(
                    "The Future of AI in Web Development",
                    Some("2024-01-15"),
                    "Exploring how AI is transforming the way we build websites...",
                ),
                item(
                    "React vs Vue: A 2024 Comparison",
                    Some("2024-01-10"),
                    "An in-depth comparison of the two popular frameworks...",
                ),
            ],
        },
    },
    StarterTemplate {
        id: "ecommerce-store",
        name: "E-commerce Store",
        description: "Complete online store with product catalog and shopping cart",
        category: "ecommerce",
        industry: "retail",
        features: &["Product Grid", "Shopping Cart", "Product Details", "Checkout", "User Account"],
        color_scheme: "pink",
        difficulty: Difficulty::Advanced,
        tags: &["ecommerce", "shopping", "products", "cart"],
        sample: SampleData {
            site_name: "StyleHub",
            tagline: "Curated gear for everyday life",
            items: &[
                item("Wireless Headphones", Some("$99"), "Rated 4.5 by our customers"),
                item("Smart Watch", Some("$299"), "Rated 4.8 by our customers"),
                item("Laptop Stand", Some("$49"), "Rated 4.2 by our customers"),
            ],
        },
    },
    StarterTemplate {
        id: "saas-landing",
        name: "SaaS Landing Page",
        description: "High-converting landing page for SaaS products with pricing and features",
        category: "landing",
        industry: "technology",
        features: &["Hero Section", "Feature Highlights", "Pricing Table", "Testimonials", "CTA Buttons"],
        color_scheme: "cyan",
        difficulty: Difficulty::Intermediate,
        tags: &["saas", "landing", "conversion", "pricing"],
        sample: SampleData {
            site_name: "CloudFlow",
            tagline: "Streamline your workflow with powerful automation",
            items: &[
                item("Automated Workflows", None, "Set up complex automations in minutes"),
                item("Team Collaboration", None, "Work together seamlessly across teams"),
                item("Analytics Dashboard", None, "Track performance with detailed insights"),
            ],
        },
    },
];

pub fn all() -> &'static [StarterTemplate] {
    &TEMPLATES
}

pub fn find(id: &str) -> Option<&'static StarterTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn by_category(category: &str) -> Vec<&'static StarterTemplate> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

pub fn by_industry(industry: &str) -> Vec<&'static StarterTemplate> {
    TEMPLATES.iter().filter(|t| t.industry == industry).collect()
}

/// Case-insensitive substring match over name, description and tags.
pub fn search(query: &str) -> Vec<&'static StarterTemplate> {
    let query = query.to_lowercase();
    TEMPLATES
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// Applies every filter that is set; all filters unset lists the whole catalog.
pub fn filter(
    category: Option<&str>,
    industry: Option<&str>,
    query: Option<&str>,
) -> Vec<&'static StarterTemplate> {
    let mut found: Vec<_> = match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => search(q),
        None => TEMPLATES.iter().collect(),
    };
    if let Some(category) = category {
        found.retain(|t| t.category == category);
    }
    if let Some(industry) = industry {
        found.retain(|t| t.industry == industry);
    }
    found
}

/// Maps the catalog's colour names onto the renderer's palettes.
fn palette_name(color_scheme: &str) -> &'static str {
    match color_scheme {
        "blue" | "cyan" => "tech",
        "green" => "medical",
        "orange" => "warm",
        "indigo" => "modern",
        "pink" => "retail",
        "purple" => "artistic",
        _ => "professional",
    }
}

/// Renders a starter template, optionally under the caller's project name.
pub fn render(template: &StarterTemplate, project_name: Option<&str>) -> Result<String, TemplateError> {
    let kind = SiteKind::from_category(template.category);
    let site_name = project_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(template.sample.site_name);
    let headline = match kind {
        SiteKind::Portfolio => format!("Hi, I'm {site_name}"),
        _ => format!("Welcome to {site_name}"),
    };

    let data = PageData {
        site_name: site_name.to_string(),
        headline,
        tagline: template.sample.tagline.to_string(),
        items: template
            .sample
            .items
            .iter()
            .map(|i| Item::new(i.title, i.detail.map(str::to_string), i.body))
            .collect(),
        palette: palette(palette_name(template.color_scheme)),
    };
    render_site(kind, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_are_unique_and_findable() {
        for t in all() {
            assert_eq!(find(t.id).map(|f| f.id), Some(t.id));
        }
        let mut ids: Vec<_> = all().iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len());
        assert!(find("missing").is_none());
    }

    #[test]
    fn filters_by_category_and_industry() {
        assert_eq!(by_category("restaurant")[0].id, "restaurant-deluxe");
        assert_eq!(by_industry("technology")[0].id, "saas-landing");
        assert!(by_category("agency").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_tags() {
        let ids: Vec<_> = search("PRICING").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["saas-landing"]);
        assert_eq!(search("portfolio")[0].id, "modern-portfolio");
        assert!(search("zzz").is_empty());
    }

    #[test]
    fn combined_filters() {
        assert_eq!(filter(None, None, None).len(), TEMPLATES.len());
        assert_eq!(filter(None, None, Some("  ")).len(), TEMPLATES.len());
        let found = filter(Some("blog"), None, Some("tech"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "tech-blog");
        assert!(filter(Some("blog"), Some("retail"), None).is_empty());
    }

    #[test]
    fn renders_with_sample_or_project_name() {
        let restaurant = find("restaurant-deluxe").unwrap();
        let html = render(restaurant, None).unwrap();
        assert!(html.contains("Welcome to Bella Vista"));
        assert!(html.contains("Margherita Pizza"));
        assert!(html.contains("--primary: #F97316"));

        let html = render(restaurant, Some("Trattoria Roma")).unwrap();
        assert!(html.contains("<title>Trattoria Roma</title>"));
        assert!(!html.contains("Welcome to Bella Vista"));

        let portfolio = render(find("modern-portfolio").unwrap(), Some("   ")).unwrap();
        assert!(portfolio.contains("Hi, I&#39;m Alex Johnson"));
    }
}
