//! Deterministic, industry-keyed filler copy.
//!
//! Tables exist for restaurant, technology, healthcare, creative and
//! business; every other industry resolves to the business table.

use serde_json::{json, Value};

use crate::models::{ContactInfo, Feature, GeneratedContent, GenerationContext, SocialProof, Stat, Testimonial};

/// Inputs the synthesizer keys its tables on.
#[derive(Debug, Clone, Default)]
pub struct ContentContext {
    pub industry: String,
    pub business_type: String,
    pub target_audience: String,
    pub location: Option<String>,
}

impl ContentContext {
    pub fn from_generation(ctx: &GenerationContext) -> Self {
        Self {
            industry: ctx.industry_or_default().to_string(),
            business_type: ctx.business_type.clone().unwrap_or_else(|| "company".into()),
            target_audience: ctx.target_audience.clone().unwrap_or_else(|| "general".into()),
            location: None,
        }
    }
}

struct IndustryCopy {
    headlines: [&'static str; 5],
    descriptions: [&'static str; 3],
    features: [(&'static str, &'static str, &'static str); 4],
    testimonials: [(&'static str, &'static str, &'static str, &'static str, u8); 2],
    calls_to_action: [&'static str; 4],
}

const RESTAURANT: IndustryCopy = IndustryCopy {
    headlines: [
        "Exceptional Dining Experience Awaits",
        "Where Flavor Meets Passion",
        "Culinary Excellence in Every Bite",
        "Fresh Ingredients, Unforgettable Taste",
        "Your Table is Ready for Something Special",
    ],
    descriptions: [
        "Experience culinary artistry with our chef-crafted dishes made from the finest local ingredients.",
        "Join us for an unforgettable dining journey where every meal tells a story of passion and flavor.",
        "Discover a menu that celebrates both tradition and innovation in every carefully prepared dish.",
    ],
    features: [
        ("Farm-to-Table", "Fresh, locally sourced ingredients delivered daily", "🌱"),
        ("Expert Chefs", "Award-winning culinary team with years of experience", "👨‍🍳"),
        ("Cozy Atmosphere", "Warm, inviting ambiance perfect for any occasion", "🕯️"),
        ("Wine Selection", "Curated wine list to complement every dish", "🍷"),
    ],
    testimonials: [
        ("Sarah Johnson", "Food Critic", "City Magazine", "An absolutely divine experience. The attention to detail in every dish is remarkable.", 5),
        ("Michael Chen", "Regular Customer", "", "This has become our go-to spot for special occasions. Never disappoints!", 5),
    ],
    calls_to_action: ["Reserve Your Table", "View Our Menu", "Order Online", "Book Private Dining"],
};

const TECHNOLOGY: IndustryCopy = IndustryCopy {
    headlines: [
        "Innovation That Transforms Your Business",
        "Cutting-Edge Solutions for Modern Challenges",
        "Technology That Drives Success",
        "Empowering Your Digital Future",
        "Where Innovation Meets Excellence",
    ],
    descriptions: [
        "Leverage cutting-edge technology solutions designed to accelerate your business growth and digital transformation.",
        "Our expert team delivers innovative software solutions that solve complex challenges and drive measurable results.",
        "Transform your business with scalable, secure, and efficient technology solutions built for the future.",
    ],
    features: [
        ("Cloud Solutions", "Scalable cloud infrastructure for modern businesses", "☁️"),
        ("AI Integration", "Intelligent automation to streamline operations", "🤖"),
        ("Security First", "Enterprise-grade security for your peace of mind", "🔒"),
        ("24/7 Support", "Round-the-clock technical support and monitoring", "🛠️"),
    ],
    testimonials: [
        ("David Rodriguez", "CTO", "TechStart Inc.", "Their solutions increased our efficiency by 300% and reduced costs significantly.", 5),
        ("Lisa Wang", "Operations Manager", "Global Corp", "Exceptional service and innovative solutions. Highly recommend their expertise.", 5),
    ],
    calls_to_action: ["Get Free Consultation", "View Our Solutions", "Start Your Project", "Schedule Demo"],
};

const HEALTHCARE: IndustryCopy = IndustryCopy {
    headlines: [
        "Your Health, Our Priority",
        "Compassionate Care When You Need It Most",
        "Advanced Healthcare Solutions",
        "Dedicated to Your Wellbeing",
        "Excellence in Patient Care",
    ],
    descriptions: [
        "Providing comprehensive healthcare services with compassion, expertise, and the latest medical technology.",
        "Our dedicated team of healthcare professionals is committed to delivering personalized care for your wellbeing.",
        "Experience healthcare that puts you first, with advanced treatments and a caring approach.",
    ],
    features: [
        ("Expert Physicians", "Board-certified doctors with specialized expertise", "👨‍⚕️"),
        ("Modern Facilities", "State-of-the-art medical equipment and facilities", "🏥"),
        ("Personalized Care", "Tailored treatment plans for individual needs", "❤️"),
        ("Emergency Services", "24/7 emergency care when you need it most", "🚑"),
    ],
    testimonials: [
        ("Jennifer Smith", "Patient", "", "The care I received was exceptional. The staff made me feel comfortable throughout.", 5),
        ("Robert Brown", "Patient", "", "Professional, caring, and thorough. I trust them completely with my health.", 5),
    ],
    calls_to_action: ["Book Appointment", "Find a Doctor", "Emergency Care", "Patient Portal"],
};

const CREATIVE: IndustryCopy = IndustryCopy {
    headlines: [
        "Bringing Your Vision to Life",
        "Creative Excellence in Every Project",
        "Where Art Meets Innovation",
        "Transforming Ideas into Reality",
        "Design That Makes an Impact",
    ],
    descriptions: [
        "We create stunning visual experiences that captivate audiences and bring your brand story to life.",
        "Our creative team combines artistic vision with strategic thinking to deliver exceptional design solutions.",
        "From concept to completion, we craft unique creative solutions that resonate with your audience.",
    ],
    features: [
        ("Brand Identity", "Distinctive brand design that sets you apart", "🎨"),
        ("Digital Design", "Modern web and app design for digital success", "💻"),
        ("Print Design", "Professional print materials that make an impact", "📄"),
        ("Creative Strategy", "Strategic creative direction for your brand", "💡"),
    ],
    testimonials: [
        ("Amanda Taylor", "Marketing Director", "Fashion Forward", "Their creative vision transformed our brand completely. Outstanding work!", 5),
        ("James Wilson", "Founder", "StartUp Studio", "Incredible attention to detail and creative flair. Exceeded all expectations.", 5),
    ],
    calls_to_action: ["View Portfolio", "Start Your Project", "Get Quote", "Creative Consultation"],
};

const BUSINESS: IndustryCopy = IndustryCopy {
    headlines: [
        "Professional Excellence You Can Trust",
        "Strategic Solutions for Business Growth",
        "Your Success is Our Mission",
        "Expert Guidance for Every Challenge",
        "Driving Results Through Partnership",
    ],
    descriptions: [
        "We provide strategic business solutions and professional services designed to accelerate your growth.",
        "Our experienced team delivers expert guidance and proven strategies to help you achieve your goals.",
        "Partner with us for comprehensive business solutions that drive measurable results and sustainable growth.",
    ],
    features: [
        ("Strategic Planning", "Comprehensive business strategy development", "📊"),
        ("Expert Consulting", "Professional guidance from industry experts", "🎯"),
        ("Process Optimization", "Streamlined operations for maximum efficiency", "⚙️"),
        ("Growth Solutions", "Scalable strategies for sustainable growth", "📈"),
    ],
    testimonials: [
        ("Mark Thompson", "CEO", "Growth Enterprises", "Their strategic guidance helped us double our revenue in just one year.", 5),
        ("Susan Davis", "Business Owner", "Local Services Co.", "Professional, knowledgeable, and results-driven. Highly recommend their services.", 5),
    ],
    calls_to_action: ["Schedule Consultation", "Learn More", "Get Started", "Contact Us"],
};

/// Resolves an industry key to the table it is served from.
pub fn resolve_industry(industry: &str) -> &'static str {
    match industry {
        "restaurant" => "restaurant",
        "technology" => "technology",
        "healthcare" => "healthcare",
        "creative" => "creative",
        _ => "business",
    }
}

fn copy_for(industry: &str) -> &'static IndustryCopy {
    match resolve_industry(industry) {
        "restaurant" => &RESTAURANT,
        "technology" => &TECHNOLOGY,
        "healthcare" => &HEALTHCARE,
        "creative" => &CREATIVE,
        _ => &BUSINESS,
    }
}

/// Replaces the leftmost occurrence of any of `needles` with `with`.
fn replace_first_of(text: &str, needles: &[&str], with: &str) -> String {
    let hit = needles
        .iter()
        .filter_map(|n| text.find(n).map(|at| (at, n.len())))
        .min_by_key(|(at, _)| *at);
    match hit {
        Some((at, len)) => format!("{}{}{}", &text[..at], with, &text[at + len..]),
        None => text.to_string(),
    }
}

fn customize_headline(headline: &str, ctx: &ContentContext) -> String {
    if ctx.business_type == "startup" {
        return replace_first_of(headline, &["Excellence", "Professional"], "Innovation");
    }
    if ctx.target_audience == "luxury" {
        return replace_first_of(headline, &["Your", "Our"], "Exclusive");
    }
    headline.to_string()
}

fn industry_stats(industry: &str) -> Vec<Stat> {
    let rows: [(&str, &str); 4] = match resolve_industry(industry) {
        "restaurant" => [("500+", "Happy Customers"), ("50+", "Signature Dishes"), ("5★", "Average Rating"), ("10+", "Years Experience")],
        "technology" => [("100+", "Projects Completed"), ("50+", "Happy Clients"), ("99.9%", "Uptime Guarantee"), ("24/7", "Support Available")],
        "healthcare" => [("10,000+", "Patients Served"), ("25+", "Medical Specialists"), ("15+", "Years of Service"), ("24/7", "Emergency Care")],
        "creative" => [("200+", "Projects Completed"), ("95%", "Client Satisfaction"), ("50+", "Brands Transformed"), ("10+", "Design Awards")],
        _ => [("500+", "Clients Served"), ("95%", "Success Rate"), ("20+", "Years Experience"), ("$10M+", "Revenue Generated")],
    };
    rows.iter()
        .map(|(number, label)| Stat { number: number.to_string(), label: label.to_string() })
        .collect()
}

fn achievements(industry: &str, business_type: &str) -> Vec<String> {
    let base: [&str; 3] = match resolve_industry(industry) {
        "restaurant" => ["Featured in Local Magazine", "Best Restaurant Award 2023", "Certified Organic Ingredients"],
        "technology" => ["ISO 27001 Certified", "AWS Partner", "Industry Innovation Award"],
        "healthcare" => ["Joint Commission Accredited", "Patient Safety Excellence Award", "Top Rated Healthcare Provider"],
        "creative" => ["Design Excellence Award", "Featured in Design Magazine", "Creative Agency of the Year"],
        _ => ["BBB A+ Rating", "Industry Leadership Award", "Certified Business Consultants"],
    };
    base.iter()
        .map(|a| {
            if business_type == "startup" {
                replace_first_of(a, &["Award", "Excellence"], "Innovation Recognition")
            } else {
                a.to_string()
            }
        })
        .collect()
}

fn about_content(ctx: &ContentContext) -> String {
    let startup = ctx.business_type == "startup";
    match resolve_industry(&ctx.industry) {
        "restaurant" => format!(
            "We are a {} restaurant dedicated to creating exceptional dining experiences. Our commitment to fresh, locally-sourced ingredients and innovative culinary techniques has made us a beloved destination for food enthusiasts.",
            if ctx.business_type == "family" { "family-owned" } else { "passionate" }
        ),
        "technology" => format!(
            "As a {}, we specialize in delivering cutting-edge solutions that transform businesses. Our team of expert developers and strategists work tirelessly to bring your digital vision to life.",
            if startup { "innovative startup" } else { "leading technology company" }
        ),
        "healthcare" => "Our healthcare facility is committed to providing compassionate, comprehensive medical care to our community. With a team of experienced physicians and state-of-the-art facilities, we ensure every patient receives the highest quality care.".to_string(),
        "creative" => format!(
            "We are a {} that believes in the power of great design to transform brands and connect with audiences. Our creative team brings fresh perspectives and innovative solutions to every project.",
            if startup { "dynamic creative studio" } else { "established design agency" }
        ),
        _ => format!(
            "As a {}, we partner with organizations to drive growth and operational excellence. Our proven methodologies and expert guidance help businesses achieve their strategic objectives.",
            if startup { "growing consultancy" } else { "established business services firm" }
        ),
    }
}

pub fn synthesize(ctx: &ContentContext) -> GeneratedContent {
    let copy = copy_for(&ctx.industry);
    let business = if ctx.business_type.is_empty() { "business" } else { ctx.business_type.as_str() };

    GeneratedContent {
        headlines: copy.headlines.iter().map(|h| customize_headline(h, ctx)).collect(),
        descriptions: copy.descriptions.iter().map(|d| d.to_string()).collect(),
        features: copy
            .features
            .iter()
            .map(|(title, description, icon)| Feature {
                title: title.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
            })
            .collect(),
        testimonials: copy
            .testimonials
            .iter()
            .map(|(name, role, company, content, rating)| Testimonial {
                name: name.to_string(),
                role: role.to_string(),
                company: company.to_string(),
                content: content.to_string(),
                rating: *rating,
            })
            .collect(),
        call_to_actions: copy.calls_to_action.iter().map(|c| c.to_string()).collect(),
        about_content: about_content(ctx),
        contact_info: ContactInfo {
            email: format!("info@{business}.com"),
            phone: "+1 (555) 123-4567".to_string(),
            address: ctx
                .location
                .clone()
                .unwrap_or_else(|| "123 Business Street, City, State 12345".to_string()),
        },
        social_proof: SocialProof {
            stats: industry_stats(&ctx.industry),
            achievements: achievements(&ctx.industry, &ctx.business_type),
        },
    }
}

/// Extra structured sample data some industries carry (menus, doctors, stacks).
pub fn industry_sample_data(industry: &str) -> Option<Value> {
    match industry {
        "restaurant" => Some(json!({
            "menuItems": [
                { "name": "Grilled Salmon", "price": "$28", "description": "Fresh Atlantic salmon with seasonal vegetables" },
                { "name": "Ribeye Steak", "price": "$35", "description": "Prime cut ribeye with garlic mashed potatoes" },
                { "name": "Pasta Primavera", "price": "$22", "description": "Fresh pasta with seasonal vegetables and herbs" }
            ],
            "hours": {
                "Monday-Thursday": "5:00 PM - 10:00 PM",
                "Friday-Saturday": "5:00 PM - 11:00 PM",
                "Sunday": "4:00 PM - 9:00 PM"
            }
        })),
        "technology" => Some(json!({
            "services": [
                { "name": "Cloud Migration", "description": "Seamless transition to cloud infrastructure" },
                { "name": "Custom Development", "description": "Tailored software solutions for your business" },
                { "name": "AI Integration", "description": "Intelligent automation and machine learning" }
            ],
            "technologies": ["React", "Node.js", "AWS", "Python", "Docker", "Kubernetes"]
        })),
        "healthcare" => Some(json!({
            "services": [
                { "name": "Primary Care", "description": "Comprehensive health and wellness services" },
                { "name": "Specialist Care", "description": "Expert care from board-certified specialists" },
                { "name": "Emergency Services", "description": "24/7 emergency medical care" }
            ],
            "doctors": [
                { "name": "Dr. Sarah Johnson", "specialty": "Internal Medicine", "experience": "15 years" },
                { "name": "Dr. Michael Chen", "specialty": "Cardiology", "experience": "12 years" }
            ]
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(industry: &str, business_type: &str, audience: &str) -> ContentContext {
        ContentContext {
            industry: industry.into(),
            business_type: business_type.into(),
            target_audience: audience.into(),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_industry_uses_business_table() {
        let travel = synthesize(&ctx("travel", "company", "general"));
        let business = synthesize(&ctx("business", "company", "general"));
        assert_eq!(travel, business);
        assert_eq!(travel.headlines[0], "Professional Excellence You Can Trust");
    }

    #[test]
    fn startup_swaps_first_matching_word_only() {
        let content = synthesize(&ctx("business", "startup", "general"));
        // "Professional" comes first in the sentence, so "Excellence" survives.
        assert_eq!(content.headlines[0], "Innovation Excellence You Can Trust");
        let tech = synthesize(&ctx("technology", "startup", "general"));
        assert_eq!(tech.headlines[4], "Where Innovation Meets Innovation");
        assert_eq!(
            content.social_proof.achievements[1],
            "Industry Leadership Innovation Recognition"
        );
    }

    #[test]
    fn luxury_audience_rewrites_possessives() {
        let content = synthesize(&ctx("healthcare", "company", "luxury"));
        assert_eq!(content.headlines[0], "Exclusive Health, Our Priority");
        // Startup rules take precedence over audience rules.
        let both = synthesize(&ctx("healthcare", "startup", "luxury"));
        assert_eq!(both.headlines[0], "Your Health, Our Priority");
    }

    #[test]
    fn contact_and_stats_follow_context() {
        let mut c = ctx("restaurant", "family", "general");
        c.location = Some("1 Via Roma, Florence".into());
        let content = synthesize(&c);
        assert_eq!(content.contact_info.email, "info@family.com");
        assert_eq!(content.contact_info.address, "1 Via Roma, Florence");
        assert_eq!(content.social_proof.stats[1].label, "Signature Dishes");
        assert!(content.about_content.starts_with("We are a family-owned restaurant"));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let c = ctx("creative", "startup", "young");
        assert_eq!(synthesize(&c), synthesize(&c));
    }

    #[test]
    fn sample_data_only_for_known_industries() {
        assert!(industry_sample_data("restaurant").is_some());
        assert!(industry_sample_data("creative").is_none());
    }
}
