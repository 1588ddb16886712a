//! Prompt templates for marketing copy and poster generation.
//!
//! Content type and tone are free-form labels. Matching is case-insensitive and
//! anything unrecognised falls back to a generic template instead of failing.

/// Layout family selected by the requested content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    SocialMediaPost,
    PosterHeadline,
    AdCopy,
    EmailNewsletter,
    Generic,
}

impl ContentKind {
    /// Accepts `Social Media Post`, `social-media-post`, `social_media_post`, ...
    pub fn from_label(label: &str) -> Self {
        match normalize(label).as_str() {
            "social media post" => Self::SocialMediaPost,
            "poster headline" => Self::PosterHeadline,
            "ad copy" => Self::AdCopy,
            "email newsletter" => Self::EmailNewsletter,
            _ => Self::Generic,
        }
    }

    fn composition(self) -> &'static str {
        match self {
            Self::SocialMediaPost => "Square format (1080x1080px) marketing poster with bold headline text, brand logo space, and engaging visual composition",
            Self::PosterHeadline => "Vertical marketing poster layout (24x36 inches ratio) with large headline text, subheadings, and dramatic visual hierarchy",
            Self::AdCopy => "Banner format (1200x628) marketing advertisement with product focus, headline text, and call-to-action area",
            Self::EmailNewsletter => "Email header format (600x200px) marketing banner with newsletter branding, headline text, and professional layout",
            Self::Generic => "Professional marketing poster format with balanced visual layout, headline text, and brand elements",
        }
    }

    fn visual_elements(self) -> &'static str {
        match self {
            Self::SocialMediaPost => "Eye-catching headline text, brand graphics, call-to-action buttons, social media icons, trendy design patterns, marketing copy",
            Self::PosterHeadline => "Large bold headline text, compelling subheadings, marketing copy, brand logos, call-to-action text, powerful imagery",
            Self::AdCopy => "Product showcase imagery, benefit bullet points, persuasive headline text, call-to-action buttons, brand logos",
            Self::EmailNewsletter => "Newsletter title text, company branding, trustworthy imagery, professional graphics, contact information",
            Self::Generic => "Engaging marketing graphics with commercial appeal, headline text, brand logos, call-to-action elements",
        }
    }

    fn color_palette(self) -> &'static str {
        match self {
            Self::SocialMediaPost => "Vibrant, Instagram-worthy colors with high saturation and contrast for maximum engagement",
            Self::PosterHeadline => "High-contrast color scheme with bold, impactful color combinations designed for visibility and impact",
            Self::AdCopy => "Brand-focused colors that build trust and encourage action with conversion-optimized color psychology",
            Self::EmailNewsletter => "Email-safe colors with professional, readable color scheme optimized for inbox visibility",
            Self::Generic => "Modern marketing color palette designed for commercial impact",
        }
    }

    fn design_style(self) -> &'static str {
        match self {
            Self::SocialMediaPost => "Modern social media marketing poster with flat design elements, bold typography, and contemporary styling",
            Self::PosterHeadline => "Professional marketing poster design with cinematic styling, bold typography, and commercial visual impact",
            Self::AdCopy => "Clean advertising poster layout with conversion-optimized design elements and professional marketing appeal",
            Self::EmailNewsletter => "Corporate newsletter marketing design with clean, professional aesthetics and business appeal",
            Self::Generic => "Contemporary marketing poster design with professional commercial appeal",
        }
    }
}

/// Mood family selected by the requested tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Witty,
    Inspirational,
    Formal,
    Generic,
}

impl Tone {
    pub fn from_label(label: &str) -> Self {
        match normalize(label).as_str() {
            "professional" => Self::Professional,
            "casual" => Self::Casual,
            "witty" => Self::Witty,
            "inspirational" => Self::Inspirational,
            "formal" => Self::Formal,
            _ => Self::Generic,
        }
    }

    fn design_mood(self) -> &'static str {
        match self {
            Self::Professional => "Corporate sophistication with premium business appeal",
            Self::Casual => "Friendly and approachable with relaxed atmosphere",
            Self::Witty => "Creative and engaging with clever visual elements",
            Self::Inspirational => "Uplifting and motivational with aspirational energy",
            Self::Formal => "Traditional elegance with refined sophistication",
            Self::Generic => "Balanced professional appeal",
        }
    }

    fn style_details(self) -> &'static str {
        match self {
            Self::Professional => "Clean minimalist layout, sophisticated typography, executive-level aesthetics",
            Self::Casual => "Warm, inviting design with accessible styling and comfortable feel",
            Self::Witty => "Playful graphics, creative compositions, smart visual humor",
            Self::Inspirational => "Inspiring imagery, positive visual elements, achievement-focused design",
            Self::Formal => "Classic design principles, conservative styling, timeless aesthetics",
            Self::Generic => "Versatile design with broad commercial appeal",
        }
    }
}

fn normalize(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-instruction prompt for the marketing copy itself.
pub fn compose_text_prompt(language: &str, content_type: &str, tone: &str, idea: &str) -> String {
    format!(
        "Generate a {content_type} in a {tone} tone, using the {language} language, based on this idea: {idea}. \n\n\
         Please make the content engaging, compelling, and appropriate for marketing purposes. \
         The content should be well-structured, persuasive, and suitable for the specified content type and tone."
    )
}

/// Structured poster prompt combining the content-type layout with the tone mood.
pub fn compose_image_prompt(content_type: &str, tone: &str, idea: &str) -> String {
    let kind = ContentKind::from_label(content_type);
    let mood = Tone::from_label(tone);
    let poster_type = content_type.to_lowercase();

    format!(
        r#"Create a complete marketing poster for: "{idea}"

POSTER TYPE: {poster_type} marketing poster with full text and graphics

COMPOSITION & FORMAT:
{composition}

VISUAL ELEMENTS & TEXT:
{visual_elements}
- Include compelling headline text related to "{idea}"
- Add marketing copy and persuasive text elements
- Include brand elements and marketing graphics
- Add call-to-action text and buttons where appropriate

COLOR SCHEME:
{color_palette}

DESIGN STYLE:
{design_style}

MOOD & TONE:
{design_mood}
{style_details}

MARKETING POSTER REQUIREMENTS:
- Complete marketing poster with integrated text and graphics
- Eye-catching headline text that relates directly to "{idea}"
- Professional marketing copy and persuasive messaging
- Brand-ready design with commercial marketing appeal
- Call-to-action elements and marketing graphics
- Industry-standard marketing poster layout and typography
- Text should be clear, readable, and professionally designed
- Include marketing elements like logos, badges, or promotional graphics
- Ready-to-use marketing poster suitable for campaigns

TECHNICAL SPECIFICATIONS:
- High resolution marketing poster quality
- Professional typography and text integration
- Marketing industry standard composition with text hierarchy
- Commercial-grade poster design with full marketing elements
- Complete poster design including all text and graphic elements

CREATE A COMPLETE MARKETING POSTER, NOT JUST AN IMAGE - include all text, headlines, marketing copy, and graphic elements integrated into the design."#,
        composition = kind.composition(),
        visual_elements = kind.visual_elements(),
        color_palette = kind.color_palette(),
        design_style = kind.design_style(),
        design_mood = mood.design_mood(),
        style_details = mood.style_details(),
    )
}
