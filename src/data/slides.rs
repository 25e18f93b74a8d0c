use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideKind {
    Cover,
    Contents,
    Divider,
    Metrics,
    Insights,
    Closing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SlideKind,
}

const fn slide(id: &'static str, title: &'static str, kind: SlideKind) -> SlideSpec {
    SlideSpec { id, title, kind }
}

/// Presentation order. The cursor bound is derived from this list.
pub const SLIDES: &[SlideSpec] = &[
    slide("cover", "Competitive SEO & AI Visibility Report", SlideKind::Cover),
    slide("contents", "Table of Contents", SlideKind::Contents),
    slide("traffic-divider", "Organic Traffic Overview", SlideKind::Divider),
    slide("traffic-overview", "Organic Traffic Overview", SlideKind::Metrics),
    slide("keyword-divider", "Keyword Performance Metrics", SlideKind::Divider),
    slide("keyword-opportunities", "Keyword Opportunities & Rankings", SlideKind::Metrics),
    slide("category-divider", "Category-Wise Competitive Performance", SlideKind::Divider),
    slide("ngfw", "NGFW / Firewall", SlideKind::Metrics),
    slide("sdwan", "SD-WAN", SlideKind::Metrics),
    slide("ot-security", "OT Security", SlideKind::Metrics),
    slide("sase", "SASE Category Performance", SlideKind::Metrics),
    slide("zero-trust", "Zero Trust Security", SlideKind::Metrics),
    slide("cloud-security", "Cloud Security Category Performance", SlideKind::Metrics),
    slide("llm-divider", "LLM & AI Visibility Metrics", SlideKind::Divider),
    slide("llm-overall", "Overall LLM Metrics", SlideKind::Metrics),
    slide("llm-category", "Focused Category - AI Visibility %", SlideKind::Metrics),
    slide("ai-overview", "AI Overview Metrics", SlideKind::Metrics),
    slide("backlink-divider", "Backlink Competitive Analysis", SlideKind::Divider),
    slide("backlinks", "Competition Backlink Performance", SlideKind::Metrics),
    slide("intel-divider", "Competitive Intelligence Insights", SlideKind::Divider),
    slide("competitive-intel", "Fortinet – Competitive Intelligence Tips", SlideKind::Insights),
    slide("keyword-gap", "Keyword Gap", SlideKind::Insights),
    slide("competitive-findings", "Competition Website Findings", SlideKind::Insights),
    slide("thank-you", "Thank You", SlideKind::Closing),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentsSection {
    pub title: &'static str,
    pub color: &'static str,
    /// `(label, slide id)` pairs.
    pub items: &'static [(&'static str, &'static str)],
}

pub const CONTENTS: &[ContentsSection] = &[
    ContentsSection {
        title: "1. Organic Traffic Overview",
        color: "#EF4444",
        items: &[("Organic Traffic Overview (Tabbed)", "traffic-overview")],
    },
    ContentsSection {
        title: "2. Keyword Performance Metrics",
        color: "#FF7AB6",
        items: &[("Keyword Opportunities & Rankings", "keyword-opportunities")],
    },
    ContentsSection {
        title: "3. Category-Wise Competitive Performance",
        color: "#7ED957",
        items: &[
            ("NGFW / Firewall Category Performance", "ngfw"),
            ("SD-WAN Category Performance", "sdwan"),
            ("OT Security Category Performance", "ot-security"),
            ("SASE Category Performance", "sase"),
            ("Zero Trust Security Category Performance", "zero-trust"),
            ("Cloud Security Category Performance", "cloud-security"),
        ],
    },
    ContentsSection {
        title: "4. LLM & AI Visibility Metrics",
        color: "#FFB14A",
        items: &[
            ("Overall LLM Metrics", "llm-overall"),
            ("Category-Wise LLM Metrics", "llm-category"),
            ("AI Overview Metrics", "ai-overview"),
        ],
    },
    ContentsSection {
        title: "5. Backlink Competitive Analysis",
        color: "#6C9AFF",
        items: &[("Competition Backlink Performance", "backlinks")],
    },
    ContentsSection {
        title: "6. Competitive Intelligence Insights",
        color: "#FF8E5A",
        items: &[
            ("Fortinet – Competitive Intelligence Tips", "competitive-intel"),
            ("Keyword Gap Analysis", "keyword-gap"),
        ],
    },
];

/// Index of the slide with `id` in [`SLIDES`].
#[must_use]
pub fn slide_index(id: &str) -> Option<usize> {
    SLIDES.iter().position(|slide| slide.id == id)
}
