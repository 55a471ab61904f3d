//! Strategy-roadmap types shared with the generation and export
//! collaborators.
//!
//! The provider call itself lives behind [`crate::ports::RoadmapGenerator`];
//! this module owns the document shape and the response-shaping fallback
//! that turns a loosely formatted provider reply into the eight canonical
//! module slots.

use serde::{Deserialize, Serialize};

/// Canonical module titles of a generated strategy blueprint.
pub const MODULE_TITLES: [&str; 8] = [
    "Audience and Platform Strategy",
    "Brand Positioning and Profile Optimization",
    "Content Themes and Weekly Content Plan",
    "Video + Carousel Creation Toolkit",
    "AI-Powered Workflow & Automation Plan",
    "Proof-Based and Value-Centric Growth Strategy",
    "Events, Lives, and Community Strategy",
    "Analytics & Optimization",
];

/// Brand intake handed to the generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub brand_name: String,
    pub industry: String,
    pub target_audience: String,
    pub goals: String,
    pub experience: Option<String>,
    pub additional_context: Option<String>,
    /// Provider credential, passed through verbatim.
    pub api_key: String,
}

/// One module of a strategy document. `content` is an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyModule {
    pub title: String,
    pub content: String,
}

/// A generated strategy document: an ordered sequence of modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDocument {
    pub modules: Vec<StrategyModule>,
}

impl StrategyDocument {
    /// Shape a raw provider reply into a document.
    ///
    /// Providers are asked for a JSON object, but replies frequently wrap
    /// it in prose or drop the structure entirely. The embedded JSON
    /// object is tried first; anything else goes through heuristic
    /// segmentation into the eight canonical slots.
    pub fn from_provider_text(text: &str) -> Self {
        if let Some(start) = text.find('{') {
            if let Some(end) = text.rfind('}') {
                if start < end {
                    if let Ok(doc) = serde_json::from_str::<StrategyDocument>(&text[start..=end])
                    {
                        if !doc.modules.is_empty() {
                            return doc;
                        }
                    }
                }
            }
        }
        Self::from_plain_text(text)
    }

    /// Heuristic segmentation of an unstructured reply: split at module
    /// headings and fill the eight canonical slots in order. Text that
    /// matches no heading at all lands wholesale in the first slot.
    pub fn from_plain_text(text: &str) -> Self {
        let mut modules: Vec<StrategyModule> = MODULE_TITLES
            .iter()
            .map(|title| StrategyModule {
                title: (*title).to_string(),
                content: String::new(),
            })
            .collect();

        let sections = split_sections(text);
        for (index, section) in sections.iter().enumerate().take(modules.len()) {
            let cleaned = strip_heading(section);
            if !cleaned.is_empty() {
                modules[index].content = to_html_fragment(cleaned);
            }
        }

        if modules.iter().all(|module| module.content.is_empty()) {
            modules[0].content = to_html_fragment(text.trim());
        }

        StrategyDocument { modules }
    }
}

/// Emoji bullets the provider prompt attaches to each module heading.
const SECTION_MARKERS: [&str; 8] = ["📍", "💡", "🎯", "📹", "🧠", "📈", "🎤", "📊"];

fn is_section_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    if SECTION_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
    {
        return true;
    }
    if let Some(rest) = strip_prefix_ignore_case(trimmed, "module ") {
        return rest.starts_with(|c: char| c.is_ascii_digit());
    }
    // "# 3." / "## 3" style numbered headings
    let after_hashes = trimmed.trim_start_matches('#');
    if after_hashes.len() != trimmed.len() {
        return after_hashes
            .trim_start()
            .starts_with(|c: char| c.is_ascii_digit());
    }
    false
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Split the reply at section starts. The text before the first heading is
/// its own (possibly empty) leading section, so headings stay aligned with
/// slot order.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = vec![String::new()];
    for line in text.lines() {
        if is_section_start(line) && !sections.last().is_some_and(|s| s.trim().is_empty()) {
            sections.push(String::new());
        }
        if let Some(current) = sections.last_mut() {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    sections
}

/// Drop the heading decoration from the front of a section: emoji bullet,
/// "Module N:" prefix, or leading "## N." marker.
fn strip_heading(section: &str) -> &str {
    let mut rest = section.trim();
    for marker in SECTION_MARKERS {
        rest = rest.trim_start_matches(marker).trim_start();
    }
    if let Some(after) = strip_prefix_ignore_case(rest, "module ") {
        let after = after.trim_start_matches(|c: char| c.is_ascii_digit());
        rest = after.strip_prefix(':').unwrap_or(after).trim_start();
    }
    let after_hashes = rest.trim_start_matches('#');
    if after_hashes.len() != rest.len() {
        rest = after_hashes
            .trim_start()
            .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.')
            .trim_start();
    }
    rest
}

/// Minimal HTML-ification of plain text: `**bold**` spans and line breaks.
fn to_html_fragment(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str("<div>");
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() >= 3 && parts.len() % 2 == 1 {
        for (index, part) in parts.iter().enumerate() {
            if index % 2 == 1 {
                out.push_str("<strong>");
                out.push_str(&part.replace('\n', "<br>"));
                out.push_str("</strong>");
            } else {
                out.push_str(&part.replace('\n', "<br>"));
            }
        }
    } else {
        out.push_str(&text.replace('\n', "<br>"));
    }
    out.push_str("</div>");
    out
}
