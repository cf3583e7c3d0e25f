//! Shapes of the localized content tree.
//!
//! Every language deserializes into the same structs, so field presence is
//! guaranteed by the type system. List lengths and ids are checked by
//! [`crate::content::validate`].

use serde::Deserialize;

/// Full localized set of display strings and lists for one language.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentTree {
    /// Navigation labels, one per page.
    pub nav: NavLabels,
    /// Landing headline.
    pub hero: Hero,
    /// Introductory block on the home page.
    pub intro: Intro,
    /// Process design kit options.
    pub pdk_section: PdkSection,
    /// EDA toolchain listing.
    pub tools_section: ToolsSection,
    /// Ordered prototyping flow.
    pub flow_section: FlowSection,
    /// Resource links heading and roadmap.
    pub resources_section: ResourcesSection,
    /// Footer text.
    pub footer: Footer,
    /// Terminal chrome strings (help overlay, key hints, alerts).
    pub interface: Interface,
}

/// Navigation labels shown as page tabs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLabels {
    /// Home tab.
    pub home: String,
    /// Process design kit tab.
    pub pdk: String,
    /// Tools tab.
    pub tools: String,
    /// Prototyping flow tab.
    pub flow: String,
    /// Resources tab.
    pub resources: String,
}

/// Landing headline. `highlight` must occur inside `title`; the renderer
/// emphasizes that span.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Full headline.
    pub title: String,
    /// Emphasized span of `title`.
    pub highlight: String,
    /// Lead paragraph under the headline.
    pub description: String,
}

impl Hero {
    /// What: Split the title around the first occurrence of the highlight.
    ///
    /// Output:
    /// - `(before, highlight, after)`; when the highlight is empty or absent the
    ///   whole title is returned as `before`.
    #[must_use]
    pub fn split_title(&self) -> (&str, &str, &str) {
        if self.highlight.is_empty() {
            return (&self.title, "", "");
        }
        match self.title.find(&self.highlight) {
            Some(start) => {
                let end = start + self.highlight.len();
                (
                    &self.title[..start],
                    &self.title[start..end],
                    &self.title[end..],
                )
            }
            None => (&self.title, "", ""),
        }
    }
}

/// Home page introduction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Intro {
    /// Section heading.
    pub title: String,
    /// Body paragraph.
    pub description: String,
    /// Key points in display order.
    pub bullets: Vec<String>,
    /// Caption of the layer-stacking illustration.
    pub illustration: String,
}

/// One process design kit the site describes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdkOption {
    /// Stable identifier shared by all languages (e.g. `sky`).
    pub id: String,
    /// Kit name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Detail note under the description.
    pub details: String,
}

/// Process design kit page content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdkSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Small caption printed under each option name.
    pub card_subtitle: String,
    /// Kits in display order.
    pub options: Vec<PdkOption>,
}

/// One EDA tool.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    /// Stable identifier shared by all languages.
    pub id: String,
    /// Tool name.
    pub name: String,
    /// Localized category tag.
    pub category: String,
    /// What the tool does.
    pub description: String,
}

/// Tools page content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Tools in display order.
    pub tools: Vec<Tool>,
}

/// One step of the prototyping flow. `id` is the 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowStep {
    /// 1-based position in the flow.
    pub id: u32,
    /// Step title.
    pub label: String,
    /// Step explanation.
    pub description: String,
}

/// Flow page content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Steps in order.
    pub steps: Vec<FlowStep>,
}

/// Resources page text around the shared links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourcesSection {
    /// Section heading.
    pub title: String,
    /// Lead paragraph.
    pub description: String,
    /// Heading above the shared link list.
    pub links_title: String,
    /// Roadmap heading.
    pub roadmap_title: String,
    /// Roadmap lead text.
    pub roadmap_description: String,
    /// Planned features.
    pub roadmap_features: Vec<String>,
}

/// Footer notice parts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Footer {
    /// Brand name in the copyright notice.
    pub brand: String,
    /// Rights statement after the brand.
    pub rights: String,
}

/// Localized terminal chrome: help overlay and key-hint action names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Interface {
    /// Help overlay title.
    pub help_title: String,
    /// Hint for closing an overlay.
    pub close_hint: String,
    /// Quit action.
    pub quit: String,
    /// Help action.
    pub help: String,
    /// Next page action.
    pub next_page: String,
    /// Previous page action.
    pub prev_page: String,
    /// Jump-to-page action.
    pub jump_page: String,
    /// Language switch action.
    pub cycle_language: String,
    /// Scroll action.
    pub scroll: String,
    /// Link selection action.
    pub select_link: String,
    /// Open link action.
    pub open_link: String,
    /// Alert prefix when a link cannot be opened.
    pub link_open_failed: String,
}

/// Category tag of a resource link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Source repository.
    Github,
    /// Documentation site.
    Docs,
    /// Community hub.
    Community,
}

impl ResourceKind {
    /// Tag printed next to the link title.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Docs => "docs",
            Self::Community => "community",
        }
    }
}

/// Outbound link shared by every language. The URL is an opaque string; it
/// is never fetched or validated beyond its scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLink {
    /// Display title.
    pub title: &'static str,
    /// Absolute `http(s)` URL.
    pub url: &'static str,
    /// Category tag.
    pub kind: ResourceKind,
}
