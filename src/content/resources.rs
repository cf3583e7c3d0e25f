//! Outbound links shared by every language.

use super::types::{ResourceKind, ResourceLink};

/// Documentation and community links listed on the resources page.
static RESOURCES: [ResourceLink; 4] = [
    ResourceLink {
        title: "Open_PDKs Installer",
        url: "https://github.com/RTimothyEdwards/open_pdks",
        kind: ResourceKind::Github,
    },
    ResourceLink {
        title: "Efabless Platform",
        url: "https://efabless.com/",
        kind: ResourceKind::Community,
    },
    ResourceLink {
        title: "The IHP Open PDK Docs",
        url: "https://github.com/IHP-GmbH/IHP-Open-PDK",
        kind: ResourceKind::Docs,
    },
    ResourceLink {
        title: "SkyWater Documentation",
        url: "https://skywater-pdk.readthedocs.io/",
        kind: ResourceKind::Docs,
    },
];

/// Shared resource links in display order.
#[must_use]
pub fn resources() -> &'static [ResourceLink] {
    &RESOURCES
}
