//! Asset corpus compiled into the binary.

use foxx_core::{
    application::{ApplicationError, ports::AssetProvider},
    domain::TemplateName,
    error::FoxxResult,
};
use tracing::debug;

pub const README_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/templates/README.md.tpl"
));
pub const LICENSE_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/templates/LICENSE.tpl"
));
pub const ROUTER_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/templates/router.js.tpl"
));
pub const SETUP_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/templates/setup.js.tpl"
));
pub const TEARDOWN_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/templates/teardown.js.tpl"
));

/// Bundled SPDX texts, sorted by identifier.
const LICENSES: [(&str, &str); 7] = [
    (
        "0BSD",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/0BSD.txt")),
    ),
    (
        "Apache-2.0",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/Apache-2.0.txt")),
    ),
    (
        "BSD-2-Clause",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/BSD-2-Clause.txt")),
    ),
    (
        "BSD-3-Clause",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/BSD-3-Clause.txt")),
    ),
    (
        "ISC",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/ISC.txt")),
    ),
    (
        "MIT",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/MIT.txt")),
    ),
    (
        "Unlicense",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/licenses/Unlicense.txt")),
    ),
];

/// The default, compiled-in asset corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }

    /// Source text of a bundled template.
    pub fn template_source(name: TemplateName) -> &'static str {
        match name {
            TemplateName::ReadMe => README_TEMPLATE,
            TemplateName::License => LICENSE_TEMPLATE,
            TemplateName::Router => ROUTER_TEMPLATE,
            TemplateName::Setup => SETUP_TEMPLATE,
            TemplateName::Teardown => TEARDOWN_TEMPLATE,
        }
    }

    /// Raw text of a bundled license.
    pub fn license_source(id: &str) -> Option<&'static str> {
        LICENSES
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, text)| *text)
    }
}

impl AssetProvider for EmbeddedAssets {
    fn template(&self, name: TemplateName) -> FoxxResult<String> {
        Ok(Self::template_source(name).to_string())
    }

    fn license(&self, id: &str) -> FoxxResult<String> {
        debug!(license = id, "Looking up embedded license");
        Self::license_source(id)
            .map(str::to_string)
            .ok_or_else(|| ApplicationError::LicenseNotFound { id: id.to_string() }.into())
    }

    fn license_ids(&self) -> FoxxResult<Vec<String>> {
        Ok(LICENSES.iter().map(|(id, _)| id.to_string()).collect())
    }
}
