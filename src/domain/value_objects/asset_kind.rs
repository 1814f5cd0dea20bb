//! Asset kind value object - which bundle family a block belongs to

use serde::{Deserialize, Serialize};

/// Kind of asset carried by a compress block and the bundle it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// JavaScript (`{% compress js %}`)
    Script,
    /// CSS (`{% compress css %}`)
    Style,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Script, AssetKind::Style];

    /// Parse the argument of a compress tag
    pub fn from_tag(arg: &str) -> Option<Self> {
        match arg.trim().to_ascii_lowercase().as_str() {
            "js" | "script" => Some(AssetKind::Script),
            "css" | "style" => Some(AssetKind::Style),
            _ => None,
        }
    }

    /// Stable tag mixed into fingerprints and used in the manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Script => "script",
            AssetKind::Style => "style",
        }
    }

    /// Sub-directory of the cache root holding this kind's bundles
    pub fn directory_name(&self) -> &'static str {
        match self {
            AssetKind::Script => "js",
            AssetKind::Style => "css",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.directory_name()
    }

    /// Glue placed between hunks when concatenating a bundle
    pub fn separator(&self) -> &'static str {
        match self {
            AssetKind::Script => ";\n",
            AssetKind::Style => "\n",
        }
    }

    /// Markup emitted in place of a compress block for a bundle URL
    pub fn markup(&self, url: &str) -> String {
        match self {
            AssetKind::Script => format!(
                "<script type=\"text/javascript\" src=\"{}\"></script>",
                url
            ),
            AssetKind::Style => format!(
                "<link rel=\"stylesheet\" href=\"{}\" type=\"text/css\">",
                url
            ),
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
