//! `themeConfig.sidebar` configuration: the navigation tree.
//!
//! The renderer's wire shape distinguishes page links from groups by field
//! presence (`path` vs `children`). In memory the two are separate variants
//! of [`NavNode`], so a well-formed node can never be both at once; source
//! nodes that *are* both survive parsing only so validation can point at
//! them.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::LinkTarget;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Nesting depth the theme's sidebar actually renders.
const MAX_NAV_DEPTH: usize = 3;

// ============================================================================
// sidebar
// ============================================================================

/// `themeConfig.sidebar` — the navigation tree the theme renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Let the theme derive the sidebar from page headings instead of `nav`.
    pub auto: bool,

    /// Ordered navigation tree (groups and page links).
    pub nav: Vec<NavNode>,
}

impl SidebarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav = FieldPath::new("themeConfig.sidebar.nav");
        if !self.auto && self.nav.is_empty() {
            diag.warn(nav.clone(), "navigation is empty and `auto` is disabled");
        }
        for (i, node) in self.nav.iter().enumerate() {
            node.validate(&nav.index(i), 1, diag);
        }
    }

    /// All page links in the tree, depth-first (sidebar order).
    pub fn leaves(&self) -> Vec<&NavLeaf> {
        let mut out = Vec::new();
        for node in &self.nav {
            node.collect_leaves(&mut out);
        }
        out
    }
}

// ============================================================================
// nav nodes
// ============================================================================

/// A sidebar navigation node: a clickable page link or a titled group.
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    Leaf(NavLeaf),
    Group(NavGroup),
}

/// A clickable sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLeaf {
    pub title: String,

    /// Site path or external URL. `None` when the source omitted it;
    /// validation rejects such nodes.
    pub path: Option<String>,

    /// Entry points at a directory of pages rather than a single page.
    pub directory: bool,
}

/// A titled group of child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup {
    pub title: String,
    pub children: Vec<NavNode>,

    /// `path` carried alongside `children` in the source. Always a defect;
    /// kept so validation can point at the node.
    pub stray_path: Option<String>,
}

impl NavNode {
    /// Page link entry.
    pub fn leaf(title: &str, path: &str) -> Self {
        Self::Leaf(NavLeaf {
            title: title.into(),
            path: Some(path.into()),
            directory: false,
        })
    }

    /// Page link entry targeting a directory of pages.
    pub fn directory(title: &str, path: &str) -> Self {
        Self::Leaf(NavLeaf {
            title: title.into(),
            path: Some(path.into()),
            directory: true,
        })
    }

    /// Titled group with children.
    pub fn group(title: &str, children: Vec<NavNode>) -> Self {
        Self::Group(NavGroup {
            title: title.into(),
            children,
            stray_path: None,
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.title,
            Self::Group(group) => &group.title,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Append this node's page links (depth-first) to `out`.
    pub fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a NavLeaf>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Group(group) => {
                for child in &group.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    fn validate(&self, at: &FieldPath, depth: usize, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Leaf(leaf) => leaf.validate(at, diag),
            Self::Group(group) => group.validate(at, depth, diag),
        }
    }
}

impl NavLeaf {
    fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(at.field("title"), "title is empty");
        }
        match &self.path {
            None => diag.error_with_hint(
                at.clone(),
                "node has neither `path` nor `children`",
                "add `path` for a page link, or `children` to make this a group",
            ),
            Some(path) => {
                if let Err(reason) = LinkTarget::classify(path) {
                    diag.error(at.field("path"), reason);
                } else if self.directory && path.ends_with(".html") {
                    diag.warn(
                        at.field("directory"),
                        "directory entry points at a single .html page",
                    );
                }
            }
        }
    }
}

impl NavGroup {
    fn validate(&self, at: &FieldPath, depth: usize, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(at.field("title"), "title is empty");
        }
        if let Some(path) = &self.stray_path {
            diag.error_with_hint(
                at.clone(),
                format!("node has both `path` (\"{path}\") and `children`"),
                "a group renders from its children; drop `path` or make this a page link",
            );
        }
        if self.children.is_empty() {
            diag.error(at.field("children"), "group has an empty `children` list");
        } else if depth >= MAX_NAV_DEPTH {
            diag.warn(
                at.clone(),
                format!("nested deeper than the theme renders ({MAX_NAV_DEPTH} levels)"),
            );
        }
        let children = at.field("children");
        for (i, child) in self.children.iter().enumerate() {
            child.validate(&children.index(i), depth + 1, diag);
        }
    }
}

// ============================================================================
// serde layer (renderer wire shape)
// ============================================================================

impl Serialize for NavNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(leaf) => {
                let len = 1 + usize::from(leaf.path.is_some()) + usize::from(leaf.directory);
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("title", &leaf.title)?;
                if let Some(path) = &leaf.path {
                    map.serialize_entry("path", path)?;
                }
                if leaf.directory {
                    map.serialize_entry("directory", &true)?;
                }
                map.end()
            }
            Self::Group(group) => {
                let len = 2 + usize::from(group.stray_path.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("title", &group.title)?;
                if let Some(path) = &group.stray_path {
                    map.serialize_entry("path", path)?;
                }
                map.serialize_entry("children", &group.children)?;
                map.end()
            }
        }
    }
}

/// Wire shape of a node; classification happens after all fields are read.
#[derive(Deserialize)]
struct NodeFields {
    #[serde(default)]
    title: String,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    directory: Option<bool>,
    #[serde(default)]
    children: Option<Vec<NavNode>>,
}

impl<'de> Deserialize<'de> for NavNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = NodeFields::deserialize(deserializer)?;
        Ok(match fields.children {
            Some(children) => Self::Group(NavGroup {
                title: fields.title,
                children,
                stray_path: fields.path,
            }),
            None => Self::Leaf(NavLeaf {
                title: fields.title,
                path: fields.path,
                directory: fields.directory.unwrap_or(false),
            }),
        })
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> NavNode {
        serde_json::from_str(json).unwrap()
    }

    fn check_nav(nav: Vec<NavNode>) -> ConfigDiagnostics {
        let sidebar = SidebarConfig { auto: false, nav };
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);
        diag
    }

    #[test]
    fn test_deserialize_leaf() {
        let node = parse(r#"{"title": "Get Started", "path": "/Education/getting_started.html"}"#);
        assert_eq!(
            node,
            NavNode::leaf("Get Started", "/Education/getting_started.html")
        );
    }

    #[test]
    fn test_deserialize_directory_leaf() {
        let node = parse(r#"{"title": "Module Specs", "path": "/Modules", "directory": true}"#);
        assert_eq!(node, NavNode::directory("Module Specs", "/Modules"));
    }

    #[test]
    fn test_deserialize_group() {
        let node = parse(
            r#"{"title": "Run Bots", "children": [
                {"title": "Sentinel Bot", "path": "/tools/sentinel.html"},
                {"title": "Auction Bot", "path": "/tools/auction.html"}
            ]}"#,
        );
        let NavNode::Group(group) = &node else {
            panic!("expected a group");
        };
        assert_eq!(group.children.len(), 2);
        assert!(group.children.iter().all(NavNode::is_leaf));
        assert_eq!(
            group.children[1],
            NavNode::leaf("Auction Bot", "/tools/auction.html")
        );
    }

    #[test]
    fn test_roundtrip_preserves_tree_and_order() {
        let nav = vec![
            NavNode::group(
                "Getting Started",
                vec![
                    NavNode::leaf("Get Started", "/Education/getting_started.html"),
                    NavNode::directory("Migration Guide", "/kava-8"),
                    NavNode::group(
                        "Run Bots",
                        vec![
                            NavNode::leaf("Sentinel Bot", "/tools/sentinel.html"),
                            NavNode::leaf("Auction Bot", "/tools/auction.html"),
                        ],
                    ),
                ],
            ),
            NavNode::leaf("REST API Spec", "https://swagger.kava.io/"),
        ];
        let json = serde_json::to_string(&nav).unwrap();
        let parsed: Vec<NavNode> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, nav);
    }

    #[test]
    fn test_directory_flag_omitted_when_false() {
        let json = serde_json::to_string(&NavNode::leaf("FAQ", "/Education/FAQ/")).unwrap();
        assert!(!json.contains("directory"));

        let json = serde_json::to_string(&NavNode::directory("FAQ", "/Education/FAQ/")).unwrap();
        assert!(json.contains(r#""directory":true"#));
    }

    #[test]
    fn test_node_with_both_path_and_children_rejected() {
        let node = parse(r#"{"title": "Bad", "path": "/x.html", "children": [
            {"title": "Child", "path": "/y.html"}
        ]}"#);
        // Classified as a group so the defect is positional, not silent
        let diag = check_nav(vec![node]);
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field.as_str(), "themeConfig.sidebar.nav[0]");
        assert!(err.message.contains("both"));
    }

    #[test]
    fn test_node_with_neither_path_nor_children_rejected() {
        let node = parse(r#"{"title": "Orphan"}"#);
        let diag = check_nav(vec![node]);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("neither"));
    }

    #[test]
    fn test_empty_children_rejected() {
        let node = parse(r#"{"title": "Hollow", "children": []}"#);
        let diag = check_nav(vec![node]);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.sidebar.nav[0].children"
        );
    }

    #[test]
    fn test_nested_defect_position() {
        let nav = vec![
            NavNode::group(
                "Resources",
                vec![
                    NavNode::leaf("Community Tools", "/tools/community.html"),
                    NavNode::leaf("", "relative/path.html"),
                ],
            ),
        ];
        let diag = check_nav(nav);
        assert_eq!(diag.len(), 2);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.sidebar.nav[0].children[1].title"
        );
        assert_eq!(
            diag.errors()[1].field.as_str(),
            "themeConfig.sidebar.nav[0].children[1].path"
        );
    }

    #[test]
    fn test_deep_nesting_warns() {
        let nav = vec![NavNode::group(
            "L1",
            vec![NavNode::group(
                "L2",
                vec![NavNode::group(
                    "L3",
                    vec![NavNode::leaf("L4", "/deep.html")],
                )],
            )],
        )];
        let diag = check_nav(nav);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(
            diag.warnings()[0].0.as_str(),
            "themeConfig.sidebar.nav[0].children[0].children[0]"
        );
    }

    #[test]
    fn test_empty_nav_warns_without_auto() {
        let diag = check_nav(Vec::new());
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);

        let sidebar = SidebarConfig { auto: true, nav: Vec::new() };
        let mut diag = ConfigDiagnostics::new();
        sidebar.validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_leaves_in_sidebar_order() {
        let sidebar = SidebarConfig {
            auto: false,
            nav: vec![
                NavNode::group(
                    "A",
                    vec![
                        NavNode::leaf("one", "/one.html"),
                        NavNode::group("B", vec![NavNode::leaf("two", "/two.html")]),
                    ],
                ),
                NavNode::leaf("three", "/three.html"),
            ],
        };
        let titles: Vec<_> = sidebar.leaves().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["one", "two", "three"]);
    }
}
