//! Content Catalog
//!
//! The portfolio pretends to be a project on disk. This module holds that
//! fake project: a fixed folder tree of read-only "files", the blog posts,
//! and the structured profile data behind the views. Everything here is
//! immutable and built once at startup.
//!
//! Lookup is a plain recursive walk over the tree; the tree is tiny.

pub mod blog;
pub mod content;

pub use blog::BlogPost;
pub use content::{Experience, Extension, Project, Skill, SkillSheet};

use crate::error::ResultExt;
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

pub const HOME_ID: &str = "home";
pub const ABOUT_ID: &str = "about";
pub const EXPERIENCE_ID: &str = "experience";
pub const CONTACT_ID: &str = "contact";
pub const PROJECTS_ID: &str = "projects";
pub const SKILLS_ID: &str = "skills";
pub const EXTENSIONS_VIEW_ID: &str = "extensions_view";

/// Id of the root folder of the tree.
pub const ROOT_FOLDER_ID: &str = "portfolio";

// ─────────────────────────────────────────────────────────────────────────────
// Entry Types
// ─────────────────────────────────────────────────────────────────────────────

/// What kind of file an entry pretends to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Markdown,
    Python,
    TypeScript,
    Json,
    Yaml,
    Text,
    /// Not a file at all; a full-page view such as the extension marketplace
    View,
}

impl EntryKind {
    /// Label shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Markdown => "MARKDOWN",
            EntryKind::Python => "PYTHON",
            EntryKind::TypeScript => "TSX",
            EntryKind::Json => "JSON",
            EntryKind::Yaml => "YAML",
            EntryKind::Text => "PLAINTEXT",
            EntryKind::View => "VIEW",
        }
    }

    /// Language token understood by the syntax highlighter.
    pub fn language(&self) -> &'static str {
        match self {
            EntryKind::Markdown => "md",
            EntryKind::Python => "py",
            EntryKind::TypeScript => "tsx",
            EntryKind::Json => "json",
            EntryKind::Yaml => "yaml",
            EntryKind::Text | EntryKind::View => "",
        }
    }

    /// Short icon glyph for tree rows and tabs.
    pub fn icon(&self) -> &'static str {
        match self {
            EntryKind::Markdown => "ⓘ",
            EntryKind::Python => "🐍",
            EntryKind::TypeScript => "⚛",
            EntryKind::Json => "{}",
            EntryKind::Yaml => "⚙",
            EntryKind::Text => "📝",
            EntryKind::View => "🧩",
        }
    }
}

/// A static, read-only file of the portfolio tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: EntryKind,
    pub path: &'static str,
    pub body: Option<&'static str>,
}

/// A folder of the portfolio tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: &'static str,
    pub name: &'static str,
    pub files: Vec<CatalogEntry>,
    pub folders: Vec<Folder>,
}

/// Anything that can be opened in a tab from the catalog side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogItem<'a> {
    Entry(&'a CatalogEntry),
    Blog(&'static BlogPost),
}

impl CatalogItem<'_> {
    pub fn id(&self) -> &str {
        match self {
            CatalogItem::Entry(entry) => entry.id,
            CatalogItem::Blog(post) => post.id,
        }
    }

    /// Name shown on the tab.
    pub fn name(&self) -> &str {
        match self {
            CatalogItem::Entry(entry) => entry.name,
            CatalogItem::Blog(post) => post.title,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogItem::Entry(entry) => entry.kind,
            CatalogItem::Blog(_) => EntryKind::Markdown,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The immutable content tree plus the parsed profile data.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: Folder,
    /// Entries that can be opened but are not shown in the tree
    special: Vec<CatalogEntry>,
    projects: Vec<Project>,
    skills: SkillSheet,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Build the catalog and parse the structured bodies.
    ///
    /// A body that fails to parse leaves its view empty and logs a warning.
    pub fn new() -> Self {
        let projects = content::parse_projects(content::PROJECTS_JSON)
            .unwrap_or_warn_default(Vec::new(), "Failed to parse embedded projects");
        let skills = content::parse_skills(content::SKILLS_YAML)
            .unwrap_or_warn_default(SkillSheet::default(), "Failed to parse embedded skills");

        let catalog = Self {
            root: default_tree(),
            special: vec![CatalogEntry {
                id: EXTENSIONS_VIEW_ID,
                name: "Extensions",
                kind: EntryKind::View,
                path: "extensions",
                body: None,
            }],
            projects,
            skills,
        };
        debug!(
            "Catalog ready: {} files, {} blog posts",
            catalog.list_all().len(),
            blog::BLOG_POSTS.len()
        );
        catalog
    }

    /// The root folder of the tree.
    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Find an entry or blog post by id.
    pub fn lookup(&self, id: &str) -> Option<CatalogItem<'_>> {
        find_in_folder(&self.root, id)
            .or_else(|| self.special.iter().find(|e| e.id == id))
            .map(CatalogItem::Entry)
            .or_else(|| blog::find_post(id).map(CatalogItem::Blog))
    }

    /// Every file of the tree, depth-first with files before sub-folders.
    pub fn list_all(&self) -> Vec<&CatalogEntry> {
        let mut out = Vec::new();
        collect_files(&self.root, &mut out);
        out
    }

    pub fn search_blogs(&self, query: &str) -> Vec<&'static BlogPost> {
        blog::search_posts(query)
    }

    pub fn blogs(&self) -> &'static [BlogPost] {
        blog::BLOG_POSTS
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn skills(&self) -> &SkillSheet {
        &self.skills
    }

    pub fn experience(&self) -> &'static [Experience] {
        content::EXPERIENCE
    }

    pub fn extensions(&self) -> &'static [Extension] {
        content::EXTENSIONS
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn find_in_folder<'a>(folder: &'a Folder, id: &str) -> Option<&'a CatalogEntry> {
    folder
        .files
        .iter()
        .find(|f| f.id == id)
        .or_else(|| folder.folders.iter().find_map(|sub| find_in_folder(sub, id)))
}

fn collect_files<'a>(folder: &'a Folder, out: &mut Vec<&'a CatalogEntry>) {
    out.extend(folder.files.iter());
    for sub in &folder.folders {
        collect_files(sub, out);
    }
}

fn default_tree() -> Folder {
    Folder {
        id: ROOT_FOLDER_ID,
        name: "suman-mandal",
        files: vec![CatalogEntry {
            id: HOME_ID,
            name: "README.md",
            kind: EntryKind::Markdown,
            path: "suman-mandal/README.md",
            body: Some(content::README_MD),
        }],
        folders: vec![
            Folder {
                id: "src",
                name: "src",
                files: vec![
                    CatalogEntry {
                        id: ABOUT_ID,
                        name: "about_me.py",
                        kind: EntryKind::Python,
                        path: "src/about_me.py",
                        body: Some(content::ABOUT_ME_PY),
                    },
                    CatalogEntry {
                        id: EXPERIENCE_ID,
                        name: "experience.tsx",
                        kind: EntryKind::TypeScript,
                        path: "src/experience.tsx",
                        body: Some(content::EXPERIENCE_TSX),
                    },
                    CatalogEntry {
                        id: CONTACT_ID,
                        name: "contact.tsx",
                        kind: EntryKind::TypeScript,
                        path: "src/contact.tsx",
                        body: Some(content::CONTACT_TSX),
                    },
                ],
                folders: Vec::new(),
            },
            Folder {
                id: "models",
                name: "models",
                files: vec![CatalogEntry {
                    id: PROJECTS_ID,
                    name: "projects.json",
                    kind: EntryKind::Json,
                    path: "models/projects.json",
                    body: Some(content::PROJECTS_JSON),
                }],
                folders: Vec::new(),
            },
            Folder {
                id: "config",
                name: "config",
                files: vec![CatalogEntry {
                    id: SKILLS_ID,
                    name: "skills.yaml",
                    kind: EntryKind::Yaml,
                    path: "config/skills.yaml",
                    body: Some(content::SKILLS_YAML),
                }],
                folders: Vec::new(),
            },
        ],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nested_entry() {
        let catalog = Catalog::new();
        let item = catalog.lookup("skills").unwrap();
        assert_eq!(item.name(), "skills.yaml");
        assert_eq!(item.kind(), EntryKind::Yaml);
        match item {
            CatalogItem::Entry(entry) => assert_eq!(entry.path, "config/skills.yaml"),
            CatalogItem::Blog(_) => panic!("expected a file entry"),
        }
    }

    #[test]
    fn test_lookup_blog_and_special_entries() {
        let catalog = Catalog::new();
        assert!(matches!(catalog.lookup("blog1"), Some(CatalogItem::Blog(_))));
        assert_eq!(
            catalog.lookup(EXTENSIONS_VIEW_ID).map(|i| i.kind()),
            Some(EntryKind::View)
        );
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        let catalog = Catalog::new();
        assert!(catalog.lookup("missing").is_none());
        assert!(catalog.lookup("").is_none());
        // Folders are not openable
        assert!(catalog.lookup("src").is_none());
    }

    #[test]
    fn test_list_all_order() {
        let catalog = Catalog::new();
        let ids: Vec<_> = catalog.list_all().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "contact", "projects", "skills"]
        );
    }

    #[test]
    fn test_every_tree_entry_has_a_body() {
        let catalog = Catalog::new();
        assert!(catalog.list_all().iter().all(|e| e.body.is_some()));
    }

    #[test]
    fn test_parsed_profile_data() {
        let catalog = Catalog::new();
        assert_eq!(catalog.projects().len(), 4);
        assert_eq!(catalog.skills().skills.len(), 7);
        assert_eq!(catalog.extensions().len(), 8);
    }

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::Python.label(), "PYTHON");
        assert_eq!(EntryKind::TypeScript.language(), "tsx");
        assert_eq!(EntryKind::Text.language(), "");
    }
}
