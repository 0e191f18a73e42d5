//! Virtual read-only filesystem
//!
//! Nodes live in an arena and refer to each other by index. Parents are
//! stored on every node, so `..` never needs an explicit link entry.

use crate::types::FsError;

/// Index of a node in the arena
pub type NodeId = usize;

const ROOT: NodeId = 0;
const MAX_LINK_DEPTH: usize = 16;

/// Default home directory
pub const HOME: &str = "/home/user";

#[derive(Debug, Clone)]
enum NodeKind {
    Directory { children: Vec<NodeId> },
    File { contents: String },
    Link { target: NodeId },
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    accessible: bool,
    kind: NodeKind,
}

/// Kind of an `ls` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsEntryKind {
    Directory,
    File,
    Link,
}

/// One row of an `ls` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsEntry {
    /// Type marker (`d`, `.`, `l`) followed by `rwx` or `---`
    pub permissions: String,
    /// Byte length, files only
    pub size: Option<u64>,
    /// Display name (`dir/`, `file`, `link -> /target`)
    pub name: String,
    pub kind: LsEntryKind,
}

/// The terminal's filesystem and working directory
#[derive(Debug, Clone)]
pub struct Filesystem {
    nodes: Vec<Node>,
    cwd: NodeId,
    home: NodeId,
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem {
    /// Create the default tree with the working directory at `/home/user`
    pub fn new() -> Self {
        let mut fs = Self::empty();
        let home = fs.insert(ROOT, "home", NodeKind::Directory { children: vec![] });
        let home = fs.insert(home, "user", NodeKind::Directory { children: vec![] });
        fs.insert(home, "projects", NodeKind::Directory { children: vec![] });
        fs.home = home;
        fs.cwd = home;
        fs
    }

    /// Create a tree containing only `/`
    pub fn empty() -> Self {
        Self {
            nodes: vec![Node {
                name: "/".to_string(),
                parent: None,
                accessible: true,
                kind: NodeKind::Directory { children: vec![] },
            }],
            cwd: ROOT,
            home: ROOT,
        }
    }

    /// Absolute path of the working directory
    pub fn cwd(&self) -> String {
        self.full_path(self.cwd)
    }

    /// Absolute path of the home directory
    pub fn home(&self) -> String {
        self.full_path(self.home)
    }

    /// Change the working directory
    ///
    /// Either the whole path resolves or the working directory is unchanged.
    pub fn cd(&mut self, path: &str) -> Result<(), FsError> {
        log::debug!("cd {:?} from {}", path, self.cwd());
        let target = self.resolve_dir(path)?;
        self.cwd = target;
        Ok(())
    }

    /// Move back to the home directory
    pub fn cd_home(&mut self) {
        self.cwd = self.home;
    }

    /// List the working directory
    pub fn ls(&self) -> Result<Vec<LsEntry>, FsError> {
        let mut results = Vec::new();
        let cwd = &self.nodes[self.cwd];

        if let Some(parent) = cwd.parent {
            results.push(LsEntry {
                permissions: format!("l{}", map_accessible(true)),
                size: None,
                name: format!(".. -> {}", self.full_path(parent)),
                kind: LsEntryKind::Link,
            });
        }

        for &child in self.children(self.cwd) {
            let node = &self.nodes[child];
            let entry = match &node.kind {
                NodeKind::Directory { .. } => LsEntry {
                    permissions: format!("d{}", map_accessible(node.accessible)),
                    size: None,
                    name: format!("{}/", node.name),
                    kind: LsEntryKind::Directory,
                },
                NodeKind::File { contents } => LsEntry {
                    permissions: format!(".{}", map_accessible(node.accessible)),
                    size: Some(contents.len() as u64),
                    name: node.name.clone(),
                    kind: LsEntryKind::File,
                },
                NodeKind::Link { .. } => LsEntry {
                    permissions: format!("l{}", map_accessible(node.accessible)),
                    size: None,
                    name: format!(
                        "{} -> {}",
                        node.name,
                        self.follow_link(child)
                            .map_or("?".to_string(), |dest| self.full_path(dest))
                    ),
                    kind: LsEntryKind::Link,
                },
            };
            results.push(entry);
        }

        Ok(results)
    }

    /// Create a directory and any missing parents, returning its id
    ///
    /// `..` components are rejected with [`FsError::InvalidPath`].
    pub fn create_dir_all(&mut self, path: &str) -> Result<NodeId, FsError> {
        check_components(path)?;
        let mut current = ROOT;
        for name in components(path) {
            current = match self.child_named(current, name) {
                Some(id) => match self.nodes[id].kind {
                    NodeKind::Directory { .. } => id,
                    _ => return Err(FsError::NotADirectory(path.to_string())),
                },
                None => self.insert(
                    current,
                    name,
                    NodeKind::Directory { children: vec![] },
                ),
            };
        }
        Ok(current)
    }

    /// Create a file, creating missing parent directories
    pub fn create_file(&mut self, path: &str, contents: impl Into<String>) -> Result<NodeId, FsError> {
        let (parent, name) = self.prepare_entry(path)?;
        Ok(self.insert(
            parent,
            name,
            NodeKind::File {
                contents: contents.into(),
            },
        ))
    }

    /// Create a link at `path` pointing to an existing `target` path
    pub fn create_link(&mut self, path: &str, target: &str) -> Result<NodeId, FsError> {
        let target = self
            .lookup(target)
            .ok_or_else(|| FsError::InvalidPath(target.to_string()))?;
        let (parent, name) = self.prepare_entry(path)?;
        Ok(self.insert(parent, name, NodeKind::Link { target }))
    }

    /// Mark an existing entry as accessible or not
    pub fn set_accessible(&mut self, path: &str, accessible: bool) -> Result<(), FsError> {
        let id = self
            .lookup(path)
            .ok_or_else(|| FsError::InvalidPath(path.to_string()))?;
        self.nodes[id].accessible = accessible;
        Ok(())
    }

    /// Contents of a file, if `path` names one
    pub fn read_file(&self, path: &str) -> Option<&str> {
        match &self.nodes[self.lookup(path)?].kind {
            NodeKind::File { contents } => Some(contents),
            _ => None,
        }
    }

    fn prepare_entry<'a>(&mut self, path: &'a str) -> Result<(NodeId, &'a str), FsError> {
        check_components(path)?;
        let trimmed = path.trim_end_matches('/');
        let (dir, name) = match trimmed.rfind('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => ("", trimmed),
        };
        if name.is_empty() || name == "." || name == ".." {
            return Err(FsError::InvalidPath(path.to_string()));
        }
        let parent = self.create_dir_all(dir)?;
        if self.child_named(parent, name).is_some() {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        Ok((parent, name))
    }

    fn insert(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            parent: Some(parent),
            accessible: true,
            kind,
        });
        if let NodeKind::Directory { children } = &mut self.nodes[parent].kind {
            children.push(id);
        }
        id
    }

    /// Resolve `path` to a directory, following links and checking access
    fn resolve_dir(&self, path: &str) -> Result<NodeId, FsError> {
        let mut current = if path.starts_with('/') { ROOT } else { self.cwd };

        for name in path.split('/') {
            match name {
                "" | "." => continue,
                ".." => {
                    current = self.nodes[current].parent.unwrap_or(ROOT);
                    continue;
                }
                _ => {}
            }

            let entry = self
                .child_named(current, name)
                .ok_or_else(|| FsError::NoSuchDirectory(path.to_string()))?;
            if !self.nodes[entry].accessible {
                return Err(FsError::Forbidden(path.to_string()));
            }

            let dest = self.follow_link(entry).ok_or(FsError::BrokenLink)?;
            let node = &self.nodes[dest];
            match node.kind {
                NodeKind::Directory { .. } if node.accessible => current = dest,
                NodeKind::Directory { .. } => return Err(FsError::Forbidden(path.to_string())),
                _ => return Err(FsError::NotADirectory(path.to_string())),
            }
        }

        Ok(current)
    }

    /// Absolute lookup without access checks or link following
    fn lookup(&self, path: &str) -> Option<NodeId> {
        components(path).try_fold(ROOT, |current, name| self.child_named(current, name))
    }

    /// Follow a chain of links to its final destination
    fn follow_link(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        for _ in 0..MAX_LINK_DEPTH {
            match self.nodes.get(current)?.kind {
                NodeKind::Link { target } => current = target,
                _ => return Some(current),
            }
        }
        None
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id].kind {
            NodeKind::Directory { children } => children,
            _ => &[],
        }
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.nodes[child].name == name)
    }

    fn full_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            if node.parent.is_some() {
                names.push(node.name.as_str());
            }
            current = node.parent;
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|c| !c.is_empty() && *c != ".")
}

fn check_components(path: &str) -> Result<(), FsError> {
    if components(path).any(|name| name == "..") {
        return Err(FsError::InvalidPath(path.to_string()));
    }
    Ok(())
}

fn map_accessible(is_accessible: bool) -> &'static str {
    if is_accessible {
        "rwx"
    } else {
        "---"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fs() -> Filesystem {
        let mut fs = Filesystem::new();
        fs.create_file("/home/user/notes.txt", "hello").unwrap();
        fs.create_dir_all("/srv/www").unwrap();
        fs.create_link("/home/user/www", "/srv/www").unwrap();
        fs.create_dir_all("/root").unwrap();
        fs.set_accessible("/root", false).unwrap();
        fs
    }

    #[test]
    fn test_default_tree() {
        let fs = Filesystem::new();
        assert_eq!(fs.cwd(), "/home/user");
        assert_eq!(fs.home(), "/home/user");
    }

    #[test]
    fn test_cd_relative_absolute_and_parent() {
        let mut fs = sample_fs();
        fs.cd("projects").unwrap();
        assert_eq!(fs.cwd(), "/home/user/projects");
        fs.cd("../..").unwrap();
        assert_eq!(fs.cwd(), "/home");
        fs.cd("/srv/www/").unwrap();
        assert_eq!(fs.cwd(), "/srv/www");
        fs.cd("/..").unwrap();
        assert_eq!(fs.cwd(), "/");
        fs.cd("./home//user").unwrap();
        assert_eq!(fs.cwd(), "/home/user");
    }

    #[test]
    fn test_cd_follows_links() {
        let mut fs = sample_fs();
        fs.cd("www").unwrap();
        assert_eq!(fs.cwd(), "/srv/www");
    }

    #[test]
    fn test_cd_errors_leave_cwd_unchanged() {
        let mut fs = sample_fs();

        let err = fs.cd("projects/missing").unwrap_err();
        assert_eq!(err.to_string(), "no such directory: projects/missing");
        assert_eq!(fs.cwd(), "/home/user");

        let err = fs.cd("notes.txt").unwrap_err();
        assert_eq!(err, FsError::NotADirectory("notes.txt".into()));

        let err = fs.cd("/root").unwrap_err();
        assert_eq!(err, FsError::Forbidden("/root".into()));
        assert_eq!(fs.cwd(), "/home/user");
    }

    #[test]
    fn test_cd_link_cycle_is_broken() {
        let mut fs = Filesystem::new();
        let a = fs.create_link("/a", "/home").unwrap();
        let b = fs.create_link("/b", "/a").unwrap();
        // Point a back at b to close the loop
        fs.nodes[a].kind = NodeKind::Link { target: b };
        assert_eq!(fs.cd("/a").unwrap_err(), FsError::BrokenLink);
    }

    #[test]
    fn test_ls_entries() {
        let fs = sample_fs();
        let entries = fs.ls().unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![".. -> /home", "projects/", "notes.txt", "www -> /srv/www"]
        );
        assert_eq!(entries[1].permissions, "drwx");
        assert_eq!(entries[2].permissions, ".rwx");
        assert_eq!(entries[2].size, Some(5));
        assert_eq!(entries[3].kind, LsEntryKind::Link);
    }

    #[test]
    fn test_ls_root_has_no_parent_entry() {
        let mut fs = sample_fs();
        fs.cd("/").unwrap();
        let entries = fs.ls().unwrap();
        assert_eq!(entries[0].name, "home/");
        let root = entries.iter().find(|e| e.name == "root/").unwrap();
        assert_eq!(root.permissions, "d---");
    }

    #[test]
    fn test_create_errors() {
        let mut fs = sample_fs();
        assert_eq!(
            fs.create_file("/home/user/notes.txt", "again").unwrap_err(),
            FsError::AlreadyExists("/home/user/notes.txt".into())
        );
        assert!(matches!(
            fs.create_dir_all("/home/user/notes.txt/sub"),
            Err(FsError::NotADirectory(_))
        ));
        assert!(matches!(fs.create_file("/", ""), Err(FsError::InvalidPath(_))));
        assert!(matches!(
            fs.create_link("/nowhere", "/missing"),
            Err(FsError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_builders_reject_parent_components() {
        let mut fs = Filesystem::new();
        assert_eq!(
            fs.create_dir_all("/srv/..").unwrap_err(),
            FsError::InvalidPath("/srv/..".into())
        );
        assert_eq!(
            fs.create_file("/a/../b.txt", "x").unwrap_err(),
            FsError::InvalidPath("/a/../b.txt".into())
        );
        assert!(matches!(
            fs.create_link("/home/../up", "/home"),
            Err(FsError::InvalidPath(_))
        ));
        // Nothing was created on the way
        fs.cd("/").unwrap();
        let names: Vec<_> = fs.ls().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["home/"]);
    }

    #[test]
    fn test_default_tree_layout() {
        let mut fs = Filesystem::new();
        fs.cd("/home/user/projects").unwrap();
        assert_eq!(fs.cwd(), "/home/user/projects");
        fs.cd("/").unwrap();
        assert_eq!(fs.ls().unwrap().len(), 1);
    }

    #[test]
    fn test_read_file() {
        let fs = sample_fs();
        assert_eq!(fs.read_file("/home/user/notes.txt"), Some("hello"));
        assert_eq!(fs.read_file("/home/user"), None);
    }
}
