//! Client-side route table and navigation guard.
//!
//! # Design
//! The table is a static tree of `RouteEntry` values built once. `Router::new`
//! validates it and indexes every full path and name to the chain of entries
//! from the root down to the match. Views are loaded lazily, at most once, the
//! first time a navigation lands on them.
//!
//! Navigation is `Idle -> Navigating -> Idle` with a single hook,
//! `title_guard`, which runs before the navigation completes and never
//! blocks it.

pub mod routes;

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

pub use routes::admin_routes;

/// A loaded view handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub component: &'static str,
}

fn load_component(component: &'static str) -> View {
    View { component }
}

/// Deferred view construction; `load` runs the loader once.
#[derive(Debug)]
pub struct LazyView {
    component: &'static str,
    loader: fn(&'static str) -> View,
    cell: OnceLock<View>,
}

impl LazyView {
    pub fn new(component: &'static str) -> Self {
        Self::with_loader(component, load_component)
    }

    pub fn with_loader(component: &'static str, loader: fn(&'static str) -> View) -> Self {
        Self {
            component,
            loader,
            cell: OnceLock::new(),
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn load(&self) -> &View {
        self.cell.get_or_init(|| {
            tracing::debug!(component = self.component, "loading view");
            (self.loader)(self.component)
        })
    }
}

/// Per-route metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: Option<String>,
}

impl RouteMeta {
    /// Overlay `child` on `self`; fields the child sets win.
    fn merge(&mut self, child: &RouteMeta) {
        if child.title.is_some() {
            self.title.clone_from(&child.title);
        }
    }
}

#[derive(Debug)]
pub struct RouteEntry {
    /// Relative to the parent unless it starts with `/`.
    pub path: String,
    pub name: String,
    pub view: LazyView,
    pub meta: RouteMeta,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn new(path: &str, name: &str, component: &'static str) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            view: LazyView::new(component),
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.meta.title = Some(title.to_string());
        self
    }

    pub fn children(mut self, children: Vec<RouteEntry>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("duplicate route path {path:?} under {parent:?}")]
    DuplicatePath { parent: String, path: String },

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no route matches {0:?}")]
    NoMatch(String),
}

/// Navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Path(String),
    Name(String),
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Path(path.to_string())
    }
}

/// Something with a settable title, e.g. the browser document.
pub trait Document {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);
}

/// In-memory `Document`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pub title: String,
}

impl MemoryDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Document for MemoryDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}

/// The global pre-navigation hook: apply the target's title if it has a
/// non-empty one.
pub fn title_guard<D: Document + ?Sized>(to: &RouteMeta, document: &mut D) {
    if let Some(title) = to.title.as_deref().filter(|t| !t.is_empty()) {
        tracing::debug!(title = %title, "setting document title");
        document.set_title(title);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    Idle,
    Navigating,
}

/// A route resolved against the table.
#[derive(Debug)]
pub struct ResolvedRoute<'a> {
    pub full_path: String,
    pub name: &'a str,
    /// Metadata merged from the root of the chain down to the match.
    pub meta: RouteMeta,
    /// Entries from the top-level route down to the matched one.
    pub matched: Vec<&'a RouteEntry>,
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: Option<String>,
    pub to: String,
    pub name: String,
    pub meta: RouteMeta,
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<RouteEntry>,
    by_path: HashMap<String, Vec<usize>>,
    by_name: HashMap<String, Vec<usize>>,
    state: NavigationState,
    current: Option<String>,
}

impl Router {
    pub fn new(routes: Vec<RouteEntry>) -> Result<Self, RouterError> {
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();
        index_level(&routes, "", &mut Vec::new(), &mut by_path, &mut by_name)?;
        Ok(Self {
            routes,
            by_path,
            by_name,
            state: NavigationState::Idle,
            current: None,
        })
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Full path of the last completed navigation.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn resolve(&self, location: &Location) -> Option<ResolvedRoute<'_>> {
        let (full_path, chain) = self.lookup(location)?;
        let matched = self.entries(chain);
        let mut meta = RouteMeta::default();
        for entry in &matched {
            meta.merge(&entry.meta);
        }
        let last = *matched.last()?;
        let name = last.name.as_str();
        Some(ResolvedRoute {
            full_path,
            name,
            meta,
            matched,
        })
    }

    /// Navigate to `to`, running `title_guard` before completing.
    ///
    /// An unknown location fails without touching the document or the
    /// current route.
    pub fn navigate<D: Document + ?Sized>(
        &mut self,
        to: impl Into<Location>,
        document: &mut D,
    ) -> Result<Navigation, NavigationError> {
        let location = to.into();
        self.state = NavigationState::Navigating;
        let outcome = self.run_navigation(&location, document);
        if let Some(navigation) = &outcome {
            tracing::debug!(from = ?navigation.from, to = %navigation.to, "navigation complete");
            self.current = Some(navigation.to.clone());
        }
        self.state = NavigationState::Idle;
        outcome.ok_or(match location {
            Location::Path(target) | Location::Name(target) => NavigationError::NoMatch(target),
        })
    }

    fn run_navigation<D: Document + ?Sized>(
        &self,
        location: &Location,
        document: &mut D,
    ) -> Option<Navigation> {
        let resolved = self.resolve(location)?;
        title_guard(&resolved.meta, document);
        for entry in &resolved.matched {
            entry.view.load();
        }
        Some(Navigation {
            from: self.current.clone(),
            to: resolved.full_path,
            name: resolved.name.to_string(),
            meta: resolved.meta,
        })
    }

    fn lookup(&self, location: &Location) -> Option<(String, &[usize])> {
        match location {
            Location::Path(path) => {
                let path = normalize_path(path);
                let chain = self.by_path.get(&path)?;
                Some((path, chain.as_slice()))
            }
            Location::Name(name) => {
                let chain = self.by_name.get(name)?;
                Some((self.full_path_of(chain), chain.as_slice()))
            }
        }
    }

    fn entries(&self, chain: &[usize]) -> Vec<&RouteEntry> {
        let mut level = self.routes.as_slice();
        let mut out = Vec::with_capacity(chain.len());
        for &idx in chain {
            let entry = &level[idx];
            out.push(entry);
            level = entry.children.as_slice();
        }
        out
    }

    fn full_path_of(&self, chain: &[usize]) -> String {
        let joined = self
            .entries(chain)
            .iter()
            .fold(String::new(), |parent, entry| join_path(&parent, &entry.path));
        normalize_path(&joined)
    }
}

fn index_level(
    entries: &[RouteEntry],
    parent_path: &str,
    chain: &mut Vec<usize>,
    by_path: &mut HashMap<String, Vec<usize>>,
    by_name: &mut HashMap<String, Vec<usize>>,
) -> Result<(), RouterError> {
    let mut siblings: Vec<&str> = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        if siblings.contains(&entry.path.as_str()) {
            return Err(RouterError::DuplicatePath {
                parent: normalize_path(parent_path),
                path: entry.path.clone(),
            });
        }
        siblings.push(&entry.path);

        chain.push(idx);
        let full = normalize_path(&join_path(parent_path, &entry.path));
        if by_name.insert(entry.name.clone(), chain.clone()).is_some() {
            return Err(RouterError::DuplicateName(entry.name.clone()));
        }
        // A descendant at the same full path (e.g. an empty child path)
        // shadows its ancestor; otherwise the first registration wins.
        let shadows = match by_path.get(&full) {
            None => true,
            Some(existing) => chain.starts_with(existing),
        };
        if shadows {
            by_path.insert(full.clone(), chain.clone());
        }
        index_level(&entry.children, &full, chain, by_path, by_name)?;
        chain.pop();
    }
    Ok(())
}

fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else {
        format!("{}/{child}", parent.trim_end_matches('/'))
    }
}

/// Drop query and fragment, force a leading slash, drop trailing slashes.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}
