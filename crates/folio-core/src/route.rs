//! Page routing
//!
//! `/` is the landing view, `/project/<id>` a project detail view. Anything
//! else resolves to the not-found view.

use crate::projects::{Project, ProjectCatalogue, Resolution};

const PROJECT_PREFIX: &str = "/project/";

/// Parsed location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Project(String),
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Route::Landing;
        }
        match path.strip_prefix(PROJECT_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Project(id.to_string()),
            _ => Route::Unknown(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Project(id) => format!("{}{}", PROJECT_PREFIX, id),
            Route::Unknown(path) => path.clone(),
        }
    }

    /// Resolve against a catalogue
    pub fn resolve<'a>(&self, catalogue: &'a ProjectCatalogue) -> ResolvedView<'a> {
        match self {
            Route::Landing => ResolvedView::Landing,
            Route::Project(id) => match catalogue.resolve(id) {
                Resolution::Found(project) => ResolvedView::Detail(project),
                Resolution::NotFound => ResolvedView::NotFound {
                    requested: self.path(),
                },
            },
            Route::Unknown(path) => ResolvedView::NotFound {
                requested: path.clone(),
            },
        }
    }
}

/// View to render for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedView<'a> {
    Landing,
    Detail(&'a Project),
    /// Not found; the view offers a way back to [`Route::Landing`]
    NotFound { requested: String },
}
