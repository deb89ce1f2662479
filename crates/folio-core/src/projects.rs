//! Project catalogue
//!
//! Ordered, static project metadata with exact-name lookup. The built-in
//! list can be replaced by a TOML file containing `[[projects]]` tables.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FolioError, Result};

/// One showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier used in routes (`/project/<name>`)
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub overview: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub unique_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl Project {
    /// First external URL worth opening for this project
    pub fn external_url(&self) -> Option<&str> {
        self.unique_url
            .as_deref()
            .or(self.github_url.as_deref())
            .or(self.youtube_url.as_deref())
            .or_else(|| {
                let link = self.link.as_str();
                (!link.is_empty() && link != "#").then_some(link)
            })
    }
}

/// Lookup result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a Project),
    NotFound,
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Ordered list of projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalogue {
    projects: Vec<Project>,
}

impl Default for ProjectCatalogue {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl ProjectCatalogue {
    /// Build a catalogue, rejecting empty lists and duplicate names
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        if projects.is_empty() {
            return Err(FolioError::Catalogue("catalogue has no projects".into()));
        }
        for (i, project) in projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(FolioError::Catalogue(format!(
                    "project #{} has an empty name",
                    i + 1
                )));
            }
            if projects[..i].iter().any(|p| p.name == project.name) {
                return Err(FolioError::Catalogue(format!(
                    "duplicate project name '{}'",
                    project.name
                )));
            }
        }
        Ok(Self { projects })
    }

    /// Built-in catalogue
    pub fn builtin() -> &'static ProjectCatalogue {
        &BUILTIN
    }

    /// Parse a catalogue from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogueFile =
            toml::from_str(contents).map_err(|e| FolioError::Catalogue(e.to_string()))?;
        Self::new(file.projects)
    }

    /// Load a catalogue from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalogue = Self::from_toml_str(&contents).map_err(|e| match e {
            FolioError::Catalogue(msg) => {
                FolioError::Catalogue(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(
            path = %path.display(),
            count = catalogue.len(),
            "Loaded project catalogue"
        );
        Ok(catalogue)
    }

    /// Projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Position of a project by exact name
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.name == id)
    }

    /// Exact-name lookup
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == id)
    }

    /// Exact-name lookup as an explicit resolution
    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        match self.find(id) {
            Some(project) => Resolution::Found(project),
            None => {
                debug!(id, "Project not found");
                Resolution::NotFound
            }
        }
    }
}

fn project(
    name: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    overview: &str,
    technologies: &[&str],
    screenshots: &[&str],
) -> Project {
    Project {
        name: name.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        overview: overview.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: "#".to_string(),
        screenshots: screenshots.iter().map(|s| s.to_string()).collect(),
        youtube_url: None,
        unique_url: None,
        github_url: None,
    }
}

static BUILTIN: Lazy<ProjectCatalogue> = Lazy::new(|| ProjectCatalogue {
    projects: vec![
        Project {
            youtube_url: Some("https://www.youtube.com/embed/M3Tz-8fkkIQ".to_string()),
            ..project(
                "krumbz",
                "Krumbz",
                "Recipe Finder App",
                "A mobile application that helps users discover recipes based on the \
                 ingredients they have. Leverages AI to provide users convenient ways to \
                 add ingredients and find recipes.",
                "A mobile application for iOS and Android that allows users to input the \
                 ingredients they have in their fridge and generates recipes based on those \
                 ingredients. Users may take a picture of their groceries or receipt and the \
                 app will automatically input the ingredients. The app uses the Google Gemini \
                 API to process visual data and translate it into text, featuring a \
                 custom-made recipe-finding algorithm that compiles millions of recipes and \
                 allows for unit conversion based on user preferences. From this data the app \
                 generates a list of recipes that the user can make with the ingredients and \
                 cookware they own. Built with React Native and Expo, in TypeScript and Python.",
                &["TypeScript", "React Native", "Python", "Postman"],
                &["images/projects/krumbz/screenshot1.png"],
            )
        },
        Project {
            unique_url: Some("https://algo-visualizer-wheat.vercel.app/".to_string()),
            ..project(
                "algo-visual",
                "Algo//Visual",
                "Algorithm Visualization",
                "An interactive web application that visualizes various sorting and \
                 pathfinding algorithms in real-time.",
                "An interactive web application that visualizes various sorting and \
                 pathfinding algorithms in real-time.",
                &["TypeScript", "React", "Tailwind"],
                &[
                    "images/projects/algovisual/screenshot1.png",
                    "images/projects/algovisual/screenshot2.png",
                ],
            )
        },
        Project {
            unique_url: Some("https://dmginc.gg/".to_string()),
            ..project(
                "damage-inc",
                "Damage Inc",
                "API Integration Platform",
                "A gaming platform where users can find like-minded players to play with. \
                 Users can post gaming events to the forum to find players to join them.",
                "A gaming platform where users can find like-minded players to play with. \
                 Users can post gaming events to the forum to find players to join them.",
                &["TypeScript", "API", "React Query"],
                &[
                    "images/projects/damageinc/screenshot1.png",
                    "images/projects/damageinc/screenshot2.png",
                ],
            )
        },
        project(
            "claw-machine",
            "Custom Claw Machine",
            "Highschool robotics",
            "A claw machine using Arduino, VexRobotics, and 3D printed components, all \
             housed in a custom-built wooden cabinet.",
            "An arcade style claw machine where users can try to win prizes using joystick \
             controls, featuring a custom made wooden cabinet, VexRobotics motor controllers, \
             and a claw mechanism. The claw traverses the x and y axis via two motors and is \
             lowered and raised by a third motor that adjusts the slack of the string.",
            &["RobotC", "VexRobotics", "Custom PCB", "3D Printing"],
            &[
                "images/projects/arcade/screenshot1.png",
                "images/projects/arcade/arcade-2.png",
            ],
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_order_and_lookup() {
        let catalogue = ProjectCatalogue::builtin();
        let names: Vec<&str> = catalogue.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["krumbz", "algo-visual", "damage-inc", "claw-machine"]);

        match catalogue.resolve("krumbz") {
            Resolution::Found(p) => assert_eq!(p.title, "Krumbz"),
            Resolution::NotFound => panic!("krumbz should resolve"),
        }
        assert_eq!(catalogue.resolve("nonexistent"), Resolution::NotFound);
        assert_eq!(catalogue.index_of("damage-inc"), Some(2));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalogue = ProjectCatalogue::builtin();
        assert!(catalogue.find("Krumbz").is_none());
        assert!(catalogue.find("krumbz ").is_none());
        assert!(catalogue.find("").is_none());
    }

    #[test]
    fn test_external_url_preference() {
        let catalogue = ProjectCatalogue::builtin();
        assert_eq!(
            catalogue.find("algo-visual").and_then(Project::external_url),
            Some("https://algo-visualizer-wheat.vercel.app/")
        );
        assert_eq!(
            catalogue.find("krumbz").and_then(Project::external_url),
            Some("https://www.youtube.com/embed/M3Tz-8fkkIQ")
        );
        // "#" placeholder links are not external
        assert_eq!(
            catalogue.find("claw-machine").and_then(Project::external_url),
            None
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[projects]]
name = "one"
title = "One"
subtitle = "First"
description = "d"
overview = "o"
technologies = ["Rust"]
github_url = "https://example.com/one"

[[projects]]
name = "two"
title = "Two"
subtitle = "Second"
description = "d"
overview = "o"
"#
        )
        .unwrap();

        let catalogue = ProjectCatalogue::load_from_path(file.path()).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.get(1).map(|p| p.name.as_str()), Some("two"));
        assert_eq!(
            catalogue.find("one").and_then(Project::external_url),
            Some("https://example.com/one")
        );
        assert!(catalogue.find("two").unwrap().technologies.is_empty());
    }

    #[test]
    fn test_invalid_catalogues_rejected() {
        assert!(matches!(
            ProjectCatalogue::from_toml_str("projects = []"),
            Err(FolioError::Catalogue(_))
        ));
        assert!(matches!(
            ProjectCatalogue::from_toml_str("[[projects]]\nname = 3"),
            Err(FolioError::Catalogue(_))
        ));

        let dup = r#"
[[projects]]
name = "a"
title = "A"
subtitle = ""
description = ""
overview = ""

[[projects]]
name = "a"
title = "B"
subtitle = ""
description = ""
overview = ""
"#;
        let err = ProjectCatalogue::from_toml_str(dup).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectCatalogue::load_from_path(&dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
