use serde::{Deserialize, Serialize};
use std::fmt;

/// Reachability of a project as shown on the page.
///
/// `Limited` is part of the vocabulary and has a display entry, but no probe
/// currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Limited,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Limited => "limited",
            Status::Offline => "offline",
        }
    }

    /// Parses a status name. Anything unrecognised is treated as offline.
    pub fn from_name(name: &str) -> Status {
        match name {
            "active" => Status::Active,
            "limited" => Status::Limited,
            _ => Status::Offline,
        }
    }

    pub fn display(self) -> StatusDisplay {
        match self {
            Status::Active => StatusDisplay {
                icon: "material-symbols:check-circle",
                label: "Operational",
            },
            Status::Limited => StatusDisplay {
                icon: "material-symbols:offline-bolt",
                label: "Limited",
            },
            Status::Offline => StatusDisplay {
                icon: "material-symbols:error",
                label: "Offline",
            },
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon and label for any status name, falling back to offline.
pub fn display_for(name: &str) -> StatusDisplay {
    Status::from_name(name).display()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: String,
    pub name: String,
    pub link: Option<String>,
    pub endpoint: String,
}

impl Project {
    pub fn new(slug: &str, name: &str, link: Option<&str>, endpoint: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            link: link.map(|value| value.to_string()),
            endpoint: endpoint.to_string(),
        }
    }
}

/// The monitored projects, in page order.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "statalytics",
            "Statalytics",
            Some("https://statalytics.net/"),
            "https://statalytics.net/ping",
        ),
        Project::new(
            "islestats",
            "IsleStats",
            Some("https://islestats.net/"),
            "https://islestats.net/api/ping",
        ),
        Project::new(
            "enotify",
            "Enotify",
            Some("https://enotify.lucism.dev/"),
            "https://enotify.lucism.dev/ping",
        ),
    ]
}

pub fn find_project<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_status_to_its_display_pair() {
        assert_eq!(
            Status::Active.display(),
            StatusDisplay { icon: "material-symbols:check-circle", label: "Operational" }
        );
        assert_eq!(
            Status::Limited.display(),
            StatusDisplay { icon: "material-symbols:offline-bolt", label: "Limited" }
        );
        assert_eq!(
            Status::Offline.display(),
            StatusDisplay { icon: "material-symbols:error", label: "Offline" }
        );
    }

    #[test]
    fn unknown_names_fall_back_to_offline() {
        for name in ["", "ACTIVE", "degraded", "unknown", " active"] {
            assert_eq!(display_for(name), Status::Offline.display(), "name {name:?}");
        }
        assert_eq!(display_for("limited").label, "Limited");
    }

    #[test]
    fn status_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Limited).expect("json"), "\"limited\"");
        let parsed: Status = serde_json::from_str("\"active\"").expect("json");
        assert_eq!(parsed, Status::Active);
    }

    #[test]
    fn project_table_keeps_page_order() {
        let projects = default_projects();
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Statalytics", "IsleStats", "Enotify"]);
        assert_eq!(
            find_project(&projects, "islestats").map(|p| p.endpoint.as_str()),
            Some("https://islestats.net/api/ping")
        );
        assert!(find_project(&projects, "missing").is_none());
    }
}
