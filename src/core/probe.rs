//! Framework detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::pkg_json::PkgJson;

/// Front-end frameworks whose builds can be adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    AngularCli,
    CreateReactApp,
    VueCli,
}

impl ProjectType {
    /// All supported project types.
    pub const ALL: [ProjectType; 3] = [
        ProjectType::AngularCli,
        ProjectType::CreateReactApp,
        ProjectType::VueCli,
    ];

    /// Stable identifier used in output and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::AngularCli => "angular-cli",
            ProjectType::CreateReactApp => "create-react-app",
            ProjectType::VueCli => "vue-cli",
        }
    }

    /// Arguments passed to the project's `build` script.
    pub fn build_args(&self) -> &'static [&'static str] {
        match self {
            ProjectType::AngularCli | ProjectType::VueCli => &["--prod=true"],
            ProjectType::CreateReactApp => &[],
        }
    }

    /// Dependency whose presence marks the project type.
    fn marker_dependency(&self) -> &'static str {
        match self {
            ProjectType::AngularCli => "@angular/cli",
            ProjectType::CreateReactApp => "react-scripts",
            ProjectType::VueCli => "@vue/cli-service",
        }
    }

    /// Marker file required next to `package.json`, if any.
    fn marker_file(&self) -> Option<&'static str> {
        match self {
            ProjectType::AngularCli => Some("angular.json"),
            ProjectType::CreateReactApp | ProjectType::VueCli => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown project type '{}'; expected 'angular-cli', 'create-react-app', or 'vue-cli'",
                    s
                )
            })
    }
}

/// Detect the framework used by the project in `dir`.
pub fn probe(dir: &Path, pkg_json: &PkgJson) -> Option<ProjectType> {
    ProjectType::ALL.into_iter().find(|t| {
        pkg_json.has_dependency(t.marker_dependency())
            && t.marker_file().map_or(true, |f| dir.join(f).is_file())
    })
}
