//! Projects that have a name badge

/// Project with a name badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Project {
    Msw,
    MathSoftware,
    Repsymo,
    Texsydo,
    MathSweOps,
    MathSweSystemOps,
    MathSweOpsServices,
    MathSwe,
}

impl Project {
    /// Returns the route identifier of the project
    pub fn as_str(&self) -> &'static str {
        match self {
            Project::Msw => "msw",
            Project::MathSoftware => "math-software",
            Project::Repsymo => "repsymo",
            Project::Texsydo => "texsydo",
            Project::MathSweOps => "mathswe-ops",
            Project::MathSweSystemOps => "mathswe-system-ops",
            Project::MathSweOpsServices => "mathswe-ops-services",
            Project::MathSwe => "mathswe",
        }
    }

    /// Returns the name printed on the badge
    pub fn display_name(&self) -> &'static str {
        match self {
            Project::Msw => "MSW",
            Project::MathSoftware => "Math.Software",
            Project::Repsymo => "Repsymo",
            Project::Texsydo => "Texsydo",
            Project::MathSweOps => "MathSwe Ops",
            Project::MathSweSystemOps => "MathSwe System Ops",
            Project::MathSweOpsServices => "MathSwe Ops Services",
            Project::MathSwe => "MathSwe",
        }
    }

    /// Badge label; MVP builds are prefixed with "MVP: "
    pub fn badge_name(&self, mvp: bool) -> String {
        if mvp {
            format!("MVP: {}", self.display_name())
        } else {
            self.display_name().to_string()
        }
    }
}

impl std::str::FromStr for Project {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msw" => Ok(Project::Msw),
            "math-software" => Ok(Project::MathSoftware),
            "repsymo" => Ok(Project::Repsymo),
            "texsydo" => Ok(Project::Texsydo),
            "mathswe-ops" => Ok(Project::MathSweOps),
            "mathswe-system-ops" => Ok(Project::MathSweSystemOps),
            "mathswe-ops-services" => Ok(Project::MathSweOpsServices),
            "mathswe" => Ok(Project::MathSwe),
            _ => Err("Invalid project.".to_string()),
        }
    }
}
