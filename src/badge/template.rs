//! SVG templates for release badges

use std::sync::LazyLock;

use regex::Regex;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-\S*)?(\+\S*)?$").expect("Invalid version regex")
});

const VERSION_BADGE: &str = r##"
<svg xmlns="http://www.w3.org/2000/svg"
     width="{{totalWidth}}"
     height="20"
     role="img"
     aria-label="release v{{version}}">
    <title>release v{{version}}</title>
    <g shape-rendering="crispEdges">
        <rect width="48" height="20" fill="#555"/>
        <rect x="48" width="{{versionRectWidth}}" height="20" fill="#007ec6"/>
    </g>
    <g fill="#fff"
       text-anchor="middle"
       font-family="Poppins Medium,sans-serif"
       text-rendering="geometricPrecision"
       font-size="110">
        <text x="255"
              y="140"
              transform="scale(.1)"
              fill="#fff"
              textLength="390">
          release
        </text>
        <text x="{{textX}}"
              y="140"
              transform="scale(.1)"
              fill="#fff"
              textLength="{{textLength}}">
          v{{version}}
        </text>
    </g>
</svg>
"##;

/// Badge served when no version can be determined
pub const NOT_FOUND_BADGE: &str = r##"
<svg xmlns="http://www.w3.org/2000/svg"
     width="112"
     height="20"
     role="img"
     aria-label="release not found">
    <title>release not found</title>
    <g shape-rendering="crispEdges">
        <rect width="48" height="20" fill="#555"/>
        <rect x="48" width="64" height="20" fill="#9f9f9f"/>
    </g>
    <g fill="#fff"
       text-anchor="middle"
       font-family="Poppins Medium,sans-serif"
       text-rendering="geometricPrecision"
       font-size="110">
        <text x="255"
              y="140"
              transform="scale(.1)"
              fill="#fff"
              textLength="390">
          release
        </text>
        <text x="795"
              y="140"
              transform="scale(.1)"
              fill="#fff"
              textLength="510">
          not found
        </text>
    </g>
</svg>
"##;

const PROJECT_BADGE: &str = r##"
<svg xmlns="http://www.w3.org/2000/svg"
     width="{{width}}"
     height="20"
     role="img"
     aria-label="{{name}}">
    <title>{{name}}</title>
    <g shape-rendering="crispEdges">
        <rect width="{{width}}" height="20" fill="#555"/>
    </g>
    <g fill="#fff"
       text-anchor="middle"
       font-family="Poppins Medium,sans-serif"
       text-rendering="geometricPrecision"
       font-size="110">
        <text x="{{textX}}"
              y="140"
              transform="scale(.1)"
              fill="#fff"
              textLength="{{textLength}}">
          {{name}}
        </text>
    </g>
</svg>
"##;

/// Width of one character of badge text, in tenths of a pixel
const LETTER_WIDTH: usize = 56;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid version {0}.")]
pub struct InvalidVersion(String);

/// A `MAJOR.MINOR.PATCH` version with optional pre-release and build suffixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    pub fn parse(version: &str) -> Result<Self, InvalidVersion> {
        if VERSION_REGEX.is_match(version) {
            Ok(Self(version.to_string()))
        } else {
            Err(InvalidVersion(version.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render the "release vX.Y.Z" badge; widths scale with the version length
pub fn render_version_badge(version: &Version) -> String {
    let length = version.as_str().chars().count();
    let text_length = LETTER_WIDTH * length;
    let text_x = 255 + text_length + 4 * LETTER_WIDTH;
    let version_rect_width = 8 * length + 24;
    let total_width = 48 + version_rect_width;

    VERSION_BADGE
        .replace("{{version}}", version.as_str())
        .replace("{{textLength}}", &text_length.to_string())
        .replace("{{totalWidth}}", &total_width.to_string())
        .replace("{{textX}}", &text_x.to_string())
        .replace("{{versionRectWidth}}", &version_rect_width.to_string())
}

/// Render a single-segment badge carrying a project name
pub fn render_project_badge(name: &str) -> String {
    let length = name.chars().count();
    let text_length = LETTER_WIDTH * length;
    let width = 8 * length + 20;

    PROJECT_BADGE
        .replace("{{name}}", name)
        .replace("{{width}}", &width.to_string())
        .replace("{{textX}}", &(width * 5).to_string())
        .replace("{{textLength}}", &text_length.to_string())
}
