use serde::{Deserialize, Serialize};

/// One header block on the directory page and the teams listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// `None` serializes as `null`, never as an empty string.
    pub image_url: Option<String>,
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub league: String,
    /// Raw `href` value, possibly relative.
    pub team_link: String,
}

pub type ExtractionResult = Vec<Section>;

impl Team {
    /// Build a team from its anchor text, taking the first token as the league.
    pub fn from_link_text(text: &str, team_link: &str) -> Option<Self> {
        let league = text.split_whitespace().next()?;
        Some(Team {
            league: league.to_string(),
            team_link: team_link.to_string(),
        })
    }
}

// ── Tests ──
