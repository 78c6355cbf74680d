use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const HEADER: &str = "header.HocFrame_headerWithFunction__5EiCz";
const TITLE: &str = "h2.HocFrame_primaryTitle__uBTSP";
const IMAGE: &str = "img";
const CONTENT_ID: &str = "table-list-content";
const TEAM_ITEM: &str = "div.LabelWithIcon_wrapper__Klo88";
const LINK: &str = "a";

/// Page-specific CSS selectors. Override these when the site markup changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub header: String,
    pub title: String,
    pub image: String,
    /// Substring matched against the `id` of the element following a header.
    pub content_id: String,
    pub team_item: String,
    pub link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            header: HEADER.into(),
            title: TITLE.into(),
            image: IMAGE.into(),
            content_id: CONTENT_ID.into(),
            team_item: TEAM_ITEM.into(),
            link: LINK.into(),
        }
    }
}

/// Compiled form of [`SelectorConfig`], built once per extractor.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub header: Selector,
    pub title: Selector,
    pub image: Selector,
    pub content_id: String,
    pub team_item: Selector,
    pub link: Selector,
}

impl SelectorConfig {
    pub fn compile(&self) -> Result<Selectors, ParseError> {
        if self.content_id.trim().is_empty() {
            return Err(ParseError::InvalidSelector {
                name: "content_id",
                selector: self.content_id.clone(),
                reason: "id marker must not be empty".into(),
            });
        }

        Ok(Selectors {
            header: parse("header", &self.header)?,
            title: parse("title", &self.title)?,
            image: parse("image", &self.image)?,
            content_id: self.content_id.clone(),
            team_item: parse("team_item", &self.team_item)?,
            link: parse("link", &self.link)?,
        })
    }
}

fn parse(name: &'static str, css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        name,
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compile() {
        let s = SelectorConfig::default().compile().unwrap();
        assert_eq!(s.content_id, "table-list-content");
    }

    #[test]
    fn bad_css_names_the_field() {
        let cfg = SelectorConfig {
            team_item: "div[[".into(),
            ..Default::default()
        };
        match cfg.compile() {
            Err(ParseError::InvalidSelector { name, selector, .. }) => {
                assert_eq!(name, "team_item");
                assert_eq!(selector, "div[[");
            }
            other => panic!("expected InvalidSelector, got {:?}", other),
        }
    }

    #[test]
    fn empty_content_marker_rejected() {
        let cfg = SelectorConfig {
            content_id: " ".into(),
            ..Default::default()
        };
        assert!(matches!(
            cfg.compile(),
            Err(ParseError::InvalidSelector { name: "content_id", .. })
        ));
    }
}
