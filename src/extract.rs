use scraper::{ElementRef, Html};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{ExtractError, ParseError};
use crate::fetch::Fetcher;
use crate::model::{ExtractionResult, Section, Team};
use crate::selectors::Selectors;

/// Fetch → parse → walk. Holds the HTTP client and compiled selectors.
pub struct Extractor {
    fetcher: Fetcher,
    selectors: Selectors,
}

impl Extractor {
    pub fn new(fetcher: Fetcher, selectors: Selectors) -> Self {
        Extractor { fetcher, selectors }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ExtractError> {
        let selectors = settings.selectors.compile()?;
        let fetcher = Fetcher::new(settings.timeout(), &settings.user_agent)?;
        Ok(Extractor::new(fetcher, selectors))
    }

    pub fn extract(&self, url: &str) -> Result<ExtractionResult, ExtractError> {
        let html = self.fetcher.get(url)?;
        Ok(self.extract_html(&html)?)
    }

    /// Same as [`Extractor::extract`] on a document that is already loaded.
    pub fn extract_html(&self, html: &str) -> Result<ExtractionResult, ParseError> {
        parse_sections(html, &self.selectors)
    }
}

/// Walk every header in document order. The first malformed section aborts
/// the whole walk; no partial list is returned.
pub fn parse_sections(html: &str, selectors: &Selectors) -> Result<ExtractionResult, ParseError> {
    let document = Html::parse_document(html);

    let sections = document
        .select(&selectors.header)
        .enumerate()
        .map(|(i, header)| parse_section(i, header, selectors))
        .collect::<Result<Vec<_>, _>>()?;

    let teams: usize = sections.iter().map(|s| s.teams.len()).sum();
    info!(sections = sections.len(), teams, "Extracted team listings");
    Ok(sections)
}

fn parse_section(
    index: usize,
    header: ElementRef<'_>,
    selectors: &Selectors,
) -> Result<Section, ParseError> {
    let title = header
        .select(&selectors.title)
        .next()
        .map(element_text)
        .ok_or(ParseError::MissingTitle { section: index })?;
    if title.is_empty() {
        return Err(ParseError::EmptyTitle { section: index });
    }

    let image_url = header
        .select(&selectors.image)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);

    let teams = match content_block(header, &selectors.content_id) {
        Some(block) => parse_teams(&title, block, selectors)?,
        None => Vec::new(),
    };

    debug!(title = %title, teams = teams.len(), has_image = image_url.is_some(), "Section");
    Ok(Section {
        title,
        image_url,
        teams,
    })
}

/// The header's next element sibling, if its id carries the content marker.
fn content_block<'a>(header: ElementRef<'a>, marker: &str) -> Option<ElementRef<'a>> {
    header
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|el| el.value().id().is_some_and(|id| id.contains(marker)))
}

fn parse_teams(
    title: &str,
    block: ElementRef<'_>,
    selectors: &Selectors,
) -> Result<Vec<Team>, ParseError> {
    block
        .select(&selectors.team_item)
        .enumerate()
        .map(|(item, el)| {
            let link = el
                .select(&selectors.link)
                .next()
                .ok_or_else(|| ParseError::MissingLink {
                    section: title.to_string(),
                    item,
                })?;
            let href = link
                .value()
                .attr("href")
                .ok_or_else(|| ParseError::MissingHref {
                    section: title.to_string(),
                    item,
                })?;
            Team::from_link_text(&element_text(link), href).ok_or_else(|| {
                ParseError::EmptyLeague {
                    section: title.to_string(),
                    item,
                }
            })
        })
        .collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ── Tests ──
