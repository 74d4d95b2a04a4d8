//! Page model for the club roster page.
//!
//! The upstream markup has a history of reshuffling wrapper tags between site
//! revisions, so nothing here matches one literal structure. Every value is
//! read through a prioritized list of rules and the first plausible match
//! wins; when no rule matches, the value is reported as unknown rather than
//! defaulted. Reconciliation never needs to know what the page looks like.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::CLUB_CAPACITY;
use crate::model::club::ClubAggregate;
use crate::model::player::ParsedPlayer;
use crate::util::tag::normalize_tag;

/// Minimum plausible club trophy total. Rejects decoy numbers like copyright
/// years that the loose text patterns would otherwise pick up.
const TOTAL_TROPHIES_FLOOR: i32 = 1000;

/// Roster rows need at least this many cells: rank, name, role, trophies.
const MIN_ROW_CELLS: usize = 4;

const NAME_CELL: usize = 1;
const TROPHY_CELL: usize = 3;

/// Compiled extraction rules, in fallback order where it matters.
struct Rules {
    row: Selector,
    cell: Selector,
    anchor: Selector,
    wrapper: Selector,
    tag_attr: Selector,
    heading: Selector,
    total_trophies: Vec<Regex>,
    member_count: Vec<Regex>,
}

impl Rules {
    fn new() -> Self {
        Self {
            row: selector("tr"),
            cell: selector("td"),
            anchor: selector("a"),
            wrapper: selector("span, div, b, strong"),
            tag_attr: selector("[data-bs-player-tag]"),
            heading: selector("h1"),
            // The number class allows dot, comma and narrow-space thousands
            // separators but not plain spaces, so two adjacent counts in the
            // flattened page text never merge into one.
            total_trophies: vec![
                pattern(r"(?i)total\s+trophies\D{0,40}?(\d[\d.,\u{00a0}\u{202f}]*)"),
                pattern(r"(?i)trophies\D{0,10}?(\d[\d.,\u{00a0}\u{202f}]*)"),
            ],
            member_count: vec![
                pattern(r"(?i)members?\D{0,40}?(\d{1,2})\s*/\s*\d{2}"),
                pattern(&format!(r"(\d{{1,2}})\s*/\s*{}\b", CLUB_CAPACITY)),
            ],
        }
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid selector")
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).expect("invalid pattern")
}

/// Parsed view of one roster page: the ordered member rows plus the
/// best-effort club aggregate.
pub struct RosterPage {
    players: Vec<ParsedPlayer>,
    aggregate: ClubAggregate,
}

impl RosterPage {
    pub fn parse(html: &str) -> Self {
        let rules = Rules::new();
        let document = Html::parse_document(html);

        let players = parse_players(&document, &rules);
        let aggregate = parse_aggregate(&document, &rules, &players);

        Self { players, aggregate }
    }

    pub fn into_parts(self) -> (Vec<ParsedPlayer>, ClubAggregate) {
        (self.players, self.aggregate)
    }
}

fn parse_players(document: &Html, rules: &Rules) -> Vec<ParsedPlayer> {
    let mut players = Vec::new();

    for row in document.select(&rules.row) {
        let cells: Vec<ElementRef> = row.select(&rules.cell).collect();
        if cells.len() < MIN_ROW_CELLS {
            continue;
        }
        // Quality gate: a row that yields no name, no tag, or a nonsense
        // trophy value is dropped, not recorded with defaults.
        if let Some(player) = parse_roster_row(&cells, rules) {
            players.push(player);
        }
    }

    players
}

fn parse_roster_row(cells: &[ElementRef], rules: &Rules) -> Option<ParsedPlayer> {
    let display_name = cell_display_name(&cells[NAME_CELL], rules)?;
    let tag = cell_player_tag(&cells[NAME_CELL], rules)?;
    let trophies = cell_trophies(&cells[TROPHY_CELL])?;

    Some(ParsedPlayer {
        display_name,
        tag,
        trophies,
    })
}

/// Display name rules, in order: anchor text, styling-wrapper text, plain
/// cell text.
fn cell_display_name(cell: &ElementRef, rules: &Rules) -> Option<String> {
    for anchor in cell.select(&rules.anchor) {
        let text = collapsed_text(&anchor);
        if !text.is_empty() {
            return Some(text);
        }
    }

    for wrapper in cell.select(&rules.wrapper) {
        let text = collapsed_text(&wrapper);
        if !text.is_empty() {
            return Some(text);
        }
    }

    let text = collapsed_text(cell);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Tag rules, in order: `data-bs-player-tag` attribute on the cell or any
/// descendant, then the player profile link path.
fn cell_player_tag(cell: &ElementRef, rules: &Rules) -> Option<String> {
    if let Some(raw) = cell.value().attr("data-bs-player-tag") {
        if let Some(tag) = normalize_tag(raw) {
            return Some(tag);
        }
    }

    for holder in cell.select(&rules.tag_attr) {
        if let Some(raw) = holder.value().attr("data-bs-player-tag") {
            if let Some(tag) = normalize_tag(raw) {
                return Some(tag);
            }
        }
    }

    for anchor in cell.select(&rules.anchor) {
        if let Some(href) = anchor.value().attr("href") {
            if let Some(tag) = tag_from_player_href(href) {
                return Some(tag);
            }
        }
    }

    None
}

fn tag_from_player_href(href: &str) -> Option<String> {
    let (_, rest) = href.split_once("/players/")?;
    let segment = rest.split(['/', '?']).next()?;
    normalize_tag(&segment.replace("%23", "#"))
}

/// Trophy count: strip every non-digit, parse what remains. Non-positive or
/// unparseable values disqualify the row.
fn cell_trophies(cell: &ElementRef) -> Option<i32> {
    let digits: String = cell
        .text()
        .flat_map(|chunk| chunk.chars())
        .filter(|c| c.is_ascii_digit())
        .collect();

    let value = digits.parse::<i32>().ok()?;
    (value > 0).then_some(value)
}

fn parse_aggregate(document: &Html, rules: &Rules, players: &[ParsedPlayer]) -> ClubAggregate {
    let text = collapsed_text(&document.root_element());

    let display_name = document
        .select(&rules.heading)
        .map(|heading| collapsed_text(&heading))
        .find(|heading| !heading.is_empty());

    let total_trophies = rules.total_trophies.iter().find_map(|rule| {
        rule.captures_iter(&text).find_map(|captures| {
            let value = parse_formatted_int(captures.get(1)?.as_str())?;
            (value > TOTAL_TROPHIES_FLOOR).then_some(value)
        })
    });

    let member_count = rules
        .member_count
        .iter()
        .find_map(|rule| {
            rule.captures_iter(&text).find_map(|captures| {
                let value = captures.get(1)?.as_str().parse::<i32>().ok()?;
                (1..=CLUB_CAPACITY).contains(&value).then_some(value)
            })
        })
        .or_else(|| (!players.is_empty()).then_some(players.len() as i32));

    let min_trophies = players.iter().map(|player| player.trophies).min();
    let max_trophies = players.iter().map(|player| player.trophies).max();

    ClubAggregate {
        display_name,
        total_trophies,
        member_count,
        min_trophies,
        max_trophies,
    }
}

fn collapsed_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_formatted_int(raw: &str) -> Option<i32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<i32>().ok()
}
