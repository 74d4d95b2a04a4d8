use crate::config::CLUB_CAPACITY;

/// Club-level values read from the roster page.
///
/// Every field is best-effort: `None` means the page layout could not be
/// matched for that value. `None` is deliberately distinct from zero, since a
/// parse failure must never look like a club that lost all its trophies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubAggregate {
    pub display_name: Option<String>,
    pub total_trophies: Option<i32>,
    pub member_count: Option<i32>,
    pub min_trophies: Option<i32>,
    pub max_trophies: Option<i32>,
}

/// Free-slot view of one configured club.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeSlots {
    pub club_name: String,
    pub club_tag: String,
    pub member_count: i32,
    /// Remaining capacity, clamped at zero when the scraped member count
    /// somehow exceeds the game's capacity.
    pub free: i32,
}

impl FreeSlots {
    pub fn new(club_name: String, club_tag: String, member_count: i32) -> Self {
        let free = (CLUB_CAPACITY - member_count).max(0);
        Self {
            club_name,
            club_tag,
            member_count,
            free,
        }
    }

    /// Traffic-light marker for command replies. Zero free slots means the
    /// club is full.
    pub fn emoji(&self) -> &'static str {
        match self.free {
            0 => "🔴",
            1..=5 => "🟡",
            _ => "🟢",
        }
    }
}
