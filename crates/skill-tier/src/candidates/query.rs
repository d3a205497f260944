use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Candidate, Tier};

/// Dashboard tier filter: every candidate, or only one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    All,
    Only(Tier),
}

impl TierFilter {
    pub fn admits(self, tier: Tier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(expected) => expected == tier,
        }
    }
}

impl FromStr for TierFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(TierFilter::All);
        }

        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|value| Tier::try_from(value).ok())
            .map(TierFilter::Only)
            .ok_or_else(|| format!("tier filter must be 'all' or 0-4, found '{raw}'"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Email,
    Tier,
    #[default]
    CreatedAt,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "name" => Ok(SortField::Name),
            "email" => Ok(SortField::Email),
            "tier" => Ok(SortField::Tier),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            other => Err(format!(
                "sort field must be one of name, email, tier, createdAt (found '{other}')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("sort order must be asc or desc (found '{other}')")),
        }
    }
}

/// Filter, search, and ordering applied to a candidate listing.
///
/// Sorting is stable: candidates with equal keys keep their storage order in either
/// direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateQuery {
    pub tier: TierFilter,
    pub search: Option<String>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl CandidateQuery {
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = TierFilter::Only(tier);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, sort: SortField, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    /// Case-insensitive substring match against name or email; blank searches match everything.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if !self.tier.admits(candidate.tier) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                candidate.name.to_lowercase().contains(&needle)
                    || candidate.email.to_lowercase().contains(&needle)
            }
        }
    }

    pub fn compare(&self, left: &Candidate, right: &Candidate) -> Ordering {
        let ordering = match self.sort {
            SortField::Name => left.name.cmp(&right.name),
            SortField::Email => left.email.cmp(&right.email),
            SortField::Tier => left.tier.cmp(&right.tier),
            SortField::CreatedAt => left.created_at.cmp(&right.created_at),
        };

        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Filter and order candidates already held in storage order.
    pub fn apply<'a, I>(&self, candidates: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let mut selected: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| self.matches(candidate))
            .cloned()
            .collect();
        selected.sort_by(|left, right| self.compare(left, right));
        selected
    }
}
