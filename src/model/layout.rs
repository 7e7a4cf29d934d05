//! Layout identifiers and their canonical ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the interchangeable visual arrangements for a record set.
///
/// Declaration order is the canonical priority order, so the derived `Ord`
/// sorts layouts the way the layout switcher presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutId {
    /// Caller-supplied custom item layout.
    Classic,
    /// Tabular rows with one cell per visible column.
    Table,
    /// Card grid: title plus up to three fields.
    Cards,
    /// Stacked rows: title plus up to four fields.
    List,
    /// Dense tiles: title plus one field.
    Grid,
}

impl LayoutId {
    /// All layouts in canonical priority order.
    pub const CANONICAL_ORDER: [LayoutId; 5] = [
        LayoutId::Classic,
        LayoutId::Table,
        LayoutId::Cards,
        LayoutId::List,
        LayoutId::Grid,
    ];

    /// Wire name used in persisted preferences and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutId::Classic => "classic",
            LayoutId::Table => "table",
            LayoutId::Cards => "cards",
            LayoutId::List => "list",
            LayoutId::Grid => "grid",
        }
    }

    /// Human-readable label for the layout switcher.
    pub fn label(self) -> &'static str {
        match self {
            LayoutId::Classic => "Classic",
            LayoutId::Table => "Table",
            LayoutId::Cards => "Cards",
            LayoutId::List => "List",
            LayoutId::Grid => "Grid",
        }
    }

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Reorder a caller-supplied subset into canonical order, dropping duplicates.
    pub fn canonical_subset(requested: &[LayoutId]) -> Vec<LayoutId> {
        Self::CANONICAL_ORDER
            .into_iter()
            .filter(|layout| requested.contains(layout))
            .collect()
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutId {
    type Err = InvalidLayoutId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::CANONICAL_ORDER
            .into_iter()
            .find(|layout| layout.as_str() == normalized)
            .ok_or_else(|| InvalidLayoutId(s.to_string()))
    }
}

/// A string that names no known layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown layout: {0:?}")]
pub struct InvalidLayoutId(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_subset_reorders_caller_list() {
        let requested = [LayoutId::Grid, LayoutId::Cards, LayoutId::Table];
        assert_eq!(
            LayoutId::canonical_subset(&requested),
            vec![LayoutId::Table, LayoutId::Cards, LayoutId::Grid]
        );
    }

    #[test]
    fn canonical_subset_drops_duplicates() {
        let requested = [LayoutId::List, LayoutId::List, LayoutId::Classic];
        assert_eq!(
            LayoutId::canonical_subset(&requested),
            vec![LayoutId::Classic, LayoutId::List]
        );
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Table ".parse::<LayoutId>(), Ok(LayoutId::Table));
        assert_eq!("CARDS".parse::<LayoutId>(), Ok(LayoutId::Cards));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("kanban".parse::<LayoutId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&LayoutId::Grid).unwrap(), "\"grid\"");
        let parsed: LayoutId = serde_json::from_str("\"classic\"").unwrap();
        assert_eq!(parsed, LayoutId::Classic);
    }

    #[test]
    fn ord_follows_canonical_order() {
        let mut layouts = vec![LayoutId::Grid, LayoutId::Classic, LayoutId::List];
        layouts.sort();
        assert_eq!(layouts, vec![LayoutId::Classic, LayoutId::List, LayoutId::Grid]);
    }

    #[test]
    fn index_matches_position_in_canonical_order() {
        for (i, layout) in LayoutId::CANONICAL_ORDER.iter().enumerate() {
            assert_eq!(layout.index(), i);
        }
    }
}
