use serde::{Deserialize, Serialize};

/// Closed set of listing categories.
///
/// Markers deserialize through this enum, so a record tagged with an unknown
/// category fails at ingestion rather than surfacing later.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Sharing,
    Jobs,
    Swap,
    Food,
    Events,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Sharing,
        CategoryId::Jobs,
        CategoryId::Swap,
        CategoryId::Food,
        CategoryId::Events,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Sharing => "sharing",
            CategoryId::Jobs => "jobs",
            CategoryId::Swap => "swap",
            CategoryId::Food => "food",
            CategoryId::Events => "events",
        }
    }

    /// Parse a request-supplied category value. Unknown values are `None`;
    /// the caller decides whether that means "ignore" or "match nothing".
    pub fn parse(raw: &str) -> Option<Self> {
        CategoryId::ALL.into_iter().find(|id| id.as_str() == raw)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one category. `name_key` is a translation-dictionary
/// key; `color` and `icon` drive legend and marker styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name_key: String,
    pub color: String,
    pub icon: String,
}

/// Immutable category metadata, built once at startup and shared by
/// reference. Nothing indexes this table directly; lookups go through
/// [`CategoryTable::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    /// The built-in NextNeighbor categories, in display order. Marker colors
    /// are unique per category.
    pub fn builtin() -> Self {
        fn entry(id: CategoryId, name_key: &str, color: &str, icon: &str) -> Category {
            Category {
                id,
                name_key: name_key.to_string(),
                color: color.to_string(),
                icon: icon.to_string(),
            }
        }

        CategoryTable {
            entries: vec![
                entry(CategoryId::Sharing, "category.sharing", "#00E5E0", "🔄"),
                entry(CategoryId::Jobs, "category.jobs", "#4BC9FF", "💼"),
                entry(CategoryId::Swap, "category.swap", "#FF9F43", "🔁"),
                entry(CategoryId::Food, "category.food", "#FF5A8E", "🍽️"),
                entry(CategoryId::Events, "category.events", "#B15CFF", "📅"),
            ],
        }
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Category] {
        &self.entries
    }
}
