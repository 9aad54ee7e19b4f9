use serde::{Deserialize, Serialize};

/// The two named lists a user maintains. The storage keys are the
/// literal keys the lists have always been persisted under, so existing
/// data keeps loading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListKind {
    Watchlist,
    Favorites,
}

impl ListKind {
    pub fn storage_key(&self) -> &'static str {
        match self {
            ListKind::Watchlist => "watchList",
            ListKind::Favorites => "favoriteList",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Watchlist => "Watchlist",
            ListKind::Favorites => "Favorites",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_stable() {
        assert_eq!(ListKind::Watchlist.storage_key(), "watchList");
        assert_eq!(ListKind::Favorites.storage_key(), "favoriteList");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ListKind::Watchlist.label(), "Watchlist");
        assert_eq!(ListKind::Favorites.label(), "Favorites");
    }
}
