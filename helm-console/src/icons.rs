//! Icon key resolution for menu rendering
//!
//! The catalog stores icon names as strings; rendering needs a total
//! mapping from those strings to icons the frontend actually ships.
//! Unknown keys resolve to [`FALLBACK_ICON`] instead of failing, so a
//! catalog edit can never break the sidebar.

/// Icon used for any unknown key
pub const FALLBACK_ICON: &str = "circle-help";

/// Every icon key the menu catalog may reference, sorted for binary search
const KNOWN_ICONS: &[&str] = &[
    "bar-chart",
    "bar-chart-2",
    "bar-chart-3",
    "book",
    "book-open",
    "boxes",
    "calendar-clock",
    "chart-line",
    "clipboard-list",
    "coins",
    "database",
    "factory",
    "file-check",
    "file-input",
    "file-plus",
    "file-question",
    "file-text",
    "id-card",
    "layers",
    "list",
    "list-checks",
    "log-in",
    "log-out",
    "map-pin",
    "package",
    "package-plus",
    "percent",
    "receipt",
    "repeat",
    "rotate-ccw",
    "rotate-cw",
    "ruler",
    "scale",
    "server-cog",
    "shield",
    "shopping-bag",
    "shopping-cart",
    "shuffle",
    "sliders",
    "tags",
    "timer",
    "timer-reset",
    "touchpad",
    "trending-up",
    "user-circle",
    "users",
    "users-2",
    "wallet",
    "wallet-cards",
    "waves",
    "wrench",
];

/// Resolve an icon key to a renderable icon name
///
/// Total: unknown or absent keys fall back to [`FALLBACK_ICON`].
pub fn resolve(key: Option<&str>) -> &'static str {
    match key {
        Some(key) => KNOWN_ICONS
            .binary_search(&key)
            .map(|index| KNOWN_ICONS[index])
            .unwrap_or(FALLBACK_ICON),
        None => FALLBACK_ICON,
    }
}

/// Whether a key is present in the registry
pub fn is_known(key: &str) -> bool {
    KNOWN_ICONS.binary_search(&key).is_ok()
}
