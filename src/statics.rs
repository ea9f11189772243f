// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Lootdex: Item Catalog Viewer";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_REMEMBER: &str = "Remember File...";
pub const EN_BTN_FORGET: &str = "Forget";
pub const EN_BTN_RELOAD: &str = "Reload";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";
pub const EN_BTN_CLEAR: &str = "Clear";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "Lootdex: Item Catalog Viewer";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_SOURCES: &str = "Load order: remembered file, then server, then manual.";

pub const EN_HOME_HEADING: &str = "Lootdex: Item Catalog Viewer";
pub const EN_HOME_INSTRUCTIONS: &str =
    "No catalog loaded. Open an items .json file, or Remember one to auto-load next time.";

pub const EN_HEADING_LEVELS: &str = "Levels";

pub const EN_LABEL_SEARCH: &str = "Search:";
pub const EN_HINT_SEARCH: &str = "name or ID";
pub const EN_LABEL_CLASS: &str = "Class:";
pub const EN_LABEL_TYPE: &str = "Type:";
pub const EN_LABEL_QUALITY: &str = "Quality:";
pub const EN_FILTER_ANY: &str = "(any)";

pub const EN_COL_NAME: &str = "Name";
pub const EN_COL_ID: &str = "ID";
pub const EN_COL_TYPE: &str = "Type";
pub const EN_COL_QUALITY: &str = "Quality";
pub const EN_COL_CLASSES: &str = "Classes";
pub const EN_COL_STATS: &str = "Stats";

pub const EN_LEVEL_PREFIX: &str = "Level";
pub const EN_LEVEL_NONE: &str = "No level";
pub const EN_LABEL_VISIBLE: &str = "visible:";
pub const EN_LABEL_SKIPPED: &str = "skipped entries:";
pub const EN_SECTION_EMPTY: &str = "(all filtered out)";

pub const EN_UNNAMED: &str = "(unnamed)";
pub const EN_MISSING: &str = "?";
pub const EN_NONE_DASH: &str = "\u{2014}";

pub const EN_STATUS_LOADED_REMEMBERED: &str = "Loaded from remembered file.";
pub const EN_STATUS_LOADED_SERVER: &str = "Loaded from server.";
pub const EN_STATUS_NO_SERVER: &str =
    "No server detected. Open a file manually, or Remember one for next time.";
pub const EN_STATUS_REMEMBERED: &str = "Remembered file location.";
pub const EN_STATUS_FORGOT: &str = "Forgot remembered file.";

pub const EN_EMPTY: &str = "";

// Catalog field values: the five known quality tiers, lowest to highest.
// These are data constants, not UI strings; catalogs carry them verbatim.
pub const QUALITY_COMMON: &str = "Zwykła";
pub const QUALITY_UNCOMMON: &str = "Niezwykła";
pub const QUALITY_RARE: &str = "Rzadka";
pub const QUALITY_EPIC: &str = "Epicka";
pub const QUALITY_LEGENDARY: &str = "Legendarna";

pub const QUALITY_ORDER: [&str; 5] = [
    QUALITY_COMMON,
    QUALITY_UNCOMMON,
    QUALITY_RARE,
    QUALITY_EPIC,
    QUALITY_LEGENDARY,
];

// Rank given to absent or unrecognized qualities; sorts after every known tier.
pub const QUALITY_RANK_UNKNOWN: u8 = 99;

// Fixed resource path used by the server-fetch load source.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000/items.json";

// Names used for the remembered-path config location.
pub const CONFIG_APP_NAME: &str = "lootdex";
pub const CONFIG_FILE_NAME: &str = "remembered.json";
