// src/config/consts.rs

// Net config
pub const SEARCH_URL: &str = "https://boardgamegeek.com/xmlapi2/search";
pub const THING_URL: &str = "https://boardgamegeek.com/xmlapi2/thing";
pub const SEARCH_KIND: &str = "boardgame";
pub const USER_AGENT: &str = concat!("bgg_peek/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;
pub const TOKEN_ENV: &str = "BOARD_GAME_API_TOKEN";
pub const ENV_PREFIX: &str = "BGG_PEEK_";
pub const CONFIG_FILE: &str = "bgg_peek.toml";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Record display
pub const UNKNOWN: &str = "?";
pub const DESC_BUDGET: usize = 300;
pub const CONTINUATION: &str = "...";
pub const LINK_CAP: usize = 2;
pub const DESIGNER_KIND: &str = "boardgamedesigner";
pub const ARTIST_KIND: &str = "boardgameartist";

// Overlay
pub const ANCHOR_OFFSET: f32 = 10.0;
pub const EDGE_MARGIN: f32 = 0.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 360.0;
