// src/config/options.rs
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use super::consts::*;

/// Everything the lookup pipeline needs from the outside world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOptions {
    pub search_url: String,
    pub thing_url: String,
    /// Sent as a bearer token when present.
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Max characters of decoded description kept on the record.
    pub desc_budget: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            search_url: s!(SEARCH_URL),
            thing_url: s!(THING_URL),
            token: None,
            user_agent: s!(USER_AGENT),
            timeout_secs: TIMEOUT_SECS,
            desc_budget: DESC_BUDGET,
        }
    }
}

impl LookupOptions {
    /// Defaults ← `bgg_peek.toml` ← `BGG_PEEK_*` ← `BOARD_GAME_API_TOKEN`.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&[TOKEN_ENV]).map(|_| "token".into()))
    }

    pub fn load() -> Result<Self, figment::Error> {
        let opts: Self = Self::figment().extract()?;
        logd!(
            "Config: search={} thing={} token={} timeout={}s budget={}",
            opts.search_url,
            opts.thing_url,
            if opts.has_token() { "set" } else { "none" },
            opts.timeout_secs,
            opts.desc_budget
        );
        Ok(opts)
    }

    /// Load, but never fail: a broken config file falls back to defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            loge!("Config: {e}; using defaults");
            Self::default()
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let t = token.into();
        let t = t.trim();
        self.token = if t.is_empty() { None } else { Some(s!(t)) };
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_xmlapi2() {
        let o = LookupOptions::default();
        assert!(o.search_url.ends_with("/xmlapi2/search"));
        assert!(o.thing_url.ends_with("/xmlapi2/thing"));
        assert_eq!(o.desc_budget, DESC_BUDGET);
        assert!(!o.has_token());
    }

    #[test]
    fn blank_token_is_no_token() {
        let o = LookupOptions::default().with_token("   ");
        assert_eq!(o.token, None);
        let o = LookupOptions::default().with_token(" abc ");
        assert_eq!(o.token.as_deref(), Some("abc"));
        assert!(o.has_token());
    }

    #[test]
    fn layers_file_then_prefixed_env_then_token_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    token = "from-file"
                    timeout_secs = 30
                    desc_budget = 120
                "#,
            )?;

            let o: LookupOptions = LookupOptions::figment().extract()?;
            assert_eq!(o.timeout_secs, 30);
            assert_eq!(o.desc_budget, 120);
            assert_eq!(o.search_url, SEARCH_URL);

            jail.set_env("BGG_PEEK_TIMEOUT_SECS", "7");
            jail.set_env("BGG_PEEK_TOKEN", "from-prefixed");
            let o: LookupOptions = LookupOptions::figment().extract()?;
            assert_eq!(o.timeout_secs, 7);
            assert_eq!(o.desc_budget, 120);

            jail.set_env(TOKEN_ENV, "tok123");
            let o: LookupOptions = LookupOptions::figment().extract()?;
            assert_eq!(o.token.as_deref(), Some("tok123"));
            assert_eq!(o.timeout_secs, 7);
            Ok(())
        });
    }
}
