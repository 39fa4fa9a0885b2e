// src/cli.rs
//
// Manual test driver: run real lookups from the terminal and print what the
// tooltip would show, or why nothing would be shown.

use clap::Parser;

use crate::{
    config::options::LookupOptions,
    lookup::{self, BggCatalog, Lookup, LookupError},
    progress::Progress,
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Look up board games on BoardGameGeek")]
pub struct Args {
    /// Game names to look up
    #[arg(default_values_t = ["Catan".to_string(), "Wingspan".to_string()])]
    pub queries: Vec<String>,

    /// Print each lookup as JSON
    #[arg(long)]
    pub json: bool,

    /// Bearer token (overrides BOARD_GAME_API_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Description budget in characters
    #[arg(long)]
    pub budget: Option<usize>,
}

/// Stderr status lines.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn candidates(&mut self, count: usize) {
        eprintln!("  {count} candidate(s)");
    }
}

pub fn render(l: &Lookup) -> String {
    let r = &l.record;
    let item = l.chosen_item();
    let mut out = String::new();
    out.push_str(&format!("{} ({})  [id {}]\n", r.title, r.year, r.id));
    out.push_str(&format!(
        "  picked #{} of {} by {:?} (\"{}\")\n",
        l.chosen + 1,
        l.candidates.len(),
        l.rule,
        item.name
    ));
    out.push_str(&format!(
        "  rating {}  weight {}  players {}  time {}\n",
        r.rating_label(),
        r.weight_label(),
        r.players_label(),
        r.time_label()
    ));
    out.push_str(&format!("  design {}  art {}\n", r.designers_label(), r.artists_label()));
    out.push_str(&format!("  {}\n", r.description));
    out
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    crate::log::init();

    let args = Args::parse();
    let mut opts = LookupOptions::load()?;
    if let Some(t) = args.token.as_deref() {
        opts = opts.with_token(t);
    }
    if let Some(b) = args.budget {
        opts.desc_budget = b;
    }
    let budget = opts.desc_budget;
    let catalog = BggCatalog::new(opts)?;

    let mut failures = 0usize;
    for q in &args.queries {
        eprintln!("Searching for: \"{}\"...", q.trim());
        match lookup::run(&catalog, q, budget, Some(&mut CliProgress)) {
            Ok(l) if args.json => println!("{}", serde_json::to_string_pretty(&l)?),
            Ok(l) => println!("{}", render(&l)),
            Err(e @ LookupError::NoResults { .. }) => {
                failures += 1;
                println!("{e}");
            }
            Err(e) => {
                failures += 1;
                if let LookupError::Transport(detail) = &e {
                    eprintln!("  {detail}");
                }
                println!("{e}");
            }
        }
    }

    if failures == args.queries.len() && failures > 0 {
        color_eyre::eyre::bail!("no lookup succeeded");
    }
    Ok(())
}
