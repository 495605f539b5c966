use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ratatui_dex-compare", version, about = "Creature stat comparison TUI")]
pub struct CliArgs {
    /// Print a comparison and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Creatures to compare in headless mode (comma separated, up to 6)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub compare: Vec<String>,

    /// Override the API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the catalog page size
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("POKEAPI_URL", url);
        }
        if let Some(limit) = self.limit {
            std::env::set_var("POKEDEX_LIMIT", limit.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "true");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_is_accepted() {
        let args = CliArgs::try_parse_from(["dex-compare", "--debug"]).unwrap();
        assert!(args.debug);
        assert!(!args.headless);
    }

    #[test]
    fn compare_splits_on_commas() {
        let args =
            CliArgs::try_parse_from(["dex-compare", "--compare", "bulbasaur,pikachu"]).unwrap();
        assert_eq!(args.compare, ["bulbasaur", "pikachu"]);
        assert!(!args.debug);
    }
}
