use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;

const DEFAULT_API_URL: &str = "https://pokeapi.co";
const DEFAULT_SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
const DEFAULT_CATALOG_LIMIT: u32 = 151;

/// Endpoint configuration for the catalog and detail fetches.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub sprite_base_url: String,
    pub catalog_limit: u32,
}

impl ApiConfig {
    /// Reads the configuration from the environment, falling back to the
    /// public PokeAPI defaults. `.env` files are honoured.
    pub fn from_env() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();

        let base_url = env::var("POKEAPI_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let sprite_base_url = env::var("SPRITE_URL")
            .unwrap_or_else(|_| DEFAULT_SPRITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let catalog_limit = match env::var("POKEDEX_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| eyre!("POKEDEX_LIMIT is not a number: {raw}"))?,
            Err(_) => DEFAULT_CATALOG_LIMIT,
        };

        if catalog_limit == 0 {
            return Err(eyre!("POKEDEX_LIMIT must be at least 1"));
        }

        Ok(Self {
            base_url,
            sprite_base_url,
            catalog_limit,
        })
    }

    /// URL of the full catalog listing, one page, requested up front.
    pub fn catalog_url(&self) -> String {
        format!(
            "{}/api/v2/pokemon?limit={}",
            self.base_url, self.catalog_limit
        )
    }

    /// Deterministic thumbnail address for a catalog id. Display only.
    pub fn sprite_url(&self, id: u32) -> String {
        format!("{}/{id}.png", self.sprite_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_url_carries_the_limit() {
        let config = ApiConfig {
            base_url: "https://pokeapi.co".to_string(),
            sprite_base_url: DEFAULT_SPRITE_URL.to_string(),
            catalog_limit: 151,
        };
        assert_eq!(
            config.catalog_url(),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
    }

    #[test]
    fn sprite_url_is_templated_from_id() {
        let config = ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            sprite_base_url: "https://sprites.example".to_string(),
            catalog_limit: 151,
        };
        assert_eq!(config.sprite_url(25), "https://sprites.example/25.png");
    }
}
