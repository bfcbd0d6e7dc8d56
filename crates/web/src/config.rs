/// Front-end configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_base: String,
    pub library_limit: u32,
}

pub const DEFAULT_LIBRARY_LIMIT: u32 = 400;

impl Config {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("KINOTEKA_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let api_base = std::env::var("KINOTEKA_API_BASE")
            .unwrap_or_else(|_| "http://127.0.0.1:3000/api".to_string());
        let library_limit: u32 = std::env::var("KINOTEKA_LIBRARY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_LIBRARY_LIMIT);

        Self {
            bind_addr,
            api_base,
            library_limit,
        }
    }
}
