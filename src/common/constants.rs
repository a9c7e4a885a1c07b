/// Source identifiers understood by the factory and the CLI.
pub const WHATS_ON_PAGE_SOURCE: &str = "whats-on-page";
pub const SHOWTIMES_API_SOURCE: &str = "showtimes-api";
pub const LOCAL_FILE_SOURCE: &str = "local-file";

/// Some cinema sites serve a reduced page to clients without a browser UA.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
