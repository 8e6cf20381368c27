use std::num::NonZeroUsize;
use tracing::warn;
use url::Url;
use user_admin_domain::pagination::DEFAULT_PAGE_SIZE;

const DEFAULT_API_URL: &str = "http://localhost:8080/api/users";

#[derive(Debug, Clone)]
pub struct Config {
    /// Url of the users collection on the users API.
    /// Every request of the client is made relative to it.
    pub api_url: String,
    /// Number of users shown on one page of the user list
    pub page_size: NonZeroUsize,
}

impl Config {
    pub fn new() -> Self {
        Self::parse(std::env::var("API_URL").ok(), std::env::var("PAGE_SIZE").ok())
    }

    fn parse(api_url: Option<String>, page_size: Option<String>) -> Self {
        let api_url = match api_url {
            Some(url) => match Url::parse(&url) {
                Ok(_) => url,
                Err(e) => {
                    warn!(
                        "The given API_URL: {} is not valid ({}), falling back to the default: {}.",
                        url, e, DEFAULT_API_URL
                    );
                    DEFAULT_API_URL.into()
                }
            },
            None => DEFAULT_API_URL.into(),
        };

        let default_page_size = NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN);
        let page_size = match page_size {
            Some(size) => match size.trim().parse::<NonZeroUsize>() {
                Ok(size) => size,
                Err(_) => {
                    warn!(
                        "The given PAGE_SIZE: {} is not valid, falling back to the default page size: {}.",
                        size, default_page_size
                    );
                    default_page_size
                }
            },
            None => default_page_size,
        };

        Self { api_url, page_size }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
