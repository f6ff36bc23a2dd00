use crate::config::ScraperConfig;
use crate::crawlers::crawler::{FetchResponse, Fetcher};
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::{Client, Proxy};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Plain HTTP fetcher rotating over one client per configured proxy
#[derive(Debug)]
pub struct HttpFetcher {
    clients: Vec<Client>,
    next: AtomicUsize,
}

impl HttpFetcher {
    /// Build the client pool from the configuration
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut clients = Vec::with_capacity(config.proxies.len().max(1));
        if config.proxies.is_empty() {
            clients.push(build_client(&config.user_agent, timeout, None)?);
        } else {
            for proxy in &config.proxies {
                let proxy = Proxy::all(proxy.as_str())
                    .map_err(|e| ScrapeError::Config(format!("invalid proxy {}: {}", proxy, e)))?;
                clients.push(build_client(&config.user_agent, timeout, Some(proxy))?);
            }
            ::log::debug!("HTTP fetcher rotating over {} proxies", clients.len());
        }

        Ok(Self {
            clients,
            next: AtomicUsize::new(0),
        })
    }

    /// Number of clients in the rotation
    pub fn pool_size(&self) -> usize {
        self.clients.len()
    }

    fn client(&self) -> &Client {
        let i = self.next.fetch_add(1, Ordering::Relaxed) % self.clients.len();
        &self.clients[i]
    }
}

fn build_client(user_agent: &str, timeout: Duration, proxy: Option<Proxy>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent).timeout(timeout);
    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }
    Ok(builder.build()?)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse> {
        ::log::debug!("GET {}", url);
        let response = self.client().get(url).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        Ok(FetchResponse::new(url, status, text))
    }
}
