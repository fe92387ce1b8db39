// src/core/net.rs
// One blocking GET per listing page. Failures never abort the run; they
// become a `Skip` the driver logs and steps past.

use std::fmt;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::config::options::ScrapeOptions;
use crate::error::Result;

/// Why a page produced no markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Server answered with a non-2xx status.
    Status(u16),
    /// Timeout, DNS, connection reset, unreadable body...
    Transport(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Status(code) => write!(f, "status {code}"),
            SkipReason::Transport(msg) => write!(f, "{msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Page(String),
    Skip(SkipReason),
}

/// Anything that can hand back the markup of listing page `n`.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> FetchOutcome;
}

/// reqwest-backed source for the live site.
pub struct HttpFetcher {
    client: Client,
    opts: ScrapeOptions,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client, opts: opts.clone() })
    }
}

impl PageSource for HttpFetcher {
    fn fetch_page(&self, page: u32) -> FetchOutcome {
        let url = self.opts.page_url(page);
        logd!("GET {url}");

        let resp = match self.client.get(&url).send() {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                return FetchOutcome::Skip(SkipReason::Transport(format!("timed out: {url}")));
            }
            Err(e) => return FetchOutcome::Skip(SkipReason::Transport(e.to_string())),
        };

        let status = resp.status();
        if !status.is_success() {
            return FetchOutcome::Skip(SkipReason::Status(status.as_u16()));
        }

        match resp.text() {
            Ok(body) => FetchOutcome::Page(body),
            Err(e) => FetchOutcome::Skip(SkipReason::Transport(e.to_string())),
        }
    }
}
