//! Cookie handling and the rule deciding which hosts get to see it.

use std::collections::BTreeMap;
use url::Url;

/// Credentials attached to Xueqiu-owned requests.
///
/// A raw cookie string takes precedence over a cookie map; the map is rendered
/// into a single `Cookie` header in key order.
#[derive(Clone, Debug, Default)]
pub(crate) struct Credentials {
    cookie: Option<String>,
    cookies: Option<BTreeMap<String, String>>,
    auth_hosts: Vec<(String, Option<u16>)>,
}

impl Credentials {
    pub(crate) fn new(
        cookie: Option<String>,
        cookies: Option<BTreeMap<String, String>>,
        auth_bases: &[&Url],
    ) -> Self {
        let auth_hosts = auth_bases
            .iter()
            .filter_map(|u| {
                let host = u.host_str()?.trim().to_ascii_lowercase();
                (!host.is_empty()).then(|| (host, u.port_or_known_default()))
            })
            .collect();
        Self {
            cookie: clean_cookie(cookie.as_deref()),
            cookies: cookies.filter(|m| !m.is_empty()),
            auth_hosts,
        }
    }

    pub(crate) fn has_auth(&self) -> bool {
        self.cookie.is_some() || self.cookies.is_some()
    }

    pub(crate) fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    /// The `Cookie` header value to send to `url`, if any.
    pub(crate) fn header_for(&self, url: &Url) -> Option<String> {
        if !self.should_send(url) {
            return None;
        }
        if let Some(c) = &self.cookie {
            return Some(c.clone());
        }
        self.cookies.as_ref().map(render_cookie_map)
    }

    fn should_send(&self, url: &Url) -> bool {
        let host = url
            .host_str()
            .map(|h| h.trim().to_ascii_lowercase())
            .unwrap_or_default();
        if host.is_empty() {
            return true;
        }
        let port = url.port_or_known_default();
        self.auth_hosts.iter().any(|(h, p)| *h == host && *p == port) || is_xueqiu_host(&host)
    }
}

/// Trim a cookie string; blank means absent.
pub fn clean_cookie(cookie: Option<&str>) -> Option<String> {
    let trimmed = cookie?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `xueqiu.com` and any of its subdomains.
pub fn is_xueqiu_host(host: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    host == "xueqiu.com" || host.ends_with(".xueqiu.com")
}

fn render_cookie_map(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}
