use url::Url;

/// Read the response body as text.
/// In `test-mode`, with `XQ_RECORD=1`, the body is also saved as a fixture.
pub(crate) async fn get_text(resp: reqwest::Response, url: &Url) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    record(url, &text);
    Ok(text)
}

/// Blocking twin of [`get_text`].
pub(crate) fn get_text_blocking(
    resp: reqwest::blocking::Response,
    url: &Url,
) -> Result<String, reqwest::Error> {
    let text = resp.text()?;
    record(url, &text);
    Ok(text)
}

#[cfg(feature = "test-mode")]
fn record(url: &Url, text: &str) {
    if std::env::var("XQ_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    match fixtures::save(url, text) {
        Ok(path) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "xueqiu", path = %path.display(), "fixture recorded");
            #[cfg(not(feature = "tracing"))]
            let _ = path;
        }
        Err(e) => eprintln!("XQ_RECORD: failed to write fixture for {url}: {e}"),
    }
}

#[cfg(not(feature = "test-mode"))]
fn record(_url: &Url, _text: &str) {}

/// Response bodies persisted as `<XQ_FIXDIR>/<host>/<path>.json`.
/// `XQ_FIXDIR` defaults to `tests/fixtures` in the crate root.
#[cfg(feature = "test-mode")]
pub mod fixtures {
    use std::io;
    use std::path::PathBuf;
    use url::Url;

    pub fn dir() -> PathBuf {
        std::env::var_os("XQ_FIXDIR").map_or_else(
            || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
            PathBuf::from,
        )
    }

    /// `https://stock.xueqiu.com/v5/stock/quote.json` becomes `v5_stock_quote`.
    pub fn name(url: &Url) -> String {
        let path = url.path().trim_matches('/');
        let path = path.strip_suffix(".json").unwrap_or(path);
        let name: String = path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if name.is_empty() { "root".into() } else { name }
    }

    pub fn save(url: &Url, body: &str) -> io::Result<PathBuf> {
        let host = url.host_str().unwrap_or("local");
        let dir = dir().join(host);
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{}.json", name(url)));
        std::fs::write(&path, body)?;
        Ok(path)
    }
}
