use crate::judger::{ConnectOptions, Cookies};
use anyhow::anyhow;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{header, Client, Proxy, Url};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36 Edg/108.0.1462.15";

fn default_header() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    [
        ("Accept", header::HeaderValue::from_static("*/*")),
        ("Connection", header::HeaderValue::from_static("keep-alive")),
    ]
    .into_iter()
    .for_each(|(x, y)| {
        headers.insert(x, y);
    });
    headers
}

fn build_proxy(scheme: &str, url: &str) -> anyhow::Result<Proxy> {
    match scheme.trim_end_matches("://") {
        "http" => Ok(Proxy::http(url)?),
        "https" => Ok(Proxy::https(url)?),
        "all" => Ok(Proxy::all(url)?),
        other => Err(anyhow!("unsupported proxy scheme `{}`", other)),
    }
}

/// HTTP session bound to one judge: base url, proxies, timeout and a cookie
/// jar the caller can read out and push back between requests.
pub struct RemoteJudgeRequest {
    pub client: Client,
    pub base_url: String,
    jar: Arc<Jar>,
}

impl fmt::Debug for RemoteJudgeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteJudgeRequest")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RemoteJudgeRequest {
    pub fn new(base_url: &str, options: &ConnectOptions) -> anyhow::Result<Self> {
        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout())
            .cookie_provider(jar.clone())
            .default_headers(default_header());
        for (scheme, url) in &options.proxies {
            builder = builder.proxy(build_proxy(scheme, url)?);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            jar,
        })
    }

    pub fn get_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            return url.into();
        }

        let mut res = self.base_url.clone();

        if !res.ends_with('/') {
            res.push('/')
        }

        res.push_str(url.strip_prefix('/').unwrap_or(url));
        res
    }

    pub async fn get(&self, url: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.get_url(url)).send().await?)
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        data: &T,
    ) -> anyhow::Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.get_url(url))
            .form(data)
            .send()
            .await?)
    }

    pub fn get_cookies(&self) -> Cookies {
        let Ok(url) = Url::parse(&self.base_url) else {
            return Cookies::default();
        };

        let Some(cookie_header) = self.jar.cookies(&url) else {
            return Cookies::default();
        };

        cookie_header
            .to_str()
            .unwrap_or_default()
            .split("; ")
            .filter_map(|c| c.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn set_cookies(&self, cookies: &Cookies) {
        let Ok(url) = Url::parse(&self.base_url) else {
            return;
        };
        for (k, v) in cookies {
            self.jar.add_cookie_str(&format!("{}={}", k, v), &url);
        }
    }

    /// Reachability probe: the home page answers with a 2xx.
    pub async fn check_status(&self) -> anyhow::Result<bool> {
        let resp = self.get("").await?;
        Ok(resp.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(base_url: &str) -> RemoteJudgeRequest {
        RemoteJudgeRequest::new(base_url, &ConnectOptions::default()).unwrap()
    }

    #[test]
    fn test_get_url() {
        let req = request("https://acm.hdu.edu.cn");
        assert_eq!(
            req.get_url("/showproblem.php?pid=1000"),
            "https://acm.hdu.edu.cn/showproblem.php?pid=1000"
        );
        assert_eq!(req.get_url("status.php"), "https://acm.hdu.edu.cn/status.php");
        assert_eq!(req.get_url(""), "https://acm.hdu.edu.cn/");
        assert_eq!(req.get_url("http://poj.org/"), "http://poj.org/");
    }

    #[test]
    fn test_cookies_round_trip() {
        let req = request("https://acm.hdu.edu.cn/");
        assert!(req.get_cookies().is_empty());

        let cookies: Cookies = [("PHPSESSID", "abc123"), ("exesubmitlang", "0")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        req.set_cookies(&cookies);
        assert_eq!(req.get_cookies(), cookies);
    }

    #[test]
    fn test_proxy_schemes() {
        let mut options = ConnectOptions::default();
        options
            .proxies
            .insert("https".into(), "http://127.0.0.1:1080".into());
        options
            .proxies
            .insert("http://".into(), "http://127.0.0.1:1080".into());
        assert!(RemoteJudgeRequest::new("http://poj.org/", &options).is_ok());

        options
            .proxies
            .insert("ftp".into(), "http://127.0.0.1:1080".into());
        assert!(RemoteJudgeRequest::new("http://poj.org/", &options).is_err());
    }
}
