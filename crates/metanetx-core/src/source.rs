// Rust guideline compliant 2026-10-18

//! Remote sources of MetaNetX data.
//!
//! [`MetaboliteSource`] is the seam between the resolver and the network.
//! [`HttpSource`] talks to the live service; tests substitute in-memory
//! sources.

use crate::config::ResolverConfig;
use crate::{Error, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Access to the two MetaNetX query modes.
pub trait MetaboliteSource {
    /// Queries the id-mapper with `query_list` and returns the raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteLookupFailed`] on transport failure and
    /// [`Error::MalformedResponse`] if the body is not JSON.
    fn fetch_by_id(&self, query_list: &str) -> Result<Value>;

    /// Runs a name search for `query` and returns the raw JSON.
    ///
    /// # Errors
    ///
    /// Same as [`MetaboliteSource::fetch_by_id`].
    fn search_by_name(&self, query: &str) -> Result<Value>;
}

impl<S: MetaboliteSource + ?Sized> MetaboliteSource for &S {
    fn fetch_by_id(&self, query_list: &str) -> Result<Value> {
        (**self).fetch_by_id(query_list)
    }

    fn search_by_name(&self, query: &str) -> Result<Value> {
        (**self).search_by_name(query)
    }
}

impl<S: MetaboliteSource + ?Sized> MetaboliteSource for Box<S> {
    fn fetch_by_id(&self, query_list: &str) -> Result<Value> {
        (**self).fetch_by_id(query_list)
    }

    fn search_by_name(&self, query: &str) -> Result<Value> {
        (**self).search_by_name(query)
    }
}

/// Blocking HTTP client for the MetaNetX web service.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: HttpClient,
    config: ResolverConfig,
}

impl HttpSource {
    /// Creates a source from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            Error::InvalidConfig(format!("user_agent is not a valid header value: {}", e))
        })?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::InvalidConfig(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Returns the configuration this source was built with.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        debug!(url, ?params, "sending MetaNetX request");

        let response = self.client.get(url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "MetaNetX returned an error status");
            return Err(Error::RemoteLookupFailed(format!(
                "{} answered with HTTP {}",
                url, status
            )));
        }

        let body = response.text()?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl MetaboliteSource for HttpSource {
    fn fetch_by_id(&self, query_list: &str) -> Result<Value> {
        self.get_json(
            &self.config.id_mapper_url,
            &[
                ("query_index", "chem"),
                ("output_format", "JSON"),
                ("query_list", query_list),
            ],
        )
    }

    fn search_by_name(&self, query: &str) -> Result<Value> {
        self.get_json(
            &self.config.search_url,
            &[("format", "json"), ("db", "chem"), ("query", query)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status` and `body`.
    ///
    /// Returns the base URL and a handle yielding the request line received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut header = String::new();
            while reader.read_line(&mut header).unwrap() > 0 && header != "\r\n" {
                header.clear();
            }

            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();

            request_line.trim_end().to_string()
        });

        (base, handle)
    }

    fn local_source(base: &str) -> HttpSource {
        HttpSource::new(ResolverConfig {
            id_mapper_url: format!("{}/id-mapper", base),
            search_url: format!("{}/search", base),
            timeout_secs: Some(5),
            ..ResolverConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_id_mapper_request_parameters() {
        let (base, server) = serve_once("200 OK", r#"{"+vmhM:glu_L":{"mnx_id":"MNXM89557"}}"#);
        let source = local_source(&base);

        let value = source.fetch_by_id("+vmhM:glu_L").unwrap();

        assert_eq!(
            server.join().unwrap(),
            "GET /id-mapper?query_index=chem&output_format=JSON&query_list=%2BvmhM%3Aglu_L HTTP/1.1"
        );
        assert_eq!(value["+vmhM:glu_L"]["mnx_id"], "MNXM89557");
    }

    #[test]
    fn test_search_request_parameters() {
        let (base, server) = serve_once("200 OK", r#"[{"mnx_id":"MNXM41","desc":"D-glucose"}]"#);
        let source = local_source(&base);

        let value = source.search_by_name("+glucose 6").unwrap();

        assert_eq!(
            server.join().unwrap(),
            "GET /search?format=json&db=chem&query=%2Bglucose+6 HTTP/1.1"
        );
        assert_eq!(value[0]["mnx_id"], "MNXM41");
    }

    #[test]
    fn test_error_status_is_remote_failure() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let source = local_source(&base);

        let result = source.fetch_by_id("+MNXM1");

        server.join().unwrap();
        assert!(matches!(result, Err(Error::RemoteLookupFailed(_))));
    }

    #[test]
    fn test_empty_body_is_null() {
        let (base, server) = serve_once("200 OK", "");
        let source = local_source(&base);

        let value = source.search_by_name("+unobtainium").unwrap();

        server.join().unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_html_body_is_malformed() {
        let (base, server) = serve_once("200 OK", "<html><body>maintenance</body></html>");
        let source = local_source(&base);

        let result = source.fetch_by_id("+MNXM1");

        server.join().unwrap();
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_http_source_from_default_config() {
        let source = HttpSource::new(ResolverConfig::default()).unwrap();
        assert_eq!(source.config(), &ResolverConfig::default());
    }

    #[test]
    fn test_http_source_rejects_invalid_config() {
        let config = ResolverConfig {
            id_mapper_url: "not a url".to_string(),
            ..ResolverConfig::default()
        };
        assert!(matches!(HttpSource::new(config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_http_source_rejects_bad_user_agent() {
        let config = ResolverConfig {
            user_agent: "bad\nagent".to_string(),
            ..ResolverConfig::default()
        };
        assert!(HttpSource::new(config).is_err());
    }

    #[test]
    fn test_unreachable_host_is_remote_failure() {
        let config = ResolverConfig {
            id_mapper_url: "http://127.0.0.1:9/id-mapper".to_string(),
            timeout_secs: Some(2),
            ..ResolverConfig::default()
        };
        let source = HttpSource::new(config).unwrap();
        let result = source.fetch_by_id("+MNXM1");
        assert!(matches!(result, Err(Error::RemoteLookupFailed(_))));
    }
}
