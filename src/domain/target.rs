//! Target domains parsed from `domains.yml`.

use url::Url;

use crate::domain::AppError;
use crate::domain::raw_url;

/// A protocol/host pair a collection is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDomain {
    pub protocol: String,
    pub host: String,
}

impl TargetDomain {
    /// Parse a URL such as `https://dev.example.co.uk` into its scheme and host.
    ///
    /// Path, query and port are discarded. The host keeps the case it was written in.
    pub fn parse(entry: &str) -> Result<Self, AppError> {
        let trimmed = entry.trim();
        let url = Url::parse(trimmed).map_err(|e| AppError::InvalidDomain {
            entry: entry.to_string(),
            reason: e.to_string(),
        })?;

        let missing_host =
            || AppError::InvalidDomain { entry: entry.to_string(), reason: "missing host".to_string() };
        if url.host_str().is_none_or(str::is_empty) {
            return Err(missing_host());
        }
        let host = raw_url::split_authority(trimmed)
            .map(|(authority, _)| raw_url::authority_host(authority))
            .filter(|host| !host.is_empty())
            .ok_or_else(missing_host)?;

        Ok(Self { protocol: url.scheme().to_string(), host: host.to_string() })
    }

    /// Parse the YAML contents of `domains.yml`: a sequence of URL strings.
    pub fn parse_list(content: &str) -> Result<Vec<Self>, AppError> {
        let entries: Vec<serde_yaml::Value> =
            serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
                what: "domains.yml".to_string(),
                details: format!("expected a list of URLs ({})", e),
            })?;

        entries
            .iter()
            .map(|entry| match entry {
                serde_yaml::Value::String(url) => Self::parse(url),
                other => Err(AppError::InvalidDomain {
                    entry: serde_yaml::to_string(other)
                        .map(|s| s.trim().to_string())
                        .unwrap_or_else(|_| format!("{:?}", other)),
                    reason: "expected a URL string".to_string(),
                }),
            })
            .collect()
    }
}
