//! Postman collection template.
//!
//! A template is a collection document whose last `item` is the prototype
//! request cloned once per property object. The shape is checked once, when the
//! template is loaded, so the builder can patch clones without re-validating.

use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::domain::raw_url;

/// JSON pointers into the prototype request.
pub(crate) mod pointer {
    pub const URL_RAW: &str = "/request/url/raw";
    pub const URL_PROTOCOL: &str = "/request/url/protocol";
    pub const URL_HOST: &str = "/request/url/host";
    pub const BODY: &str = "/request/body";
}

/// Path and query carried over from the prototype URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTail {
    pub path: String,
    pub query: Option<String>,
}

impl UrlTail {
    /// Rebuild a raw URL for the given protocol and host.
    pub fn with_origin(&self, protocol: &str, host: &str) -> String {
        match &self.query {
            Some(query) => format!("{}://{}{}?{}", protocol, host, self.path, query),
            None => format!("{}://{}{}", protocol, host, self.path),
        }
    }
}

/// A validated collection template split into its base document and prototype item.
#[derive(Debug, Clone)]
pub struct CollectionTemplate {
    base: Value,
    prototype: Value,
    url_tail: UrlTail,
}

impl CollectionTemplate {
    /// Parse and validate a template from JSON text.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let document: Value = serde_json::from_str(content).map_err(|e| AppError::ParseError {
            what: "collection template".to_string(),
            details: e.to_string(),
        })?;
        Self::from_document(document)
    }

    /// Validate a template document and detach its prototype item.
    pub fn from_document(mut document: Value) -> Result<Self, AppError> {
        let root = document
            .as_object_mut()
            .ok_or_else(|| AppError::template("top-level value must be an object"))?;

        if !root.get("info").is_some_and(Value::is_object) {
            return Err(AppError::template("missing 'info' object"));
        }

        let prototype = root
            .get_mut("item")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| AppError::template("missing 'item' list"))?
            .pop()
            .ok_or_else(|| AppError::template("'item' list is empty; a prototype request is required"))?;

        if !prototype.is_object() {
            return Err(AppError::template("prototype item must be an object"));
        }

        let raw = prototype
            .pointer(pointer::URL_RAW)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::template("prototype is missing 'request.url.raw'"))?;
        let url_tail = parse_url_tail(raw)?;

        match prototype.pointer(pointer::URL_HOST).and_then(Value::as_array) {
            Some(host) if host.len() == 1 && host[0].is_string() => {}
            Some(host) => {
                return Err(AppError::template(format!(
                    "'request.url.host' must hold exactly one host string, found {} element(s)",
                    host.len()
                )));
            }
            None => return Err(AppError::template("prototype is missing 'request.url.host' list")),
        }

        if !prototype.pointer(pointer::BODY).is_some_and(Value::is_object) {
            return Err(AppError::template("prototype is missing 'request.body' object"));
        }

        Ok(Self { base: document, prototype, url_tail })
    }

    /// The template document with the prototype item removed.
    pub fn base(&self) -> &Value {
        &self.base
    }

    /// The prototype request item.
    pub fn prototype(&self) -> &Value {
        &self.prototype
    }

    /// Path and query of the prototype's `request.url.raw`.
    pub fn url_tail(&self) -> &UrlTail {
        &self.url_tail
    }
}

fn parse_url_tail(raw: &str) -> Result<UrlTail, AppError> {
    let invalid = |reason: String| {
        AppError::template(format!("'request.url.raw' is not a valid URL ('{}'): {}", raw, reason))
    };
    let trimmed = raw.trim();
    Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    let (_, tail) =
        raw_url::split_authority(trimmed).ok_or_else(|| invalid("missing scheme".to_string()))?;
    let (path, query) = raw_url::split_tail(tail);

    Ok(UrlTail { path: path.to_string(), query: query.map(str::to_string) })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn prototype() -> Value {
        json!({
            "name": "Add property",
            "request": {
                "method": "POST",
                "body": { "mode": "raw", "raw": "" },
                "url": {
                    "raw": "http://proto/api/v1/add-property?_format=json",
                    "protocol": "http",
                    "host": ["proto"],
                    "path": ["api", "v1", "add-property"]
                }
            }
        })
    }

    #[test]
    fn detaches_last_item_as_prototype() {
        let doc = json!({
            "info": { "name": "template" },
            "item": [{ "name": "kept" }, prototype()]
        });

        let template = CollectionTemplate::from_document(doc).unwrap();

        assert_eq!(template.base()["item"], json!([{ "name": "kept" }]));
        assert_eq!(template.prototype()["name"], "Add property");
    }

    #[test]
    fn extracts_path_and_query() {
        let doc = json!({ "info": { "name": "t" }, "item": [prototype()] });
        let template = CollectionTemplate::from_document(doc).unwrap();

        assert_eq!(template.url_tail().path, "/api/v1/add-property");
        assert_eq!(template.url_tail().query.as_deref(), Some("_format=json"));
        assert_eq!(
            template.url_tail().with_origin("https", "example.com"),
            "https://example.com/api/v1/add-property?_format=json"
        );
    }

    #[test]
    fn path_and_query_are_copied_as_written() {
        let tail = parse_url_tail("http://proto/api/{{version}}/add property?_format=json&t={{token}}")
            .unwrap();
        assert_eq!(
            tail.with_origin("https", "example.com"),
            "https://example.com/api/{{version}}/add property?_format=json&t={{token}}"
        );

        let tail = parse_url_tail("http://proto/api/v1/../v2/add-property?_format=json").unwrap();
        assert_eq!(tail.path, "/api/v1/../v2/add-property");
    }

    #[test]
    fn fragment_and_port_are_not_carried_over() {
        let tail = parse_url_tail("http://proto:8080/api?_format=json#section").unwrap();
        assert_eq!(tail, UrlTail { path: "/api".into(), query: Some("_format=json".into()) });
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let tail = UrlTail { path: "/api".into(), query: None };
        assert_eq!(tail.with_origin("http", "localhost"), "http://localhost/api");
    }

    #[test]
    fn rejects_empty_item_list() {
        let doc = json!({ "info": { "name": "t" }, "item": [] });
        let err = CollectionTemplate::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("'item' list is empty"));
    }

    #[test]
    fn rejects_missing_item_list() {
        let doc = json!({ "info": { "name": "t" } });
        assert!(matches!(
            CollectionTemplate::from_document(doc),
            Err(AppError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn rejects_multi_segment_host() {
        let mut item = prototype();
        item["request"]["url"]["host"] = json!(["dev", "example", "com"]);
        let doc = json!({ "info": { "name": "t" }, "item": [item] });

        let err = CollectionTemplate::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("found 3 element(s)"));
    }

    #[test]
    fn rejects_unparseable_raw_url() {
        let mut item = prototype();
        item["request"]["url"]["raw"] = json!("{{base_url}}/api/v1/add-property");
        let doc = json!({ "info": { "name": "t" }, "item": [item] });

        assert!(matches!(
            CollectionTemplate::from_document(doc),
            Err(AppError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn rejects_missing_body() {
        let mut item = prototype();
        item["request"].as_object_mut().unwrap().remove("body");
        let doc = json!({ "info": { "name": "t" }, "item": [item] });

        let err = CollectionTemplate::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("request.body"));
    }

    #[test]
    fn parse_reports_invalid_json() {
        let err = CollectionTemplate::parse("{ not json").unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }
}
