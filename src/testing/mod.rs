mod mock_property_store;
mod mock_template_source;

pub use mock_property_store::MockPropertyStore;
pub use mock_template_source::MockTemplateSource;

/// Minimal valid template used across tests.
pub const TEST_TEMPLATE: &str = r#"{
    "info": { "name": "Property objects" },
    "item": [{
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
    }]
}"#;
