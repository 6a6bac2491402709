//! Parsing for `ddev ... --json-output`.
//!
//! The tool prints a single log-style JSON object whose `raw` field holds the
//! actual payload:
//!
//! ```json
//! {"level":"info","msg":"...","raw":[{"name":"site","status":"running"}],"time":"..."}
//! ```
//!
//! Payloads are forwarded as-is. The tool owns the schema and writes empty
//! Go slices and maps as `null`, so nothing here interprets project fields.

use ddevdesk_core::ToolError;
use serde_json::Value;

/// Extract the project list. A missing or null `raw` means no projects.
pub fn parse_list_output(stdout: &str) -> Result<Value, ToolError> {
    let document: Value = serde_json::from_str(stdout.trim())?;
    Ok(raw_payload(document).unwrap_or_else(|_| Value::Array(Vec::new())))
}

/// Extract the describe payload: `raw` when present, otherwise the whole
/// document.
pub fn parse_describe_output(stdout: &str) -> Result<Value, ToolError> {
    let document: Value = serde_json::from_str(stdout.trim())?;
    Ok(raw_payload(document).unwrap_or_else(|document| document))
}

/// Take `raw` out of the envelope, or hand the document back when it has no
/// non-null `raw`.
fn raw_payload(document: Value) -> Result<Value, Value> {
    match document {
        Value::Object(mut map) => match map.remove("raw") {
            Some(raw) if !raw.is_null() => Ok(raw),
            Some(raw) => {
                map.insert("raw".to_string(), raw);
                Err(Value::Object(map))
            }
            None => Err(Value::Object(map)),
        },
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LIST_OUTPUT: &str = r#"{"level":"info","msg":"...","raw":[
        {"name":"test-project-1","type":"drupal","status":"running","approot":"/home/user/test-project-1","httpsurl":"https://test-project-1.ddev.site"},
        {"name":"test-project-2","type":"wordpress","status":"stopped","approot":"/home/user/test-project-2","mutagen_enabled":true}
    ],"time":"2024-01-01T00:00:00Z"}"#;

    #[test]
    fn test_list_extracts_raw_projects() {
        let projects = parse_list_output(LIST_OUTPUT).unwrap();
        let projects = projects.as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["name"], "test-project-1");
        assert_eq!(projects[1]["type"], "wordpress");
        assert_eq!(projects[1]["mutagen_enabled"], true);
    }

    #[test]
    fn test_list_without_raw_is_empty() {
        assert_eq!(
            parse_list_output(r#"{"level":"info","msg":"No projects"}"#).unwrap(),
            json!([])
        );
        assert_eq!(parse_list_output(r#"{"raw":null}"#).unwrap(), json!([]));
    }

    #[test]
    fn test_list_keeps_null_fields() {
        let projects = parse_list_output(
            r#"{"raw":[{"name":"p1","status":null,"type":"php","approot":"/srv/p1","docroot":null}]}"#,
        )
        .unwrap();
        assert_eq!(
            projects,
            json!([{"name":"p1","status":null,"type":"php","approot":"/srv/p1","docroot":null}])
        );
    }

    #[test]
    fn test_list_rejects_non_json() {
        let err = parse_list_output("ddev: command output is not json").unwrap_err();
        assert!(matches!(err, ToolError::InvalidJson(_)));
    }

    #[test]
    fn test_list_rejects_empty_output() {
        assert!(matches!(
            parse_list_output(""),
            Err(ToolError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_describe_prefers_raw() {
        let detail = parse_describe_output(
            r#"{"level":"info","msg":"table","raw":{"name":"site","php_version":"8.3","database":{"type":"mariadb","version":"10.11"}}}"#,
        )
        .unwrap();
        assert_eq!(
            detail,
            json!({"name":"site","php_version":"8.3","database":{"type":"mariadb","version":"10.11"}})
        );
    }

    #[test]
    fn test_describe_keeps_null_and_empty_collections() {
        let detail = parse_describe_output(
            r#"{"raw":{"name":"site","status":"stopped","urls":null,"services":null,"docroot":null,"extra_services":{},"hostnames":[]}}"#,
        )
        .unwrap();
        assert_eq!(detail["urls"], Value::Null);
        assert_eq!(detail["services"], Value::Null);
        assert_eq!(detail["extra_services"], json!({}));
        assert_eq!(detail["hostnames"], json!([]));
        assert_eq!(detail.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_describe_falls_back_to_whole_document() {
        let detail =
            parse_describe_output(r#"{"name":"site","status":"stopped","docroot":"web"}"#)
                .unwrap();
        assert_eq!(
            detail,
            json!({"name":"site","status":"stopped","docroot":"web"})
        );

        let detail = parse_describe_output(r#"{"raw":null,"name":"site"}"#).unwrap();
        assert_eq!(detail, json!({"raw":null,"name":"site"}));
    }
}
