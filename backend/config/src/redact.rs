//! Config redaction: produce safe-to-share config snapshots by masking
//! session cookies and tokens.

use serde_json::Value;

/// Keys whose values are always masked, compared case-insensitively.
static SENSITIVE_KEYS: &[&str] = &[
    "cookie",
    "authorization",
    "sessionid",
    "sessionid_ss",
    "sid_tt",
    "mstoken",
    "x-bogus",
    "_signature",
    "ttwid",
];

/// Redact a config JSON value, replacing sensitive fields with a short hint.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

/// Collect the dotted paths `redact` would mask (for diagnostics).
pub fn collect_redacted_paths(value: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_recursive(value, "", "", &mut paths);
    paths
}

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn mask(s: &str) -> String {
    if s.chars().count() > 8 {
        format!("{}***", s.chars().take(4).collect::<String>())
    } else {
        "***".to_string()
    }
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) if is_sensitive_key(key) && !s.is_empty() => Value::String(mask(s)),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_recursive(v, key)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), redact_recursive(v, k)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn collect_recursive(value: &Value, key: &str, path: &str, out: &mut Vec<String>) {
    match value {
        Value::String(s) if is_sensitive_key(key) && !s.is_empty() => out.push(path.to_string()),
        Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                collect_recursive(v, key, &format!("{path}[{i}]"), out);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                let child = if path.is_empty() {
                    k.clone()
                } else {
                    format!("{path}.{k}")
                };
                collect_recursive(v, k, &child, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn masks_cookie_header() {
        let v = json!({"web": {"headers": {"Cookie": "sessionid=0123456789abcdef"}}});
        let r = redact(&v);
        assert_eq!(r["web"]["headers"]["Cookie"], "sess***");
    }

    #[test]
    fn masks_signature_params_and_keeps_others() {
        let v = json!({"web": {"params": {"msToken": "tok", "aid": "1988"}}});
        let r = redact(&v);
        assert_eq!(r["web"]["params"]["msToken"], "***");
        assert_eq!(r["web"]["params"]["aid"], "1988");
    }

    #[test]
    fn collects_paths() {
        let v = json!({"web": {"headers": {"Authorization": "Bearer x"}}});
        assert_eq!(collect_redacted_paths(&v), vec!["web.headers.Authorization"]);
    }

    #[test]
    fn collects_paths_inside_arrays() {
        let v = json!({"web": {"headers": {"Cookie": ["sessionid=abc", "", "ttwid=def"]}}});
        assert_eq!(
            collect_redacted_paths(&v),
            vec!["web.headers.Cookie[0]", "web.headers.Cookie[2]"]
        );
        let r = redact(&v);
        assert_eq!(r["web"]["headers"]["Cookie"][0], "***");
        assert_eq!(r["web"]["headers"]["Cookie"][1], "");
    }
}
