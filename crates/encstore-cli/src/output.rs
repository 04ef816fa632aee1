use serde_json::Value;

/// Render a value for stdout: strings bare, everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn print_value(value: &Value) {
    println!("{}", render_value(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_render_bare() {
        assert_eq!(render_value(&json!("hello")), "hello");
    }

    #[test]
    fn test_structures_render_as_json() {
        assert_eq!(render_value(&json!({ "id": 1 })), r#"{"id":1}"#);
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(null)), "null");
    }
}
