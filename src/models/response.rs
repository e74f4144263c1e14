use serde_json::Value;

/// What a result container shows after a successful lookup: a heading over the
/// raw payload, pretty-printed with two-space indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub heading: String,
    pub body: String,
}

impl Rendering {
    pub fn new(heading: impl Into<String>, payload: &Value) -> Self {
        // Serializing a `Value` cannot fail: its map keys are always strings.
        let body = serde_json::to_string_pretty(payload).unwrap_or_default();
        Self {
            heading: heading.into(),
            body,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<h3>{}</h3><pre>{}</pre>",
            escape_html(&self.heading),
            escape_html(&self.body)
        )
    }

    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.heading, self.body)
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_keeps_payload_key_order() {
        let rendering = Rendering::new("Diagnostics Status", &json!({"version": "v1", "uptime": 3}));
        assert_eq!(rendering.body, "{\n  \"version\": \"v1\",\n  \"uptime\": 3\n}");
    }

    #[test]
    fn html_escapes_markup_in_payload() {
        let rendering = Rendering::new("Country Info for US", &json!({"name": "<b>"}));
        assert_eq!(
            rendering.to_html(),
            "<h3>Country Info for US</h3><pre>{\n  \"name\": \"&lt;b&gt;\"\n}</pre>"
        );
    }
}
