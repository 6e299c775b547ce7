//! Minimal page shell. Templates are out of scope; a page is its template name, a title
//! and the view model embedded as JSON for client-side templates to pick up.

use super::flash::Flashes;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

pub struct Page {
    template: &'static str,
    title: &'static str,
    model: Value,
}

impl Page {
    pub fn new(template: &'static str, title: &'static str) -> Self {
        Page {
            template,
            title,
            model: Value::Object(Default::default()),
        }
    }

    /// Adds one entry to the view model. Unserializable values become `null`.
    pub fn with(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut self.model {
            map.insert(key.to_string(), value);
        }
        self
    }

    pub fn with_flash(self, flashes: Flashes) -> Self {
        self.with("success", flashes.success).with("error", flashes.error)
    }

    pub fn render(&self) -> String {
        let flash = |kind: &str| -> String {
            match self.model.get(kind).and_then(Value::as_str) {
                Some(text) if !text.is_empty() => {
                    format!("<div class=\"flash {kind}\">{}</div>\n", escape_html(text))
                }
                _ => String::new(),
            }
        };
        // "</" would close the script element early.
        let model = self.model.to_string().replace("</", "<\\/");
        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body data-layout=\"admin\" data-template=\"{template}\">\n{success}{error}\
             <script type=\"application/json\" id=\"view-model\">{model}</script>\n</body>\n</html>\n",
            title = escape_html(self.title),
            template = self.template,
            success = flash("success"),
            error = flash("error"),
            model = model,
        )
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_cannot_break_out_of_script() {
        let html = Page::new("pages/products/preview", "Preview")
            .with("data", serde_json::json!({ "pname": "</script><b>x</b>" }))
            .render();
        assert!(!html.contains("</script><b>"));
        assert!(html.contains(r#"data-template="pages/products/preview""#));
    }

    #[test]
    fn flashes_are_rendered_escaped() {
        let html = Page::new("pages/dashboard", "Admin")
            .with_flash(Flashes {
                success: String::new(),
                error: "a < b".into(),
            })
            .render();
        assert!(html.contains(r#"<div class="flash error">a &lt; b</div>"#));
        assert!(!html.contains("flash success"));
    }
}
