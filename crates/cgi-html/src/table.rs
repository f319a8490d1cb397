//! Shared card and table markup for status pages.

use cgi_core::EnvValue;

use crate::escape_html;

/// A renderable table cell value.
///
/// Presence and absence are both rendering variants; a row is never
/// dropped because its value is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Escaped text.
    Text(String),
    /// The visually distinct "not set" placeholder.
    NotSet,
}

impl FieldValue {
    /// Render the cell inner HTML.
    pub fn render(&self) -> String {
        match self {
            Self::Text(v) => escape_html(v),
            Self::NotSet => r#"<span class="value-not-set">N/A</span>"#.to_string(),
        }
    }
}

impl From<EnvValue> for FieldValue {
    fn from(value: EnvValue) -> Self {
        match value {
            EnvValue::Set(v) => Self::Text(v),
            EnvValue::NotSet => Self::NotSet,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Builder for the two-column `info-table` markup both pages share.
#[derive(Debug, Clone, Default)]
pub struct InfoTable {
    rows: Vec<Row>,
    placeholder: Option<String>,
}

#[derive(Debug, Clone)]
struct Row {
    label: String,
    value: FieldValue,
    value_class: Option<String>,
    raw_value: Option<String>,
}

impl InfoTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label/value row.
    pub fn row(mut self, label: &str, value: impl Into<FieldValue>) -> Self {
        self.rows.push(Row {
            label: label.to_string(),
            value: value.into(),
            value_class: None,
            raw_value: None,
        });
        self
    }

    /// Add a row whose value cell carries an extra CSS class.
    pub fn styled_row(mut self, label: &str, value: impl Into<FieldValue>, class: &str) -> Self {
        self.rows.push(Row {
            label: label.to_string(),
            value: value.into(),
            value_class: Some(class.to_string()),
            raw_value: None,
        });
        self
    }

    /// Add a row whose value is trusted markup (badges and the like).
    /// The caller owns the escaping of anything dynamic inside it.
    pub fn raw_row(mut self, label: &str, html: &str) -> Self {
        self.rows.push(Row {
            label: label.to_string(),
            value: FieldValue::NotSet,
            value_class: None,
            raw_value: Some(html.to_string()),
        });
        self
    }

    /// Text to render as a full-width row when the table has no rows.
    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    /// Render the table.
    pub fn render(&self) -> String {
        let mut html = String::from("<table class=\"info-table\">\n");

        if self.rows.is_empty() {
            let text = self.placeholder.as_deref().unwrap_or("No entries");
            html.push_str(&format!(
                "<tr><td colspan=\"2\" class=\"table-placeholder\">{}</td></tr>\n",
                escape_html(text)
            ));
        } else {
            for row in &self.rows {
                let value = match &row.raw_value {
                    Some(raw) => raw.clone(),
                    None => row.value.render(),
                };
                match &row.value_class {
                    Some(class) => html.push_str(&format!(
                        "<tr><td>{}</td><td class=\"{}\">{}</td></tr>\n",
                        escape_html(&row.label),
                        class,
                        value
                    )),
                    None => html.push_str(&format!(
                        "<tr><td>{}</td><td>{}</td></tr>\n",
                        escape_html(&row.label),
                        value
                    )),
                }
            }
        }

        html.push_str("</table>");
        html
    }
}

/// Card wrapper: title bar with an optional badge, then a body.
#[derive(Debug, Clone)]
pub struct Card {
    title: String,
    badge: Option<(String, String)>,
    body: String,
}

impl Card {
    /// Create a card with a title and body markup.
    pub fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            badge: None,
            body: body.into(),
        }
    }

    /// Add a badge to the title bar (`class` selects the color).
    pub fn with_badge(mut self, class: &str, text: &str) -> Self {
        self.badge = Some((class.to_string(), text.to_string()));
        self
    }

    /// Render the card.
    pub fn render(&self) -> String {
        let badge = match &self.badge {
            Some((class, text)) => format!(
                "\n<span class=\"badge {}\">{}</span>",
                class,
                escape_html(text)
            ),
            None => String::new(),
        };
        format!(
            "<div class=\"card\">\n<div class=\"card-header\">\n<span class=\"card-title\">{}</span>{}\n</div>\n{}\n</div>",
            escape_html(&self.title),
            badge,
            self.body
        )
    }
}
