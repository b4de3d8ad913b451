//! Terminal output: table/json/yaml rendering plus the agent-mode
//! response envelope.
//!
//! Every command renders one serializable payload. Human mode picks a
//! format (table by default); agent mode wraps the payload in
//! `{ok, data, error, meta}` so callers can parse results and failures
//! uniformly.

use serde::Serialize;
use serde_json::Value;
use vectl_core::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Metadata attached to envelope responses. None fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Meta {
    pub fn command(name: &str) -> Self {
        Self {
            command: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    fn is_empty(&self) -> bool {
        self.command.is_none() && self.duration_ms.is_none() && self.count.is_none()
    }
}

#[derive(Debug, Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    meta: Meta,
}

pub struct OutputContext {
    pub format: OutputFormat,
    pub agent: bool,
}

impl OutputContext {
    /// Render a successful payload to stdout.
    pub fn emit<T: Serialize>(&self, data: &T, meta: Meta) -> anyhow::Result<()> {
        if self.agent {
            let envelope = Envelope {
                ok: true,
                data: Some(data),
                error: None,
                meta,
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(());
        }
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
            OutputFormat::Table => {
                let value = serde_json::to_value(data)?;
                println!("{}", render_table(&value));
            }
        }
        Ok(())
    }

    /// Render a failure. Agent mode gets a classified envelope on stdout;
    /// human mode gets a plain message on stderr.
    pub fn emit_error(&self, code: ErrorCode, message: &str, meta: Meta) {
        if self.agent {
            let envelope = Envelope::<Value> {
                ok: false,
                data: None,
                error: Some(ErrorInfo {
                    code: code.as_str(),
                    message: message.to_string(),
                    hint: code.hint(),
                }),
                meta,
            };
            match serde_json::to_string_pretty(&envelope) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("Error: {message} (envelope: {e})"),
            }
        } else {
            eprintln!("Error: {message}");
            if let Some(hint) = code.hint() {
                eprintln!("Hint: {hint}");
            }
        }
    }
}

/// Plain-text table rendering for arbitrary JSON payloads.
///
/// Lists of objects become one row per item with columns from the first
/// item's keys; plain objects become a Property/Value listing; strings
/// pass through untouched.
pub fn render_table(value: &Value) -> String {
    match value {
        Value::Null => "No data".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => render_list_table(items),
        Value::Object(map) => {
            let rows: Vec<[String; 2]> = map
                .iter()
                .map(|(k, v)| [k.clone(), cell_text(v)])
                .collect();
            render_columns(&["Property".to_string(), "Value".to_string()], &rows)
        }
        other => other.to_string(),
    }
}

fn render_list_table(items: &[Value]) -> String {
    if items.is_empty() {
        return "No data found".to_string();
    }
    match &items[0] {
        Value::Object(first) => {
            let keys: Vec<String> = first.keys().cloned().collect();
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| {
                    keys.iter()
                        .map(|k| item.get(k).map(cell_text).unwrap_or_default())
                        .collect()
                })
                .collect();
            render_rows(&keys, &rows)
        }
        _ => {
            let rows: Vec<[String; 1]> = items.iter().map(|v| [cell_text(v)]).collect();
            render_columns(&["Name".to_string()], &rows)
        }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

fn render_columns<const N: usize>(headers: &[String; N], rows: &[[String; N]]) -> String {
    let header_vec = headers.to_vec();
    let row_vecs: Vec<Vec<String>> = rows.iter().map(|r| r.to_vec()).collect();
    render_rows(&header_vec, &row_vecs)
}

fn render_rows(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in rows {
        write_row(&mut out, row, &widths);
    }
    out.pop(); // trailing newline; println adds one
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}", width = widths[i]));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
