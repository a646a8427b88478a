// src/bin/client.rs
// DOCUMENTATION: Command line client for the AI Maps service
// PURPOSE: Send a natural language query and render the answer in the terminal

use anyhow::Context;
use dotenv::dotenv;
use pulldown_cmark::{Event, Parser, Tag};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::env;
use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

const DEFAULT_API_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_PANEL_WIDTH: usize = 100;

#[derive(Debug, Deserialize)]
struct LocationResponse {
    response: String,
    #[serde(default)]
    locations: Vec<Map<String, Value>>,
}

#[derive(Debug, Error)]
enum ClientError {
    #[error("HTTP Status Error {code}")]
    Status { code: u16, body: Option<Value> },

    #[error("Request Error - {0}")]
    Request(String),

    #[error("{0}")]
    Other(String),
}

/// Name, address and rating shown for one location
#[derive(Debug, PartialEq)]
struct LocationSummary {
    name: String,
    address: String,
    rating: String,
}

impl LocationSummary {
    fn from_record(record: &Map<String, Value>) -> Self {
        let name = record
            .get("name")
            .map(display_value)
            .unwrap_or_else(|| "Unknown".to_string());

        let address = record
            .get("formatted_address")
            .or_else(|| record.get("vicinity"))
            .map(display_value)
            .unwrap_or_else(|| "Unknown address".to_string());

        let rating = record
            .get("rating")
            .map(display_value)
            .unwrap_or_else(|| "No rating".to_string());

        Self {
            name,
            address,
            rating,
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

struct AiMapsClient {
    base_url: String,
    client: Client,
}

impl AiMapsClient {
    fn new(base_url: String) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn ask_for_location(&self, query: &str) -> Result<LocationResponse, ClientError> {
        let url = format!("{}/ask-for-location", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let is_json = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.starts_with("application/json"))
                .unwrap_or(false);

            let body = if is_json {
                response.json::<Value>().await.ok()
            } else {
                None
            };

            return Err(ClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        response
            .json::<LocationResponse>()
            .await
            .map_err(|e| ClientError::Other(format!("Failed to parse response JSON: {}", e)))
    }
}

/// Render the model's Markdown answer as ANSI-styled plain text
fn render_markdown(text: &str) -> String {
    let mut out = String::new();
    let mut list_depth = 0usize;

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading(..)) | Event::Start(Tag::Strong) => out.push_str(BOLD),
            Event::Start(Tag::Emphasis) => out.push_str(ITALIC),
            Event::End(Tag::Strong) | Event::End(Tag::Emphasis) => out.push_str(RESET),
            Event::End(Tag::Heading(..)) => {
                out.push_str(RESET);
                out.push_str("\n\n");
            }
            Event::Start(Tag::List(_)) => list_depth += 1,
            Event::End(Tag::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
                out.push_str("• ");
            }
            Event::End(Tag::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::End(Tag::Paragraph) => {
                if list_depth == 0 {
                    out.push_str("\n\n");
                }
            }
            Event::End(Tag::CodeBlock(_)) => out.push('\n'),
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("───\n\n"),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Printed width of a string, ignoring ANSI escape sequences
fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            in_escape = c != 'm';
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }
    width
}

/// Split a word wider than `width` into chunks, keeping escape sequences intact
fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in word.chars() {
        if in_escape || c == '\x1b' {
            in_escape = c != 'm';
            current.push(c);
            continue;
        }
        if current_width == width {
            parts.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += 1;
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Greedy word wrap of one line to at most `width` visible columns
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        for piece in split_word(word, width.max(1)) {
            let piece_width = visible_width(&piece);
            if current_width > 0 && current_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&piece);
            current_width += piece_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Bordered panel, body wrapped to at most MAX_PANEL_WIDTH columns
fn render_panel(title: &str, body: &str, colour: &str) -> Vec<String> {
    let title_width = title.chars().count() + 2;
    let width = body
        .lines()
        .map(visible_width)
        .max()
        .unwrap_or(0)
        .min(MAX_PANEL_WIDTH)
        .max(title_width);

    let mut panel = vec![format!(
        "{}╭─ {}{}{} {}╮{}",
        colour,
        BOLD,
        title,
        colour,
        "─".repeat(width - title_width + 1),
        RESET
    )];
    for line in body.lines().flat_map(|line| wrap_line(line, width)) {
        let pad = width.saturating_sub(visible_width(&line));
        panel.push(format!(
            "{}│{} {}{}{} {}│{}",
            colour,
            RESET,
            line,
            RESET,
            " ".repeat(pad),
            colour,
            RESET
        ));
    }
    panel.push(format!("{}╰{}╯{}", colour, "─".repeat(width + 2), RESET));
    panel
}

fn print_panel(title: &str, body: &str, colour: &str) {
    for line in render_panel(title, body, colour) {
        println!("{}", line);
    }
}

fn report_error(err: &ClientError) {
    println!("{}{}Error:{} {}", BOLD, RED, RESET, err);
    if let ClientError::Status {
        body: Some(body), ..
    } = err
    {
        println!("{}", body);
    }
}

fn display_location_response(result: &Result<LocationResponse, ClientError>) {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            print_panel("AI Maps Error", &format!("Error: {}", err), RED);
            return;
        }
    };

    print_panel("AI Maps Response", &render_markdown(&response.response), GREEN);

    if response.locations.is_empty() {
        return;
    }

    println!("\n{}{}Location Details:{}", BOLD, BLUE, RESET);
    for (i, record) in response.locations.iter().enumerate() {
        let summary = LocationSummary::from_record(record);
        print_panel(
            &format!("Location {}", i + 1),
            &format!(
                "{}\nAddress: {}\nRating: {} ⭐",
                summary.name, summary.address, summary.rating
            ),
            BLUE,
        );
    }
}

fn read_query() -> anyhow::Result<String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    print!("{}{}Enter your location query:{} ", BOLD, YELLOW, RESET);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read query from stdin")?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    print_panel(
        "Welcome",
        "AI Maps Client\nAsk questions about locations in natural language.",
        YELLOW,
    );

    let query = read_query()?;
    println!("\n{}Processing query:{} {}\n", BOLD, RESET, query);

    let base_url = env::var("AI_MAPS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let result = match AiMapsClient::new(base_url) {
        Ok(client) => client.ask_for_location(&query).await,
        Err(e) => Err(e),
    };

    if let Err(err) = &result {
        report_error(err);
    }
    display_location_response(&result);

    Ok(())
}
