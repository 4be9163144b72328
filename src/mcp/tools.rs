//! MCP tool definitions and dispatch for the notes store.
//!
//! Three tools are exposed: `save_note`, `list_notes` and `read_note`.
//! Arguments are decoded into typed structs before the store is touched, so
//! a malformed call is rejected as invalid params and never reaches disk.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{NotesError, Result};
use crate::store::NotesStore;
use crate::types::{NoteEntry, ReadOutcome};

/// A tool definition exposed by the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema describing the tool's input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
struct SaveNoteArgs {
    title: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ReadNoteArgs {
    title: String,
}

/// Returns the definitions of every tool this server handles.
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "save_note".to_string(),
            description: "Save a markdown note to ~/dev-notes/".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The note title (used as filename)"
                    },
                    "content": {
                        "type": "string",
                        "description": "The markdown content of the note"
                    }
                },
                "required": ["title", "content"]
            }),
        },
        ToolDefinition {
            name: "list_notes".to_string(),
            description: "List all saved notes in ~/dev-notes/".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDefinition {
            name: "read_note".to_string(),
            description: "Read a note from ~/dev-notes/ by title".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The note title to look up"
                    }
                },
                "required": ["title"]
            }),
        },
    ]
}

/// Dispatches a tool call to its handler.
///
/// Returns the MCP content payload. Not-found reads come back as an `Ok`
/// payload flagged with `isError`; filesystem failures are returned as `Err`.
pub async fn handle_tool_call(store: &NotesStore, tool_name: &str, args: Value) -> Result<Value> {
    debug!(tool = tool_name, "dispatching tool call");
    match tool_name {
        "save_note" => handle_save(store, parse_args(args)?).await,
        "list_notes" => handle_list(store).await,
        "read_note" => handle_read(store, parse_args(args)?).await,
        _ => Err(NotesError::UnknownTool {
            name: tool_name.to_string(),
        }),
    }
}

/// Decodes tool arguments, treating a missing argument object as empty.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| NotesError::InvalidParams {
        message: e.to_string(),
    })
}

fn text_result(text: impl Into<String>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }]
    })
}

fn error_result(text: impl Into<String>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }],
        "isError": true
    })
}

/// Formats one listing line: `- <title> (<filename>) — modified <timestamp>`.
pub fn format_note_line(note: &NoteEntry) -> String {
    format!(
        "- {} ({}) — modified {}",
        note.title,
        note.filename,
        note.last_modified_iso()
    )
}

async fn handle_save(store: &NotesStore, args: SaveNoteArgs) -> Result<Value> {
    let path = store.save_note(&args.title, &args.content).await?;
    Ok(text_result(format!(
        "Saved note \"{}\" to {}",
        args.title,
        path.display()
    )))
}

async fn handle_list(store: &NotesStore) -> Result<Value> {
    let notes = store.list_notes().await?;
    if notes.is_empty() {
        return Ok(text_result(format!(
            "No notes found in {}",
            store.dir().display()
        )));
    }

    let listing = notes
        .iter()
        .map(format_note_line)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text_result(listing))
}

async fn handle_read(store: &NotesStore, args: ReadNoteArgs) -> Result<Value> {
    match store.read_note(&args.title).await? {
        ReadOutcome::Found(content) => Ok(text_result(content)),
        ReadOutcome::NotFound { path } => Ok(error_result(format!(
            "Note \"{}\" not found (looked for {})",
            args.title,
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_tool_definitions_complete() {
        let tools = get_tool_definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["save_note", "list_notes", "read_note"]);
    }

    #[test]
    fn test_tool_definitions_have_schemas() {
        for tool in get_tool_definitions() {
            assert!(!tool.description.is_empty());
            assert_eq!(tool.input_schema["type"], "object");
        }
    }

    #[test]
    fn test_required_fields() {
        let tools = get_tool_definitions();
        assert_eq!(tools[0].input_schema["required"], json!(["title", "content"]));
        assert!(tools[1].input_schema.get("required").is_none());
        assert_eq!(tools[2].input_schema["required"], json!(["title"]));
    }

    #[test]
    fn test_parse_args_rejects_wrong_type() {
        let err = parse_args::<ReadNoteArgs>(json!({ "title": 42 })).unwrap_err();
        assert!(matches!(err, NotesError::InvalidParams { .. }));
    }

    #[test]
    fn test_parse_args_rejects_missing_field() {
        let err = parse_args::<SaveNoteArgs>(json!({ "title": "x" })).unwrap_err();
        assert!(matches!(err, NotesError::InvalidParams { .. }));
        let err = parse_args::<ReadNoteArgs>(Value::Null).unwrap_err();
        assert!(matches!(err, NotesError::InvalidParams { .. }));
    }

    #[test]
    fn test_format_note_line() {
        let note = NoteEntry {
            title: "project-ideas".to_string(),
            filename: "project-ideas.md".to_string(),
            last_modified: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };
        assert_eq!(
            format_note_line(&note),
            "- project-ideas (project-ideas.md) — modified 2026-01-02T03:04:05.000Z"
        );
    }

    #[test]
    fn test_error_result_is_flagged() {
        let value = error_result("nope");
        assert_eq!(value["isError"], true);
        assert_eq!(value["content"][0]["text"], "nope");
        assert!(text_result("ok").get("isError").is_none());
    }
}
