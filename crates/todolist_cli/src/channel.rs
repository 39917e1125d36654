//! Line-delimited JSON message channel for tool calls.
//!
//! Request: `{"tool": "<name>", "arguments": {...}}`, one per line.
//! Response: `{"ok": bool, "text": "..."}`, one per line, same order.

use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, BufRead, Write};
use todolist_tools::{ToolHost, ToolResponse};

#[derive(Debug, Deserialize)]
struct ToolRequest {
    tool: String,
    #[serde(default)]
    arguments: Value,
}

/// Serves requests from `input` until EOF. Returns the number answered.
pub fn serve<R: BufRead, W: Write>(
    host: &mut ToolHost,
    input: R,
    mut output: W,
) -> io::Result<usize> {
    info!("event=channel_open module=cli status=ok");
    let mut answered = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ToolRequest>(line) {
            Ok(request) => host.call(&request.tool, &request.arguments),
            Err(err) => ToolResponse {
                ok: false,
                text: format!("Error, malformed tool request: {err}"),
            },
        };

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
        answered += 1;
    }

    info!("event=channel_close module=cli status=ok answered={answered}");
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::serve;
    use todolist_tools::{ToolHost, ToolResponse};

    fn run(input: &str) -> (ToolHost, Vec<ToolResponse>) {
        let mut host = ToolHost::new();
        let mut output = Vec::new();
        let answered = serve(&mut host, input.as_bytes(), &mut output).expect("serve should succeed");

        let responses = String::from_utf8(output)
            .expect("output should be UTF-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("response should be JSON"))
            .collect::<Vec<ToolResponse>>();
        assert_eq!(responses.len(), answered);
        (host, responses)
    }

    #[test]
    fn answers_each_request_in_order_and_skips_blank_lines() {
        let input = concat!(
            r#"{"tool":"create-todoList","arguments":{"todoListName":"Groceries"}}"#,
            "\n\n",
            r#"{"tool":"create-todoItem-todoList","arguments":{"todoListId":1,"description":"milk"}}"#,
            "\n",
            r#"{"tool":"getAll-todoLists"}"#,
            "\n",
        );

        let (host, responses) = run(input);
        assert_eq!(responses.len(), 3);
        assert!(responses.iter().all(|response| response.ok));
        assert!(responses[2].text.contains("milk"));
        assert_eq!(host.service().list_all()[0].items.len(), 1);
    }

    #[test]
    fn malformed_line_gets_error_response_and_channel_continues() {
        let input = concat!(
            "not json\n",
            r#"{"tool":"get-a-todoList","arguments":{"todoListId":3}}"#,
            "\n",
        );

        let (_, responses) = run(input);
        assert_eq!(responses.len(), 2);
        assert!(!responses[0].ok);
        assert!(responses[0].text.contains("malformed tool request"));
        assert!(!responses[1].ok);
        assert!(responses[1].text.contains("todolist-does-not-exist"));
    }
}
