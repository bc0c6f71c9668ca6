use cipherpad::api::{CmdMessage, CmdResult, DisplayRecord, MessageLevel};
use colored::Colorize;

const LISTING_HEADER: &str = "ENCRYPTED TEXTS";

pub(super) fn print_result(result: &CmdResult) {
    print!("{}", render_records(&result.listed_records));
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Blank line, header, one numbered line per record, blank line.
/// Empty input renders nothing.
fn render_records(records: &[DisplayRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{}\n", LISTING_HEADER.bold());
    for dr in records {
        let index = format!("{}.", dr.index);
        out.push_str(&format!("{} {}\n", index.yellow(), dr.record.describe()));
    }
    out.push('\n');
    out
}
