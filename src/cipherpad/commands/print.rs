use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> CmdResult {
    if store.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No encrypted texts available"));
    }

    let listed = store
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect();

    CmdResult::default().with_listed_records(listed)
}
