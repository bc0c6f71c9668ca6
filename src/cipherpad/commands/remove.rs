use crate::commands::{CmdMessage, CmdResult};
use crate::filter::RemoveFilter;
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, filter: &RemoveFilter) -> CmdResult {
    let removed = store.remove_where(|record| filter.matches(record));
    debug!(%filter, removed, remaining = store.len(), "records removed");

    CmdResult {
        removed_count: removed,
        ..Default::default()
    }
    .with_message(CmdMessage::success(format!("Removed {} items", removed)))
}
