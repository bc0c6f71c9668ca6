use crate::commands::{CmdMessage, CmdResult};
use crate::parser::AddRequest;
use crate::store::RecordStore;
use tracing::debug;

pub fn run<S: RecordStore>(store: &mut S, request: AddRequest) -> CmdResult {
    let kind = request.kind();
    let record = request.into_record();
    debug!(
        owner = record.owner(),
        cipher = %kind,
        length = record.text_length(),
        "record added"
    );

    let message = CmdMessage::success(format!(
        "Added {} cipher for owner '{}'",
        kind,
        record.owner()
    ));
    store.push(record);

    CmdResult::default().with_message(message)
}
