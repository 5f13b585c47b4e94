use stash_core::SimTick;
use stash_sorting::{messages, FeedbackEvent, TransferDirection};
use stash_testkit::{EventRecord, JsonlSink};

#[test]
fn feedback_event_stream_can_be_written() {
    let path = std::env::temp_dir().join(format!("stash_smoke_{}.jsonl", std::process::id()));
    let mut sink = JsonlSink::create(&path).expect("can create temp log");
    let tick = SimTick::ZERO.advance(1);
    let record = EventRecord {
        tick,
        kind: "deposit",
        payload: FeedbackEvent::Message(messages::transfer_begin(TransferDirection::Deposit)),
    };
    sink.write(&record).expect("can write event");
    sink.flush().expect("can flush");
    assert_eq!(sink.lines(), 1);

    let written = std::fs::read_to_string(&path).expect("log readable");
    let line: serde_json::Value = serde_json::from_str(written.trim()).expect("valid json");
    assert_eq!(line["tick"], 1);
    assert_eq!(line["payload"]["kind"], "message");
    let _ = std::fs::remove_file(&path);
}
