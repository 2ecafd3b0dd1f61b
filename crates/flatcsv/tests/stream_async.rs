#![cfg(feature = "async")]

use futures::StreamExt;
use futures::executor::block_on;
use futures::stream;

use flatcsv::{
    EncodeOptions, ParseOptions, Record, create_csv_async, create_csv_stream,
    create_csv_stream_async, parse_csv, parse_csv_from_lines_async, parse_csv_stream_async,
};

fn rec(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn async_chunks_match_the_sync_parse() {
    block_on(async {
        let doc = "name,age\nJo";
        let rest = "hn,30\nJane,25";
        let source = stream::iter([doc, rest]);
        let records: Vec<Record> = parse_csv_stream_async(source, &ParseOptions::default())
            .map(|r| r.expect("record"))
            .collect()
            .await;
        let whole = parse_csv(&format!("{doc}{rest}"), &ParseOptions::default()).expect("parse");
        assert_eq!(records, whole);
    });
}

#[test]
fn async_errors_terminate_the_stream() {
    block_on(async {
        let source = stream::iter(["a,b\n1,2\n", "3,4,5\n"]);
        let mut records = parse_csv_stream_async(source, &ParseOptions::default());
        assert!(records.next().await.expect("first item").is_ok());
        assert!(records.next().await.expect("second item").is_err());
        assert!(records.next().await.is_none());
    });
}

#[test]
fn async_lines_restore_embedded_newlines() {
    block_on(async {
        let options = ParseOptions {
            trim: false,
            ..ParseOptions::default()
        };
        let source = stream::iter(["a,b", "\"x", "y\",2"]);
        let records: Vec<Record> = parse_csv_from_lines_async(source, &options)
            .map(|r| r.expect("record"))
            .collect()
            .await;
        assert_eq!(records, vec![rec(&[("a", "x\ny"), ("b", "2")])]);
    });
}

#[test]
fn encode_chunks_are_self_terminated() {
    block_on(async {
        let records = vec![rec(&[("a", "1"), ("b", "2")]), rec(&[("a", "3"), ("b", "4")])];
        let columns = cols(&["a", "b"]);
        let chunks: Vec<String> =
            create_csv_stream_async(stream::iter(records), &columns, &EncodeOptions::default())
                .collect()
                .await;
        assert_eq!(chunks, vec!["a,b\n", "1,2\n", "3,4\n"]);
    });
}

#[test]
fn collected_async_text_keeps_the_trailing_terminator() {
    block_on(async {
        let records = vec![rec(&[("a", "1")])];
        let columns = cols(&["a"]);
        let text =
            create_csv_async(stream::iter(records), &columns, &EncodeOptions::default()).await;
        assert_eq!(text, "a\n1\n");
    });
}

#[test]
fn sync_and_async_encoders_agree() {
    block_on(async {
        let records = vec![
            rec(&[("a", "1"), ("b", "x,y")]),
            rec(&[("a", "2"), ("b", "z")]),
        ];
        let columns = cols(&["a", "b"]);
        let sync: Vec<String> =
            create_csv_stream(records.clone(), &columns, &EncodeOptions::default()).collect();
        let concurrent: Vec<String> =
            create_csv_stream_async(stream::iter(records), &columns, &EncodeOptions::default())
                .collect()
                .await;
        assert_eq!(sync, concurrent);
    });
}
