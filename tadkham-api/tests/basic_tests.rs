//! Basic tests for tadkham-api

use std::io::Write;
use tadkham_api::*;

const THAI_DICT: &str = "คำ\nตัด\nตัดคำ\nไหม\n";

fn dictionary_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn test_input_text_processing() {
    let input = Input::Text("ตัดคำ".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "ตัดคำ");
}

#[test]
fn test_input_bytes_processing() {
    let input = Input::Bytes("ไหม".as_bytes().to_vec());
    assert_eq!(input.read_text().unwrap(), "ไหม");

    let invalid = Input::Bytes(vec![0xff]);
    assert!(matches!(invalid.read_text(), Err(ApiError::Encoding(_))));
}

#[test]
fn test_segment_text_convenience() {
    let file = dictionary_file(THAI_DICT);
    let segments = segment_text("ตัดคำไหม", file.path()).unwrap();
    assert_eq!(segments, vec!["ตัดคำ", "ไหม"]);
}

#[test]
fn test_missing_dictionary_is_load_error() {
    let result = WordSegmenter::new("/nonexistent/words.txt");
    match result {
        Err(ApiError::DictionaryLoad { source_name, .. }) => {
            assert_eq!(source_name, "/nonexistent/words.txt");
        }
        other => panic!("Expected DictionaryLoad error, got {other:?}"),
    }
}

#[test]
fn test_unsorted_dictionary_is_distinct_from_load_error() {
    match WordSegmenter::from_text("b\na") {
        Err(ApiError::UnsortedDictionary { index, word }) => {
            assert_eq!(index, 1);
            assert_eq!(word, "a");
        }
        other => panic!("Expected UnsortedDictionary error, got {other:?}"),
    }
}

#[test]
fn test_unsorted_dictionary_rejected_unless_sorted() {
    let unsorted = "ไหม\nคำ\n";
    assert!(matches!(
        WordSegmenter::from_text(unsorted),
        Err(ApiError::UnsortedDictionary { .. })
    ));

    let config = Config::builder()
        .dictionary_text(unsorted)
        .sort(true)
        .build()
        .unwrap();
    let segmenter = WordSegmenter::with_config(config).unwrap();
    assert_eq!(segmenter.dictionary_len(), 2);
    assert_eq!(segmenter.segment("คำไหม"), vec!["คำ", "ไหม"]);
}

#[test]
fn test_process_tokens_and_metadata() {
    let segmenter = WordSegmenter::from_text(THAI_DICT).unwrap();
    let output = segment_with(&segmenter, "ตัดคำ?ไหม").unwrap();

    assert_eq!(output.segments(), vec!["ตัดคำ", "?", "ไหม"]);

    let unknown = &output.tokens[1];
    assert_eq!(unknown.kind, "unknown");
    assert_eq!(unknown.char_offset, 5);
    assert_eq!(unknown.char_len, 1);
    assert_eq!(unknown.byte_offset, 15);
    assert_eq!(unknown.byte_len, 1);
    assert!(output.tokens[2].is_word());

    assert_eq!(output.metadata.total_chars, 9);
    assert_eq!(output.metadata.total_bytes, 25);
    assert_eq!(output.metadata.word_count, 3);
    assert_eq!(output.metadata.unknown_count, 1);
    assert_eq!(output.metadata.mode_used, "sequential");
}

#[test]
fn test_process_batch_in_parallel() {
    let config = Config::builder()
        .dictionary_text(THAI_DICT)
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(2))
        .build()
        .unwrap();
    let segmenter = WordSegmenter::with_config(config).unwrap();

    let documents = vec!["ตัดคำ".to_string(), "ไหมคำ".to_string(), String::new()];
    let outputs = segmenter.process_batch(&documents).unwrap();

    assert_eq!(outputs.len(), 3);
    assert_eq!(outputs[0].segments(), vec!["ตัดคำ"]);
    assert_eq!(outputs[1].segments(), vec!["ไหม", "คำ"]);
    assert!(outputs[2].tokens.is_empty());
}

#[test]
fn test_missing_input_file_is_io_error() {
    let segmenter = WordSegmenter::from_text(THAI_DICT).unwrap();
    let result = segmenter.process(Input::from_file("/nonexistent/input.txt"));
    assert!(matches!(result, Err(ApiError::Io(msg)) if msg.contains("/nonexistent/input.txt")));
}

#[test]
fn test_reader_input() {
    let segmenter = WordSegmenter::from_text(THAI_DICT).unwrap();
    let reader = std::io::Cursor::new("ตัดคำไหม".as_bytes().to_vec());
    let output = segmenter.process(Input::from_reader(reader)).unwrap();
    assert_eq!(output.segments(), vec!["ตัดคำ", "ไหม"]);
}

#[test]
fn test_process_file_input() {
    let segmenter = WordSegmenter::from_text(THAI_DICT).unwrap();
    let input = dictionary_file("คำตัด");
    let output = segmenter.process(Input::from_file(input.path())).unwrap();
    assert_eq!(output.segments(), vec!["คำ", "ตัด"]);
}

#[test]
#[cfg(feature = "serde")]
fn test_dto_serialization() {
    let token = TokenDTO {
        text: "คำ".to_string(),
        char_offset: 0,
        char_len: 2,
        byte_offset: 0,
        byte_len: 6,
        kind: "word".to_string(),
    };

    let json = serde_json::to_string(&token).unwrap();
    let decoded: TokenDTO = serde_json::from_str(&json).unwrap();
    assert_eq!(token, decoded);

    let segmenter = WordSegmenter::from_text(THAI_DICT).unwrap();
    let output = segmenter.process_text("ตัดคำ").unwrap();
    let json = output.to_json().unwrap();
    assert!(json.contains("\"kind\": \"word\""));
    assert!(json.contains("\"mode_used\": \"sequential\""));
}
