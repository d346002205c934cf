/// End-to-end integration tests for ping extraction
///
/// These tests verify complete workflows: text lines → binary records → decoded values
mod common;

use common::{PingLineBuilder, decode_records, input_of, run_extract};
use ping_extract::analysis::{dump_records, read_record_file};
use ping_extract::{PingRecord, RECORD_SIZE, RecordWriter, Schema, convert};

#[test]
fn test_e2e_reference_line() {
    let input = r#"{"dst_addr":"193.0.14.1","result":[{"rtt":12.34},{"rtt":11.9},{"rtt":13.0}],"prb_id":1234}"#;
    let (bytes, stats) = run_extract(input, Schema::Atlas);

    assert_eq!(bytes.len(), RECORD_SIZE);
    assert_eq!(stats.records, 1);

    let records = decode_records(&bytes);
    assert_eq!(
        records[0],
        PingRecord { prb_id: 1234, dst_addr: [193, 0, 14, 1], rtt: [12.34, 11.9, 13.0] }
    );
}

#[test]
fn test_e2e_every_valid_line_becomes_one_record() {
    for schema in [Schema::Atlas, Schema::Compact] {
        let lines: Vec<String> = (0..50u32)
            .map(|i| {
                let first = format!("{}.5", i);
                let third = format!("{}", i * 2);
                PingLineBuilder::new()
                    .dst_addr(&format!("10.{}.{}.{}", i % 256, (i * 7) % 256, 255 - i))
                    .rtts([first.as_str(), "0.25", third.as_str()])
                    .prb_id(&format!("{}", 1000 + i))
                    .to_line(schema)
            })
            .collect();

        let (bytes, stats) = run_extract(&input_of(&lines), schema);
        assert_eq!(stats.records, 50, "schema {:?}", schema);

        for (i, record) in decode_records(&bytes).iter().enumerate() {
            let i = i as u32;
            assert_eq!(record.prb_id, 1000 + i);
            let expected = [10, (i % 256) as u8, ((i * 7) % 256) as u8, (255 - i) as u8];
            assert_eq!(record.dst_addr, expected);
            assert_eq!(record.rtt, [i as f32 + 0.5, 0.25, (i * 2) as f32]);
        }
    }
}

#[test]
fn test_e2e_records_keep_input_order() {
    let lines = vec![
        PingLineBuilder::new().prb_id("3").to_atlas(),
        PingLineBuilder::new().prb_id("1").dst_addr("2001:db8::1").to_atlas(),
        PingLineBuilder::new().prb_id("2").to_atlas(),
        PingLineBuilder::new().prb_id("1").to_atlas(),
    ];
    let (bytes, _) = run_extract(&input_of(&lines), Schema::Atlas);

    let ids: Vec<u32> = decode_records(&bytes).iter().map(|r| r.prb_id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_e2e_schemas_are_not_interchangeable() {
    let atlas = PingLineBuilder::new().to_atlas();
    let compact = PingLineBuilder::new().to_compact();

    let (bytes, stats) = run_extract(&input_of(&[atlas.clone(), compact.clone()]), Schema::Atlas);
    assert_eq!(stats.records, 1);
    assert_eq!(bytes.len(), RECORD_SIZE);

    let (bytes, stats) = run_extract(&input_of(&[atlas, compact]), Schema::Compact);
    assert_eq!(stats.records, 1);
    assert_eq!(bytes.len(), RECORD_SIZE);
}

#[test]
fn test_e2e_both_schemas_decode_identically() {
    let builder =
        PingLineBuilder::new().dst_addr("8.8.4.4").rtts(["1.5", "2", "0.125"]).prb_id("77");

    let (atlas, _) = run_extract(&builder.to_atlas(), Schema::Atlas);
    let (compact, _) = run_extract(&builder.to_compact(), Schema::Compact);

    assert_eq!(atlas, compact);
}

#[test]
fn test_e2e_idempotent_runs() {
    let lines: Vec<String> = vec![
        PingLineBuilder::new().to_atlas(),
        PingLineBuilder::new().rtt(1, "\"*\"").to_atlas(),
        "garbage".to_string(),
        PingLineBuilder::new().prb_id("9").to_atlas(),
    ];
    let input = input_of(&lines);

    let (first, _) = run_extract(&input, Schema::Atlas);
    let (second, _) = run_extract(&input, Schema::Atlas);
    assert_eq!(first, second);
}

#[test]
fn test_e2e_extract_to_file_then_dump() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("out.bin");

    let input = input_of(&[
        PingLineBuilder::new().to_atlas(),
        PingLineBuilder::new()
            .dst_addr("1.2.3.4")
            .rtts(["0.5", "0.25", "1"])
            .prb_id("7")
            .to_atlas(),
    ]);

    let mut writer = RecordWriter::create(&output).unwrap();
    convert(std::io::Cursor::new(input), &mut writer, &Default::default()).unwrap();
    writer.finish().unwrap();

    assert_eq!(std::fs::metadata(&output).unwrap().len(), 2 * RECORD_SIZE as u64);
    assert_eq!(read_record_file(&output).unwrap().len(), 2);

    let mut text = Vec::new();
    dump_records(std::fs::File::open(&output).unwrap(), &mut text, None).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "193.0.14.1|1234|12.340000|11.900000|13.000000\n1.2.3.4|7|0.500000|0.250000|1.000000\n"
    );
}
