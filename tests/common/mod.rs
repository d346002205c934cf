//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::Path;

use ping_extract::{
    ConvertStats, ExtractConfig, PingRecord, RECORD_SIZE, RecordWriter, Schema, convert,
};
use tempfile::TempDir;

/// Builder for one ping measurement line in either input layout
#[derive(Clone)]
pub struct PingLineBuilder {
    dst_addr: String,
    rtts: [String; 3],
    prb_id: String,
}

impl PingLineBuilder {
    /// Create a line with valid default values
    pub fn new() -> Self {
        Self {
            dst_addr: "193.0.14.1".to_string(),
            rtts: ["12.34".to_string(), "11.9".to_string(), "13.0".to_string()],
            prb_id: "1234".to_string(),
        }
    }

    /// Set the destination address text
    pub fn dst_addr(mut self, addr: &str) -> Self {
        self.dst_addr = addr.to_string();
        self
    }

    /// Set all three raw RTT values (inserted verbatim, so `"\"*\""` yields a quoted string)
    pub fn rtts(mut self, rtts: [&str; 3]) -> Self {
        self.rtts = rtts.map(str::to_string);
        self
    }

    /// Set one raw RTT value (index 0..3)
    pub fn rtt(mut self, index: usize, rtt: &str) -> Self {
        self.rtts[index] = rtt.to_string();
        self
    }

    /// Set the raw probe id text
    pub fn prb_id(mut self, prb_id: &str) -> Self {
        self.prb_id = prb_id.to_string();
        self
    }

    /// Render as a full measurement result with per-attempt result objects
    pub fn to_atlas(&self) -> String {
        format!(
            r#"{{"fw":5080,"lts":12,"dst_name":"k.root-servers.net","af":4,"dst_addr":"{}","src_addr":"192.168.1.20","proto":"ICMP","ttl":55,"size":48,"result":[{{"rtt":{}}},{{"rtt":{}}},{{"rtt":{}}}],"dup":0,"rcvd":3,"sent":3,"msm_id":1001,"prb_id":{},"timestamp":1700000000,"type":"ping"}}"#,
            self.dst_addr, self.rtts[0], self.rtts[1], self.rtts[2], self.prb_id
        )
    }

    /// Render in the flat layout with a bare RTT array
    pub fn to_compact(&self) -> String {
        format!(
            r#"{{"prb_id":{},"dst_addr":"{}","rtts":[{},{},{}],"timestamp":1700000000}}"#,
            self.prb_id, self.dst_addr, self.rtts[0], self.rtts[1], self.rtts[2]
        )
    }

    pub fn to_line(&self, schema: Schema) -> String {
        match schema {
            Schema::Atlas => self.to_atlas(),
            Schema::Compact => self.to_compact(),
        }
    }
}

impl Default for PingLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Join lines with `\n` and a trailing newline
pub fn input_of(lines: &[String]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

/// Run the extractor over an in-memory input
pub fn run_extract(input: &str, schema: Schema) -> (Vec<u8>, ConvertStats) {
    let config = ExtractConfig { schema, ..ExtractConfig::default() };
    let mut writer = RecordWriter::new(Vec::new());
    let stats = convert(Cursor::new(input.as_bytes()), &mut writer, &config)
        .expect("in-memory conversion should not fail");
    (writer.finish().expect("flush to Vec should not fail"), stats)
}

/// Decode a byte buffer into records, panicking on a partial record
pub fn decode_records(bytes: &[u8]) -> Vec<PingRecord> {
    assert_eq!(bytes.len() % RECORD_SIZE, 0, "output must be a whole number of records");
    bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| PingRecord::from_bytes(chunk.try_into().unwrap()))
        .collect()
}

/// Encode records the way the extractor writes them
pub fn encode_records(records: &[PingRecord]) -> Vec<u8> {
    records.iter().flat_map(|r| r.to_bytes()).collect()
}

/// Builder for a directory of record files
pub struct RecordDirBuilder {
    temp_dir: TempDir,
}

impl RecordDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a record file with the given name
    pub fn with_records(self, name: &str, records: &[PingRecord]) -> Self {
        fs::write(self.temp_dir.path().join(name), encode_records(records))
            .expect("Failed to write record file");
        self
    }

    /// Add a file with arbitrary bytes
    pub fn with_bytes(self, name: &str, bytes: &[u8]) -> Self {
        fs::write(self.temp_dir.path().join(name), bytes).expect("Failed to write file");
        self
    }

    /// Add an empty subdirectory
    pub fn with_subdir(self, name: &str) -> Self {
        fs::create_dir(self.temp_dir.path().join(name)).expect("Failed to create subdir");
        self
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for RecordDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a record with equal RTT samples
pub fn record(prb_id: u32, dst_addr: [u8; 4], rtt: f32) -> PingRecord {
    PingRecord { prb_id, dst_addr, rtt: [rtt, rtt, rtt] }
}
