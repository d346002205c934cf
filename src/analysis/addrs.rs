use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::path::Path;

use anyhow::Result;

use super::reader::read_record_dir;
use crate::models::PingRecord;

/// Distinct destination addresses, in ascending order
pub fn unique_destinations<'a, I>(records: I) -> BTreeSet<Ipv4Addr>
where
    I: IntoIterator<Item = &'a PingRecord>,
{
    records.into_iter().map(PingRecord::dst_ip).collect()
}

/// Distinct destination addresses across every record file in `dir`
pub fn collect_destinations(dir: &Path) -> Result<BTreeSet<Ipv4Addr>> {
    let files = read_record_dir(dir)?;
    Ok(unique_destinations(files.iter().flatten()))
}
