use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::{Level, LevelFilter, log};

use hearth_rs::io::ext_repr::ExtInventory;

use crate::EPOCH;

pub fn read_roster(path: &Path) -> Result<ExtInventory> {
    let file = File::open(path)
        .with_context(|| format!("could not open roster file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse roster file: {}", path.display()))
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;

            let prefix = format!("[{}] [{:0>2}:{:0>2}]", record.level(), min, sec);

            out.finish(format_args!("{:<14}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    log!(Level::Info, "time: {}", jiff::Timestamp::now());
    Ok(())
}
