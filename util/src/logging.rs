use std::{error::Error, fmt, path::Path};

use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::{Filter, Response},
};

use log::*;

const PATTERN: &str = "[{d(%H:%M:%S)} {l}]: {m}{n}";

#[cfg(debug_assertions)]
const LEVEL_FILTER: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LEVEL_FILTER: LevelFilter = LevelFilter::Info;

/// Configures the log4rs crate for a host application using the noise library.
///
/// Messages are in the form `[HH:MM:SS Level]: message` and are written to the console, and also to
/// `log_file` if one is given. Debug and trace messages are only accepted from modules whose path
/// starts with `crate_filter`, so that tile regeneration timings are visible without the noise of
/// other crates. If debug assertions are off, then logging events on the debug level are blocked.
pub fn init_logger(crate_filter: &str, log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(CrateFilter::new(crate_filter)))
            .build("console", Box::new(console)),
    );
    let mut root = Root::builder().appender("console");

    if let Some(path) = log_file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)?;

        config = config.appender(
            Appender::builder()
                .filter(Box::new(CrateFilter::new(crate_filter)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    log4rs::init_config(config.build(root.build(LEVEL_FILTER))?)?;

    Ok(())
}

// Only allow debug logging from our crate
struct CrateFilter {
    filter: String,
}

impl CrateFilter {
    pub fn new(filter: &str) -> Self {
        CrateFilter {
            filter: filter.to_owned(),
        }
    }

    fn accepts(&self, level: Level, module_path: Option<&str>) -> bool {
        if level != Level::Debug && level != Level::Trace {
            return true;
        }

        match module_path {
            Some(path) => path.starts_with(&self.filter),
            None => false,
        }
    }
}

impl Filter for CrateFilter {
    fn filter(&self, record: &Record) -> Response {
        if self.accepts(record.level(), record.module_path()) {
            Response::Accept
        } else {
            Response::Reject
        }
    }
}

impl fmt::Debug for CrateFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "CrateFilter({})", self.filter)
    }
}
