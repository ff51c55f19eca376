use anyhow::Context;
use log4rs::{
    Config as LogConfig,
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::worker::types::Config;

const PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.3fZ)(utc)} {h({l:<5})} {t} - {m}{n}";

pub fn init(config: &Config) -> anyhow::Result<()> {
    let mut builder = LogConfig::builder().appender(Appender::builder().build(
        "stderr",
        Box::new(
            ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new(PATTERN)))
                .build(),
        ),
    ));
    let mut root = Root::builder().appender("stderr");

    if let Some(path) = &config.log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let log_config = builder
        .build(root.build(config.log_level))
        .context("building log config")?;
    log4rs::init_config(log_config).context("installing logger")?;

    Ok(())
}
