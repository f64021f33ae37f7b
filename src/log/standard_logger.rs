use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigBuilder;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::log::{LogConfiguration, ModuleLogConfiguration};

// ISO 8601 timestamp, color coded level tag, then the module path of the message
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";
const CONSOLE_APPENDER: &str = "stderr";

impl From<&ModuleLogConfiguration> for Logger {
    fn from(module_config: &ModuleLogConfiguration) -> Self {
        Logger::builder().build(module_config.module.clone(), module_config.level)
    }
}

impl LogConfiguration {
    fn build_log4rs_config(&self) -> Result<Config, log4rs::config::runtime::ConfigErrors> {
        // stdout carries the resulting listing.
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        let mut builder: ConfigBuilder = Config::builder()
            .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(stderr)));

        // One logger per filtered module path, e.g. `meetup::meetup`
        for module_config in self.module_configurations.values() {
            builder = builder.logger(module_config.into());
        }

        let root = Root::builder()
            .appender(CONSOLE_APPENDER)
            .build(self.global_log_level);
        builder.build(root)
    }

    /// Installs or reloads the `log4rs` logger so it matches this [`LogConfiguration`]. An
    /// invalid configuration is reported on stderr and the previous logger stays in place.
    pub(in crate::log) fn set_config(&mut self) {
        let config = match self.build_log4rs_config() {
            Ok(config) => config,
            Err(errors) => {
                eprintln!("failed to build logging config: {errors}");
                return;
            }
        };

        match self.root_handle {
            Some(ref mut handle) => handle.set_config(config),
            None => match log4rs::init_config(config) {
                Ok(handle) => self.root_handle = Some(handle),
                // Another logger was installed first; keep using it.
                Err(e) => eprintln!("failed to install logger: {e}"),
            },
        }
    }
}
