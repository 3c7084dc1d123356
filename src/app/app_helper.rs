use super::{cli_manager::CliManager, command::Command};
use anyhow::Result;
use log::{error, info};
use std::{ffi::OsString, sync::Once, time::Instant};

static LOGGER_INIT: Once = Once::new();

/// The object used to build the app from its commands.
///
/// Once the commands are registered, [`launch_app`](Self::launch_app) initializes the logger,
/// reads the CLI arguments and executes the selected command.
/// If the command fails, the error chain is logged and the process exits with status `1`.
pub(crate) struct AppHelper<'a> {
    cli_manager: CliManager<'a>,
}

impl<'a> AppHelper<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        AppHelper {
            cli_manager: CliManager::new(app_name, version, author, about),
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.cli_manager.add_command(command);
    }

    /// Launches the app, reading the CLI arguments with `std::env::args_os()`.
    pub(crate) fn launch_app(self) {
        if let Err(e) = self.execute_app(std::env::args_os()) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = Instant::now();
        let result = self.cli_manager.parse_cli(args);
        if result.is_ok() {
            info!("exiting successfully after {:?}", start_time.elapsed());
        }
        result
    }
}

/// Initializes the logger with the given minimal level.
///
/// Log records are written on the standard error, so that the standard output only contains the results.
/// Only the first call has an effect.
pub(crate) fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "![{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg, ArgMatches, SubCommand};

    struct FailingCommand;

    impl<'a> Command<'a> for FailingCommand {
        fn name(&self) -> &str {
            "fail"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("fail").arg(Arg::with_name("really").short("r"))
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            if arg_matches.is_present("really") {
                Err(anyhow::anyhow!("failure"))
            } else {
                Ok(())
            }
        }
    }

    fn helper() -> AppHelper<'static> {
        let mut h = AppHelper::new("app", "0.0.0", "author", "about");
        h.add_command(Box::new(FailingCommand));
        h
    }

    #[test]
    fn test_no_args() {
        helper().execute_app(vec![] as Vec<&str>).unwrap_err();
    }

    #[test]
    fn test_no_subcommand() {
        helper().execute_app(vec!["app"]).unwrap_err();
    }

    #[test]
    fn test_command_ok() {
        helper().execute_app(vec!["app", "fail"]).unwrap();
    }

    #[test]
    fn test_command_error() {
        let err = helper().execute_app(vec!["app", "fail", "-r"]).unwrap_err();
        assert_eq!("failure", err.to_string());
    }
}
