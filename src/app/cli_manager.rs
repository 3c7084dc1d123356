use super::{app_helper::init_logger_with_level, command::Command};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

/// The argument setting the minimal logging level, to add to each command.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.into()).collect();
        match self.clap_app().get_matches_from_safe(args.iter()) {
            Ok(matches) => {
                let (name, sub_matches) = matches.subcommand();
                let sub_matches =
                    sub_matches.ok_or_else(|| anyhow!("no subcommand was provided"))?;
                let command = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .ok_or_else(|| anyhow!("unknown command {}", name))?;
                let log_level = match sub_matches.value_of(LOGGING_LEVEL_ARG) {
                    Some(l) => log::LevelFilter::from_str(l)
                        .with_context(|| format!("invalid logging level {}", l))?,
                    None => log::LevelFilter::Info,
                };
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(sub_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => self.print_help(&args),
            Err(e) => {
                init_logger_with_level(log::LevelFilter::Info);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, args: &[OsString]) -> Result<()> {
        let str_args = args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let requested_command = match str_args.as_slice() {
            [_, h, c, ..] if HELP_STRINGS.contains(&h.as_str()) => Some(c.as_str()),
            [_, c, ..] if !HELP_STRINGS.contains(&c.as_str()) => Some(c.as_str()),
            _ => None,
        };
        let mut message = Vec::new();
        let written = match requested_command
            .and_then(|c| self.commands.iter().find(|cmd| cmd.name() == c))
        {
            Some(command) => command.clap_subcommand().write_long_help(&mut message),
            None => self.clap_app().write_long_help(&mut message),
        };
        written.context("while building the help message")?;
        println!("{}", String::from_utf8_lossy(&message));
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!("logical core count: {} {:?}", sys.cpus().len(), cpu_kinds);
    info!("total memory: {} KB", sys.total_memory() / 1024);
    info!("----------------------------------------");
}
