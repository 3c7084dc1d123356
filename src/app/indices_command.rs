use super::{cli_manager, command::Command};
use anyhow::Result;
use argrank::indices::PowerIndexKind;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "indices";

pub(crate) struct IndicesCommand;

impl IndicesCommand {
    pub(crate) fn new() -> Self {
        IndicesCommand
    }
}

impl<'a> Command<'a> for IndicesCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the power indices handled by the ranker")
            .setting(AppSettings::DisableVersion)
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        let indices = PowerIndexKind::iter_index_strings().collect::<Vec<String>>();
        println!("[{}]", indices.join(","));
        Ok(())
    }
}
