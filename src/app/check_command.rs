use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF and extension files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::extensions_arg(false))
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_framework_file_path(file)?;
        if let Some(extensions_file) = arg_matches.value_of(common::ARG_EXTENSIONS) {
            common::read_extensions_file_path(extensions_file, &af)?;
        }
        info!("no error found");
        Ok(())
    }
}
