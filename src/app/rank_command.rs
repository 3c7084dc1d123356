use super::{cli_manager, command::Command, common};
use anyhow::{Context, Result};
use argrank::{
    coalitions::derive_out_family,
    indices::{compute_power_indices, PowerIndexKind},
    io::{PreorderWriter, RankingWriter, TiersWriter},
    ranking::Ranking,
};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "rank";

const ARG_INDEX: &str = "INDEX";
const ARG_OUTPUT: &str = "OUTPUT";

pub(crate) struct RankCommand;

impl RankCommand {
    pub(crate) fn new() -> Self {
        RankCommand
    }
}

impl<'a> Command<'a> for RankCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Ranks the arguments of an AF according to a power index")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::extensions_arg(true))
            .arg(
                Arg::with_name(ARG_INDEX)
                    .short("i")
                    .long("index")
                    .empty_values(false)
                    .multiple(false)
                    .help("the power index to use (see the \"indices\" command)")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_OUTPUT)
                    .short("o")
                    .long("output")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["preorder", "tiers"])
                    .default_value("preorder")
                    .help("the output format")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let kind = PowerIndexKind::try_from(arg_matches.value_of(ARG_INDEX).unwrap())?;
        let af = common::read_framework_file_path(arg_matches.value_of(common::ARG_INPUT).unwrap())?;
        let in_family = common::read_extensions_file_path(
            arg_matches.value_of(common::ARG_EXTENSIONS).unwrap(),
            &af,
        )?;
        let out_family = derive_out_family(&in_family, &af);
        info!("derived {} OUT extension(s)", out_family.len());
        let results = compute_power_indices(&af, &in_family, &out_family, kind)
            .context("while computing power indices")?;
        let ranking = Ranking::new(results);
        info!("the ranking has {} tier(s)", ranking.n_tiers());
        let writer: Box<dyn RankingWriter<String>> =
            match arg_matches.value_of(ARG_OUTPUT).unwrap() {
                "preorder" => Box::new(PreorderWriter),
                "tiers" => Box::new(TiersWriter),
                _ => unreachable!(),
            };
        let mut out = std::io::stdout();
        writer.write_ranking(&mut out, &ranking)
    }
}
