use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, IndicesCommand,
    RankCommand,
};
use anyhow::{Context, Result};
use argrank::{
    aa::AAFramework,
    coalitions::ExtensionFamily,
    io::{AspartixReader, ExtensionsReader, InstanceReader},
};
use clap::Arg;
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "ArgRank, a power index based ranker for abstract argumentation frameworks.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(IndicesCommand::new()),
        Box::new(RankCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF (Aspartix format)")
        .required(true)
}

pub(crate) const ARG_EXTENSIONS: &str = "EXTENSIONS";

pub(crate) fn extensions_arg(required: bool) -> Arg<'static, 'static> {
    Arg::with_name(ARG_EXTENSIONS)
        .short("e")
        .long("extensions")
        .empty_values(false)
        .multiple(false)
        .help("the file that contains the IN extensions, one per line")
        .required(required)
}

pub(crate) fn read_framework_file_path(file_path: &str) -> Result<AAFramework<String>> {
    let mut reader = AspartixReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let af = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

pub(crate) fn read_extensions_file_path(
    file_path: &str,
    af: &AAFramework<String>,
) -> Result<ExtensionFamily> {
    let mut reader = ExtensionsReader::default();
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let family = read_file_path_with(file_path, &|r| reader.read(r, af.argument_set()))?;
    info!("read {} IN extension(s)", family.len());
    Ok(family)
}

fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    (reader)(&mut file_reader).with_context(|| format!("while reading file {:?}", canonicalized))
}

fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
