mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod indices_command;
pub(crate) use indices_command::IndicesCommand;

mod rank_command;
pub(crate) use rank_command::RankCommand;
