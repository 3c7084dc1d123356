//! Objects used to read frameworks and extension families, and to write rankings.

mod aspartix_reader;
pub use aspartix_reader::AspartixReader;

mod extensions_reader;
pub use extensions_reader::ExtensionsReader;

mod ranking_writer;
pub use ranking_writer::PreorderWriter;
pub use ranking_writer::TiersWriter;

mod specs;
pub use specs::InstanceReader;
pub use specs::RankingWriter;
pub use specs::WarningHandler;

mod warned;
