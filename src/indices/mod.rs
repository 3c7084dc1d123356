//! Power indices of the arguments, seen as players of the games induced by extension families.

mod banzhaf;
pub use banzhaf::BanzhafIndex;

mod deegan_packel;
pub use deegan_packel::DeeganPackelIndex;

mod johnston;
pub use johnston::JohnstonIndex;

mod power_index_kind;
pub use power_index_kind::BoxedPowerIndexComputer;
pub use power_index_kind::PowerIndexKind;

mod power_indices;
pub use power_indices::check_argument_count;
pub use power_indices::compute_power_indices;
pub use power_indices::round_to_output_precision;
pub use power_indices::PowerIndexResult;
pub use power_indices::MAX_ARGUMENTS;
pub use power_indices::OUTPUT_DECIMALS;

mod shapley_shubik;
pub use shapley_shubik::ShapleyShubikIndex;

mod specs;
pub use specs::PowerIndexComputer;
