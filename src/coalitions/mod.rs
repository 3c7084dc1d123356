//! Coalitions of arguments and the simple games they induce.
//!
//! A family of extensions is seen as the set of winning coalitions of a simple game whose players are the arguments.
//! This module provides the characteristic function of such games and the combinatorial tools the power indices rely on.

mod coalition;
pub use coalition::Coalition;

mod extension_family;
pub use extension_family::ExtensionFamily;

mod minimal_winnings;
pub use minimal_winnings::minimal_winnings;

mod out_family;
pub use out_family::attacked_by;
pub use out_family::derive_out_family;

mod subsets;
pub use subsets::SubsetEnumerator;

mod swingers;
pub use swingers::count_swingers;
