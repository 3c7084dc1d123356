//! ArgRank ranks the arguments of abstract argumentation frameworks using power indices.
//!
//! Arguments are considered as the players of a simple coalitional game,
//! in which the winning coalitions are the extensions computed by an argumentation solver (the IN family),
//! or the sets of arguments these extensions attack (the OUT family).
//! The Shapley-Shubik, Banzhaf, Johnston and Deegan-Packel indices measure the power of each argument in both games;
//! arguments are then ranked by decreasing IN values and increasing OUT values.
//!
//! ```
//! # use argrank::aa::{AAFramework, ArgumentSet};
//! # use argrank::coalitions::{derive_out_family, Coalition, ExtensionFamily};
//! # use argrank::indices::{compute_power_indices, PowerIndexKind};
//! # use argrank::ranking::Ranking;
//! let labels = vec!["a", "b", "c"];
//! let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
//! af.new_attack(&"a", &"b").unwrap();
//! af.new_attack(&"b", &"c").unwrap();
//! let in_family = ExtensionFamily::new(vec![Coalition::new(vec![0, 2])]);
//! let out_family = derive_out_family(&in_family, &af);
//! let results = compute_power_indices(&af, &in_family, &out_family, PowerIndexKind::SV).unwrap();
//! let ranking = Ranking::new(results);
//! assert_eq!("a ≃ c ≻ b", ranking.preorder_string());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod coalitions;

pub mod error;

pub mod indices;

pub mod io;

pub mod ranking;
