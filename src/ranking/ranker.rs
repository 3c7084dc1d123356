use super::{Preference, RankListener};
use crate::{aa::LabelType, indices::PowerIndexResult};
use std::cmp::Ordering;

/// Compares two results the way they are ranked.
///
/// Results are sorted by decreasing IN values, then by increasing OUT values, then by increasing argument labels.
/// Values are compared once rounded to the displayed precision, and labels are compared through their textual representation.
pub fn compare_results<T>(a: &PowerIndexResult<T>, b: &PowerIndexResult<T>) -> Ordering
where
    T: LabelType,
{
    b.rounded_in_value()
        .total_cmp(&a.rounded_in_value())
        .then_with(|| a.rounded_out_value().total_cmp(&b.rounded_out_value()))
        .then_with(|| a.argument().to_string().cmp(&b.argument().to_string()))
}

/// Returns the preference between two consecutive results of a ranking.
///
/// The first one is strictly preferred if it has a greater IN value or a lower OUT value;
/// otherwise, both are indifferent.
pub fn preference_between<T>(a: &PowerIndexResult<T>, b: &PowerIndexResult<T>) -> Preference
where
    T: LabelType,
{
    if a.rounded_in_value() > b.rounded_in_value() || a.rounded_out_value() < b.rounded_out_value()
    {
        Preference::Strict
    } else {
        Preference::Indifferent
    }
}

/// A ranking of arguments given their power index values.
///
/// The ranking orders the results (see [`compare_results`]) and computes the preorder they induce:
/// between two consecutive arguments, the relation is either a strict preference or an indifference.
/// Strict preferences split the ranking into tiers, the first argument being in tier `0`.
///
/// # Example
///
/// ```
/// # use argrank::aa::ArgumentSet;
/// # use argrank::indices::PowerIndexResult;
/// # use argrank::ranking::Ranking;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// let results = vec![
///     PowerIndexResult::new(arguments.get_argument_by_id(0), 0.5, 0.),
///     PowerIndexResult::new(arguments.get_argument_by_id(1), 1., 0.),
///     PowerIndexResult::new(arguments.get_argument_by_id(2), 0.5, 0.),
/// ];
/// let ranking = Ranking::new(results);
/// assert_eq!("b ≻ a ≃ c", ranking.preorder_string());
/// assert_eq!(2, ranking.n_tiers());
/// ```
pub struct Ranking<'a, T>
where
    T: LabelType,
{
    ranked: Vec<PowerIndexResult<'a, T>>,
    preferences: Vec<Preference>,
}

impl<'a, T> Ranking<'a, T>
where
    T: LabelType,
{
    /// Ranks the results.
    pub fn new(mut results: Vec<PowerIndexResult<'a, T>>) -> Self {
        results.sort_by(compare_results);
        let preferences = results
            .windows(2)
            .map(|w| preference_between(&w[0], &w[1]))
            .collect();
        Ranking {
            ranked: results,
            preferences,
        }
    }

    /// Returns the number of ranked arguments.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns `true` iff no argument is ranked.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Iterates over the results, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &PowerIndexResult<'a, T>> + '_ {
        self.ranked.iter()
    }

    /// Returns the preferences between consecutive ranked arguments.
    ///
    /// The `i`-th preference relates the `i`-th and the `(i+1)`-th arguments.
    pub fn preferences(&self) -> &[Preference] {
        &self.preferences
    }

    /// Returns the tier of each ranked argument, in rank order.
    pub fn tiers(&self) -> Vec<usize> {
        let mut tiers = Vec::with_capacity(self.ranked.len());
        if self.ranked.is_empty() {
            return tiers;
        }
        tiers.push(0);
        let mut current = 0;
        for p in self.preferences.iter() {
            if *p == Preference::Strict {
                current += 1;
            }
            tiers.push(current);
        }
        tiers
    }

    /// Returns the number of distinct tiers.
    pub fn n_tiers(&self) -> usize {
        if self.ranked.is_empty() {
            0
        } else {
            1 + self
                .preferences
                .iter()
                .filter(|p| **p == Preference::Strict)
                .count()
        }
    }

    /// Returns the results sorted by argument labels.
    ///
    /// Labels are compared ignoring case first, so that `a` comes before `B`; labels differing only by case keep a fixed order.
    /// This order is meant for display purposes only.
    pub fn alphabetical(&self) -> Vec<&PowerIndexResult<'a, T>> {
        let mut results = self.ranked.iter().collect::<Vec<_>>();
        results.sort_by_cached_key(|r| {
            let label = r.argument().to_string();
            (label.to_lowercase(), label)
        });
        results
    }

    /// Returns the textual representation of the preorder, like `a ≻ b ≃ c`.
    pub fn preorder_string(&self) -> String {
        let mut s = String::new();
        for (i, r) in self.ranked.iter().enumerate() {
            if i > 0 {
                s.push(' ');
                s.push(self.preferences[i - 1].symbol());
                s.push(' ');
            }
            s.push_str(&r.argument().to_string());
        }
        s
    }

    /// Notifies a listener of the rank of each argument, in rank order.
    pub fn notify_listener(&self, listener: &mut dyn RankListener<T>) {
        let n_tiers = self.n_tiers();
        self.ranked
            .iter()
            .zip(self.tiers())
            .for_each(|(r, tier)| {
                listener.apply_rank(r.argument(), tier, n_tiers, r.rounded_in_value() >= 0.)
            });
    }
}
