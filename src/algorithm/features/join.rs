//! Keyed left joins over typed rows
//!
//! Semantics follow a relational left join: every left row appears at least
//! once, a key with several right rows yields one output row per match, and
//! output order follows the left side.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Index `rows` by `key`, keeping each key's rows in input order
pub fn index_by<R, K, F>(rows: &[R], key: F) -> FxHashMap<K, Vec<&R>>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut index: FxHashMap<K, Vec<&R>> = FxHashMap::default();
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

/// Left join `right` onto `left`, pairing each left row with its matches
pub fn left_join<'r, L, R, K, FL, FR>(
    left: Vec<L>,
    right: &'r [R],
    left_key: FL,
    right_key: FR,
) -> Vec<(L, Option<&'r R>)>
where
    L: Clone,
    K: Eq + Hash,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
{
    let index = index_by(right, right_key);
    let mut joined = Vec::with_capacity(left.len());

    for row in left {
        match index.get(&left_key(&row)).and_then(|m| m.split_last()) {
            Some((last, rest)) => {
                for matched in rest {
                    joined.push((row.clone(), Some(*matched)));
                }
                joined.push((row, Some(*last)));
            }
            None => joined.push((row, None)),
        }
    }

    joined
}

/// Left join `right` onto `left` and fold each match into the left row
///
/// Unmatched left rows pass through unchanged.
pub fn left_merge<L, R, K, FL, FR, A>(
    left: Vec<L>,
    right: &[R],
    left_key: FL,
    right_key: FR,
    apply: A,
) -> Vec<L>
where
    L: Clone,
    K: Eq + Hash,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    A: Fn(&mut L, &R),
{
    left_join(left, right, left_key, right_key)
        .into_iter()
        .map(|(mut row, matched)| {
            if let Some(matched) = matched {
                apply(&mut row, matched);
            }
            row
        })
        .collect()
}
