//! Program with a feasible relaxation but no integer solution.
//!
//! ```text
//! maximize x1
//! s.t.     2 x1 <= 1
//!          2 x1 >= 1
//! ```
use crate::algorithm::dictionary::Dictionary;
use crate::data::number_types::rational::RationalBig;
use crate::RB;

pub fn dictionary() -> Dictionary<RationalBig> {
    Dictionary::new(
        vec![2, 3],
        vec![1],
        vec![RB!(1), RB!(-1)],
        vec![
            vec![RB!(-2)],
            vec![RB!(2)],
        ],
        RB!(0),
        vec![RB!(1)],
    ).unwrap()
}
