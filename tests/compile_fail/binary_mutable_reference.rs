//! Binary composers hand the argument tuple to both operands, so the tuple
//! must be `Clone`. A `&mut` argument is not.

use argmap::{Mapper, _1};

fn main() {
    let mut total = 0_i32;
    let _ = (_1 + 1_i32).call((&mut total,));
}
