//! Selecting past the end of the argument list does not compile.

use argmap::{Mapper, _3};

fn main() {
    let _ = _3.call((1_i32, 2_i32));
}
