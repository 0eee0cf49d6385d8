//! A selector cannot be called with an empty argument list.

use argmap::{Mapper, _1};

fn main() {
    let _ = _1.call(());
}
