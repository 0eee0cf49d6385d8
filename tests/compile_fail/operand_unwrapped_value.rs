//! A value that is neither a mapper nor a plain value needs `val` first.

struct Meters(f64);

fn main() {
    let _ = argmap::_1 + Meters(3.0);
}
