mod math;
mod point;
mod pose;

pub use self::{math::*, point::*, pose::*};
