pub(crate) mod seen;
pub mod sequence;
