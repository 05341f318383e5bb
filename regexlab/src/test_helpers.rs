use crate::flags::FlagSet;
use crate::params::EngineParams;
use crate::regex::Regex;

#[track_caller]
pub fn build_regex(expr: &str, flags: FlagSet) -> Regex {
    Regex::new(expr, flags, &EngineParams::default()).unwrap()
}

// Checks the public types implement Clone, Debug, Send and Sync, and exercises
// the derived impls so that coverage does not report them as missed.
pub fn test_type_traits<T: Clone + std::fmt::Debug + Send + Sync>(t: T) {
    #[allow(clippy::redundant_clone)]
    let _r = t.clone();
    let _r = format!("{:?}", &t);
}

pub fn test_type_traits_non_clonable<T: std::fmt::Debug + Send + Sync>(t: T) {
    let _r = format!("{:?}", &t);
}
