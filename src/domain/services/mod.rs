pub mod normalize;
pub mod validate;

pub use normalize::normalize_domain;
pub use validate::is_valid_domain;
