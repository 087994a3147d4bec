pub mod normalize_company_name;

pub use normalize_company_name::normalize_company_name;
