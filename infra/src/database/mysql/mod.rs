//! MySQL repository implementations

mod category_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
