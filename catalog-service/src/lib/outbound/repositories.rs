pub mod ingredient;
pub mod recipe;
pub mod stats;
pub mod user;

pub use ingredient::SqliteIngredientRepository;
pub use recipe::SqliteRecipeRepository;
pub use stats::SqliteStatsRepository;
pub use user::SqliteUserRepository;
