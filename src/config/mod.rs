pub mod app;
pub mod seeding;

pub use app::AppConfig;
pub use seeding::CatalogSeeder;
