pub use sea_orm_migration::prelude::*;

mod join_table;
mod m20260301_000001_create_portfolios_and_profiles;
mod m20260301_000002_create_contacts;
mod m20260301_000003_create_experiences;
mod m20260301_000004_create_projects;
mod m20260301_000005_create_blogs_skills_tools;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_portfolios_and_profiles::Migration),
            Box::new(m20260301_000002_create_contacts::Migration),
            Box::new(m20260301_000003_create_experiences::Migration),
            Box::new(m20260301_000004_create_projects::Migration),
            Box::new(m20260301_000005_create_blogs_skills_tools::Migration),
        ]
    }
}
