pub mod postgres_profile_repo;
pub mod sqlite_profile_repo;
