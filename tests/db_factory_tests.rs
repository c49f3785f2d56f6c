//! Tests for repository selection via environment and config file.

mod support;

use lti_rust::db::{BackendConfig, FullRepository, RepositoryFactory, RepositoryType};
use support::with_scoped_env;

#[test]
fn test_explicit_repository_type_wins() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("postgres://ignored/db")),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Local);
}

#[test]
fn test_database_url_implies_postgres() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/lti")),
            ("PG_DATABASE_URL", None),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Postgres);
}

#[test]
fn test_bare_environment_defaults_to_local() {
    let repo_type = with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Local);
}

#[test]
fn test_garbage_repository_type_falls_back_to_local() {
    let repo_type = with_scoped_env(
        &[("REPOSITORY_TYPE", Some("oracle"))],
        RepositoryType::from_env,
    );
    assert_eq!(repo_type, RepositoryType::Local);
}

#[tokio::test]
async fn test_factory_creates_local_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local, None).unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[test]
fn test_flight_api_url_env_override() {
    let config: BackendConfig = toml::from_str(
        "[repository]\ntype = \"local\"\n[flight_api]\nbase_url = \"https://file.example/arrivals\"",
    )
    .unwrap();

    let from_file = with_scoped_env(&[("FLIGHT_API_URL", None)], || config.flight_api_url());
    assert_eq!(from_file, "https://file.example/arrivals");

    let overridden = with_scoped_env(
        &[("FLIGHT_API_URL", Some("https://env.example/arrivals"))],
        || config.flight_api_url(),
    );
    assert_eq!(overridden, "https://env.example/arrivals");
}
