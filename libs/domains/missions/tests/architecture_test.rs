//! Layering rules: the web layer depends on the service, never the reverse.

const SERVICE: &str = include_str!("../src/service.rs");
const REPOSITORY: &str = include_str!("../src/repository.rs");
const POSTGRES: &str = include_str!("../src/postgres.rs");
const MODELS: &str = include_str!("../src/models.rs");

fn imports(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("use "))
        .collect()
}

#[test]
fn persistence_and_service_do_not_import_the_web_layer() {
    for (file, source) in [
        ("service.rs", SERVICE),
        ("repository.rs", REPOSITORY),
        ("postgres.rs", POSTGRES),
        ("models.rs", MODELS),
    ] {
        for import in imports(source) {
            assert!(
                !import.contains("axum") && !import.contains("handlers"),
                "{file} must not depend on the web layer: {import}"
            );
        }
    }
}

#[test]
fn service_does_not_reach_into_sea_orm() {
    for import in imports(SERVICE) {
        assert!(!import.contains("sea_orm"), "service.rs imports {import}");
    }
}
