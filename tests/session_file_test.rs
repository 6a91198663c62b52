//! Session persistence through the JSON file store.

use abd_admin::adapters::FileSessionStore;
use abd_admin::session::{Session, DEFAULT_LANGUAGE};
use abd_admin::traits::SessionStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_state_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut session = Session::load(FileSessionStore::in_dir(dir.path())).await;
    assert!(!session.is_logged_in());
    session.log_in().await.unwrap();
    session.remember_page("tariffs", 3).await.unwrap();
    session.set_language("ru").await.unwrap();
    drop(session);

    let session = Session::load(FileSessionStore::in_dir(dir.path())).await;
    assert!(session.is_logged_in());
    assert_eq!(session.current_page("tariffs"), 3);
    assert_eq!(session.current_page("users"), 1);
    assert_eq!(session.language(), "ru");
}

#[tokio::test]
async fn test_logout_keeps_language_only() {
    let dir = TempDir::new().unwrap();

    let mut session = Session::load(FileSessionStore::in_dir(dir.path())).await;
    session.log_in().await.unwrap();
    session.remember_page("car", 7).await.unwrap();
    session.set_language("uz").await.unwrap();
    session.log_out().await.unwrap();

    let session = Session::load(FileSessionStore::in_dir(dir.path())).await;
    assert!(!session.is_logged_in());
    assert_eq!(session.current_page("car"), 1);
    assert_eq!(session.language(), "uz");
}

#[tokio::test]
async fn test_corrupt_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().await.is_err());

    let mut session = Session::load(store).await;
    assert!(!session.is_logged_in());
    assert_eq!(session.language(), DEFAULT_LANGUAGE);

    // The next write replaces the corrupt file.
    session.log_in().await.unwrap();
    let reloaded = FileSessionStore::in_dir(dir.path()).load().await.unwrap();
    assert!(reloaded.is_some_and(|state| state.logged_in));
}

#[tokio::test]
async fn test_missing_directory_is_created_on_save() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");

    let mut session = Session::load(FileSessionStore::in_dir(&nested)).await;
    session.remember_page("settings", 2).await.unwrap();

    assert!(nested.join("session.json").exists());
}

#[tokio::test]
async fn test_unknown_language_is_not_stored() {
    let dir = TempDir::new().unwrap();
    let mut session = Session::load(FileSessionStore::in_dir(dir.path())).await;

    assert!(session.set_language("fr").await.is_err());
    assert_eq!(session.language(), DEFAULT_LANGUAGE);
    assert!(!dir.path().join("session.json").exists());
}
