//! Behavioural coverage for the user store.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    MockPasswordHasher, MockUserRepository, PasswordHashError, UserPersistenceError,
};
use crate::outbound::hashing::BcryptPasswordHasher;
use crate::outbound::memory::InMemoryUserRepository;

struct Harness {
    repository: Arc<InMemoryUserRepository>,
    hasher: BcryptPasswordHasher,
    store: UserStore,
}

#[fixture]
fn harness() -> Harness {
    let repository = Arc::new(InMemoryUserRepository::default());
    let hasher = BcryptPasswordHasher::with_cost(4);
    let store = UserStore::new(repository.clone(), Arc::new(hasher));
    Harness {
        repository,
        hasher,
        store,
    }
}

/// Store whose ports panic on any call, proving the guard clauses short-circuit.
fn untouched_store() -> UserStore {
    UserStore::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockPasswordHasher::new()),
    )
}

fn store_with(repository: MockUserRepository, hasher: MockPasswordHasher) -> UserStore {
    UserStore::new(Arc::new(repository), Arc::new(hasher))
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
#[tokio::test]
async fn blank_usernames_are_rejected_without_touching_storage(#[case] username: &str) {
    let store = untouched_store();

    let find = store.find_by_name(username).await.expect_err("blank find");
    assert_eq!(find.kind(), FailureKind::EmptyInput);
    assert!(find.value().is_empty());

    let exists = store.exists_by_name(username).await.expect_err("blank exists");
    assert_eq!(exists.kind(), FailureKind::EmptyInput);
    assert!(!*exists.value());

    let login = store
        .validate_login(username, "secret")
        .await
        .expect_err("blank login");
    assert_eq!(login.kind(), FailureKind::IncompleteCredentials);
}

#[rstest]
#[case("bob", "")]
#[case("bob", "   ")]
#[case("", "secret")]
#[tokio::test]
async fn incomplete_credentials_make_no_repository_call(
    #[case] username: &str,
    #[case] password: &str,
) {
    let failure = untouched_store()
        .validate_login(username, password)
        .await
        .expect_err("incomplete credentials must fail");

    assert_eq!(failure.kind(), FailureKind::IncompleteCredentials);
    assert_eq!(failure.message(), "Incomplete login data!");
    assert!(failure.value().is_empty());
}

#[rstest]
#[tokio::test]
async fn unknown_user_is_not_found(harness: Harness) {
    let find = harness
        .store
        .find_by_name("ghost")
        .await
        .expect_err("unknown user");
    assert_eq!(find.kind(), FailureKind::NotFound);
    assert!(find.message().contains("ghost"));
    assert!(find.value().is_empty());

    let exists = harness
        .store
        .exists_by_name("ghost")
        .await
        .expect_err("absence is a failure");
    assert_eq!(exists.kind(), FailureKind::NotFound);
}

#[rstest]
#[tokio::test]
async fn create_then_login_round_trip(harness: Harness) {
    let created = harness
        .store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect("create succeeds");
    assert_eq!(created.value().username(), "alice");
    assert_eq!(created.message(), "User created successfully!");

    let login = harness
        .store
        .validate_login("alice", "p")
        .await
        .expect("login succeeds");
    assert_eq!(login.value().username(), "alice");
    assert_eq!(login.message(), "Login successful!");

    let wrong = harness
        .store
        .validate_login("alice", "wrong")
        .await
        .expect_err("wrong password");
    assert_eq!(wrong.kind(), FailureKind::InvalidCredentials);
    assert!(wrong.value().is_empty());
}

#[rstest]
#[tokio::test]
async fn create_never_stores_plaintext(harness: Harness) {
    let created = harness
        .store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect("create succeeds");

    let stored = harness
        .repository
        .find_one("alice")
        .await
        .expect("lookup")
        .expect("record stored");
    assert_ne!(stored.password(), "p");
    assert_eq!(stored.password(), created.value().password());
    assert!(
        harness
            .hasher
            .verify("p", stored.password())
            .await
            .expect("verify")
    );
}

#[rstest]
#[tokio::test]
async fn create_rejects_existing_username(harness: Harness) {
    harness
        .store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect("first create");

    let second = harness
        .store
        .create(&UserRecord::new("alice", "other"))
        .await
        .expect_err("second create must fail");

    assert_eq!(second.kind(), FailureKind::AlreadyExists);
    assert_eq!(harness.repository.count("alice").await.expect("count"), 1);
    let exists = harness.store.exists_by_name("alice").await.expect("exists");
    assert!(*exists.value());
}

#[rstest]
#[case(UserRecord::empty())]
#[case(UserRecord::new("", "secret"))]
#[case(UserRecord::new("  ", "secret"))]
#[tokio::test]
async fn create_rejects_nameless_users(#[case] user: UserRecord) {
    let failure = untouched_store()
        .create(&user)
        .await
        .expect_err("nameless user must fail");

    assert_eq!(failure.kind(), FailureKind::EmptyUser);
    assert!(failure.value().is_empty());
}

#[rstest]
#[tokio::test]
async fn login_for_unknown_user_propagates_not_found(harness: Harness) {
    let failure = harness
        .store
        .validate_login("ghost", "p")
        .await
        .expect_err("unknown user");

    assert_eq!(failure.kind(), FailureKind::NotFound);
    assert_eq!(failure.message(), "No user found under the name 'ghost'!");
}

#[tokio::test]
async fn lookup_errors_surface_as_database_errors() {
    let mut repository = MockUserRepository::new();
    repository
        .expect_find_one()
        .times(1)
        .returning(|_| Err(UserPersistenceError::connection("pool exhausted")));
    let store = store_with(repository, MockPasswordHasher::new());

    let failure = store.find_by_name("alice").await.expect_err("lookup fails");

    assert_eq!(failure.kind(), FailureKind::DatabaseError);
    assert!(failure.message().contains("pool exhausted"));
}

#[rstest]
#[case(0, None)]
#[case(1, Some(true))]
#[case(3, Some(true))]
#[tokio::test]
async fn exists_reports_count(#[case] count: u64, #[case] expected: Option<bool>) {
    let mut repository = MockUserRepository::new();
    repository
        .expect_count()
        .withf(|username| username == "alice")
        .times(1)
        .returning(move |_| Ok(count));
    let store = store_with(repository, MockPasswordHasher::new());

    let result = store.exists_by_name("alice").await;

    match (expected, result) {
        (Some(flag), Ok(envelope)) => {
            assert_eq!(*envelope.value(), flag);
            assert_eq!(envelope.message(), "User exists!");
        }
        (None, Err(failure)) => {
            assert_eq!(failure.kind(), FailureKind::NotFound);
            assert_eq!(failure.message(), "User could not be found!");
        }
        (expected, actual) => panic!("expected {expected:?}, got {actual:?}"),
    }
}

#[tokio::test]
async fn exists_embeds_driver_error() {
    let mut repository = MockUserRepository::new();
    repository
        .expect_count()
        .returning(|_| Err(UserPersistenceError::query("relation users does not exist")));
    let store = store_with(repository, MockPasswordHasher::new());

    let failure = store.exists_by_name("alice").await.expect_err("count fails");

    assert_eq!(failure.kind(), FailureKind::DatabaseError);
    assert!(failure.message().starts_with("Database - "));
    assert!(failure.message().contains("relation users does not exist"));
}

#[tokio::test]
async fn create_does_not_treat_store_errors_as_absence() {
    let mut repository = MockUserRepository::new();
    repository
        .expect_count()
        .returning(|_| Err(UserPersistenceError::connection("refused")));
    repository.expect_insert().never();
    let store = store_with(repository, MockPasswordHasher::new());

    let failure = store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect_err("count failure must abort creation");

    assert_eq!(failure.kind(), FailureKind::PersistenceError);
    assert!(failure.message().contains("refused"));
}

#[tokio::test]
async fn create_maps_lost_race_to_already_exists() {
    let mut repository = MockUserRepository::new();
    repository.expect_count().returning(|_| Ok(0));
    repository
        .expect_insert()
        .times(1)
        .returning(|record| Err(UserPersistenceError::duplicate(record.username())));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok("$2b$04$hash".to_owned()));
    let store = store_with(repository, hasher);

    let failure = store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect_err("duplicate insert must fail");

    assert_eq!(failure.kind(), FailureKind::AlreadyExists);
}

#[tokio::test]
async fn create_embeds_write_errors() {
    let mut repository = MockUserRepository::new();
    repository.expect_count().returning(|_| Ok(0));
    repository
        .expect_insert()
        .returning(|_| Err(UserPersistenceError::query("disk full")));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Ok("$2b$04$hash".to_owned()));
    let store = store_with(repository, hasher);

    let failure = store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect_err("write failure");

    assert_eq!(failure.kind(), FailureKind::PersistenceError);
    assert!(
        failure
            .message()
            .starts_with("An error occurred while creating the user!\n")
    );
    assert!(failure.message().contains("disk full"));
}

#[tokio::test]
async fn create_aborts_when_hashing_fails() {
    let mut repository = MockUserRepository::new();
    repository.expect_count().returning(|_| Ok(0));
    repository.expect_insert().never();
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_hash()
        .returning(|_| Err(PasswordHashError::hash("cost not allowed")));
    let store = store_with(repository, hasher);

    let failure = store
        .create(&UserRecord::new("alice", "p"))
        .await
        .expect_err("hash failure");

    assert_eq!(failure.kind(), FailureKind::PersistenceError);
}

#[tokio::test]
async fn login_compare_errors_surface_as_database_errors() {
    let mut repository = MockUserRepository::new();
    repository
        .expect_find_one()
        .returning(|username| Ok(Some(UserRecord::new(username, "garbage"))));
    let mut hasher = MockPasswordHasher::new();
    hasher
        .expect_verify()
        .withf(|plaintext, hashed| plaintext == "p" && hashed == "garbage")
        .returning(|_, _| Err(PasswordHashError::verify("invalid hash")));
    let store = store_with(repository, hasher);

    let failure = store
        .validate_login("alice", "p")
        .await
        .expect_err("compare fails");

    assert_eq!(failure.kind(), FailureKind::DatabaseError);
    assert!(failure.message().contains("invalid hash"));
    assert!(failure.value().is_empty());
}
