//! Tests for the customer registrar.

use std::time::Duration;

use super::*;
use crate::domain::ports::MockCustomerRepository;
use crate::domain::{CustomerName, ErrorCode, ResultCode};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn acme() -> CustomerName {
    CustomerName::new("Acme").expect("valid name")
}

fn make_registrar(repo: MockCustomerRepository) -> CustomerRegistrar<MockCustomerRepository> {
    CustomerRegistrar::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn new_name_is_inserted_once(acme: CustomerName) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name()
        .with(eq(acme.clone()))
        .times(1)
        .return_once(|_| Ok(0));
    repo.expect_insert()
        .with(eq(acme.clone()))
        .times(1)
        .return_once(|_| Ok(Some(1)));

    let outcome = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect("registration succeeds");

    let id = CustomerId::new(1).expect("positive id");
    assert_eq!(outcome, RegistrationOutcome::Inserted { id });
    assert_eq!(outcome.code(), ResultCode::Success);
}

#[rstest]
#[case(1)]
#[case(3)]
#[tokio::test]
async fn existing_name_skips_insert(acme: CustomerName, #[case] existing: u64) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name()
        .times(1)
        .return_once(move |_| Ok(existing));
    repo.expect_insert().times(0);

    let outcome = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect("duplicate is not an error");

    assert_eq!(outcome, RegistrationOutcome::Duplicate);
    assert_eq!(outcome.customer_id(), 0);
}

#[rstest]
#[case(None)]
#[case(Some(0))]
#[case(Some(-5))]
#[tokio::test]
async fn missing_or_non_positive_id_is_insertion_failure(
    acme: CustomerName,
    #[case] returned: Option<i64>,
) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name().return_once(|_| Ok(0));
    repo.expect_insert().times(1).return_once(move |_| Ok(returned));

    let outcome = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect("insertion failure is not an error");

    assert_eq!(outcome, RegistrationOutcome::InsertionFailed);
    assert_eq!(outcome.code().as_i32(), 1000);
    assert_eq!(outcome.customer_id(), 0);
}

#[rstest]
#[tokio::test]
async fn unique_violation_on_insert_is_duplicate(acme: CustomerName) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name().return_once(|_| Ok(0));
    repo.expect_insert()
        .times(1)
        .return_once(|name| Err(CustomerRepositoryError::duplicate_name(name.as_ref())));

    let outcome = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect("lost race maps to duplicate");

    assert_eq!(outcome, RegistrationOutcome::Duplicate);
}

#[rstest]
#[tokio::test]
async fn count_failure_is_internal_and_skips_insert(acme: CustomerName) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name()
        .return_once(|_| Err(CustomerRepositoryError::connection("connection refused")));
    repo.expect_insert().times(0);

    let error = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect_err("store failure is a fault");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("connection refused"));
}

#[rstest]
#[tokio::test]
async fn insert_failure_is_internal(acme: CustomerName) {
    let mut repo = MockCustomerRepository::new();
    repo.expect_count_by_name().return_once(|_| Ok(0));
    repo.expect_insert()
        .return_once(|_| Err(CustomerRepositoryError::query("database error")));

    let error = make_registrar(repo)
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect_err("store failure is a fault");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("database error"));
}

struct StalledRepository;

#[async_trait]
impl CustomerRepository for StalledRepository {
    async fn count_by_name(&self, _name: &CustomerName) -> Result<u64, CustomerRepositoryError> {
        std::future::pending().await
    }

    async fn insert(&self, _name: &CustomerName) -> Result<Option<i64>, CustomerRepositoryError> {
        std::future::pending().await
    }
}

#[rstest]
#[tokio::test]
async fn stalled_store_times_out(acme: CustomerName) {
    let registrar = CustomerRegistrar::new(Arc::new(StalledRepository))
        .with_store_timeout(Duration::from_millis(20));

    let error = registrar
        .register(CreateCustomerRequest::new(acme))
        .await
        .expect_err("timeout is a fault");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("timed out"));
}

#[rstest]
fn default_store_timeout_applies() {
    let registrar = make_registrar(MockCustomerRepository::new());
    assert_eq!(registrar.store_timeout(), DEFAULT_STORE_TIMEOUT);
}
