//! One validated-create procedure shared by the registration services: an
//! ordered list of checks, short-circuited on first failure, then a
//! persistence step. Keeps the three services from growing near-duplicate
//! validate-then-persist bodies.

use std::future::Future;
use std::pin::Pin;

use crate::errors::ServiceError;

/// One check in a registration pipeline. Pure rules are lifted with
/// [`pure`]; storage-backed rules are boxed async blocks.
pub type Check<'a> = Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + 'a>>;

/// Lift an already-evaluated pure rule into the pipeline shape. Evaluation
/// happened at the call site; the pipeline position decides which failure
/// is reported first.
pub fn pure(result: Result<(), ServiceError>) -> Check<'static> {
    Box::pin(async move { result })
}

/// Await `checks` in order, stopping at the first failure. `persist` is
/// awaited only after every check has passed.
pub async fn validated_create<T, F>(checks: Vec<Check<'_>>, persist: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    for check in checks {
        check.await?;
    }
    persist.await
}
