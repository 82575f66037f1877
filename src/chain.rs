//! Sequencing of dependent API calls.
//!
//! A [`Chain`] is one deferred call plus an optional `prepare_next` function
//! that maps the call's response to extra arguments for the next call.
//! Chains are combined with `|` into a [`ChainExecutor`], which runs them in
//! order and stops right after the first unsuccessful step.
//!
//! ```no_run
//! # use novaposhta_client::{Chain, ChainArgs, Client, Error, response::first_ref};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = Client::new("my-api-key")?;
//! let client = &client;
//!
//! let results = (Chain::new(move |args: ChainArgs| async move {
//!     client.address().search_settlements(args.str("city_name")?, None, None).await
//! })
//! .arg("city_name", "Київ")
//! .prepare_next(|response| {
//!     let settlement = first_ref(response).ok_or(Error::MissingArgument("Ref".into()))?;
//!     Ok(ChainArgs::new().with("settlement_ref", settlement))
//! })
//!     | Chain::new(move |args: ChainArgs| async move {
//!         client
//!             .address()
//!             .search_settlement_streets("Хрещатик", args.str("settlement_ref")?, None)
//!             .await
//!     }))
//! .execute()
//! .await;
//!
//! assert!(results.len() <= 2);
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use log::debug;
use serde_json::{Map, Value};
use std::future::Future;
use std::ops::BitOr;
use std::pin::Pin;
use tokio::runtime::{Builder, Runtime};

/// Named arguments passed to a chain step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainArgs(Map<String, Value>);

impl ChainArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String argument `key`.
    ///
    /// # Errors
    /// [`Error::MissingArgument`] if the key is absent or not a string.
    pub fn str(&self, key: &str) -> Result<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingArgument(key.to_string()))
    }

    /// Copy every entry of `other` over this set, replacing equal keys.
    pub fn merge(&mut self, other: &ChainArgs) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ChainArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Outcome of one executed step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainResult {
    /// The response's `success` flag; `false` on any error.
    pub success: bool,
    /// The response's `data`.
    pub data: Option<Value>,
    pub error: Option<String>,
    /// Arguments produced for the next step.
    pub next_kwargs: Option<ChainArgs>,
}

impl ChainResult {
    fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            next_kwargs: None,
        }
    }
}

type AsyncCall<'a> =
    Box<dyn FnOnce(ChainArgs) -> Pin<Box<dyn Future<Output = Result<Value>> + 'a>> + 'a>;
type BlockingCall<'a> = Box<dyn FnOnce(ChainArgs) -> Result<Value> + 'a>;
type PrepareNext<'a> = Box<dyn FnOnce(&Value) -> Result<ChainArgs> + 'a>;

enum Call<'a> {
    Async(AsyncCall<'a>),
    Blocking(BlockingCall<'a>),
}

/// A single deferred call in a chain.
pub struct Chain<'a> {
    call: Call<'a>,
    kwargs: ChainArgs,
    prepare_next: Option<PrepareNext<'a>>,
}

impl<'a> Chain<'a> {
    /// Step backed by an async call, e.g. a [`crate::Client`] model method.
    pub fn new<F, Fut>(method: F) -> Self
    where
        F: FnOnce(ChainArgs) -> Fut + 'a,
        Fut: Future<Output = Result<Value>> + 'a,
    {
        Self {
            call: Call::Async(Box::new(move |args| Box::pin(method(args)))),
            kwargs: ChainArgs::new(),
            prepare_next: None,
        }
    }

    /// Step backed by a synchronous call, e.g. a [`crate::BlockingClient`] model method.
    pub fn blocking<F>(method: F) -> Self
    where
        F: FnOnce(ChainArgs) -> Result<Value> + 'a,
    {
        Self {
            call: Call::Blocking(Box::new(method)),
            kwargs: ChainArgs::new(),
            prepare_next: None,
        }
    }

    /// Add a static argument.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key, value);
        self
    }

    /// Replace the static arguments.
    pub fn args(mut self, kwargs: ChainArgs) -> Self {
        self.kwargs = kwargs;
        self
    }

    /// Map this step's response to extra arguments for the next step.
    pub fn prepare_next<F>(mut self, prepare: F) -> Self
    where
        F: FnOnce(&Value) -> Result<ChainArgs> + 'a,
    {
        self.prepare_next = Some(Box::new(prepare));
        self
    }

    /// Run the step, merging `prev`'s `next_kwargs` over the static arguments.
    pub async fn execute(self, prev: Option<&ChainResult>) -> ChainResult {
        let args = self.arguments(prev);
        let outcome = match self.call {
            Call::Async(call) => call(args).await,
            Call::Blocking(call) => call(args),
        };
        finish(outcome, self.prepare_next)
    }

    /// Blocking counterpart of [`Chain::execute`].
    ///
    /// Async steps are driven on a current-thread runtime, so this must not
    /// be called from inside an async runtime.
    pub fn execute_blocking(self, prev: Option<&ChainResult>) -> ChainResult {
        self.run_blocking(prev, &mut None)
    }

    /// Run the step, building the runtime in `runtime` on the first async step.
    fn run_blocking(self, prev: Option<&ChainResult>, runtime: &mut Option<Runtime>) -> ChainResult {
        let args = self.arguments(prev);
        let outcome = match self.call {
            Call::Blocking(call) => call(args),
            Call::Async(call) => match shared_runtime(runtime) {
                Ok(runtime) => runtime.block_on(call(args)),
                Err(err) => Err(err),
            },
        };
        finish(outcome, self.prepare_next)
    }

    fn arguments(&self, prev: Option<&ChainResult>) -> ChainArgs {
        let mut args = self.kwargs.clone();
        if let Some(next) = prev.and_then(|p| p.next_kwargs.as_ref()) {
            args.merge(next);
        }
        args
    }
}

impl std::fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.call {
            Call::Async(_) => "async",
            Call::Blocking(_) => "blocking",
        };
        f.debug_struct("Chain")
            .field("call", &kind)
            .field("kwargs", &self.kwargs)
            .field("prepare_next", &self.prepare_next.is_some())
            .finish()
    }
}

fn shared_runtime(slot: &mut Option<Runtime>) -> Result<&Runtime> {
    let runtime = match slot.take() {
        Some(runtime) => runtime,
        None => Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?,
    };
    Ok(slot.insert(runtime))
}

fn finish(outcome: Result<Value>, prepare_next: Option<PrepareNext<'_>>) -> ChainResult {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => return ChainResult::failed(err),
    };

    let success = response.get("success").and_then(Value::as_bool).unwrap_or(false);
    let data = response.get("data").cloned();

    if !success {
        let error = response
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(Value::as_str)
            .map(str::to_string);
        return ChainResult {
            success,
            data,
            error,
            next_kwargs: None,
        };
    }

    let next_kwargs = match prepare_next {
        Some(prepare) => match prepare(&response) {
            Ok(kwargs) => kwargs,
            Err(err) => return ChainResult::failed(err),
        },
        None => ChainArgs::new(),
    };

    ChainResult {
        success,
        data,
        error: None,
        next_kwargs: Some(next_kwargs),
    }
}

/// Ordered list of chain steps.
#[derive(Debug, Default)]
pub struct ChainExecutor<'a> {
    chains: Vec<Chain<'a>>,
}

impl<'a> ChainExecutor<'a> {
    pub fn new(chains: Vec<Chain<'a>>) -> Self {
        Self { chains }
    }

    pub fn push(&mut self, chain: Chain<'a>) {
        self.chains.push(chain);
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Run every step in order, stopping after the first unsuccessful one.
    ///
    /// The returned list holds one result per executed step.
    pub async fn execute(self) -> Vec<ChainResult> {
        let total = self.chains.len();
        let mut results: Vec<ChainResult> = Vec::with_capacity(total);
        for chain in self.chains {
            let result = chain.execute(results.last()).await;
            let stop = !result.success;
            results.push(result);
            if stop {
                debug!("chain stopped at step {} of {total}", results.len());
                break;
            }
        }
        results
    }

    /// Blocking counterpart of [`ChainExecutor::execute`].
    ///
    /// All async steps share one runtime, built when the first of them runs.
    pub fn execute_blocking(self) -> Vec<ChainResult> {
        let total = self.chains.len();
        let mut runtime = None;
        let mut results: Vec<ChainResult> = Vec::with_capacity(total);
        for chain in self.chains {
            let result = chain.run_blocking(results.last(), &mut runtime);
            let stop = !result.success;
            results.push(result);
            if stop {
                debug!("chain stopped at step {} of {total}", results.len());
                break;
            }
        }
        results
    }
}

impl<'a> BitOr for Chain<'a> {
    type Output = ChainExecutor<'a>;

    fn bitor(self, other: Chain<'a>) -> ChainExecutor<'a> {
        ChainExecutor::new(vec![self, other])
    }
}

impl<'a> BitOr<Chain<'a>> for ChainExecutor<'a> {
    type Output = ChainExecutor<'a>;

    fn bitor(mut self, chain: Chain<'a>) -> ChainExecutor<'a> {
        self.push(chain);
        self
    }
}

impl<'a> From<Chain<'a>> for ChainExecutor<'a> {
    fn from(chain: Chain<'a>) -> Self {
        ChainExecutor::new(vec![chain])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ok_response() -> Value {
        json!({"success": true, "data": [{"Ref": "test-ref"}]})
    }

    #[test]
    fn single_step_passes_static_args_and_prepares_next() {
        let seen = Rc::new(RefCell::new(None));
        let seen_in_call = Rc::clone(&seen);

        let result = Chain::blocking(move |args| {
            *seen_in_call.borrow_mut() = Some(args);
            Ok(ok_response())
        })
        .arg("test", "value")
        .prepare_next(|response| {
            assert_eq!(response, &ok_response());
            Ok(ChainArgs::new().with("extracted_ref", "test-ref"))
        })
        .execute_blocking(None);

        assert_eq!(*seen.borrow(), Some(ChainArgs::new().with("test", "value")));
        assert!(result.success);
        assert_eq!(result.data, Some(json!([{"Ref": "test-ref"}])));
        assert_eq!(result.error, None);
        assert_eq!(
            result.next_kwargs,
            Some(ChainArgs::new().with("extracted_ref", "test-ref"))
        );
    }

    #[test]
    fn previous_kwargs_merge_over_static_args() {
        let seen = Rc::new(RefCell::new(None));
        let seen_in_call = Rc::clone(&seen);
        let prev = ChainResult {
            success: true,
            data: Some(json!("prev_data")),
            error: None,
            next_kwargs: Some(
                ChainArgs::new()
                    .with("additional", "value")
                    .with("shared", "from-prev"),
            ),
        };

        Chain::blocking(move |args| {
            *seen_in_call.borrow_mut() = Some(args);
            Ok(ok_response())
        })
        .arg("base", "value")
        .arg("shared", "static")
        .execute_blocking(Some(&prev));

        assert_eq!(
            *seen.borrow(),
            Some(
                ChainArgs::new()
                    .with("base", "value")
                    .with("additional", "value")
                    .with("shared", "from-prev")
            )
        );
    }

    #[test]
    fn call_error_becomes_failed_result() {
        let result = Chain::blocking(|_| Err(Error::ApiRequest("Test error".into())))
            .prepare_next(|_| panic!("prepare_next must not run"))
            .execute_blocking(None);

        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.error.as_deref(), Some("API request failed: Test error"));
        assert_eq!(result.next_kwargs, None);
    }

    #[test]
    fn prepare_next_error_becomes_failed_result() {
        let result = Chain::blocking(|_| Ok(json!({"success": true, "data": []})))
            .prepare_next(|response| {
                let r = crate::response::first_ref(response)
                    .ok_or(Error::MissingArgument("Ref".into()))?;
                Ok(ChainArgs::new().with("ref", r))
            })
            .execute_blocking(None);

        assert!(!result.success);
        assert!(result.error.unwrap().contains("Ref"));
    }

    #[test]
    fn unsuccessful_response_reports_first_error() {
        let result = Chain::blocking(|_| {
            Ok(json!({"success": false, "data": [], "errors": ["CityName is empty"]}))
        })
        .execute_blocking(None);

        assert!(!result.success);
        assert_eq!(result.data, Some(json!([])));
        assert_eq!(result.error.as_deref(), Some("CityName is empty"));
        assert_eq!(result.next_kwargs, None);
    }

    #[test]
    fn executor_stops_after_first_failure() {
        let calls = Rc::new(RefCell::new(0));
        let step = |success: bool| {
            let calls = Rc::clone(&calls);
            Chain::blocking(move |_| {
                *calls.borrow_mut() += 1;
                Ok(json!({"success": success, "data": []}))
            })
        };

        let results = (step(true) | step(false) | step(true)).execute_blocking();

        assert_eq!(results.len(), 2);
        assert!(results[0].success);
        assert!(!results[1].success);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn executor_combination() {
        let mut executor = ChainExecutor::from(Chain::blocking(|_| Ok(ok_response())));
        assert_eq!(executor.len(), 1);
        executor = executor | Chain::blocking(|_| Ok(ok_response()));
        executor.push(Chain::blocking(|_| Ok(ok_response())));
        assert_eq!(executor.len(), 3);
        assert!(!executor.is_empty());
    }

    #[test]
    fn empty_executor_returns_no_results() {
        assert!(ChainExecutor::default().execute_blocking().is_empty());
    }

    #[test]
    fn blocking_executor_runs_async_steps_on_one_runtime() {
        let (tx, rx) = tokio::sync::oneshot::channel();

        let results = (Chain::new(move |_| async move {
            tokio::spawn(async move {
                let _ = tx.send("handed over");
            });
            Ok::<_, Error>(json!({"success": true}))
        })
            | Chain::new(move |_| async move {
                let message = rx
                    .await
                    .map_err(|_| Error::MissingArgument("message".into()))?;
                Ok::<_, Error>(json!({"success": true, "data": message}))
            }))
        .execute_blocking();

        assert_eq!(results.len(), 2);
        assert!(results[1].success);
        assert_eq!(results[1].data, Some(json!("handed over")));
    }

    #[tokio::test]
    async fn async_steps_feed_each_other() {
        let results = (Chain::new(|_| async {
            Ok::<_, Error>(json!({"success": true, "data": [{"Ref": "settlement-ref"}]}))
        })
        .arg("city_name", "Київ")
        .prepare_next(|x| {
            Ok(ChainArgs::new().with("settlement_ref", x["data"][0]["Ref"].clone()))
        })
            | Chain::new(|args: ChainArgs| async move {
                assert_eq!(args.str("settlement_ref")?, "settlement-ref");
                Ok::<_, Error>(json!({"success": true, "data": [{"Ref": "street-ref"}]}))
            })
            .prepare_next(|x| Ok(ChainArgs::new().with("street_ref", x["data"][0]["Ref"].clone()))))
        .execute()
        .await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.success));
        assert_eq!(
            results[0].next_kwargs,
            Some(ChainArgs::new().with("settlement_ref", "settlement-ref"))
        );
        assert_eq!(
            results[1].next_kwargs,
            Some(ChainArgs::new().with("street_ref", "street-ref"))
        );
    }

    #[tokio::test]
    async fn async_executor_stops_on_missing_argument() {
        let results = (Chain::new(|_| async { Ok::<_, Error>(json!({"success": true})) })
            | Chain::new(|args: ChainArgs| async move {
                args.str("settlement_ref")?;
                Ok::<_, Error>(json!({"success": true}))
            })
            | Chain::blocking(|_| panic!("must not run")))
        .execute()
        .await;

        assert_eq!(results.len(), 2);
        assert!(!results[1].success);
        assert_eq!(
            results[1].error.as_deref(),
            Some("missing or invalid argument `settlement_ref`")
        );
    }
}
