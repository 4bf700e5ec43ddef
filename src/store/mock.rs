//! # Mock Store
//!
//! [`MockStore<T>`] hands out a real [`StoreClient<T>`] whose requests are
//! answered from a queue of expectations instead of a [`StoreActor`]. Use it
//! to test use cases without running stores, to inject failures that are
//! awkward to provoke for real (a closed store, a rejected write), and to prove
//! that a code path made *no* store request at all.
//!
//! | | `MockStore` | real `StoreActor` |
//! |---|---|---|
//! | State | none, replies are scripted | real rows |
//! | Error injection | `return_err(..)` | needs the right data |
//! | Use for | use-case logic around a client | the store and full flows |
//!
//! ```rust
//! use webshop::model::{CartItem, CartItemId, ItemId, NewCartItem};
//! use webshop::store::mock::MockStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<CartItem>::new();
//!     mock.expect_create().return_ok(CartItemId(7));
//!
//!     let client = mock.client();
//!     let id = client
//!         .create(NewCartItem {
//!             user_id: "testuser".into(),
//!             item_id: ItemId(1),
//!             item_name: "Laptop".into(),
//!             unit_price: "999.99".parse().unwrap(),
//!             quantity: 1,
//!         })
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(id, CartItemId(7));
//!     assert_eq!(mock.take_created().len(), 1);
//!     mock.verify();
//! }
//! ```
//!
//! Requests that arrive with no matching expectation are not answered: the
//! caller sees [`StoreError::Dropped`] and [`MockStore::verify`] fails.
//!
//! [`StoreActor`]: crate::store::StoreActor

use crate::store::{StoreClient, StoreError, StoreRequest, StoredEntity};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

type Outcome<R, T> = Result<R, StoreError<<T as StoredEntity>::Error>>;

enum Expectation<T: StoredEntity> {
    Create(Outcome<T::Id, T>),
    Upsert(Outcome<T::Id, T>),
    Get(T::Id, Outcome<Option<T>, T>),
    List(Outcome<Vec<T>, T>),
    Update(T::Id, Outcome<T, T>),
    Delete(T::Id, Outcome<(), T>),
    DeleteMatching(Outcome<usize, T>),
    Action(T::Id, Outcome<T::ActionResult, T>),
}

struct Journal<T: StoredEntity> {
    expectations: VecDeque<Expectation<T>>,
    received: Vec<&'static str>,
    unexpected: Vec<String>,
    created: Vec<T::Create>,
}

impl<T: StoredEntity> Journal<T> {
    fn answer(&mut self, request: StoreRequest<T>) {
        self.received.push(request.kind());
        let expectation = self.expectations.pop_front();

        match (request, expectation) {
            (StoreRequest::Create { params, respond_to }, Some(Expectation::Create(reply))) => {
                self.created.push(params);
                let _ = respond_to.send(reply);
            }
            (StoreRequest::Upsert { params, respond_to }, Some(Expectation::Upsert(reply))) => {
                self.created.push(params);
                let _ = respond_to.send(reply);
            }
            (StoreRequest::Get { id, respond_to }, Some(Expectation::Get(expected, reply)))
                if id == expected =>
            {
                let _ = respond_to.send(reply);
            }
            (StoreRequest::List { respond_to, .. }, Some(Expectation::List(reply))) => {
                let _ = respond_to.send(reply);
            }
            (
                StoreRequest::Update { id, respond_to, .. },
                Some(Expectation::Update(expected, reply)),
            ) if id == expected => {
                let _ = respond_to.send(reply);
            }
            (StoreRequest::Delete { id, respond_to }, Some(Expectation::Delete(expected, reply)))
                if id == expected =>
            {
                let _ = respond_to.send(reply);
            }
            (
                StoreRequest::DeleteMatching { respond_to, .. },
                Some(Expectation::DeleteMatching(reply)),
            ) => {
                let _ = respond_to.send(reply);
            }
            (
                StoreRequest::Action { id, respond_to, .. },
                Some(Expectation::Action(expected, reply)),
            ) if id == expected => {
                let _ = respond_to.send(reply);
            }
            (request, _) => {
                self.unexpected.push(format!("{request:?}"));
            }
        }
    }
}

/// A scripted stand-in for a store.
pub struct MockStore<T: StoredEntity> {
    client: StoreClient<T>,
    journal: Arc<Mutex<Journal<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoredEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(64);
        let journal = Arc::new(Mutex::new(Journal {
            expectations: VecDeque::new(),
            received: Vec::new(),
            unexpected: Vec::new(),
            created: Vec::new(),
        }));

        let shared = journal.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .answer(request);
            }
        });

        Self {
            client: StoreClient::new(sender),
            journal,
            _handle: handle,
        }
    }

    /// A client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    pub fn expect_upsert(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Upsert)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |reply| Expectation::Get(id, reply))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |reply| Expectation::Update(id, reply))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |reply| Expectation::Delete(id, reply))
    }

    pub fn expect_delete_matching(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Expectation::DeleteMatching)
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |reply| Expectation::Action(id, reply))
    }

    /// Kinds of every request received so far, in arrival order.
    pub fn received(&self) -> Vec<&'static str> {
        self.journal().received.clone()
    }

    /// Drains the payloads of every `Create` and `Upsert` answered so far.
    pub fn take_created(&self) -> Vec<T::Create> {
        std::mem::take(&mut self.journal().created)
    }

    /// Panics unless every expectation was consumed and no request went unanswered.
    pub fn verify(&self) {
        let journal = self.journal();
        if !journal.unexpected.is_empty() {
            panic!("unexpected store requests: {:?}", journal.unexpected);
        }
        if !journal.expectations.is_empty() {
            panic!(
                "not all expectations were met, {} remaining",
                journal.expectations.len()
            );
        }
    }

    fn builder<R>(
        &mut self,
        make: impl FnOnce(Outcome<R, T>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            journal: self.journal.clone(),
            make: Box::new(make),
            _reply: PhantomData,
        }
    }

    fn journal(&self) -> MutexGuard<'_, Journal<T>> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Completes an expectation with the reply the mock will send.
pub struct ExpectationBuilder<T: StoredEntity, R> {
    journal: Arc<Mutex<Journal<T>>>,
    make: Box<dyn FnOnce(Outcome<R, T>) -> Expectation<T>>,
    _reply: PhantomData<R>,
}

impl<T: StoredEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError<T::Error>) {
        self.push(Err(error));
    }

    fn push(self, reply: Outcome<R, T>) {
        let expectation = (self.make)(reply);
        self.journal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .expectations
            .push_back(expectation);
    }
}
