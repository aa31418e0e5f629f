//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{AcronymRepository, CategoryRepository, UserRepository};
use crate::domain::{AcronymDraft, CategoryDraft, UserDraft, UserId};
use crate::inbound::http::configure;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::InMemoryStore;

/// A fresh, empty in-memory store.
pub fn empty_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new())
}

/// A store holding two users, three acronyms and two categories.
///
/// Users: 1 `ada`, 2 `grace`. Acronyms: 1 `OMG` and 3 `BRB` owned by
/// user 1, 2 `TIL` owned by user 2. Categories: 1 `Funny`, 2 `Teenager`.
pub async fn seeded_store() -> Arc<InMemoryStore> {
    let store = empty_store();
    for (name, username) in [("Ada Lovelace", "ada"), ("Grace Hopper", "grace")] {
        let draft = UserDraft::new(name, username).expect("valid user");
        UserRepository::create(store.as_ref(), &draft)
            .await
            .expect("seed user");
    }
    for (short, long, owner) in [
        ("OMG", "Oh My God", 1),
        ("TIL", "Today I Learned", 2),
        ("BRB", "Be Right Back", 1),
    ] {
        let draft = AcronymDraft::new(short, long, UserId::new(owner)).expect("valid acronym");
        AcronymRepository::create(store.as_ref(), &draft)
            .await
            .expect("seed acronym");
    }
    for name in ["Funny", "Teenager"] {
        let draft = CategoryDraft::new(name).expect("valid category");
        CategoryRepository::create(store.as_ref(), &draft)
            .await
            .expect("seed category");
    }
    store
}

/// Build an application wired to `store`, with tracing and the full API.
pub fn test_app(
    store: Arc<InMemoryStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(HttpStatePorts {
        users: store.clone(),
        acronyms: store.clone(),
        categories: store,
    });
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
