//! The `taskbox` library crate.
//!
//! A minimal multi-user task-list backend: accounts sign up and log in with
//! bcrypt-hashed credentials, and each account owns a flat list of task
//! records it can create, list, update, and delete. All state lives in an
//! injected document store ([`store::Store`]); the handlers themselves hold
//! no shared mutable state.
//!
//! The crate is split the usual way: domain types in [`models`], the
//! credential primitives and auth payloads in [`auth`], the storage backend
//! in [`store`], HTTP handlers in [`routes`], and the error taxonomy in
//! [`error`]. The binary (`main.rs`) wires these together.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
