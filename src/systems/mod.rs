//! Background plumbing behind the search surface: the fetch worker thread and
//! the remote search service client.

pub mod search;
pub mod service;
