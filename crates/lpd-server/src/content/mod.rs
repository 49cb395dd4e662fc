//! Launcher content routes: the four JSON documents, the guarded admin
//! mutation, and raw file downloads.
pub mod handlers;
