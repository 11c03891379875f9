//! Core library for the addressbook-export command line application.
//!
//! The library turns an address book store (people joined one-to-many
//! against their phone numbers and email addresses) into a flat contact list
//! written as a spreadsheet and a CSV file. Store access lives under
//! [`addressbook::contacts::store`], the transform stages inside
//! [`addressbook::contacts::pipeline`], the output sinks in
//! [`addressbook::contacts::io`], and the run orchestration under
//! [`addressbook::contacts::export`].

pub mod addressbook;

pub use addressbook::contacts::{
    ExportError, Result, config, error, export, io, logging, model, pipeline, store,
};
