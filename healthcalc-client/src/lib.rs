mod client;

pub use client::{create, Client, ClientImpl, Error, MockClient, Result};
