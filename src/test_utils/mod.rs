#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod records;

pub(crate) use http::{TEST_AUTHORIZATION, authorized_get, get_test_server};
pub(crate) use records::{create_test_transaction, test_message};
