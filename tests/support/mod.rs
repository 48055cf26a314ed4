#![allow(dead_code)]

pub mod http_stub;
