// Unused results is more often than not an error
#![deny(unused_must_use)]
#![deny(unused_variables)]
#![deny(unused_imports)]
#![deny(dead_code)]
extern crate park;
#[macro_use]
extern crate serde_json;
