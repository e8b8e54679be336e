// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::domain::search::AdapterError;
use queryforge::{AdapterFactory, EngineId};
use std::thread;

#[test]
fn test_lookup_by_name_is_case_insensitive() {
    let adapter = AdapterFactory::get_adapter_by_name("GitHub").unwrap();
    assert_eq!(adapter.engine(), EngineId::GitHub);
}

#[test]
fn test_unknown_name_is_a_configuration_error() {
    match AdapterFactory::get_adapter_by_name("") {
        Err(AdapterError::UnknownEngine(name)) => assert_eq!(name, ""),
        Ok(adapter) => panic!("unexpected adapter {}", adapter.name()),
    }
}

#[test]
fn test_concurrent_lookups_see_the_same_registry() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let engine = EngineId::ALL[i % EngineId::ALL.len()];
                AdapterFactory::get_adapter(engine).engine()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), EngineId::ALL[i]);
    }
}
