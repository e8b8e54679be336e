// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use queryforge::infrastructure::search::page_config::all_configs;
use queryforge::infrastructure::search::SearchEngineConfig;
use queryforge::{AdapterFactory, EngineId, SearchParams};

#[test]
fn test_every_engine_has_a_page_config() {
    assert_eq!(all_configs().len(), EngineId::ALL.len());
    for engine in EngineId::ALL {
        assert_eq!(SearchEngineConfig::for_engine(engine).engine, engine);
    }
}

#[test]
fn test_built_urls_are_recognised_as_results_pages() {
    for engine in EngineId::ALL {
        let url = AdapterFactory::get_adapter(engine).build_query(&SearchParams::new("rust", engine));
        assert!(
            SearchEngineConfig::for_engine(engine).is_results_page(&url),
            "{} not recognised: {}",
            engine,
            url
        );
    }
}
