// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod adapter_contract_test;
mod factory_test;
mod page_config_test;
