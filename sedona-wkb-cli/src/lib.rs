// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

pub mod exec;
pub mod print_format;

use thiserror::Error;

pub const SEDONA_WKB_CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Wkb(#[from] sedona_wkb::SedonaWkbError),
    #[error("Invalid geometry JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    IO(#[from] std::io::Error),
}
