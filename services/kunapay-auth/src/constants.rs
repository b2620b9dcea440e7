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

// Headers used by the KunaPay API.
/// Header carrying the request nonce.
pub const NONCE: &str = "nonce";
/// Header carrying the hex encoded HMAC-SHA384 signature.
pub const SIGNATURE: &str = "signature";
/// Header carrying the public key in signature mode.
pub const PUBLIC_KEY: &str = "public-key";
/// Header carrying the static API key.
pub const API_KEY: &str = "api-key";

// Env values used by the KunaPay API.
/// Env var holding the public key.
pub const KUNAPAY_PUBLIC_KEY: &str = "KUNAPAY_PUBLIC_KEY";
/// Env var holding the private key.
pub const KUNAPAY_PRIVATE_KEY: &str = "KUNAPAY_PRIVATE_KEY";
/// Env var holding the static API key.
pub const KUNAPAY_API_KEY: &str = "KUNAPAY_API_KEY";

/// Body signed when a request carries no payload.
pub const EMPTY_BODY: &[u8] = b"{}";
