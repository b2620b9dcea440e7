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

//! Hash related utils.

use hmac::Hmac;
use hmac::Mac;
use sha2::Sha384;

/// Hex encoded HMAC with SHA384 hash.
///
/// Output is 96 lowercase hex characters.
pub fn hex_hmac_sha384(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha384>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Hex encoded HMAC with SHA384 over several parts fed in order.
///
/// Equivalent to `hex_hmac_sha384(key, &parts.concat())` without building the
/// concatenated buffer.
pub fn hex_hmac_sha384_parts(key: &[u8], parts: &[&[u8]]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha384>::new_from_slice(key).unwrap();
    for part in parts {
        h.update(part);
    }

    hex::encode(h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // RFC 4231 test case 2.
    #[test]
    fn test_hex_hmac_sha384_rfc4231() {
        assert_eq!(
            hex_hmac_sha384(b"Jefe", b"what do ya want for nothing?"),
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
             8e2240ca5e69e2c78b3239ecfab21649"
        );
    }

    #[test]
    fn test_hex_hmac_sha384_len() {
        assert_eq!(hex_hmac_sha384(b"key", b"content").len(), 96);
    }

    #[test]
    fn test_parts_match_concat() {
        let key = b"priv";
        let whole = hex_hmac_sha384(key, b"/v1/withdraw1700000000000{}");
        let parts = hex_hmac_sha384_parts(key, &[b"/v1/withdraw", b"1700000000000", b"{}"]);

        assert_eq!(whole, parts);
        assert_eq!(whole, whole.to_lowercase());
    }
}
