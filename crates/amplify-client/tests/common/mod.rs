/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

#![allow(dead_code)]

use amplify_client::{AmplifyClient, Config};
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER: &str = "reporting@example.com";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "tok-123";

/// Answer the basic-auth login with a session token, exactly once
pub async fn mount_login(server: &MockServer) {
  Mock::given(method("GET"))
    .and(path("/login"))
    .and(basic_auth(USER, PASSWORD))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "OB-TOKEN-V1": TOKEN })))
    .expect(1)
    .mount(server)
    .await;
}

pub fn config_for(server: &MockServer) -> Config {
  Config::new(USER, PASSWORD, server.uri())
}

/// Log a client in against the mock server
pub async fn logged_in_client(server: &MockServer) -> AmplifyClient {
  mount_login(server).await;
  AmplifyClient::new(config_for(server)).await.expect("login against mock server")
}
