//! 共通HTTPヘルパー

use crate::config::BasicCredentials;
use crate::error::{Result, SeedError};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

/// Basic認証付きでGETし、成功ステータスのレスポンスだけを返す
pub async fn get_checked(
    client: &Client,
    url: &str,
    credentials: &BasicCredentials,
    accept: Option<&str>,
) -> Result<Response> {
    let response = authorized_get(client, url, credentials, accept).send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(api_error(status, message));
    }

    Ok(response)
}

/// Basic認証ヘッダー付きのGETリクエストを組み立てる
fn authorized_get(
    client: &Client,
    url: &str,
    credentials: &BasicCredentials,
    accept: Option<&str>,
) -> RequestBuilder {
    let req = client
        .get(url)
        .basic_auth(credentials.username(), Some(credentials.password()));

    match accept {
        Some(accept) => req.header(reqwest::header::ACCEPT, accept),
        None => req,
    }
}

fn api_error(status: StatusCode, message: String) -> SeedError {
    SeedError::CatalogApi {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
