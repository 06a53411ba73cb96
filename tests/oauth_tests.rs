//! OAuth flow and JSAPI ticket behaviour

use wechat_mock_sdk::api::oauth::{AUTHORIZE_ENDPOINT, DEFAULT_STATE};
use wechat_mock_sdk::api::OAuthScope;
use wechat_mock_sdk::random::{FixedRandom, RngSource};
use wechat_mock_sdk::{get_jsapi_ticket, WechatError, WechatMock};

fn create_test_client() -> WechatMock {
    WechatMock::builder()
        .appid("test_app_123")
        .secret("test_secret_xyz")
        .random(RngSource::seeded(99))
        .build()
        .unwrap()
}

#[test]
fn test_oauth_authorize() {
    let client = create_test_client();

    let url = client.oauth_authorize_url(OAuthScope::Base, Some("my_state_123"));

    assert!(url.starts_with(AUTHORIZE_ENDPOINT));
    assert!(url.contains("appid=test_app_123"));
    assert!(url.contains("scope=snsapi_base"));
    assert!(url.contains("state=my_state_123"));
    assert!(url.contains("response_type=code"));
    assert!(url.ends_with("#wechat_redirect"));
}

#[test]
fn test_oauth_authorize_defaults() {
    let client = create_test_client();

    let url = client.oauth_authorize_url(OAuthScope::default(), None);

    assert!(url.contains("scope=snsapi_userinfo"));
    assert!(url.contains(&format!("state={DEFAULT_STATE}")));
    assert!(url.contains("redirect_uri=https://your_mock_redirect_uri.com/callback&"));
}

#[test]
fn test_oauth_authorize_keeps_values_verbatim() {
    let client = WechatMock::new("wx app:1", "s").unwrap();

    let url = client.oauth_authorize_url(OAuthScope::Base, Some("custom state/1&x"));

    assert!(url.contains("appid=wx app:1&"));
    assert!(url.contains("state=custom state/1&x#wechat_redirect"));
}

#[test]
fn test_oauth_authorize_is_pure() {
    let client = create_test_client();

    let first = client.oauth_authorize_url(OAuthScope::Base, Some("s"));
    let second = client.oauth_authorize_url(OAuthScope::Base, Some("s"));

    assert_eq!(first, second);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_oauth_exchange_code_success() {
    let client = create_test_client();

    let response = client
        .oauth_exchange_code("mock_auth_code_test123")
        .await
        .unwrap();

    assert!(response.is_success());
    let token = response.into_result().unwrap();
    assert!(token.access_token.starts_with("user_mock_token_"));
    assert!(token.refresh_token.starts_with("user_mock_refresh_token_"));
    assert_eq!(token.expires_in, 7200);
    assert_eq!(token.scope, OAuthScope::UserInfo);
    assert!(client.users().contains(&token.openid));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_oauth_exchange_code_invalid() {
    let client = create_test_client();

    let err = client
        .oauth_exchange_code("invalid_code_format")
        .await
        .unwrap_err();

    assert!(matches!(err, WechatError::InvalidArgument { code: Some(40029), .. }));
    assert!(err.to_string().contains("Invalid authorization code"));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_oauth_exchange_code_pinned_user_and_unionid() {
    let client = WechatMock::builder()
        .random(FixedRandom::new(0.5).with_index(1).with_coin(true))
        .build()
        .unwrap();

    let token = client
        .oauth_exchange_code("mock_auth_code_abcdef12345")
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(token.openid, "user_open_id_456");
    assert_eq!(
        token.unionid.as_deref(),
        Some("mock_union_id_for_user_open_id_456")
    );
    assert_eq!(token.access_token, "user_mock_token_1000");
}

#[tokio::test]
async fn test_oauth_exchange_code_without_unionid() {
    let client = WechatMock::builder()
        .random(FixedRandom::new(0.5).with_coin(false))
        .build()
        .unwrap();

    let response = client
        .oauth_exchange_code("mock_auth_code_x")
        .await
        .unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["openid"], "user_open_id_123");
    assert_eq!(value["scope"], "snsapi_userinfo");
    assert!(value["unionid"].is_null());
}

#[tokio::test]
async fn test_oauth_then_user_info() {
    let client = create_test_client();

    let token = client
        .oauth_exchange_code("mock_auth_code_abcdef12345")
        .await
        .unwrap()
        .into_result()
        .unwrap();
    let user = client.get_user_info(&token.openid).await.unwrap();

    assert_eq!(user.openid, token.openid);
}

#[tokio::test]
async fn test_get_jsapi_ticket() {
    let client = create_test_client();

    let ticket = get_jsapi_ticket(&client).await;

    assert!(ticket.starts_with("mock_jsapi_ticket_"));
    assert!(client.cached_access_token().await.is_some());
}

#[tokio::test]
async fn test_get_jsapi_ticket_refreshes_expired_token() {
    let client = create_test_client();
    let token = client.get_access_token().await;
    client.expire_token().await;

    get_jsapi_ticket(&client).await;

    let refreshed = client.cached_access_token().await.unwrap();
    assert_ne!(refreshed, token);
}
