//! Basic usage example for wechat-mock-sdk
//!
//! Walks through every mock operation once.
//!
//! Run with: cargo run --example basic_usage

use wechat_mock_sdk::{api::OAuthScope, get_jsapi_ticket, latency::SimulatedLatency, WechatMock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let wechat = WechatMock::builder()
        .appid("my_test_app")
        .secret("my_test_secret")
        .latency(SimulatedLatency::realistic())
        .build()?;

    println!("Client created for AppID: {}", wechat.appid());

    println!("\n--- Sending Messages ---");
    let response = wechat
        .send_text_message("user_open_id_123", "Hello Alice from Mock WeChat!")
        .await?;
    println!("Response (Alice): {}", serde_json::to_string(&response)?);

    let response = wechat.send_text_message("unknown_user", "Hello?").await?;
    println!("Response (Unknown): {}", serde_json::to_string(&response)?);

    if let Err(e) = wechat.send_text_message("user_open_id_123", "").await {
        println!("Send Message Error: {}", e);
    }

    println!("\n--- Simulating Payment ---");
    let payment = wechat
        .simulate_payment("user_open_id_456", 199, "Coffee Purchase")
        .await?;
    println!("Payment Response: {}", serde_json::to_string(&payment)?);

    if let Err(e) = wechat
        .simulate_payment("user_open_id_123", -50, "Invalid Amount")
        .await
    {
        println!("Payment Error: {}", e);
    }

    println!("\n--- Getting User Info ---");
    if let Some(alice) = wechat.get_user_info("user_open_id_123").await {
        println!("Alice's Info: Nickname - {}, City - {}", alice.nickname, alice.city);
    }
    println!(
        "Non Existent User Info: {:?}",
        wechat.get_user_info("non_existent_user_id").await
    );

    println!("\n--- Simulating OAuth ---");
    let url = wechat.oauth_authorize_url(OAuthScope::UserInfo, Some("custom_state_123"));
    println!("Please visit (simulated): {}", url);

    match wechat
        .oauth_exchange_code("mock_auth_code_abcdef12345")
        .await
    {
        Ok(response) => {
            println!("OAuth Tokens: {}", serde_json::to_string(&response)?);
            if let Some(token) = response.data {
                println!(
                    "Authenticated User Info: {:?}",
                    wechat.get_user_info(&token.openid).await
                );
            }
        }
        Err(e) => println!("OAuth Error: {}", e),
    }

    println!("\n--- JSAPI Ticket ---");
    println!("JSAPI Ticket: {}", get_jsapi_ticket(&wechat).await);

    println!("\n--- Access Token Refresh ---");
    println!("Current Token: {:?}", wechat.cached_access_token().await);
    wechat.expire_token().await;
    wechat
        .send_text_message("user_open_id_123", "Testing token refresh.")
        .await?;
    println!("New Token: {:?}", wechat.cached_access_token().await);

    Ok(())
}
