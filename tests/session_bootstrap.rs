use ego::api::ApiConfig;
use ego::auth::{
    ACCESS_TOKEN_KEY, AuthClient, LoginField, LoginForm, RegisterField, RegisterForm, Route,
    SessionContext, SubmitOutcome,
};
use secrecy::ExposeSecret;
use serde_json::json;
use std::{net::TcpListener, time::Duration};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> anyhow::Result<AuthClient> {
    let config = ApiConfig::new(&server.uri())?.with_timeout(Duration::from_secs(5));
    Ok(AuthClient::new(config)?)
}

#[tokio::test]
async fn register_then_login() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "username": "ada",
            "email": "ada@ego.dev",
            "password": "correct-horse"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(json!({
            "email": "ada@ego.dev",
            "password": "correct-horse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "role": "admin",
            "accessToken": "abc.def"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;

    let register = RegisterForm::new();
    register.edit(RegisterField::Username, "ada");
    register.edit(RegisterField::Email, "ada@ego.dev");
    register.edit(RegisterField::Password, "correct-horse");
    let outcome = register.submit(&client).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            route: Route::Login,
            notice: "Registration successful",
        }
    );
    assert!(!register.is_busy());

    let session = SessionContext::new();
    let login = LoginForm::new();
    login.edit(LoginField::Email, "ada@ego.dev");
    login.edit(LoginField::Password, "correct-horse");
    let outcome = login.submit(&client, &session).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            route: Route::Dashboard {
                user_id: "7".to_string()
            },
            notice: "Login successful",
        }
    );
    assert_eq!(
        session
            .get_item(ACCESS_TOKEN_KEY)
            .map(|token| token.expose_secret().to_string())
            .as_deref(),
        Some("abc.def")
    );
    assert_eq!(session.role().as_deref(), Some("admin"));
    assert!(login.status().is_none());
    Ok(())
}

#[tokio::test]
async fn failed_login_leaves_session_empty() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let session = SessionContext::new();
    let login = LoginForm::new();
    login.edit(LoginField::Email, "ada@ego.dev");
    login.edit(LoginField::Password, "not-it");

    let outcome = login.submit(&client, &session).await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Invalid email or password.".to_string())
    );
    assert_eq!(login.status().as_deref(), Some("Invalid email or password."));
    assert!(!session.is_authenticated());
    assert!(!login.is_busy());
    Ok(())
}
