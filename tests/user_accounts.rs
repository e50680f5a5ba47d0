use overflow_core::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use overflow_core::application::error::ApplicationError;
use overflow_core::domain::errors::DomainError;
use overflow_core::domain::pagination::PageRequest;

mod support;

use support::TestApp;

fn register(username: &str, password: &str) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn register_then_login_issues_a_token_for_that_user() {
    let app = TestApp::new();

    let user = app
        .services
        .user_commands
        .register(register("ferris", "crab1234"))
        .await
        .unwrap();
    assert_eq!(user.reputation, 0);

    let login = app
        .services
        .user_commands
        .login(LoginUserCommand {
            username: "ferris".into(),
            password: "crab1234".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.id, user.id);

    let principal = app.services.authenticate(&login.token.token).await.unwrap();
    assert_eq!(i64::from(principal.id), user.id);
    assert_eq!(principal.username, "ferris");
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    let app = TestApp::new();
    app.services
        .user_commands
        .register(register("ferris", "crab1234"))
        .await
        .unwrap();

    let err = app
        .services
        .user_commands
        .register(register("ferris", "other5678"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn weak_passwords_and_short_names_are_rejected() {
    let app = TestApp::new();

    let err = app
        .services
        .user_commands
        .register(register("ferris", "onlyletters"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = app
        .services
        .user_commands
        .register(register("fe", "crab1234"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
    assert!(app.store.state().users.is_empty());
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.services
        .user_commands
        .register(register("ferris", "crab1234"))
        .await
        .unwrap();

    for (username, password) in [("ferris", "crab9999"), ("nobody", "crab1234")] {
        let err = app
            .services
            .user_commands
            .login(LoginUserCommand {
                username: username.into(),
                password: password.into(),
            })
            .await
            .err()
            .expect("login should fail");
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}

#[tokio::test]
async fn users_are_ranked_by_reputation() {
    let app = TestApp::new();
    app.store.add_user("low", 1);
    let top = app.store.add_user("top", 50);
    app.store.add_user("mid", 15);

    let listed = app
        .services
        .user_queries
        .list_users(PageRequest::new(2, 0))
        .await
        .unwrap();

    assert_eq!(listed.users_count, 3);
    let names: Vec<&str> = listed.users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["top", "mid"]);
    assert_eq!(listed.users[0].id, i64::from(top.id));
}
