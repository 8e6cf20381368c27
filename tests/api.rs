mod helpers;

use helpers::setup::spawn_app;
use helpers::utils::{create_input, http_context, user_ids};
use user_admin_api_structs::update_user;
use user_admin_infra::{
    test_support::sample_user, GatewayError, HttpUserGateway, IUserGateway, Route,
};
use user_admin_pages::{
    DeleteOutcome, EditUserPage, LoadOutcome, SubmitOutcome, TextField, UserListPage,
};
use user_admin_sdk::{APIErrorVariant, Job, UpdateUserInput, ID};

#[actix_web::test]
async fn test_list_users_empty() {
    let (_, sdk) = spawn_app(Vec::new()).await;
    let users = sdk.user.list_all().await.expect("Expected to list users");
    assert!(users.is_empty());
}

#[actix_web::test]
async fn test_create_user() {
    let (app, sdk) = spawn_app(Vec::new()).await;
    let user = sdk
        .user
        .create(create_input("Anna", "Kiss"))
        .await
        .expect("Expected to create user");
    assert_eq!(user.firstname, "Anna");
    assert_eq!(user.job, Job::Baker);
    assert!(user.active);

    let fetched = sdk.user.get(user.id).await.expect("Expected to get user");
    assert_eq!(fetched, user);
    assert_eq!(app.users.users().len(), 1);
}

#[actix_web::test]
async fn test_created_users_get_distinct_ids() {
    let (_, sdk) = spawn_app(Vec::new()).await;
    let first = sdk.user.create(create_input("Anna", "Kiss")).await.unwrap();
    let second = sdk.user.create(create_input("Bela", "Nagy")).await.unwrap();
    assert_ne!(first.id, second.id);

    let users = sdk.user.list_all().await.unwrap();
    assert_eq!(user_ids(&users), vec![first.id.inner(), second.id.inner()]);
}

#[actix_web::test]
async fn test_get_missing_user() {
    let (_, sdk) = spawn_app(vec![sample_user(1)]).await;
    let err = sdk
        .user
        .get(ID::new(42))
        .await
        .expect_err("Expected user to be missing");
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_create_invalid_user() {
    let (app, sdk) = spawn_app(Vec::new()).await;
    let mut input = create_input("Anna", "K");
    input.telephone = "1".repeat(129);

    let err = sdk
        .user
        .create(input)
        .await
        .expect_err("Expected the payload to be rejected");
    match err.variant {
        APIErrorVariant::BadClientData(Some(body)) => {
            assert_eq!(body.status, 400);
            assert_eq!(
                body.field_messages("lastname").collect::<Vec<_>>(),
                vec!["Minimum 2 characters required"]
            );
            assert_eq!(
                body.field_messages("telephone").collect::<Vec<_>>(),
                vec!["Maximum 128 characters allowed"]
            );
            assert_eq!(body.field_messages("firstname").count(), 0);
        }
        variant => panic!("Expected bad client data, got {:?}", variant),
    }
    assert!(app.users.users().is_empty());
}

#[actix_web::test]
async fn test_update_user() {
    let (_, sdk) = spawn_app(vec![sample_user(1)]).await;
    let body = update_user::RequestBody {
        firstname: "Anna".into(),
        lastname: "Kiss".into(),
        address: String::new(),
        telephone: String::new(),
        job: Job::Butcher,
        active: false,
    };
    let user = sdk
        .user
        .update(UpdateUserInput {
            user_id: ID::new(1),
            body: body.clone(),
        })
        .await
        .expect("Expected to update user");
    assert_eq!(user.id, ID::new(1));
    assert_eq!(user.lastname, "Kiss");
    assert_eq!(user.address, "");
    assert!(!user.active);

    let err = sdk
        .user
        .update(UpdateUserInput {
            user_id: ID::new(2),
            body,
        })
        .await
        .expect_err("Expected user to be missing");
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::test]
async fn test_delete_user() {
    let (app, sdk) = spawn_app(vec![sample_user(1), sample_user(2)]).await;
    assert!(sdk.user.delete(ID::new(1)).await.is_ok());
    assert_eq!(user_ids(&sdk.user.list_all().await.unwrap()), vec![2]);

    let err = sdk.user.delete(ID::new(1)).await.expect_err("Already deleted");
    assert_eq!(err.variant, APIErrorVariant::NotFound);
    assert_eq!(app.users.users().len(), 1);
}

#[actix_web::test]
async fn test_gateway_maps_api_errors() {
    let (app, _) = spawn_app(Vec::new()).await;
    let gateway = HttpUserGateway::new(&app.address);

    assert_eq!(
        gateway.get(ID::new(9)).await,
        Err(GatewayError::NotFound(ID::new(9)))
    );
    match gateway.create(create_input("A", "Kiss")).await {
        Err(GatewayError::Validation(body)) => {
            assert_eq!(body.errors.len(), 1);
            assert_eq!(body.errors[0].field, "firstname");
        }
        res => panic!("Expected a validation error, got {:?}", res),
    }
}

#[actix_web::test]
async fn test_gateway_unreachable_server() {
    let gateway = HttpUserGateway::new("http://127.0.0.1:1/api/users");
    assert!(matches!(
        gateway.list_all().await,
        Err(GatewayError::Transport(_))
    ));
}

#[actix_web::test]
async fn test_list_page_over_http() {
    let (app, _) = spawn_app((1..=7).map(sample_user).collect()).await;
    let test = http_context(&app.address, true);
    let mut page = UserListPage::new(test.ctx.clone());

    assert_eq!(page.reload().await, LoadOutcome::Loaded(7));
    assert_eq!(page.total_pages(), 2);
    assert!(page.page(2));
    let last = page.visible_slice()[1].clone();
    assert_eq!(last.id, ID::new(7));

    assert_eq!(page.delete_user(&last).await, DeleteOutcome::Deleted);
    assert_eq!(page.total_pages(), 2);
    assert_eq!(page.visible_slice().len(), 1);
    assert_eq!(app.users.users().len(), 6);
    assert_eq!(
        test.dialogs.questions(),
        vec!["Are you sure you want to delete the following user: Last7 First7?".to_string()]
    );
}

#[actix_web::test]
async fn test_edit_page_over_http() {
    let (app, _) = spawn_app(vec![sample_user(1)]).await;
    let test = http_context(&app.address, true);
    let mut page = EditUserPage::new(test.ctx.clone(), ID::new(1));

    assert_eq!(page.load().await, LoadOutcome::Loaded(1));
    page.form_mut().set(TextField::Address, "  Szeged ");
    page.form_mut().job = Job::Baker;
    match page.submit().await {
        SubmitOutcome::Saved(user) => assert_eq!(user.address, "Szeged"),
        res => panic!("Expected user to be saved, got {:?}", res),
    }
    assert_eq!(app.users.users()[0].address, "Szeged");
    assert_eq!(app.users.users()[0].job, Job::Baker);
    assert_eq!(test.navigator.history(), vec![Route::UserList]);
}

#[actix_web::test]
async fn test_edit_page_missing_user_over_http() {
    let (app, _) = spawn_app(Vec::new()).await;
    let test = http_context(&app.address, true);
    let mut page = EditUserPage::new(test.ctx.clone(), ID::new(3));

    assert_eq!(
        page.load().await,
        LoadOutcome::Failed(GatewayError::NotFound(ID::new(3)))
    );
    assert_eq!(
        test.dialogs.notices(),
        vec!["An error occurred while loading the user!".to_string()]
    );
    assert_eq!(test.navigator.history(), vec![Route::UserList]);
}
